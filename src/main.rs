//! # Axide - Example contracts for the Axide editor
//!
//! Inspect, check and install the example contracts the editor opens with.
//!
//! ## Quick Start
//!
//! ```bash
//! # List the bundled examples
//! cargo run -- list
//!
//! # Print one example
//! cargo run -- show testToken
//!
//! # Check an on-disk example set before shipping it
//! cargo run -- validate --dir path/to/examples
//!
//! # Write the examples into a project folder
//! cargo run -- seed path/to/project
//! ```

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use axide_core::{Config, Startup, Workspace};
use axide_examples::Bundle;

/// Axide - example contracts for the Axide editor
#[derive(Parser, Debug)]
#[command(name = "axide")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Config file (defaults to the user config directory)
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Cmd,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
enum Cmd {
    /// List the examples in order
    List {
        /// Print entries as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the contents of one example
    Show {
        /// Example key (e.g. `owner`)
        key: String,
    },

    /// Check an example set and report every problem
    Validate {
        /// Directory with an `examples.toml` (defaults to the configured set)
        #[arg(long, value_name = "DIR")]
        dir: Option<PathBuf>,
    },

    /// Write the examples into a project folder
    Seed {
        /// Project folder
        #[arg(value_name = "DIR")]
        workspace: PathBuf,

        /// Overwrite files that already exist
        #[arg(short, long)]
        force: bool,
    },
}

fn main() -> anyhow::Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize logging
    let log_level = match args.verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_level(true),
        )
        .with(tracing_subscriber::filter::LevelFilter::from_level(
            log_level,
        ))
        .init();

    tracing::info!("Starting Axide v{}", env!("CARGO_PKG_VERSION"));

    let config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load(),
    };

    run(args.command, config)
}

fn run(command: Cmd, mut config: Config) -> anyhow::Result<()> {
    match command {
        Cmd::List { json } => {
            let bundle = Startup::new(&config).load_bundle()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&bundle.list())?);
            } else {
                for entry in bundle.iter() {
                    println!("{:<16} {}", entry.key(), entry.filename());
                }
            }
        }
        Cmd::Show { key } => {
            let bundle = Startup::new(&config).load_bundle()?;
            let entry = bundle.get(&key)?;
            print!("{}", entry.content());
        }
        Cmd::Validate { dir } => {
            let bundle = match dir.or(config.examples.source_dir) {
                Some(dir) => Bundle::load_dir(&dir)?,
                None => Bundle::builtin(),
            };
            bundle.validate()?;
            println!("ok: {} examples", bundle.len());
        }
        Cmd::Seed { workspace, force } => {
            let ws = Workspace::open(&workspace)?;
            config.examples.seed_on_startup = true;
            config.examples.overwrite_existing |= force;
            let loaded = Startup::new(&config).run(Some(&ws))?;
            if let Some(report) = loaded.seeded {
                for path in &report.written {
                    println!("wrote {}", display_in(&ws, path));
                }
                for path in &report.skipped {
                    println!("kept  {}", display_in(&ws, path));
                }
            }
        }
    }

    Ok(())
}

/// Shows `path` relative to the workspace root when it lies inside it.
fn display_in(ws: &Workspace, path: &Path) -> String {
    ws.relative(path)
        .unwrap_or_else(|| path.to_path_buf())
        .display()
        .to_string()
}
