//! One-shot loading of the example set when the editor starts.
//!
//! ## Learning: Build, Check, Then Share
//!
//! The bundle is fully built and validated while it is still owned by a
//! single function. Only then is it moved into an `Arc` and handed out, so
//! no reader can ever observe a half-loaded or unchecked set.

use std::sync::Arc;

use axide_examples::{Bundle, Violation};

use crate::config::ExamplesConfig;
use crate::workspace::{SeedReport, Workspace};
use crate::{Config, CoreResult};

/// What start-up produced.
#[derive(Debug, Clone)]
pub struct Loaded {
    /// The validated example set
    pub bundle: Arc<Bundle>,

    /// Seeding outcome, if a workspace was seeded
    pub seeded: Option<SeedReport>,
}

/// Drives example loading according to [`Config`].
#[derive(Debug, Clone)]
pub struct Startup {
    config: ExamplesConfig,
}

impl Startup {
    /// Creates a start-up sequence for `config`.
    pub fn new(config: &Config) -> Self {
        Self {
            config: config.examples.clone(),
        }
    }

    /// Builds and validates the example set.
    ///
    /// Fails if the set breaks any invariant; an empty set is returned when
    /// examples are disabled.
    pub fn load_bundle(&self) -> CoreResult<Arc<Bundle>> {
        if !self.config.enabled {
            tracing::info!("Example contracts disabled");
            return Ok(Arc::new(Bundle::default()));
        }

        let bundle = match &self.config.source_dir {
            Some(dir) => {
                tracing::info!("Loading example contracts from {}", dir.display());
                Bundle::load_dir(dir)?
            }
            None => Bundle::builtin(),
        };

        if let Err(err) = bundle.validate() {
            for violation in err.violations() {
                log_violation(violation);
            }
            return Err(err.into());
        }

        tracing::debug!(entries = bundle.len(), "Example contracts ready");
        Ok(Arc::new(bundle))
    }

    /// Loads the example set and, if configured, seeds `workspace`.
    pub fn run(&self, workspace: Option<&Workspace>) -> CoreResult<Loaded> {
        let bundle = self.load_bundle()?;

        let seeded = match workspace {
            Some(ws) if self.config.seed_on_startup && !bundle.is_empty() => {
                let cfg = &self.config;
                Some(ws.seed_examples(&bundle, &cfg.seed_dir, cfg.overwrite_existing)?)
            }
            _ => None,
        };

        Ok(Loaded { bundle, seeded })
    }
}

fn log_violation(violation: &Violation) {
    tracing::error!("Broken example set: {}", violation);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CoreError;
    use axide_examples::{BundleError, MANIFEST_FILE};
    use tempfile::tempdir;

    #[test]
    fn test_default_loads_shipped() {
        let bundle = Startup::new(&Config::default()).load_bundle().unwrap();
        assert_eq!(bundle.len(), 4);
        assert_eq!(bundle.get("safeMath").unwrap().filename(), "2_SafeMath.sol");
    }

    #[test]
    fn test_disabled() {
        let mut config = Config::default();
        config.examples.enabled = false;
        let loaded = Startup::new(&config).run(None).unwrap();
        assert!(loaded.bundle.is_empty());
        assert!(loaded.seeded.is_none());
    }

    #[test]
    fn test_broken_source_dir_is_fatal() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("T.sol"), "import \"./5_Missing.sol\";").unwrap();
        std::fs::write(
            dir.path().join(MANIFEST_FILE),
            "[[example]]\nkey = \"token\"\nfilename = \"T.sol\"\n",
        )
        .unwrap();

        let mut config = Config::default();
        config.examples.source_dir = Some(dir.path().to_path_buf());

        let err = Startup::new(&config).load_bundle().unwrap_err();
        match err {
            CoreError::Examples(BundleError::Validation(v)) => {
                let missing: Vec<_> = v.missing_imports().collect();
                assert_eq!(missing, [("token", "5_Missing.sol")]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_seed_respects_config() {
        let dir = tempdir().unwrap();
        let ws = Workspace::open(dir.path()).unwrap();

        let mut config = Config::default();
        config.examples.seed_on_startup = false;
        assert!(Startup::new(&config).run(Some(&ws)).unwrap().seeded.is_none());

        config.examples.seed_on_startup = true;
        let loaded = Startup::new(&config).run(Some(&ws)).unwrap();
        assert_eq!(loaded.seeded.unwrap().written.len(), 4);
        assert!(ws.root().join("contracts/3_AxisInterface.sol").is_file());
    }
}
