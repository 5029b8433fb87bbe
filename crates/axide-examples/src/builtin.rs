//! The example set shipped with the editor.
//!
//! The contract sources live in `contracts/` next to this crate and are
//! embedded at compile time. The numeric file name prefixes only suggest a
//! reading order; `4_test_Token.sol` imports the other three.

use crate::Bundle;

/// Keys of the shipped entries.
pub mod keys {
    pub const OWNER: &str = "owner";
    pub const SAFE_MATH: &str = "safeMath";
    pub const AXIS_INTERFACE: &str = "axisInterface";
    pub const TEST_TOKEN: &str = "testToken";
}

/// Ownership with a transferable owner and an `isOwner` modifier.
pub const OWNER_SOURCE: &str = include_str!("../contracts/1_Owner.sol");

/// Overflow-checked `uint256` arithmetic library.
pub const SAFE_MATH_SOURCE: &str = include_str!("../contracts/2_SafeMath.sol");

/// Axis system-call interface (token issue, send, tickets, packages).
pub const AXIS_INTERFACE_SOURCE: &str = include_str!("../contracts/3_AxisInterface.sol");

/// Token contract composing the three above.
pub const TEST_TOKEN_SOURCE: &str = include_str!("../contracts/4_test_Token.sol");

const SHIPPED: [(&str, &str, &str); 4] = [
    (keys::OWNER, "1_Owner.sol", OWNER_SOURCE),
    (keys::SAFE_MATH, "2_SafeMath.sol", SAFE_MATH_SOURCE),
    (keys::AXIS_INTERFACE, "3_AxisInterface.sol", AXIS_INTERFACE_SOURCE),
    (keys::TEST_TOKEN, "4_test_Token.sol", TEST_TOKEN_SOURCE),
];

impl Bundle {
    /// Returns the shipped example set.
    ///
    /// All strings are borrowed from the binary, so this does not copy the
    /// contract text.
    pub fn builtin() -> Self {
        SHIPPED
            .iter()
            .fold(Bundle::builder(), |builder, &(key, filename, content)| {
                builder.entry(key, filename, content)
            })
            .build()
    }
}
