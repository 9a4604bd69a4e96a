//! Construction-time errors.
//!
//! Event handlers never fail; these only surface while building a config or
//! seeding a field with an initial value.

use thiserror::Error;

/// Errors raised while configuring an OTP row.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OtpError {
    /// The configured slot count was zero.
    #[error("OTP length must be at least 1")]
    ZeroLength,
    /// An initial digit array did not match the configured length.
    #[error("digit array has {actual} slots, expected {expected}")]
    SnapshotLength { expected: usize, actual: usize },
    /// An initial digit array held something other than "" or one ASCII digit.
    #[error("slot {index} holds {value:?}, expected an empty string or a single digit")]
    InvalidSlot { index: usize, value: String },
}
