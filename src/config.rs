//! OTP row configuration.

use crate::error::OtpError;
use crate::state::validate::is_valid_digit;
use crate::types::DigitArray;

/// Slot count used when none is given.
pub const DEFAULT_LENGTH: usize = 6;

/// Fixed configuration for one widget instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OtpConfig {
    length: usize,
}

impl Default for OtpConfig {
    fn default() -> Self {
        Self { length: DEFAULT_LENGTH }
    }
}

impl OtpConfig {
    /// Create a config with `length` slots. Zero is rejected.
    pub fn new(length: usize) -> Result<Self, OtpError> {
        if length == 0 {
            return Err(OtpError::ZeroLength);
        }
        Ok(Self { length })
    }

    /// Number of slots (L).
    pub fn length(&self) -> usize {
        self.length
    }

    /// Index of the terminal slot.
    pub fn last_index(&self) -> usize {
        self.length - 1
    }

    /// A fresh all-empty digit array.
    pub fn empty_digits(&self) -> DigitArray {
        vec![String::new(); self.length]
    }

    /// Check that `digits` is a well-formed snapshot for this row.
    pub fn check_digits(&self, digits: &[String]) -> Result<(), OtpError> {
        if digits.len() != self.length {
            return Err(OtpError::SnapshotLength {
                expected: self.length,
                actual: digits.len(),
            });
        }
        match digits
            .iter()
            .position(|d| !d.is_empty() && !is_valid_digit(d))
        {
            Some(index) => Err(OtpError::InvalidSlot {
                index,
                value: digits[index].clone(),
            }),
            None => Ok(()),
        }
    }
}
