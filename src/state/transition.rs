//! Transitions - Pure event handling for the OTP row
//!
//! Every handler reads an immutable digit snapshot and returns a [`Transition`]:
//! at most one full replacement array plus the slot commands to issue after it.
//! Nothing here touches the host. [`OtpInput`](super::controller::OtpInput)
//! applies the result.
//!
//! # Behaviour
//!
//! - `input` - accept one digit into a slot, auto-advance
//! - `paste` - overwrite the whole row from clipboard text
//! - `key_down` - Backspace clears in place, then walks back

use crate::types::{DigitArray, SlotCommand, Transition};
use super::keyboard::BACKSPACE;
use super::validate::{is_valid_digit, valid_digits};

// =============================================================================
// Snapshot Helpers
// =============================================================================

/// Copy `digits` into a new array of exactly `length` slots.
///
/// Snapshots are expected to already have `length` elements. A mismatched one
/// is padded with empty slots or truncated.
fn normalized(digits: &[String], length: usize) -> DigitArray {
    if digits.len() != length {
        tracing::warn!(
            expected = length,
            actual = digits.len(),
            "digit snapshot length mismatch, normalizing"
        );
    }
    let mut next: DigitArray = digits.iter().take(length).cloned().collect();
    next.resize(length, String::new());
    next
}

// =============================================================================
// Character Input
// =============================================================================

/// Handle the raw content of slot `index` after a keystroke.
///
/// Invalid content is cleared from the slot and the state is left alone. Valid
/// content replaces that slot's digit and focus moves to the next slot, unless
/// `index` is the terminal slot.
pub fn input(digits: &[String], length: usize, raw: &str, index: usize) -> Transition {
    if index >= length {
        tracing::warn!(index, length, "character input outside slot row ignored");
        return Transition::none();
    }

    if !is_valid_digit(raw) {
        tracing::trace!(index, "discarding non-digit input");
        return Transition::none().then(SlotCommand::Clear(index));
    }

    let mut next = normalized(digits, length);
    next[index] = raw.to_string();

    let transition = Transition::replace(next);
    if index < length - 1 {
        transition.then(SlotCommand::Focus(index + 1))
    } else {
        transition
    }
}

// =============================================================================
// Paste
// =============================================================================

/// Distribute pasted text across the row.
///
/// The row is rebuilt from scratch: the valid-digit sequence fills slots
/// `0..k` and every later slot is emptied. Focus lands on slot `min(k, L - 1)`.
pub fn paste(length: usize, text: &str) -> Transition {
    if length == 0 {
        return Transition::none();
    }

    let sequence = valid_digits(text, length);
    let filled = sequence.len();

    let mut next = sequence;
    next.resize(length, String::new());

    Transition::replace(next).then(SlotCommand::Focus(filled.min(length - 1)))
}

// =============================================================================
// Key Down
// =============================================================================

/// Handle a key press on slot `index`. Only Backspace does anything.
///
/// - Slot non-empty: clear it, focus stays put.
/// - Slot empty, `index > 0`: focus and select the previous slot.
/// - Slot empty, `index == 0`: nothing.
pub fn key_down(digits: &[String], length: usize, key: &str, index: usize) -> Transition {
    if key != BACKSPACE {
        return Transition::none();
    }

    if index >= length {
        tracing::warn!(index, length, "backspace outside slot row ignored");
        return Transition::none();
    }

    let current = digits.get(index).map(String::as_str).unwrap_or_default();
    if !current.is_empty() {
        let mut next = normalized(digits, length);
        next[index] = String::new();
        return Transition::replace(next);
    }

    if index > 0 {
        return Transition::none()
            .then(SlotCommand::Focus(index - 1))
            .then(SlotCommand::Select(index - 1));
    }

    Transition::none()
}

// =============================================================================
// TESTS
// =============================================================================
