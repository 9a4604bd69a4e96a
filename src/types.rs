//! Core types for spark-otp.
//!
//! These types flow between the pure transition functions, the controller
//! and whatever host renders the slot row.

// =============================================================================
// Digit Array
// =============================================================================

/// The logical value of the OTP row.
///
/// Exactly one element per slot. Each element is either the empty string or a
/// single ASCII digit.
pub type DigitArray = Vec<String>;

// =============================================================================
// Slot Commands
// =============================================================================

/// A side effect the controller issues against one slot of the host's row.
///
/// Commands are fire-and-forget. A command whose slot has no handle is skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotCommand {
    /// Move input focus to the slot.
    Focus(usize),
    /// Select the slot's current content so the next keystroke overwrites it.
    Select(usize),
    /// Reset the slot's raw visible content to empty.
    Clear(usize),
}

impl SlotCommand {
    /// Slot index this command targets.
    pub fn index(&self) -> usize {
        match *self {
            Self::Focus(i) | Self::Select(i) | Self::Clear(i) => i,
        }
    }
}

// =============================================================================
// Transition
// =============================================================================

/// Outcome of one handler call, computed against an immutable snapshot.
///
/// `replacement` is published first (at most once), then `commands` run in
/// order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transition {
    /// Full-length replacement array, if the state changes.
    pub replacement: Option<DigitArray>,
    /// Slot side effects, in issue order.
    pub commands: Vec<SlotCommand>,
}

impl Transition {
    /// A transition that does nothing.
    pub fn none() -> Self {
        Self::default()
    }

    /// Publish a replacement array.
    pub fn replace(digits: DigitArray) -> Self {
        Self {
            replacement: Some(digits),
            commands: Vec::new(),
        }
    }

    /// Append a slot command.
    pub fn then(mut self, command: SlotCommand) -> Self {
        self.commands.push(command);
        self
    }

    /// True if neither state nor slots are touched.
    pub fn is_noop(&self) -> bool {
        self.replacement.is_none() && self.commands.is_empty()
    }
}
