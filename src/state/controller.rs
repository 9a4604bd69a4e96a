//! Controller - Applies OTP transitions to a host
//!
//! [`OtpInput`] owns no digit state. The host hands it the current snapshot on
//! every call; the controller computes a [`Transition`] and then:
//!
//! 1. publishes the replacement array through the update callback (at most once)
//! 2. issues focus/select/clear commands against the slot row
//!
//! Commands targeting a slot with no handle are skipped.
//!
//! # Example
//!
//! ```ignore
//! use spark_otp::{OtpConfig, OtpInput};
//!
//! let otp = OtpInput::new(OtpConfig::default(), slots, Box::new(|digits| {
//!     store.set(digits);
//! }));
//!
//! otp.handle_input(&store.get(), "7", 2);
//! otp.handle_paste("123456");
//! otp.handle_key_down(&store.get(), "Backspace", 5);
//! ```

use std::rc::Rc;

use crate::config::OtpConfig;
use crate::types::{DigitArray, SlotCommand, Transition};
use super::keyboard::KeyboardEvent;
use super::transition;

// =============================================================================
// HOST TRAITS
// =============================================================================

/// One focusable slot widget owned by the host.
pub trait SlotHandle {
    /// Move input focus to this slot.
    fn focus(&self);
    /// Select this slot's current content.
    fn select(&self);
    /// Reset the slot's raw visible content to empty.
    fn clear(&self);
}

/// The host's ordered row of slot handles.
pub trait SlotRow {
    /// Handle at `index`, if one exists.
    fn slot(&self, index: usize) -> Option<&dyn SlotHandle>;
}

impl<H: SlotHandle> SlotRow for [H] {
    fn slot(&self, index: usize) -> Option<&dyn SlotHandle> {
        self.get(index).map(|h| h as &dyn SlotHandle)
    }
}

impl<H: SlotHandle> SlotRow for Vec<H> {
    fn slot(&self, index: usize) -> Option<&dyn SlotHandle> {
        self.as_slice().slot(index)
    }
}

impl<R: SlotRow + ?Sized> SlotRow for Rc<R> {
    fn slot(&self, index: usize) -> Option<&dyn SlotHandle> {
        (**self).slot(index)
    }
}

/// Callback that publishes a new, complete digit array to the host.
pub type UpdateFn = Box<dyn Fn(DigitArray)>;

// =============================================================================
// CONTROLLER
// =============================================================================

/// Input controller for one OTP row.
pub struct OtpInput<R> {
    config: OtpConfig,
    slots: R,
    update: UpdateFn,
}

impl<R: SlotRow> OtpInput<R> {
    /// Create a controller over `slots`, publishing through `update`.
    pub fn new(config: OtpConfig, slots: R, update: UpdateFn) -> Self {
        Self { config, slots, update }
    }

    /// Configured slot count.
    pub fn length(&self) -> usize {
        self.config.length()
    }

    /// Row configuration.
    pub fn config(&self) -> &OtpConfig {
        &self.config
    }

    /// The host's slot row.
    pub fn slots(&self) -> &R {
        &self.slots
    }

    /// Handle the raw content of slot `index` after a keystroke.
    pub fn handle_input(&self, digits: &[String], raw: &str, index: usize) {
        self.apply(transition::input(digits, self.length(), raw, index));
    }

    /// Distribute clipboard text across the whole row.
    pub fn handle_paste(&self, text: &str) {
        self.apply(transition::paste(self.length(), text));
    }

    /// Handle a key press on slot `index`.
    ///
    /// Returns true if the key was intercepted (Backspace), in which case the
    /// host should suppress its native handling.
    pub fn handle_key_down(&self, digits: &[String], key: &str, index: usize) -> bool {
        let t = transition::key_down(digits, self.length(), key, index);
        let intercepted = key == super::keyboard::BACKSPACE;
        if intercepted {
            tracing::debug!(index, changed = t.replacement.is_some(), "backspace");
        }
        self.apply(t);
        intercepted
    }

    /// Handle a full keyboard event. Only press events reach the handler.
    pub fn handle_key_event(&self, digits: &[String], event: &KeyboardEvent, index: usize) -> bool {
        if !event.is_press() {
            return false;
        }
        self.handle_key_down(digits, &event.key, index)
    }

    /// Publish the replacement, then run the slot commands in order.
    pub fn apply(&self, t: Transition) {
        if let Some(digits) = t.replacement {
            tracing::debug!(digits = ?digits, "replacing digits");
            (self.update)(digits);
        }
        for command in t.commands {
            self.run(command);
        }
    }

    fn run(&self, command: SlotCommand) {
        let Some(slot) = self.slots.slot(command.index()) else {
            tracing::warn!(?command, "no slot handle, skipping");
            return;
        };
        tracing::trace!(?command, "slot command");
        match command {
            SlotCommand::Focus(_) => slot.focus(),
            SlotCommand::Select(_) => slot.select(),
            SlotCommand::Clear(_) => slot.clear(),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
