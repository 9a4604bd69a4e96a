//! OTP Field - Reactive host for the controller
//!
//! Bundles everything a spark-tui style application needs for one OTP row:
//!
//! - a watch channel holding the logical value
//! - a [`SlotCells`] row with focus, selection and raw content per slot
//! - an [`OtpInput`] whose update callback writes the channel
//!
//! The controller never sees the channel. Each call reads a snapshot with
//! `digits()` and publishes a fresh array through the callback.
//!
//! # Example
//!
//! ```ignore
//! use spark_otp::{OtpConfig, OtpField};
//!
//! let field = OtpField::new(OtpConfig::default());
//! field.focus(0);
//! field.type_char('4');
//! field.paste("482913");
//! assert!(field.is_complete());
//! assert_eq!(field.code(), "482913");
//! ```

use std::rc::Rc;

use tokio::sync::watch;

use crate::config::OtpConfig;
use crate::error::OtpError;
use crate::types::{DigitArray, SlotCommand, Transition};
use super::clipboard;
use super::controller::{OtpInput, SlotRow};
use super::slots::SlotCells;

/// One OTP row with its state, slots and controller.
pub struct OtpField {
    digits: Rc<watch::Sender<DigitArray>>,
    slots: Rc<SlotCells>,
    input: OtpInput<Rc<SlotCells>>,
}

impl OtpField {
    /// Create an empty row.
    pub fn new(config: OtpConfig) -> Self {
        let digits = Rc::new(watch::channel(config.empty_digits()).0);
        let slots = Rc::new(SlotCells::new(config.length()));

        let sink = digits.clone();
        let mirror = slots.clone();
        let input = OtpInput::new(
            config,
            slots.clone(),
            Box::new(move |next: DigitArray| {
                mirror.sync(&next);
                sink.send_replace(next);
            }),
        );

        Self { digits, slots, input }
    }

    /// Create a row seeded with `initial`, which must be a valid snapshot.
    pub fn with_digits(config: OtpConfig, initial: DigitArray) -> Result<Self, OtpError> {
        config.check_digits(&initial)?;
        let field = Self::new(config);
        field.slots.sync(&initial);
        field.digits.send_replace(initial);
        Ok(field)
    }

    // -------------------------------------------------------------------------
    // State
    // -------------------------------------------------------------------------

    /// Current digit snapshot.
    pub fn digits(&self) -> DigitArray {
        self.digits.borrow().clone()
    }

    /// Subscribe to the digit array, for renderers.
    pub fn watch_digits(&self) -> watch::Receiver<DigitArray> {
        self.digits.subscribe()
    }

    /// The slot row.
    pub fn slots(&self) -> &SlotCells {
        &self.slots
    }

    /// The controller driving this row.
    pub fn controller(&self) -> &OtpInput<Rc<SlotCells>> {
        &self.input
    }

    /// Entered digits concatenated. Empty slots contribute nothing.
    pub fn code(&self) -> String {
        self.digits.borrow().concat()
    }

    /// True once every slot holds a digit.
    pub fn is_complete(&self) -> bool {
        self.digits.borrow().iter().all(|d| !d.is_empty())
    }

    /// Empty every slot and focus the first one.
    pub fn clear(&self) {
        let empty = self.input.config().empty_digits();
        self.input
            .apply(Transition::replace(empty).then(SlotCommand::Focus(0)));
    }

    /// Move focus to slot `index`.
    pub fn focus(&self, index: usize) {
        self.input.apply(Transition::none().then(SlotCommand::Focus(index)));
    }

    // -------------------------------------------------------------------------
    // Events
    // -------------------------------------------------------------------------

    /// Type `c` into the focused slot.
    ///
    /// Like a native text field: the character replaces selected or empty
    /// content and is appended otherwise. The resulting raw content is then
    /// handed to the character-input handler. Without focus nothing happens.
    pub fn type_char(&self, c: char) {
        let Some(index) = self.slots.focused() else {
            tracing::trace!(%c, "keystroke without focused slot");
            return;
        };

        let current = self.slots.raw_value(index).unwrap_or_default();
        let raw = if current.is_empty() || self.slots.selected() == Some(index) {
            c.to_string()
        } else {
            format!("{current}{c}")
        };

        self.enter(&raw, index);
    }

    /// Set slot `index`'s raw content to `raw` and run the input handler.
    pub fn enter(&self, raw: &str, index: usize) {
        self.slots.set_raw_value(index, raw);
        self.input.handle_input(&self.digits(), raw, index);
    }

    /// Paste `text` across the row.
    pub fn paste(&self, text: &str) {
        self.input.handle_paste(text);
    }

    /// Paste from the internal clipboard. Returns false if it was empty.
    pub fn paste_from_clipboard(&self) -> bool {
        match clipboard::paste() {
            Some(text) => {
                self.paste(&text);
                true
            }
            None => false,
        }
    }

    /// Key press on the focused slot. Returns true if intercepted.
    pub fn key_down(&self, key: &str) -> bool {
        match self.slots.focused() {
            Some(index) => self.input.handle_key_down(&self.digits(), key, index),
            None => false,
        }
    }

    /// True if slot `index` has a handle in the row.
    pub fn has_slot(&self, index: usize) -> bool {
        self.slots.slot(index).is_some()
    }
}

// =============================================================================
// TESTS
// =============================================================================
