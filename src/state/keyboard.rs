//! Keyboard Module - Key event types
//!
//! DOM-style key events delivered to the OTP row. Key names follow the
//! browser `KeyboardEvent.key` convention ("a", "Backspace", "ArrowLeft").
//!
//! # Example
//!
//! ```ignore
//! use spark_otp::{KeyboardEvent, Modifiers};
//!
//! let backspace = KeyboardEvent::new("Backspace");
//! let paste = KeyboardEvent::with_modifiers("v", Modifiers::CTRL);
//! ```

// =============================================================================
// KEY NAMES
// =============================================================================

/// Clears the focused slot, or steps back when it is already empty.
pub const BACKSPACE: &str = "Backspace";
pub const DELETE: &str = "Delete";
pub const ENTER: &str = "Enter";
pub const TAB: &str = "Tab";
pub const ESCAPE: &str = "Escape";
pub const ARROW_LEFT: &str = "ArrowLeft";
pub const ARROW_RIGHT: &str = "ArrowRight";
pub const HOME: &str = "Home";
pub const END: &str = "End";

// =============================================================================
// TYPES
// =============================================================================

bitflags::bitflags! {
    /// Keyboard modifiers.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Modifiers: u8 {
        const NONE  = 0;
        const SHIFT = 1 << 0;
        const ALT   = 1 << 1;
        const CTRL  = 1 << 2;
        const SUPER = 1 << 3;
    }
}

/// Key event state (press, repeat, release)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum KeyState {
    #[default]
    Press,
    Repeat,
    Release,
}

/// Keyboard event
#[derive(Clone, Debug, PartialEq)]
pub struct KeyboardEvent {
    /// The key that was pressed (e.g., "7", "Backspace", "ArrowLeft")
    pub key: String,
    /// Modifier keys state
    pub modifiers: Modifiers,
    /// Press/repeat/release state
    pub state: KeyState,
}

impl KeyboardEvent {
    /// Create a simple key press event
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            modifiers: Modifiers::empty(),
            state: KeyState::Press,
        }
    }

    /// Create a key press with modifiers
    pub fn with_modifiers(key: impl Into<String>, modifiers: Modifiers) -> Self {
        Self {
            key: key.into(),
            modifiers,
            state: KeyState::Press,
        }
    }

    /// Check if this is a press event
    pub fn is_press(&self) -> bool {
        self.state == KeyState::Press
    }

    /// Single printable character typed without Ctrl/Alt/Super, if any.
    pub fn typed_char(&self) -> Option<char> {
        if self
            .modifiers
            .intersects(Modifiers::CTRL | Modifiers::ALT | Modifiers::SUPER)
        {
            return None;
        }
        let mut chars = self.key.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if !c.is_control() => Some(c),
            _ => None,
        }
    }

    /// True for Ctrl+V (or Super+V).
    pub fn is_paste_shortcut(&self) -> bool {
        self.key.eq_ignore_ascii_case("v")
            && self.modifiers.intersects(Modifiers::CTRL | Modifiers::SUPER)
    }
}

// =============================================================================
// TESTS
// =============================================================================
