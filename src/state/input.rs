//! Input Module - Terminal event conversion and routing
//!
//! Bridges crossterm's event system with an [`OtpField`].
//!
//! # API
//!
//! - `convert_key_event` - Convert crossterm KeyEvent to our KeyboardEvent
//! - `convert_event` - Convert any crossterm Event to an OtpEvent
//! - `poll_event` / `read_event` - Read the next terminal event
//! - `route_event` - Dispatch an OtpEvent to a field
//! - `enable_bracketed_paste` / `disable_bracketed_paste` - Control paste capture
//!
//! # Routing
//!
//! 1. Non-press key events are ignored
//! 2. Ctrl+V pastes from the internal clipboard
//! 3. A printable character is typed into the focused slot
//! 4. Any other key goes to the key-down handler (Backspace)
//! 5. Bracketed paste text goes to the paste handler
//!
//! # Example
//!
//! ```ignore
//! use spark_otp::state::input::{poll_event, route_event};
//! use std::time::Duration;
//!
//! enable_bracketed_paste()?;
//! while !field.is_complete() {
//!     if let Some(event) = poll_event(Duration::from_millis(16))? {
//!         route_event(&field, event);
//!     }
//! }
//! ```

use std::io::stdout;
use std::time::Duration;

use crossterm::event::{
    DisableBracketedPaste, EnableBracketedPaste,
    Event as CrosstermEvent,
    KeyCode, KeyEventKind, KeyModifiers,
    KeyEvent as CrosstermKeyEvent,
    poll, read,
};
use crossterm::execute;

use super::field::OtpField;
use super::keyboard::{self, KeyState, KeyboardEvent, Modifiers};

// =============================================================================
// OTP EVENT ENUM
// =============================================================================

/// Terminal event relevant to an OTP row.
#[derive(Debug, Clone, PartialEq)]
pub enum OtpEvent {
    /// Key press, repeat or release
    Key(KeyboardEvent),
    /// Bracketed paste text
    Paste(String),
    /// Anything else (mouse, resize, focus change)
    None,
}

// =============================================================================
// CONVERSION
// =============================================================================

/// Convert crossterm KeyEvent to our KeyboardEvent
pub fn convert_key_event(event: CrosstermKeyEvent) -> KeyboardEvent {
    let key = match event.code {
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Backspace => keyboard::BACKSPACE.to_string(),
        KeyCode::Delete => keyboard::DELETE.to_string(),
        KeyCode::Enter => keyboard::ENTER.to_string(),
        KeyCode::Tab | KeyCode::BackTab => keyboard::TAB.to_string(),
        KeyCode::Esc => keyboard::ESCAPE.to_string(),
        KeyCode::Left => keyboard::ARROW_LEFT.to_string(),
        KeyCode::Right => keyboard::ARROW_RIGHT.to_string(),
        KeyCode::Home => keyboard::HOME.to_string(),
        KeyCode::End => keyboard::END.to_string(),
        _ => String::new(),
    };

    let state = match event.kind {
        KeyEventKind::Press => KeyState::Press,
        KeyEventKind::Repeat => KeyState::Repeat,
        KeyEventKind::Release => KeyState::Release,
    };

    let mut modifiers = convert_modifiers(event.modifiers);
    if event.code == KeyCode::BackTab {
        modifiers |= Modifiers::SHIFT;
    }

    KeyboardEvent { key, modifiers, state }
}

/// Convert crossterm KeyModifiers to our Modifiers
fn convert_modifiers(mods: KeyModifiers) -> Modifiers {
    let mut out = Modifiers::empty();
    if mods.contains(KeyModifiers::SHIFT) {
        out |= Modifiers::SHIFT;
    }
    if mods.contains(KeyModifiers::ALT) {
        out |= Modifiers::ALT;
    }
    if mods.contains(KeyModifiers::CONTROL) {
        out |= Modifiers::CTRL;
    }
    if mods.intersects(KeyModifiers::SUPER | KeyModifiers::META) {
        out |= Modifiers::SUPER;
    }
    out
}

/// Convert any crossterm Event to an OtpEvent
pub fn convert_event(event: CrosstermEvent) -> OtpEvent {
    match event {
        CrosstermEvent::Key(key) => OtpEvent::Key(convert_key_event(key)),
        CrosstermEvent::Paste(text) => OtpEvent::Paste(text),
        _ => OtpEvent::None,
    }
}

// =============================================================================
// EVENT POLLING
// =============================================================================

/// Poll for an event with timeout.
/// Returns None if no event within timeout.
pub fn poll_event(timeout: Duration) -> std::io::Result<Option<OtpEvent>> {
    if poll(timeout)? {
        Ok(Some(read_event()?))
    } else {
        Ok(None)
    }
}

/// Read the next event (blocking).
pub fn read_event() -> std::io::Result<OtpEvent> {
    Ok(convert_event(read()?))
}

// =============================================================================
// EVENT ROUTING
// =============================================================================

/// Route an event to the field.
/// Returns true if the field consumed it.
pub fn route_event(field: &OtpField, event: OtpEvent) -> bool {
    match event {
        OtpEvent::Key(key) => route_key(field, &key),
        OtpEvent::Paste(text) => {
            field.paste(&text);
            true
        }
        OtpEvent::None => false,
    }
}

fn route_key(field: &OtpField, event: &KeyboardEvent) -> bool {
    if !event.is_press() {
        return false;
    }

    if event.is_paste_shortcut() {
        return field.paste_from_clipboard();
    }

    if let Some(c) = event.typed_char() {
        if field.slots().focused().is_none() {
            return false;
        }
        field.type_char(c);
        return true;
    }

    field.key_down(&event.key)
}

// =============================================================================
// PASTE CAPTURE
// =============================================================================

/// Enable bracketed paste so pasted text arrives as one event.
pub fn enable_bracketed_paste() -> std::io::Result<()> {
    execute!(stdout(), EnableBracketedPaste)
}

/// Disable bracketed paste.
pub fn disable_bracketed_paste() -> std::io::Result<()> {
    execute!(stdout(), DisableBracketedPaste)
}

// =============================================================================
// TESTS
// =============================================================================
