//! Clipboard Module - Internal paste buffer
//!
//! Terminals without bracketed paste deliver clipboard text as ordinary
//! keystrokes, so the OTP row also supports pasting from an internal buffer
//! via Ctrl+V. Applications copy a received code into it with [`copy`].
//!
//! # Example
//!
//! ```ignore
//! use spark_otp::state::clipboard;
//!
//! clipboard::copy("Your code is 482 913");
//! field.paste_from_clipboard(); // fills 4 8 2 9 1 3
//! ```

use std::cell::RefCell;

thread_local! {
    static BUFFER: RefCell<Option<String>> = const { RefCell::new(None) };
}

/// Put `text` on the clipboard. Empty text leaves the clipboard unchanged.
pub fn copy(text: &str) {
    if text.is_empty() {
        return;
    }
    BUFFER.with(|buf| *buf.borrow_mut() = Some(text.to_string()));
}

/// Current clipboard text, if any. Reading does not consume it.
pub fn paste() -> Option<String> {
    BUFFER.with(|buf| buf.borrow().clone())
}

/// Empty the clipboard.
pub fn clear() {
    BUFFER.with(|buf| *buf.borrow_mut() = None);
}

/// Check if clipboard has content.
pub fn has_content() -> bool {
    BUFFER.with(|buf| buf.borrow().is_some())
}
