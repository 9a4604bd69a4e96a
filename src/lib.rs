//! # spark-otp
//!
//! Segmented one-time-passcode input for reactive terminal UIs.
//!
//! A row of single-digit slots that behaves like one numeric field: typing
//! auto-advances, pasting spreads digits across the row, and Backspace clears
//! in place before stepping back.
//!
//! ## Architecture
//!
//! The core is host-agnostic. Handlers take an immutable digit snapshot and
//! produce a [`Transition`]; [`OtpInput`] publishes the replacement array
//! through a callback and issues focus/select/clear commands to the host's
//! [`SlotRow`].
//!
//! ```text
//! event → transition (pure) → update callback → slot commands
//! ```
//!
//! [`OtpField`] is a ready-made host whose state lives in `tokio::sync::watch`
//! channels that renderers subscribe to, and [`state::input`] feeds it
//! crossterm events.
//!
//! ## Modules
//!
//! - [`types`] - Digit array, slot commands, transitions
//! - [`config`] - Row configuration
//! - [`error`] - Construction errors
//! - [`state`] - Validation, transitions, controller, hosts

pub mod config;
pub mod error;
pub mod state;
pub mod types;

pub use config::{OtpConfig, DEFAULT_LENGTH};
pub use error::OtpError;
pub use types::{DigitArray, SlotCommand, Transition};

pub use state::{
    // Controller
    OtpInput, SlotHandle, SlotRow, UpdateFn,
    // Reactive host
    OtpField, SlotCell, SlotCells,
    // Keyboard
    KeyboardEvent, KeyState, Modifiers, BACKSPACE,
};
pub use state::validate::{is_valid_digit, valid_digits};
