//! State Module - Runtime state for the OTP row
//!
//! - **Validate** - ASCII digit predicate, valid-digit sequence extraction
//! - **Transition** - Pure input/paste/backspace handling over a snapshot
//! - **Controller** - Applies transitions to a host's slots and update callback
//! - **Keyboard** - Key event types
//! - **Clipboard** - Internal paste buffer
//! - **Slots** - Observable slot row
//! - **Field** - Reactive host bundling digits, slots and controller
//! - **Input** - crossterm event conversion and routing

pub mod clipboard;
pub mod input;
pub mod transition;
pub mod validate;

mod controller;
mod field;
mod keyboard;
mod slots;

pub use controller::*;
pub use field::*;
pub use keyboard::*;
pub use slots::*;
