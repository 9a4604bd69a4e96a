//! End-to-end behaviour of an OTP row.
//!
//! Drives the public API the way a host would: a custom slot row for the
//! bare controller, and the observable `OtpField` for the full widget.
//!
//! Run with: cargo test --test otp_row -- --nocapture

use std::cell::RefCell;
use std::rc::Rc;

use spark_otp::state::input::{route_event, OtpEvent};
use spark_otp::{
    is_valid_digit, DigitArray, KeyboardEvent, OtpConfig, OtpField, OtpInput, SlotHandle,
};

// =============================================================================
// HELPERS
// =============================================================================

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn row(values: &[&str]) -> DigitArray {
    values.iter().map(|v| v.to_string()).collect()
}

/// Host slot that records every command it receives.
#[derive(Clone)]
struct HostSlot {
    index: usize,
    log: Rc<RefCell<Vec<String>>>,
}

impl SlotHandle for HostSlot {
    fn focus(&self) {
        self.log.borrow_mut().push(format!("focus {}", self.index));
    }
    fn select(&self) {
        self.log.borrow_mut().push(format!("select {}", self.index));
    }
    fn clear(&self) {
        self.log.borrow_mut().push(format!("clear {}", self.index));
    }
}

struct Host {
    otp: OtpInput<Vec<HostSlot>>,
    state: Rc<RefCell<DigitArray>>,
    updates: Rc<RefCell<usize>>,
    log: Rc<RefCell<Vec<String>>>,
}

impl Host {
    fn new(length: usize, initial: &[&str]) -> Self {
        let config = OtpConfig::new(length).unwrap();
        let log = Rc::new(RefCell::new(Vec::new()));
        let state = Rc::new(RefCell::new(row(initial)));
        let updates = Rc::new(RefCell::new(0));

        let slots: Vec<HostSlot> = (0..length).map(|index| HostSlot { index, log: log.clone() }).collect();
        let sink = state.clone();
        let count = updates.clone();
        let otp = OtpInput::new(
            config,
            slots,
            Box::new(move |next: DigitArray| {
                *count.borrow_mut() += 1;
                *sink.borrow_mut() = next;
            }),
        );

        Self { otp, state, updates, log }
    }

    fn snapshot(&self) -> DigitArray {
        self.state.borrow().clone()
    }
}

// =============================================================================
// CONTROLLER OVER A CUSTOM HOST
// =============================================================================

#[test]
fn test_validation_predicate() {
    for c in '0'..='9' {
        assert!(is_valid_digit(&c.to_string()));
    }
    for s in ["", "a", "12", " ", "٣"] {
        assert!(!is_valid_digit(s), "{s:?}");
    }
}

#[test]
fn test_typing_a_digit_advances() {
    init_tracing();
    let host = Host::new(6, &["1", "2", "", "", "", ""]);
    host.otp.handle_input(&host.snapshot(), "7", 2);

    assert_eq!(host.snapshot(), row(&["1", "2", "7", "", "", ""]));
    assert_eq!(*host.log.borrow(), vec!["focus 3"]);
}

#[test]
fn test_typing_a_letter_self_heals() {
    let host = Host::new(6, &["1", "2", "", "", "", ""]);
    host.otp.handle_input(&host.snapshot(), "x", 2);

    assert_eq!(*host.updates.borrow(), 0);
    assert_eq!(*host.log.borrow(), vec!["clear 2"]);
}

#[test]
fn test_last_slot_does_not_advance() {
    let host = Host::new(6, &["", "", "", "", "", ""]);
    host.otp.handle_input(&host.snapshot(), "5", 5);

    assert_eq!(host.snapshot()[5], "5");
    assert!(host.log.borrow().is_empty());
}

#[test]
fn test_paste_fills_row() {
    let host = Host::new(6, &["", "", "", "", "", ""]);
    host.otp.handle_paste("123456");

    assert_eq!(host.snapshot(), row(&["1", "2", "3", "4", "5", "6"]));
    assert_eq!(*host.log.borrow(), vec!["focus 5"]);
}

#[test]
fn test_short_paste_overwrites_everything() {
    let host = Host::new(6, &["9", "9", "9", "9", "9", "9"]);
    host.otp.handle_paste("12");

    assert_eq!(host.snapshot(), row(&["1", "2", "", "", "", ""]));
    assert_eq!(*host.updates.borrow(), 1);
    assert_eq!(*host.log.borrow(), vec!["focus 2"]);
}

#[test]
fn test_noisy_paste_is_filtered_and_truncated() {
    let host = Host::new(3, &["", "", ""]);
    host.otp.handle_paste("ab12cd34ef");

    assert_eq!(host.snapshot(), row(&["1", "2", "3"]));
    assert_eq!(*host.log.borrow(), vec!["focus 2"]);
}

#[test]
fn test_backspace_clears_then_walks_back() {
    let host = Host::new(6, &["1", "2", "3", "4", "", ""]);

    host.otp.handle_key_down(&host.snapshot(), "Backspace", 3);
    assert_eq!(host.snapshot(), row(&["1", "2", "3", "", "", ""]));
    assert!(host.log.borrow().is_empty());

    host.otp.handle_key_down(&host.snapshot(), "Backspace", 3);
    assert_eq!(host.snapshot(), row(&["1", "2", "3", "", "", ""]));
    assert_eq!(*host.updates.borrow(), 1);
    assert_eq!(*host.log.borrow(), vec!["focus 2", "select 2"]);
}

#[test]
fn test_backspace_on_short_snapshot_publishes_full_row() {
    let host = Host::new(6, &["1", "2", "3", "4"]);
    host.otp.handle_key_down(&host.snapshot(), "Backspace", 3);

    assert_eq!(host.snapshot(), row(&["1", "2", "3", "", "", ""]));
    assert!(host.log.borrow().is_empty());
}

#[test]
fn test_backspace_on_empty_first_slot_is_noop() {
    let host = Host::new(6, &["", "", "", "", "", ""]);
    host.otp.handle_key_down(&host.snapshot(), "Backspace", 0);

    assert_eq!(*host.updates.borrow(), 0);
    assert!(host.log.borrow().is_empty());
}

// =============================================================================
// REACTIVE FIELD
// =============================================================================

#[test]
fn test_field_full_entry_session() {
    init_tracing();
    let field = OtpField::new(OtpConfig::default());
    field.focus(0);

    for key in ["4", "8", "x", "2"] {
        route_event(&field, OtpEvent::Key(KeyboardEvent::new(key)));
    }
    assert_eq!(field.code(), "482");
    assert_eq!(field.slots().focused(), Some(3));

    route_event(&field, OtpEvent::Paste("code: 135 790".into()));
    assert_eq!(field.code(), "135790");
    assert!(field.is_complete());
    assert_eq!(field.slots().focused(), Some(5));

    // Correct the last digit
    route_event(&field, OtpEvent::Key(KeyboardEvent::new("Backspace")));
    assert_eq!(field.code(), "13579");
    route_event(&field, OtpEvent::Key(KeyboardEvent::new("1")));
    assert_eq!(field.code(), "135791");
}

#[test]
fn test_field_watchers_track_updates() {
    let field = OtpField::new(OtpConfig::new(4).unwrap());
    let mut digits = field.watch_digits();

    field.paste("42");
    assert!(digits.has_changed().unwrap());
    assert_eq!(*digits.borrow_and_update(), row(&["4", "2", "", ""]));

    field.clear();
    assert_eq!(*digits.borrow_and_update(), row(&["", "", "", ""]));
}
