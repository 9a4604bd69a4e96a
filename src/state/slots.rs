//! Slots - Observable slot row
//!
//! A ready-made [`SlotRow`] for reactive hosts. Every cell shares two
//! watch channels with its row:
//!
//! - `focused` - index of the focused slot, if any
//! - `selected` - slot whose content is selected, if any
//!
//! and owns a `value` channel holding the slot's raw visible content. A
//! renderer subscribes to these to draw the cursor, the selection highlight,
//! and the characters.

use std::rc::Rc;

use tokio::sync::watch;

use super::controller::{SlotHandle, SlotRow};

// =============================================================================
// SLOT CELL
// =============================================================================

/// One slot of the row.
pub struct SlotCell {
    index: usize,
    focused: Rc<watch::Sender<Option<usize>>>,
    selected: Rc<watch::Sender<Option<usize>>>,
    value: watch::Sender<String>,
}

impl SlotCell {
    /// Raw visible content.
    pub fn value(&self) -> String {
        self.value.borrow().clone()
    }

    /// Subscribe to the raw content, for renderers.
    pub fn watch_value(&self) -> watch::Receiver<String> {
        self.value.subscribe()
    }

    fn set_value(&self, value: &str) {
        self.value.send_if_modified(|current| {
            if current.as_str() == value {
                return false;
            }
            *current = value.to_string();
            true
        });
    }
}

impl SlotHandle for SlotCell {
    fn focus(&self) {
        if *self.selected.borrow() != Some(self.index) {
            self.selected.send_replace(None);
        }
        self.focused.send_replace(Some(self.index));
    }

    fn select(&self) {
        self.selected.send_replace(Some(self.index));
    }

    fn clear(&self) {
        self.set_value("");
    }
}

// =============================================================================
// SLOT ROW
// =============================================================================

/// Row of observable slots.
pub struct SlotCells {
    cells: Vec<SlotCell>,
    focused: Rc<watch::Sender<Option<usize>>>,
    selected: Rc<watch::Sender<Option<usize>>>,
}

impl SlotCells {
    /// Create `length` empty, unfocused slots.
    pub fn new(length: usize) -> Self {
        let focused = Rc::new(watch::channel(None).0);
        let selected = Rc::new(watch::channel(None).0);
        let cells = (0..length)
            .map(|index| SlotCell {
                index,
                focused: focused.clone(),
                selected: selected.clone(),
                value: watch::channel(String::new()).0,
            })
            .collect();
        Self { cells, focused, selected }
    }

    /// Number of slots.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True for a row with no slots.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cell at `index`.
    pub fn cell(&self, index: usize) -> Option<&SlotCell> {
        self.cells.get(index)
    }

    /// Focused slot, if any.
    pub fn focused(&self) -> Option<usize> {
        *self.focused.borrow()
    }

    /// Subscribe to the focused index, for renderers.
    pub fn watch_focused(&self) -> watch::Receiver<Option<usize>> {
        self.focused.subscribe()
    }

    /// Slot whose content is selected, if any.
    pub fn selected(&self) -> Option<usize> {
        *self.selected.borrow()
    }

    /// True if the focused slot's content is selected.
    pub fn is_focused_selected(&self) -> bool {
        self.focused().is_some() && self.focused() == self.selected()
    }

    /// Drop focus and selection.
    pub fn blur(&self) {
        self.selected.send_replace(None);
        self.focused.send_replace(None);
    }

    /// Raw visible content of slot `index`.
    pub fn raw_value(&self, index: usize) -> Option<String> {
        self.cells.get(index).map(SlotCell::value)
    }

    /// Overwrite the raw visible content of slot `index`. Typing replaces any
    /// selection, so the selection is dropped.
    pub fn set_raw_value(&self, index: usize, value: &str) {
        if let Some(cell) = self.cells.get(index) {
            cell.set_value(value);
            if self.selected() == Some(index) {
                self.selected.send_replace(None);
            }
        }
    }

    /// Mirror a digit array into the raw values.
    pub fn sync(&self, digits: &[String]) {
        for (cell, digit) in self.cells.iter().zip(digits) {
            cell.set_value(digit);
        }
    }
}

impl SlotRow for SlotCells {
    fn slot(&self, index: usize) -> Option<&dyn SlotHandle> {
        self.cells.slot(index)
    }
}

// =============================================================================
// TESTS
// =============================================================================
