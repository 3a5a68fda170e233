//! Which service card, if any, is open in the detail overlay.
//!
//! DESIGN
//! ======
//! Holds an index into the page's service catalogue rather than a copy of
//! the entry, so the overlay always renders the constant table.

#[cfg(test)]
#[path = "service_detail_test.rs"]
mod service_detail_test;

/// Open/closed state of the service detail overlay.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ServiceDetailState {
    pub selected: Option<usize>,
}

impl ServiceDetailState {
    /// Show the detail overlay for the card at `index`, replacing any open one.
    pub fn open(&mut self, index: usize) {
        self.selected = Some(index);
    }

    /// Hide the overlay. Runs on backdrop and close-button clicks.
    pub fn close(&mut self) {
        self.selected = None;
    }

    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }
}
