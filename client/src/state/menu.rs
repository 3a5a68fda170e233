//! Mobile navigation menu visibility.
//!
//! DESIGN
//! ======
//! Transient presentation state kept apart from the session so the menu can
//! collapse on every navigation without touching sign-in status.

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

/// Open/closed state of the collapsible mobile menu.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    pub expanded: bool,
}

impl MenuState {
    /// Flip between expanded and collapsed.
    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
    }

    /// Collapse the menu. Runs whenever a navigation link is activated.
    pub fn close(&mut self) {
        self.expanded = false;
    }
}
