//! Transient open/closed state for the navbar menus and mobile drawer.
//!
//! Owned by the navigation shell, never persisted, reset on route change.
//! The menus are independent: opening one does not force the others shut
//! (each closes itself on its own outside click).

#[cfg(test)]
#[path = "menus_test.rs"]
mod menus_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    pub drawer_open: bool,
    pub profile_open: bool,
    pub create_open: bool,
}

impl MenuState {
    pub fn toggle_drawer(&mut self) {
        self.drawer_open = !self.drawer_open;
    }

    pub fn toggle_profile(&mut self) {
        self.profile_open = !self.profile_open;
    }

    pub fn toggle_create(&mut self) {
        self.create_open = !self.create_open;
    }

    /// Close everything: route changes, item selection, and logout all
    /// funnel through here.
    pub fn close_all(&mut self) {
        *self = Self::default();
    }

    pub fn any_open(&self) -> bool {
        self.drawer_open || self.profile_open || self.create_open
    }
}
