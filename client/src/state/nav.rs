//! Navigation shell state.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Small-viewport menu disclosure. Nothing else reads or writes it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    pub menu_open: bool,
}

impl NavState {
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }
}
