//! Process-wide light/dark theme flag.
//!
//! SYSTEM CONTEXT
//! ==============
//! `app` wraps one `ThemeState` in an `RwSignal` and provides it through
//! context. The navbar toggle is the only writer; every themed view reads it.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// Current theme. Starts light on every load.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThemeState {
    pub dark: bool,
}

impl ThemeState {
    /// Flip the flag and return the new value.
    pub fn toggle(&mut self) -> bool {
        self.dark = !self.dark;
        self.dark
    }

    /// Value for the root element's `data-theme` attribute.
    pub fn name(self) -> &'static str {
        if self.dark { "dark" } else { "light" }
    }

    /// Glyph shown on the toggle button: the theme a click switches to.
    pub fn toggle_icon(self) -> &'static str {
        if self.dark { "☀" } else { "☾" }
    }
}
