//! Applying the theme flag to the document.
//!
//! Sets a `data-theme` attribute and toggles a `dark` class on the `<html>`
//! element so stylesheets can follow the theme store. Requires a browser
//! environment.
//!
//! TRADE-OFFS
//! ==========
//! Nothing is persisted and the system colour-scheme preference is not read:
//! every load starts light. Off the browser these helpers no-op.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use crate::state::theme::ThemeState;

/// Apply the theme to the `<html>` element.
pub fn apply(theme: ThemeState) {
    #[cfg(feature = "csr")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.document_element())
        {
            let _ = el.set_attribute("data-theme", theme.name());
            let _ = el.class_list().toggle_with_force("dark", theme.dark);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = theme;
    }
}

/// Toggle the theme, apply it, and return the new state.
pub fn toggle(current: ThemeState) -> ThemeState {
    let mut next = current;
    next.toggle();
    apply(next);
    leptos::logging::log!("theme -> {}", next.name());
    next
}
