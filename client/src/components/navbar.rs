//! Top navigation bar with active-link indicator and theme toggle.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered once by `app` above the router outlet, so it stays mounted across
//! every page. Which entry is marked current is decided by
//! `SiteConfig::current_nav_index`.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::config::{NavEntry, SiteConfig};
use crate::routes::HOME_PATH;
use crate::state::nav::NavState;
use crate::state::theme::ThemeState;

/// Fixed top bar shared by all pages.
#[component]
pub fn Navbar() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let theme = expect_context::<RwSignal<ThemeState>>();
    let nav = RwSignal::new(NavState::default());
    let location = use_location();

    let brand = config.brand;
    let entries = config.nav.clone();
    let menu_entries = entries.clone();
    let config = StoredValue::new(config);
    let current_index = Memo::new(move |_| {
        let path = location.pathname.get();
        config.with_value(|cfg| cfg.current_nav_index(&path))
    });

    view! {
        <nav class="navbar">
            <div class="navbar__bar">
                <button
                    class="btn navbar__menu-toggle"
                    on:click=move |_| nav.update(NavState::toggle_menu)
                    aria-expanded=move || if nav.get().menu_open { "true" } else { "false" }
                    title="Toggle menu"
                >
                    {move || if nav.get().menu_open { "✕" } else { "☰" }}
                </button>
                <a href=HOME_PATH class="navbar__brand">
                    {brand}
                </a>
                <div class="navbar__links">
                    <NavLinks entries=entries current=current_index/>
                </div>
                <span class="navbar__spacer"></span>
                <button
                    class="btn navbar__theme-toggle"
                    on:click=move |_| {
                        let next = crate::util::dark_mode::toggle(theme.get_untracked());
                        theme.set(next);
                    }
                    title="Toggle dark mode"
                >
                    {move || theme.get().toggle_icon()}
                </button>
            </div>
            <Show when=move || nav.get().menu_open>
                <div class="navbar__menu">
                    <NavLinks entries=menu_entries.clone() current=current_index block=true/>
                </div>
            </Show>
        </nav>
    }
}

/// Navigation entries, with at most one marked current.
#[component]
fn NavLinks(
    entries: Vec<NavEntry>,
    current: Memo<Option<usize>>,
    #[prop(optional)] block: bool,
) -> impl IntoView {
    entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            let is_current = move || current.get() == Some(index);
            view! {
                <a
                    href=entry.href
                    class="navbar__link"
                    class:navbar__link--block=block
                    class:navbar__link--current=is_current
                    aria-current=move || is_current().then_some("page")
                >
                    {entry.label}
                </a>
            }
        })
        .collect::<Vec<_>>()
}
