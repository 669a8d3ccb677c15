//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::catalog::Catalog;
use crate::components::navbar::Navbar;
use crate::config::SiteConfig;
use crate::pages::{home::HomePage, photo_detail::PhotoDetailPage, photo_grid::PhotoGridPage};
use crate::state::theme::ThemeState;

/// Root application component.
///
/// Provides the theme store, site configuration, and catalog to every page,
/// and keeps the navigation shell mounted above the routed outlet.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = SiteConfig::default();
    let brand = config.brand;
    let theme = RwSignal::new(ThemeState::default());
    crate::util::dark_mode::apply(theme.get_untracked());

    provide_context(theme);
    provide_context(config);
    provide_context(Catalog::sample());

    view! {
        <Title text=brand/>

        <Router>
            <div class="app" class:app--dark=move || theme.get().dark>
                <Navbar/>
                <main class="app__main">
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=StaticSegment("") view=HomePage/>
                        <Route path=StaticSegment("photos") view=PhotoGridPage/>
                        <Route path=(StaticSegment("photos"), ParamSegment("id")) view=PhotoDetailPage/>
                    </Routes>
                </main>
            </div>
        </Router>
    }
}
