//! Photo grid page with a layout selector.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every tile links to `/photos/:id` using the same catalog the detail page
//! resolves against. Switching layout only swaps a container class.

use leptos::prelude::*;

use crate::catalog::Catalog;
use crate::components::photo_card::PhotoCard;
use crate::config::SiteConfig;
use crate::state::gallery::{GalleryState, GridLayout};
use crate::util::reveal::{reveal_class, use_reveal};

#[component]
pub fn PhotoGridPage() -> impl IntoView {
    let catalog = expect_context::<Catalog>();
    let threshold = expect_context::<SiteConfig>().reveal_threshold;
    let gallery = RwSignal::new(GalleryState::default());

    let grid_ref = NodeRef::<leptos::html::Div>::new();
    let shown = use_reveal(grid_ref, threshold);

    let layout_buttons = GridLayout::ALL
        .into_iter()
        .map(|layout| {
            view! {
                <button
                    class="btn photo-grid__layout"
                    class:photo-grid__layout--active=move || gallery.get().layout == layout
                    on:click=move |_| gallery.update(|g| g.select_layout(layout))
                >
                    {layout.label()}
                </button>
            }
        })
        .collect::<Vec<_>>();

    let tiles = gallery
        .get_untracked()
        .items(&catalog)
        .iter()
        .map(|photo| view! { <PhotoCard photo=photo/> })
        .collect::<Vec<_>>();

    view! {
        <div class="photo-grid">
            <div class="photo-grid__header">
                <h2 class="photo-grid__title">"Latest Photos"</h2>
                <div class="photo-grid__layouts">{layout_buttons}</div>
            </div>
            <div
                class=move || {
                    format!(
                        "photo-grid__items {} {}",
                        gallery.get().layout.class(),
                        reveal_class(shown.get()),
                    )
                }
                node_ref=grid_ref
            >
                {tiles}
            </div>
        </div>
    }
}
