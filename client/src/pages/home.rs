//! Landing page: hero banner and featured collections.

use leptos::prelude::*;

use crate::catalog::Catalog;
use crate::components::album_card::AlbumCard;
use crate::config::SiteConfig;
use crate::routes::PHOTOS_PATH;
use crate::util::reveal::{reveal_class, use_reveal};

const HERO_IMAGE: &str = "https://images.unsplash.com/photo-1492691527719-9d1e07e534b4";

#[component]
pub fn HomePage() -> impl IntoView {
    let catalog = expect_context::<Catalog>();
    let threshold = expect_context::<SiteConfig>().reveal_threshold;

    let hero_ref = NodeRef::<leptos::html::Div>::new();
    let albums_ref = NodeRef::<leptos::html::Div>::new();
    let hero_shown = use_reveal(hero_ref, threshold);
    let albums_shown = use_reveal(albums_ref, threshold);

    view! {
        <div class="home-page">
            <div class="hero" node_ref=hero_ref>
                <div
                    class="hero__backdrop"
                    class:hero__backdrop--settled=move || hero_shown.get()
                    style=format!("background-image: url({HERO_IMAGE})")
                ></div>
                <div class="hero__shade"></div>
                <div class=move || format!("hero__content {}", reveal_class(hero_shown.get()))>
                    <h1 class="hero__title">"Capture Your Story"</h1>
                    <p class="hero__lead">
                        "Every photograph tells a unique story. Share yours with the world."
                    </p>
                    <a class="btn btn--primary hero__cta" href=PHOTOS_PATH>
                        "Start Exploring"
                    </a>
                </div>
            </div>

            <div class="featured" node_ref=albums_ref>
                <h2 class=move || format!("featured__title {}", reveal_class(albums_shown.get()))>
                    "Featured Collections"
                </h2>
                <div class="featured__grid">
                    {catalog
                        .albums()
                        .iter()
                        .enumerate()
                        .map(|(index, album)| {
                            view! { <AlbumCard album=album index=index revealed=albums_shown/> }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </div>
    }
}
