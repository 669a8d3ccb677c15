//! Linked photo tile used by the grid and the related-photos strip.

use leptos::prelude::*;

use crate::model::Photo;

/// A clickable tile that navigates to the photo's detail page.
///
/// `compact` tiles (related strip) show only the title on hover; full tiles
/// also show the like and comment counters.
#[component]
pub fn PhotoCard(photo: &'static Photo, #[prop(optional)] compact: bool) -> impl IntoView {
    view! {
        <a class="photo-card" class:photo-card--compact=compact href=photo.href()>
            <img class="photo-card__image" src=photo.image_url alt=photo.title loading="lazy"/>
            <span class="photo-card__overlay">
                <span class="photo-card__title">{photo.title}</span>
                <Show when=move || !compact>
                    <span class="photo-card__stats">
                        <span class="photo-card__likes">{format!("❤️ {}", photo.likes)}</span>
                        <span class="photo-card__comments">{format!("💬 {}", photo.comments)}</span>
                    </span>
                </Show>
            </span>
        </a>
    }
}
