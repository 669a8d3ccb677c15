//! Featured-album card for the landing page.

use leptos::prelude::*;

use crate::model::Album;
use crate::routes::PHOTOS_PATH;
use crate::util::dates::format_long;
use crate::util::reveal::reveal_class;

/// Album cover, photographer credit, and a link into the photo grid.
///
/// `index` staggers the reveal transition so cards appear one after another.
#[component]
pub fn AlbumCard(album: &'static Album, index: usize, revealed: RwSignal<bool>) -> impl IntoView {
    let delay = format!("transition-delay: {}ms", index * 200);
    let photographer = album.photographer;

    view! {
        <article
            class=move || format!("album-card {}", reveal_class(revealed.get()))
            style=delay
        >
            <div class="album-card__cover">
                <img class="album-card__cover-image" src=album.cover_url alt=album.title/>
                <div class="album-card__cover-caption">
                    <h3 class="album-card__title">{album.title}</h3>
                    <p class="album-card__count">{format!("{} photos", album.photo_count)}</p>
                </div>
            </div>
            <div class="album-card__body">
                <div class="album-card__photographer">
                    <img class="avatar" src=photographer.avatar_url alt=photographer.name/>
                    <div>
                        <h4 class="album-card__photographer-name">{photographer.name}</h4>
                        <p class="album-card__photographer-bio">{photographer.bio}</p>
                    </div>
                </div>
                <p class="album-card__description">{album.description}</p>
                <div class="album-card__footer">
                    <span class="album-card__date">{format_long(album.date)}</span>
                    <a class="album-card__link" href=PHOTOS_PATH>
                        "View Album →"
                    </a>
                </div>
            </div>
        </article>
    }
}
