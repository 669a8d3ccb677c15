//! Photo detail page: one photo, local likes/saves/comments, related photos.
//!
//! SYSTEM CONTEXT
//! ==============
//! The `:id` route segment is resolved against the same catalog the grid
//! renders. An unresolvable id renders the not-found view, whose only control
//! is the link back to the grid.
//!
//! DESIGN
//! ======
//! Interaction state lives in a `DetailState` signal created by
//! `PhotoDetailView`. The page re-creates that view whenever the resolved
//! photo changes, so moving between photos starts from a clean slate.

#[cfg(test)]
#[path = "photo_detail_test.rs"]
mod photo_detail_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::catalog::Catalog;
use crate::components::comment_item::CommentItem;
use crate::components::photo_card::PhotoCard;
use crate::config::SiteConfig;
use crate::model::Photo;
use crate::routes::PHOTOS_PATH;
use crate::state::detail::DetailState;
use crate::util::dates::today;
use crate::util::reveal::{reveal_class, use_reveal};

/// Route component for `/photos/:id`.
#[component]
pub fn PhotoDetailPage() -> impl IntoView {
    let catalog = expect_context::<Catalog>();
    let params = use_params_map();

    let resolved = resolve_photo_param(catalog, move || params.read().get("id"));

    move || match resolved.get() {
        Some(photo) => view! { <PhotoDetailView photo=photo/> }.into_any(),
        None => view! { <PhotoNotFound/> }.into_any(),
    }
}

/// Memoized photo for the raw `:id` segment produced by `raw_id`.
///
/// The page view is rebuilt only when this memo changes, so moving to another
/// photo mounts a fresh `PhotoDetailView` while moving between two unknown ids
/// keeps the same not-found view.
pub fn resolve_photo_param(
    catalog: Catalog,
    raw_id: impl Fn() -> Option<String> + Send + Sync + 'static,
) -> Memo<Option<&'static Photo>> {
    Memo::new(move |_| match catalog.resolve(raw_id().as_deref()) {
        Ok(photo) => Some(photo),
        Err(err) => {
            leptos::logging::warn!("photo detail: {err}");
            None
        }
    })
}

/// Terminal state for an unknown photo id.
#[component]
fn PhotoNotFound() -> impl IntoView {
    view! {
        <div class="photo-detail photo-detail--missing">
            <h2 class="photo-detail__missing-title">"Photo not found"</h2>
            <a class="photo-detail__back" href=PHOTOS_PATH>
                "← Back to gallery"
            </a>
        </div>
    }
}

#[component]
fn PhotoDetailView(photo: &'static Photo) -> impl IntoView {
    let catalog = expect_context::<Catalog>();
    let config = expect_context::<SiteConfig>();
    let state = RwSignal::new(DetailState::new(photo));
    let current_user = config.current_user;

    let content_ref = NodeRef::<leptos::html::Div>::new();
    let related_ref = NodeRef::<leptos::html::Div>::new();
    let content_shown = use_reveal(content_ref, config.reveal_threshold);
    let related_shown = use_reveal(related_ref, config.reveal_threshold);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        state.update(|s| {
            if let Some(comment) = s.submit_comment(current_user, today()) {
                leptos::logging::log!("comment {} posted on photo {}", comment.id, photo.id);
            }
        });
    };

    let related = catalog
        .related(photo.id, config.related_limit)
        .into_iter()
        .map(|p| view! { <PhotoCard photo=p compact=true/> })
        .collect::<Vec<_>>();

    view! {
        <div class="photo-detail">
            <div
                class=move || format!("photo-detail__content {}", reveal_class(content_shown.get()))
                node_ref=content_ref
            >
                <nav class="photo-detail__nav">
                    <a class="photo-detail__back" href=PHOTOS_PATH>
                        "← Back to gallery"
                    </a>
                    <div class="photo-detail__actions">
                        <button
                            class="btn photo-detail__save"
                            class:photo-detail__save--active=move || state.get().saved
                            on:click=move |_| state.update(DetailState::toggle_save)
                        >
                            {move || if state.get().saved { "⭐ Saved" } else { "☆ Save" }}
                        </button>
                        <button
                            class="btn photo-detail__like"
                            class:photo-detail__like--active=move || state.get().liked
                            on:click=move |_| state.update(DetailState::toggle_like)
                        >
                            {move || {
                                let s = state.get();
                                let icon = if s.liked { "❤️" } else { "🤍" };
                                format!("{icon} {}", s.displayed_likes())
                            }}
                        </button>
                    </div>
                </nav>

                <div class="photo-detail__columns">
                    <div class="photo-detail__main">
                        <div class="photo-detail__hero">
                            <img class="photo-detail__image" src=photo.image_url alt=photo.title/>
                            <div class="photo-detail__caption">
                                <h1 class="photo-detail__title">{photo.title}</h1>
                                <div class="photo-detail__exposure">
                                    <span>"📸 f/2.8"</span>
                                    <span>"⚡ 1/1000s"</span>
                                    <span>"📏 ISO 100"</span>
                                </div>
                            </div>
                        </div>
                        <section class="panel">
                            <h2 class="panel__title">"About this photo"</h2>
                            <p class="panel__text">
                                "This stunning shot was captured during the golden hour, when the light was perfect for highlighting the natural beauty of the scene. The composition draws the viewer's eye through the frame, creating a sense of depth and wonder."
                            </p>
                        </section>
                    </div>

                    <section class="panel photo-detail__comments">
                        <h2 class="panel__title">
                            {move || format!("Comments ({})", state.with(|s| s.comments.len()))}
                        </h2>
                        <form class="comment-form" on:submit=on_submit>
                            <input
                                class="comment-form__input"
                                type="text"
                                placeholder="Share your thoughts..."
                                prop:value=move || state.with(|s| s.draft.clone())
                                on:input=move |ev| {
                                    let text = event_target_value(&ev);
                                    state.update(|s| s.set_draft(text));
                                }
                            />
                            <button class="btn btn--primary comment-form__submit" type="submit">
                                "Post"
                            </button>
                        </form>
                        <div class="comment-list">
                            <For
                                each=move || state.with(|s| s.comments.clone())
                                key=|comment| comment.id
                                children=|comment| view! { <CommentItem comment=comment/> }
                            />
                        </div>
                    </section>
                </div>
            </div>

            <div
                class=move || format!("photo-detail__related {}", reveal_class(related_shown.get()))
                node_ref=related_ref
            >
                <h2 class="photo-detail__related-title">"More like this"</h2>
                <div class="photo-detail__related-grid">{related}</div>
            </div>
        </div>
    }
}
