//! One entry of the detail-view discussion.

use leptos::prelude::*;

use crate::model::Comment;
use crate::util::dates::format_long;

#[component]
pub fn CommentItem(comment: Comment) -> impl IntoView {
    view! {
        <div class="comment">
            <img class="avatar comment__avatar" src=comment.avatar_url alt=comment.author.clone()/>
            <div class="comment__body">
                <div class="comment__header">
                    <span class="comment__author">{comment.author}</span>
                    <span class="comment__date">{format_long(comment.date)}</span>
                </div>
                <p class="comment__text">{comment.text}</p>
                <div class="comment__actions">
                    <span class="comment__likes">{format!("❤️ {}", comment.likes)}</span>
                </div>
            </div>
        </div>
    }
}
