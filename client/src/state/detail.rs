//! Local interaction state of one photo-detail mount.
//!
//! SYSTEM CONTEXT
//! ==============
//! The detail page builds a fresh `DetailState` each time it resolves a photo
//! and drops it when the route changes, so likes, saves, drafts and comments
//! never leak between photos or back into the catalog.
//!
//! INVARIANTS
//! ==========
//! - Displayed likes are always `photo.likes + liked as u32`; the photo record
//!   itself is never touched.
//! - Comments are ordered newest first. A posted comment is always index 0.

#[cfg(test)]
#[path = "detail_test.rs"]
mod detail_test;

use time::Date;
use time::macros::date;

use crate::config::CurrentUser;
use crate::model::{Comment, Photo};

/// Interaction state for the photo currently on screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DetailState {
    pub photo: &'static Photo,
    pub liked: bool,
    pub saved: bool,
    pub draft: String,
    pub comments: Vec<Comment>,
}

impl DetailState {
    /// Fresh state for `photo`, seeded with the sample discussion.
    pub fn new(photo: &'static Photo) -> Self {
        Self {
            photo,
            liked: false,
            saved: false,
            draft: String::new(),
            comments: seed_comments(),
        }
    }

    /// Like count to display for the current photo. Saturates at `u32::MAX`.
    pub fn displayed_likes(&self) -> u32 {
        self.photo.likes.saturating_add(u32::from(self.liked))
    }

    pub fn toggle_like(&mut self) {
        self.liked = !self.liked;
    }

    pub fn toggle_save(&mut self) {
        self.saved = !self.saved;
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Post the current draft as `author`, dated `today`.
    ///
    /// A draft that is empty after trimming is ignored and `None` returned.
    /// Otherwise the comment is prepended, the draft cleared, and a reference
    /// to the new comment returned.
    pub fn submit_comment(&mut self, author: CurrentUser, today: Date) -> Option<&Comment> {
        if self.draft.trim().is_empty() {
            return None;
        }
        let id = u32::try_from(self.comments.len()).map_or(u32::MAX, |n| n.saturating_add(1));
        let comment = Comment {
            id,
            author: author.name.to_owned(),
            avatar_url: author.avatar_url.to_owned(),
            text: std::mem::take(&mut self.draft),
            date: today,
            likes: 0,
        };
        self.comments.insert(0, comment);
        self.comments.first()
    }
}

/// Discussion every detail mount starts from, newest first.
pub fn seed_comments() -> Vec<Comment> {
    vec![
        Comment {
            id: 1,
            author: "Sarah Chen".to_owned(),
            avatar_url: "https://images.unsplash.com/profile-1502809342504-1b9b81ac12b6".to_owned(),
            text: "The composition in this photo is absolutely stunning! The way you've captured the light and shadow creates such depth.".to_owned(),
            date: date!(2024-02-10),
            likes: 12,
        },
        Comment {
            id: 2,
            author: "Mike Thomson".to_owned(),
            avatar_url: "https://images.unsplash.com/profile-1441298803695-accd94000cac".to_owned(),
            text: "Love the mood in this shot. What camera settings did you use?".to_owned(),
            date: date!(2024-02-09),
            likes: 8,
        },
    ]
}
