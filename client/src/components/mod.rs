//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the navigation shell and the cards shared between pages,
//! reading the theme store and site configuration from Leptos context.

pub mod album_card;
pub mod comment_item;
pub mod navbar;
pub mod photo_card;
