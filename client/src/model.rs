//! Display records for photos, albums, and comments.
//!
//! DESIGN
//! ======
//! Photo and album records are authored once as `'static` data and never
//! mutated. Comments are the only owned records because the detail view
//! creates them at runtime.

use time::Date;

/// Stable identifier of a photo record.
pub type PhotoId = u32;

/// One displayable image and its engagement counters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Photo {
    pub id: PhotoId,
    pub title: &'static str,
    pub image_url: &'static str,
    pub likes: u32,
    pub comments: u32,
}

impl Photo {
    /// Client route of this photo's detail page.
    pub fn href(&self) -> String {
        crate::routes::AppRoute::PhotoDetail(self.id).href()
    }
}

/// Author credited on an album card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Photographer {
    pub name: &'static str,
    pub avatar_url: &'static str,
    pub bio: &'static str,
}

/// Featured collection shown on the landing page.
///
/// Albums are a presentational grouping only; they carry no photo ids.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Album {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub cover_url: &'static str,
    pub photo_count: u32,
    pub date: Date,
    pub photographer: Photographer,
}

/// A comment attached to the detail view for the lifetime of one mount.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Comment {
    pub id: u32,
    pub author: String,
    pub avatar_url: String,
    pub text: String,
    pub date: Date,
    pub likes: u32,
}
