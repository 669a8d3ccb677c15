//! The fixed sample data set and lookups over it.
//!
//! SYSTEM CONTEXT
//! ==============
//! There is no backend: this catalog is the only data source. The grid and the
//! detail view both read the same ordered photo slice, so an id that the grid
//! links to always resolves in the detail view.
//!
//! TRADE-OFFS
//! ==========
//! Lookup is a linear scan, which is fine for a hand-authored list. Swapping
//! in an id-indexed map only has to keep `find` and `related` semantics.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use time::macros::date;

use crate::model::{Album, Photo, PhotoId, Photographer};
use crate::routes::{RouteError, parse_photo_id};

/// Errors produced while resolving a photo for the detail view.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    /// The id parsed but no record carries it.
    #[error("photo {0} not found")]
    NotFound(PhotoId),
    /// The route parameter could not be parsed.
    #[error(transparent)]
    Route(#[from] RouteError),
}

const AVATAR_DEFAULT: &str = "https://images.unsplash.com/profile-1446404465118-3a53b909cc82";
const AVATAR_MIKE: &str = "https://images.unsplash.com/profile-1441298803695-accd94000cac";

static SAMPLE_PHOTOS: [Photo; 3] = [
    Photo {
        id: 1,
        title: "Mountain Landscape",
        image_url: "https://images.unsplash.com/photo-1506905925346-21bda4d32df4",
        likes: 245,
        comments: 12,
    },
    Photo {
        id: 2,
        title: "Ocean Sunset",
        image_url: "https://images.unsplash.com/photo-1507525428034-b723cf961d3e",
        likes: 189,
        comments: 8,
    },
    Photo {
        id: 3,
        title: "City Lights",
        image_url: "https://images.unsplash.com/photo-1519501025264-65ba15a82390",
        likes: 324,
        comments: 15,
    },
];

static FEATURED_ALBUMS: [Album; 3] = [
    Album {
        id: 1,
        title: "Urban Landscapes",
        description: "A collection of city views and architectural marvels",
        cover_url: "https://images.unsplash.com/photo-1519501025264-65ba15a82390",
        photo_count: 12,
        date: date!(2024-02-10),
        photographer: Photographer {
            name: "Alex Rivers",
            avatar_url: AVATAR_DEFAULT,
            bio: "Capturing urban stories through my lens",
        },
    },
    Album {
        id: 2,
        title: "Natural Wonders",
        description: "Exploring the beauty of nature through photography",
        cover_url: "https://images.unsplash.com/photo-1506905925346-21bda4d32df4",
        photo_count: 8,
        date: date!(2024-02-08),
        photographer: Photographer {
            name: "Sarah Chen",
            avatar_url: AVATAR_DEFAULT,
            bio: "Nature and wildlife photographer",
        },
    },
    Album {
        id: 3,
        title: "Coastal Dreams",
        description: "Serene moments captured along the shoreline",
        cover_url: "https://images.unsplash.com/photo-1507525428034-b723cf961d3e",
        photo_count: 15,
        date: date!(2024-02-05),
        photographer: Photographer {
            name: "Mike Thomson",
            avatar_url: AVATAR_MIKE,
            bio: "Chasing waves and perfect light",
        },
    },
];

/// Read-only view over an ordered photo sequence and the featured albums.
#[derive(Clone, Copy, Debug)]
pub struct Catalog {
    photos: &'static [Photo],
    albums: &'static [Album],
}

impl Default for Catalog {
    fn default() -> Self {
        Self::sample()
    }
}

impl Catalog {
    /// The hard-coded sample data shipped with the app.
    pub fn sample() -> Self {
        Self {
            photos: &SAMPLE_PHOTOS,
            albums: &FEATURED_ALBUMS,
        }
    }

    /// Build a catalog over caller-provided records.
    pub fn new(photos: &'static [Photo], albums: &'static [Album]) -> Self {
        Self { photos, albums }
    }

    /// All photos in authored order.
    pub fn photos(&self) -> &'static [Photo] {
        self.photos
    }

    /// Featured albums in authored order.
    pub fn albums(&self) -> &'static [Album] {
        self.albums
    }

    /// First photo whose id equals `id`.
    pub fn find(&self, id: PhotoId) -> Option<&'static Photo> {
        self.photos.iter().find(|p| p.id == id)
    }

    /// Resolve the raw `:id` route segment to a photo.
    ///
    /// `None` (segment absent), unparsable input, and unknown ids all fail.
    pub fn resolve(&self, raw_id: Option<&str>) -> Result<&'static Photo, LookupError> {
        let raw = raw_id.unwrap_or_default();
        let id = parse_photo_id(raw)?;
        self.find(id).ok_or(LookupError::NotFound(id))
    }

    /// Up to `limit` photos other than `current`, in authored order.
    ///
    /// This is a deterministic prefix, not a relevance ranking.
    pub fn related(&self, current: PhotoId, limit: usize) -> Vec<&'static Photo> {
        self.photos
            .iter()
            .filter(|p| p.id != current)
            .take(limit)
            .collect()
    }
}
