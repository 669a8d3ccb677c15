//! Typed client routes.
//!
//! SYSTEM CONTEXT
//! ==============
//! The router in `app` matches on path segments; this module owns the
//! mapping between those paths and typed destinations so pages, links, and the
//! static host agree on one route table.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use crate::model::PhotoId;

pub const HOME_PATH: &str = "/";
pub const PHOTOS_PATH: &str = "/photos";

/// Errors produced while turning a path or route parameter into a route.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    /// The `:id` segment is missing or not a non-negative integer.
    #[error("invalid photo id: {0:?}")]
    InvalidPhotoId(String),
    /// The path matches none of the client routes.
    #[error("unknown path: {0}")]
    UnknownPath(String),
}

/// A destination inside the single-page app.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppRoute {
    Home,
    Photos,
    PhotoDetail(PhotoId),
}

impl AppRoute {
    /// Parse an absolute request path into a route.
    ///
    /// A trailing slash and a query string are ignored.
    pub fn parse(path: &str) -> Result<Self, RouteError> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments = path.split('/').filter(|s| !s.is_empty()).collect::<Vec<_>>();
        match segments.as_slice() {
            [] => Ok(Self::Home),
            ["photos"] => Ok(Self::Photos),
            ["photos", id] => parse_photo_id(id).map(Self::PhotoDetail),
            _ => Err(RouteError::UnknownPath(path.to_owned())),
        }
    }

    /// Path used in links to this route.
    pub fn href(self) -> String {
        match self {
            Self::Home => HOME_PATH.to_owned(),
            Self::Photos => PHOTOS_PATH.to_owned(),
            Self::PhotoDetail(id) => format!("{PHOTOS_PATH}/{id}"),
        }
    }
}

/// Parse the string form of a photo id taken from the `:id` route segment.
///
/// Surrounding whitespace is ignored and a whole number written in decimal
/// notation (`"1.0"`, `"1e0"`) is accepted, so any numeric spelling of an id
/// resolves to that id.
pub fn parse_photo_id(raw: &str) -> Result<PhotoId, RouteError> {
    let invalid = || RouteError::InvalidPhotoId(raw.to_owned());
    let trimmed = raw.trim();
    if let Ok(id) = trimmed.parse::<PhotoId>() {
        return Ok(id);
    }
    let value = trimmed.parse::<f64>().map_err(|_| invalid())?;
    let whole = value.is_finite() && value.fract() == 0.0;
    if whole && (0.0..=f64::from(PhotoId::MAX)).contains(&value) {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        return Ok(value as PhotoId);
    }
    Err(invalid())
}
