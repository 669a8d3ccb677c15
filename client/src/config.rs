//! Static site configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The app has no environment to read from at runtime, so configuration is a
//! plain value with compile-time defaults, provided once through Leptos
//! context and read by the navigation shell and pages.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::routes::{HOME_PATH, PHOTOS_PATH};

/// One entry of the top navigation bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavEntry {
    pub label: &'static str,
    pub href: &'static str,
    /// Marks the entry as current when [`ActiveLinkMode::Static`] is in use.
    pub current: bool,
}

/// How the navigation shell decides which entry is current.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ActiveLinkMode {
    /// Use the `current` flag from configuration, whatever the route is.
    #[default]
    Static,
    /// Mark the entry whose destination is the longest prefix of the path.
    Route,
}

/// Identity attached to comments posted from this browser.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CurrentUser {
    pub name: &'static str,
    pub avatar_url: &'static str,
}

/// Site-wide settings.
#[derive(Clone, Debug, PartialEq)]
pub struct SiteConfig {
    pub brand: &'static str,
    pub nav: Vec<NavEntry>,
    pub active_link_mode: ActiveLinkMode,
    /// Maximum number of photos in the "More like this" strip.
    pub related_limit: usize,
    /// Visible fraction of an element that triggers its reveal animation.
    pub reveal_threshold: f64,
    pub current_user: CurrentUser,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            brand: "PhotoBlog",
            nav: vec![
                NavEntry {
                    label: "Home",
                    href: HOME_PATH,
                    current: true,
                },
                NavEntry {
                    label: "Photos",
                    href: PHOTOS_PATH,
                    current: false,
                },
            ],
            active_link_mode: ActiveLinkMode::Static,
            related_limit: 3,
            reveal_threshold: 0.1,
            current_user: CurrentUser {
                name: "You",
                avatar_url: "https://images.unsplash.com/profile-1446404465118-3a53b909cc82",
            },
        }
    }
}

impl SiteConfig {
    /// Index of the navigation entry to mark current for `pathname`.
    ///
    /// Static mode ignores the path and returns the first flagged entry.
    /// Route mode picks the longest destination that prefixes the path on a
    /// segment boundary. Either way at most one entry is returned.
    pub fn current_nav_index(&self, pathname: &str) -> Option<usize> {
        match self.active_link_mode {
            ActiveLinkMode::Static => self.nav.iter().position(|entry| entry.current),
            ActiveLinkMode::Route => self
                .nav
                .iter()
                .enumerate()
                .filter(|(_, entry)| path_has_prefix(pathname, entry.href))
                .max_by_key(|(_, entry)| entry.href.len())
                .map(|(index, _)| index),
        }
    }
}

fn path_has_prefix(pathname: &str, prefix: &str) -> bool {
    if prefix == HOME_PATH {
        return true;
    }
    match pathname.strip_prefix(prefix) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}
