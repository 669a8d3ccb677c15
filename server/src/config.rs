//! Static host configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::SocketAddr;
use std::path::PathBuf;

pub const DEFAULT_ADDR: &str = "127.0.0.1:3000";
pub const DEFAULT_SITE_ROOT: &str = "dist";

/// Errors produced while building [`ServerConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// `PHOTOBLOG_ADDR` is not a socket address.
    #[error("invalid PHOTOBLOG_ADDR {value:?}: {source}")]
    InvalidAddr {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },
    /// The site root has no `index.html` to fall back to.
    #[error("site root {0} has no index.html (build the client bundle first)")]
    MissingIndex(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    pub site_root: PathBuf,
}

impl ServerConfig {
    /// Build config from the process environment.
    ///
    /// Optional:
    /// - `PHOTOBLOG_ADDR`: listen address, default `127.0.0.1:3000`
    /// - `PHOTOBLOG_SITE_ROOT`: built bundle directory, default `dist`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let raw_addr = lookup("PHOTOBLOG_ADDR").unwrap_or_else(|| DEFAULT_ADDR.to_owned());
        let addr = raw_addr
            .parse::<SocketAddr>()
            .map_err(|source| ConfigError::InvalidAddr {
                value: raw_addr.clone(),
                source,
            })?;
        let site_root = lookup("PHOTOBLOG_SITE_ROOT")
            .map_or_else(|| PathBuf::from(DEFAULT_SITE_ROOT), PathBuf::from);
        Ok(Self { addr, site_root })
    }

    /// Path of the SPA entry document.
    pub fn index_path(&self) -> PathBuf {
        self.site_root.join("index.html")
    }

    /// Fail early when the bundle has not been built.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.index_path().is_file() {
            Ok(())
        } else {
            Err(ConfigError::MissingIndex(self.site_root.clone()))
        }
    }
}
