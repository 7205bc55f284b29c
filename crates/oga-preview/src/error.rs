//! Error types for the preview service.
//!
//! Request handling has no failure path: every malformed input degrades to a
//! pass-through or a library-level preview. The only errors are raised while
//! loading configuration, before the listener binds.

use std::path::PathBuf;

/// Startup configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The canonical base URL is not an absolute http(s) URL.
    #[error("invalid base url '{0}': must start with http:// or https://")]
    InvalidBaseUrl(String),

    /// The character catalog file could not be read.
    #[error("failed to read character catalog {path}: {source}")]
    CatalogRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The character catalog file is not a valid JSON character list.
    #[error("failed to parse character catalog {path}: {source}")]
    CatalogParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A catalog entry has an empty identifier.
    #[error("character catalog entry {index} has an empty id")]
    EmptyCharacterId { index: usize },
}
