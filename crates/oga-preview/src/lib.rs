//! OGA Preview - Open Graph previews for shareable invite links.
//!
//! Invite links point at the OGA single-page app, which renders client-side
//! and is invisible to link-preview fetchers. This crate serves the SPA's
//! static build and, for crawler requests on invite paths, answers instead
//! with a small HTML page carrying Open Graph / Twitter Card tags.
//!
//! # Architecture
//!
//! - **Crawler**: Classifies the `User-Agent` against known fetcher signatures
//! - **Invite**: Parses `/invite/{code}[/{characterId}]`
//! - **Resolve**: Looks the character up in the catalog, falling back to brand defaults
//! - **Render**: Generates the preview HTML using maud (compile-time templates)
//! - **Routes**: Middleware that serves the preview or passes through to the SPA
//!
//! # URL Pattern
//!
//! ```text
//! /invite/{code}                → inviter's library preview
//! /invite/{code}/{characterId}  → specific character preview
//! ```
//!
//! Previews link back to the hash-routed SPA URL
//! (`{base_url}/#/invite/{code}[/{characterId}]`) and refresh to it on load.

pub mod catalog;
pub mod config;
pub mod crawler;
pub mod error;
pub mod invite;
pub mod render;
pub mod resolve;
pub mod routes;
pub mod state;

pub use catalog::{Character, CharacterCatalog, Rarity};
pub use config::{BrandConfig, Config};
pub use crawler::{CrawlerSignatures, is_crawler};
pub use error::ConfigError;
pub use invite::InvitePath;
pub use resolve::{OgMetadata, Resolution, resolve};
pub use routes::router;
pub use state::AppState;
