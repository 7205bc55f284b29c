//! Application state shared across all request handlers.

use std::sync::Arc;

use crate::catalog::CharacterCatalog;
use crate::config::Config;
use crate::crawler::CrawlerSignatures;
use crate::error::ConfigError;

/// Read-only state built once at startup and shared by every request.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<Config>,

    /// Characters available for character-level previews.
    pub catalog: Arc<CharacterCatalog>,

    /// User-agent signatures that get a synthesized preview.
    pub crawlers: Arc<CrawlerSignatures>,
}

impl AppState {
    /// Create application state from configuration.
    ///
    /// Loads the character catalog from `catalog_path` when set, otherwise
    /// uses the built-in catalog.
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        let catalog = match &config.catalog_path {
            Some(path) => CharacterCatalog::from_json_file(path)?,
            None => CharacterCatalog::builtin(),
        };
        let crawlers = CrawlerSignatures::with_extra(&config.extra_crawlers);

        if catalog.is_empty() {
            tracing::warn!("character catalog is empty, all invites will get library previews");
        }

        tracing::info!(
            characters = catalog.len(),
            crawler_signatures = crawlers.len(),
            "application state initialized"
        );

        Ok(Self::from_parts(config, catalog, crawlers))
    }

    /// Assemble state from already-built parts.
    pub fn from_parts(
        config: Config,
        catalog: CharacterCatalog,
        crawlers: CrawlerSignatures,
    ) -> Self {
        Self {
            config: Arc::new(config),
            catalog: Arc::new(catalog),
            crawlers: Arc::new(crawlers),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::path::PathBuf;

    use super::*;
    use crate::config::BrandConfig;

    fn config(catalog_path: Option<PathBuf>, extra_crawlers: Vec<String>) -> Config {
        Config {
            bind_addr: "127.0.0.1:0".to_string(),
            spa_dir: PathBuf::from("public"),
            brand: BrandConfig::default(),
            catalog_path,
            extra_crawlers,
        }
    }

    #[test]
    fn builtin_catalog_by_default() {
        let state = AppState::new(config(None, vec![])).unwrap();
        assert_eq!(state.catalog.len(), 3);
        assert!(state.crawlers.is_crawler(Some("Twitterbot/1.0")));
    }

    #[test]
    fn catalog_loaded_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id":"ken","name":"Ken","title":"THE FLASHY RIVAL","description":"Ryu's rival.","ip":"Street Fighter","rarity":"Epic","image":"/ken.png"}}]"#
        )
        .unwrap();

        let state = AppState::new(config(Some(file.path().to_path_buf()), vec![])).unwrap();
        assert_eq!(state.catalog.len(), 1);
        assert!(state.catalog.get("KEN").is_some());
        assert!(state.catalog.get("ryu").is_none());
    }

    #[test]
    fn bad_catalog_file_is_config_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = AppState::new(config(Some(file.path().to_path_buf()), vec![])).unwrap_err();
        assert!(matches!(err, ConfigError::CatalogParse { .. }));
    }

    #[test]
    fn extra_crawlers_applied() {
        let state = AppState::new(config(None, vec!["MastodonBot".to_string()])).unwrap();
        assert!(state.crawlers.is_crawler(Some("mastodonbot/4.2")));
    }
}
