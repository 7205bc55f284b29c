//! Application configuration loaded from environment variables.

use std::path::PathBuf;

use crate::error::ConfigError;

/// Separator between the short brand name and its tagline in the site name.
const SITE_NAME_SEPARATOR: &str = " — ";

/// Brand defaults used for library-level previews and page chrome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrandConfig {
    /// Site name shown in `og:site_name`, e.g. "OGA — Ownable Game Assets".
    pub site_name: String,
    pub default_title: String,
    pub default_description: String,
    /// Fallback OG image. Absolute, or relative to `base_url`.
    pub default_image: String,
    pub theme_color: String,
    /// Canonical origin of the SPA, without a trailing slash.
    pub base_url: String,
}

impl BrandConfig {
    /// Short brand name: the part of the site name before " — ".
    pub fn short_name(&self) -> &str {
        self.site_name
            .split(SITE_NAME_SEPARATOR)
            .next()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(self.site_name.as_str())
    }
}

impl Default for BrandConfig {
    fn default() -> Self {
        Self {
            site_name: "OGA — Ownable Game Assets".to_string(),
            default_title: "Join OGA — One Character. Infinite Worlds.".to_string(),
            default_description: "Collect, trade, and play with unique heroes across multiple \
                                  games. Your characters persist forever."
                .to_string(),
            default_image: "https://jmbzrbteizvuqwukojzu.supabase.co/storage/v1/object/public/oga-filles/og-link.png"
                .to_string(),
            theme_color: "#39FF14".to_string(),
            base_url: "https://oga.oneearthrising.com".to_string(),
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address (e.g., "0.0.0.0:8080").
    pub bind_addr: String,

    /// SPA build output served to everything that is not a crawler preview.
    pub spa_dir: PathBuf,

    /// Brand defaults and canonical base URL.
    pub brand: BrandConfig,

    /// Optional JSON file replacing the built-in character catalog.
    pub catalog_path: Option<PathBuf>,

    /// Crawler signatures appended to the built-in list.
    pub extra_crawlers: Vec<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional:
    /// - `OGA_BIND_ADDR`: Server bind address (default: "0.0.0.0:8080")
    /// - `OGA_SPA_DIR`: SPA build directory (default: "public")
    /// - `OGA_BASE_URL`: Canonical SPA origin (default: "https://oga.oneearthrising.com")
    /// - `OGA_SITE_NAME`: Site name (default: "OGA — Ownable Game Assets")
    /// - `OGA_DEFAULT_TITLE`: Library-level preview title
    /// - `OGA_DEFAULT_DESCRIPTION`: Library-level preview description
    /// - `OGA_DEFAULT_IMAGE`: Library-level OG image
    /// - `OGA_THEME_COLOR`: Theme color hint (default: "#39FF14")
    /// - `OGA_CATALOG_PATH`: JSON character catalog replacing the built-in one
    /// - `OGA_EXTRA_CRAWLERS`: Comma-separated additional crawler signatures
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = BrandConfig::default();

        let bind_addr =
            std::env::var("OGA_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

        let spa_dir = PathBuf::from(
            std::env::var("OGA_SPA_DIR").unwrap_or_else(|_| "public".to_string()),
        );

        let base_url = std::env::var("OGA_BASE_URL")
            .unwrap_or(defaults.base_url)
            .trim_end_matches('/')
            .to_string();
        if !(base_url.starts_with("https://") || base_url.starts_with("http://")) {
            return Err(ConfigError::InvalidBaseUrl(base_url));
        }

        let brand = BrandConfig {
            site_name: std::env::var("OGA_SITE_NAME").unwrap_or(defaults.site_name),
            default_title: std::env::var("OGA_DEFAULT_TITLE").unwrap_or(defaults.default_title),
            default_description: std::env::var("OGA_DEFAULT_DESCRIPTION")
                .unwrap_or(defaults.default_description),
            default_image: std::env::var("OGA_DEFAULT_IMAGE").unwrap_or(defaults.default_image),
            theme_color: std::env::var("OGA_THEME_COLOR").unwrap_or(defaults.theme_color),
            base_url,
        };

        let catalog_path = std::env::var("OGA_CATALOG_PATH")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from);

        let extra_crawlers: Vec<String> = std::env::var("OGA_EXTRA_CRAWLERS")
            .unwrap_or_default()
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        tracing::info!(
            bind_addr = %bind_addr,
            spa_dir = %spa_dir.display(),
            base_url = %brand.base_url,
            site_name = %brand.site_name,
            catalog_path = ?catalog_path,
            extra_crawlers = extra_crawlers.len(),
            "preview configuration loaded"
        );

        Ok(Self {
            bind_addr,
            spa_dir,
            brand,
            catalog_path,
            extra_crawlers,
        })
    }
}
