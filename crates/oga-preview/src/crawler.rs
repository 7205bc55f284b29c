//! Link-preview fetcher detection.
//!
//! Crawlers are recognised by a case-insensitive substring match of the
//! `User-Agent` header against a fixed list of signatures. Matching is
//! deliberately loose: version suffixes and casing differ across fetchers,
//! and a false positive only costs a preview page instead of the SPA.

/// Known social media / link preview crawler signatures.
pub const CRAWLER_PATTERNS: &[&str] = &[
    "facebookexternalhit",
    "Facebot",
    "Twitterbot",
    "WhatsApp",
    "Slackbot",
    "Discordbot",
    "LinkedInBot",
    "Googlebot",
    "TelegramBot",
    "Applebot", // iMessage link previews
    "iMessageBot",
    "Pinterestbot",
    "redditbot",
    "Embedly",
    "Quora Link Preview",
    "Showyoubot",
    "outbrain",
    "vkShare",
];

/// Lowercased crawler signatures, built once at startup.
#[derive(Debug, Clone)]
pub struct CrawlerSignatures {
    patterns: Vec<String>,
}

impl CrawlerSignatures {
    /// Build a signature set from arbitrary patterns.
    ///
    /// Patterns are trimmed and lowercased; empty ones are dropped so they
    /// can never match every user agent.
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns = patterns
            .into_iter()
            .map(|p| p.as_ref().trim().to_lowercase())
            .filter(|p| !p.is_empty())
            .collect();
        Self { patterns }
    }

    /// The built-in signatures plus any extra ones from configuration.
    pub fn with_extra(extra: &[String]) -> Self {
        Self::new(
            CRAWLER_PATTERNS
                .iter()
                .copied()
                .chain(extra.iter().map(String::as_str)),
        )
    }

    /// Number of signatures in the set.
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Whether the set has no signatures.
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Returns true if the user agent contains any known signature.
    pub fn is_crawler(&self, user_agent: Option<&str>) -> bool {
        let Some(ua) = user_agent.filter(|ua| !ua.is_empty()) else {
            return false;
        };
        let ua = ua.to_lowercase();
        self.patterns.iter().any(|p| ua.contains(p.as_str()))
    }
}

impl Default for CrawlerSignatures {
    fn default() -> Self {
        Self::new(CRAWLER_PATTERNS)
    }
}

/// Classify a user agent against the built-in signatures.
pub fn is_crawler(user_agent: Option<&str>) -> bool {
    use std::sync::LazyLock;

    static BUILTIN: LazyLock<CrawlerSignatures> = LazyLock::new(CrawlerSignatures::default);

    BUILTIN.is_crawler(user_agent)
}
