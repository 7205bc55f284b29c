//! Invite metadata resolution.
//!
//! Combines a parsed invite path, the character catalog and the brand
//! defaults into the metadata a preview page is rendered from. Resolution is
//! total: an unknown character degrades to the library-level preview.

use crate::catalog::{Character, CharacterCatalog};
use crate::config::BrandConfig;
use crate::invite::{INVITE_ROUTE, InvitePath};

/// What an invite path resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution<'a> {
    /// The character id matched a catalog entry.
    Character(&'a Character),
    /// No character id, or one the catalog does not know.
    Library,
}

impl<'a> Resolution<'a> {
    /// Look up the invite's character id, if any.
    pub fn lookup(catalog: &'a CharacterCatalog, invite: &InvitePath) -> Self {
        invite
            .character_id
            .as_deref()
            .and_then(|id| catalog.get(id))
            .map_or(Self::Library, Self::Character)
    }
}

/// Open Graph metadata for one invite preview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OgMetadata {
    pub title: String,
    pub description: String,
    /// Image as configured. The renderer makes it absolute.
    pub image: String,
    /// Canonical SPA URL the preview points at.
    pub url: String,
    /// Set for character previews only.
    pub character_name: Option<String>,
    /// Rarity and franchise line, e.g. "Legendary · Street Fighter". Character
    /// previews only.
    pub tagline: Option<String>,
}

/// Resolve an invite path to preview metadata.
pub fn resolve(brand: &BrandConfig, catalog: &CharacterCatalog, invite: &InvitePath) -> OgMetadata {
    let url = canonical_url(brand, invite);
    let short_name = brand.short_name();

    match Resolution::lookup(catalog, invite) {
        Resolution::Character(character) => OgMetadata {
            title: format!("{} — {} | {short_name}", character.name, character.title),
            description: format!(
                "{} View {} in the {short_name} Multigameverse and see them across {} and more.",
                character.description, character.name, character.ip
            ),
            image: character.image.clone(),
            url,
            character_name: Some(character.name.clone()),
            tagline: Some(format!("{} · {}", character.rarity, character.ip)),
        },
        Resolution::Library => OgMetadata {
            title: brand.default_title.clone(),
            description: brand.default_description.clone(),
            image: brand.default_image.clone(),
            url,
            character_name: None,
            tagline: None,
        },
    }
}

/// Hash-routed SPA URL for an invite.
///
/// The character segment is kept verbatim even when the catalog does not
/// recognise it. Title, description and image fall back to the library
/// preview in that case, but the URL does not: an unknown id still
/// deep-links to `#/invite/{code}/{id}` so the app can resolve characters
/// this catalog has not been updated with.
fn canonical_url(brand: &BrandConfig, invite: &InvitePath) -> String {
    let base = &brand.base_url;
    let code = &invite.invite_code;
    match &invite.character_id {
        Some(id) => format!("{base}/#/{INVITE_ROUTE}/{code}/{id}"),
        None => format!("{base}/#/{INVITE_ROUTE}/{code}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invite(code: &str, character: Option<&str>) -> InvitePath {
        InvitePath {
            invite_code: code.to_string(),
            character_id: character.map(str::to_string),
        }
    }

    #[test]
    fn character_preview() {
        let brand = BrandConfig::default();
        let catalog = CharacterCatalog::builtin();
        let meta = resolve(&brand, &catalog, &invite("OGA-9999", Some("vegeta")));

        assert_eq!(meta.title, "Vegeta — THE SAIYAN PRINCE | OGA");
        assert!(meta.description.starts_with("The Prince of all Saiyans."));
        assert!(meta.description.ends_with(
            "View Vegeta in the OGA Multigameverse and see them across Dragon Ball Z and more."
        ));
        assert_eq!(meta.image, catalog.get("vegeta").unwrap().image);
        assert_eq!(meta.url, "https://oga.oneearthrising.com/#/invite/OGA-9999/vegeta");
        assert_eq!(meta.character_name.as_deref(), Some("Vegeta"));
        assert_eq!(meta.tagline.as_deref(), Some("Legendary · Dragon Ball Z"));
    }

    #[test]
    fn character_lookup_ignores_case_but_url_keeps_it() {
        let brand = BrandConfig::default();
        let catalog = CharacterCatalog::builtin();
        let upper = resolve(&brand, &catalog, &invite("OGA-1", Some("RYU")));
        let lower = resolve(&brand, &catalog, &invite("OGA-1", Some("ryu")));

        assert_eq!(upper.title, lower.title);
        assert_eq!(upper.description, lower.description);
        assert_eq!(upper.image, lower.image);
        assert!(upper.url.ends_with("/#/invite/OGA-1/RYU"));
        assert!(lower.url.ends_with("/#/invite/OGA-1/ryu"));
    }

    #[test]
    fn library_preview_without_character() {
        let brand = BrandConfig::default();
        let catalog = CharacterCatalog::builtin();
        let meta = resolve(&brand, &catalog, &invite("OGA-1234", None));

        assert_eq!(meta.title, brand.default_title);
        assert_eq!(meta.description, brand.default_description);
        assert_eq!(meta.image, brand.default_image);
        assert_eq!(meta.url, "https://oga.oneearthrising.com/#/invite/OGA-1234");
        assert_eq!(meta.character_name, None);
        assert_eq!(meta.tagline, None);
    }

    #[test]
    fn unknown_character_falls_back_to_library() {
        let brand = BrandConfig::default();
        let catalog = CharacterCatalog::builtin();
        let unknown = resolve(&brand, &catalog, &invite("OGA-1234", Some("unknown-hero")));
        let library = resolve(&brand, &catalog, &invite("OGA-1234", None));

        assert_eq!(unknown.title, library.title);
        assert_eq!(unknown.description, library.description);
        assert_eq!(unknown.image, library.image);
        assert_eq!(unknown.character_name, None);
        assert_eq!(unknown.tagline, None);
        assert_eq!(
            unknown.url,
            "https://oga.oneearthrising.com/#/invite/OGA-1234/unknown-hero"
        );
    }

    #[test]
    fn unknown_character_url_differs_from_library_url() {
        let brand = BrandConfig::default();
        let catalog = CharacterCatalog::builtin();
        let unknown = resolve(&brand, &catalog, &invite("OGA-7", Some("Chun-Li")));
        let library = resolve(&brand, &catalog, &invite("OGA-7", None));

        assert_eq!(
            Resolution::lookup(&catalog, &invite("OGA-7", Some("Chun-Li"))),
            Resolution::Library
        );
        assert_ne!(unknown.url, library.url);
        assert_eq!(unknown.url, format!("{}/Chun-Li", library.url));
    }

    #[test]
    fn empty_catalog_always_library() {
        let brand = BrandConfig::default();
        let catalog = CharacterCatalog::default();
        let meta = resolve(&brand, &catalog, &invite("OGA-1", Some("ryu")));
        assert_eq!(meta.title, brand.default_title);
    }

    #[test]
    fn resolution_lookup_discriminates() {
        let catalog = CharacterCatalog::builtin();
        assert!(matches!(
            Resolution::lookup(&catalog, &invite("X", Some("Guggimon"))),
            Resolution::Character(c) if c.id == "guggimon"
        ));
        assert_eq!(
            Resolution::lookup(&catalog, &invite("X", None)),
            Resolution::Library
        );
    }

    #[test]
    fn short_name_follows_site_name() {
        let brand = BrandConfig {
            site_name: "Heroes — Collect Them".to_string(),
            base_url: "https://heroes.test".to_string(),
            ..BrandConfig::default()
        };
        let catalog = CharacterCatalog::builtin();
        let meta = resolve(&brand, &catalog, &invite("H-1", Some("ryu")));
        assert_eq!(meta.title, "Ryu — THE ETERNAL WARRIOR | Heroes");
        assert!(meta.description.contains("in the Heroes Multigameverse"));
        assert_eq!(meta.url, "https://heroes.test/#/invite/H-1/ryu");
    }
}
