//! Character catalog: static display metadata keyed by character id.
//!
//! The catalog is data, not control flow. Adding a character means adding an
//! entry here or to a JSON file passed via `OGA_CATALOG_PATH`.

use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;

/// Base URL for hero portraits in asset storage.
const HERO_IMAGE_BASE: &str =
    "https://jmbzrbteizvuqwukojzu.supabase.co/storage/v1/object/public/characters/heroes";

/// Rarity tier of a collectible character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Common => "Common",
            Self::Uncommon => "Uncommon",
            Self::Rare => "Rare",
            Self::Epic => "Epic",
            Self::Legendary => "Legendary",
        };
        f.write_str(s)
    }
}

/// Display metadata for one character.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Character {
    /// Lookup key. Stored lowercase.
    pub id: String,
    /// Display name, e.g. "Ryu".
    pub name: String,
    /// Epithet shown after the name, e.g. "THE ETERNAL WARRIOR".
    pub title: String,
    pub description: String,
    /// Origin franchise.
    pub ip: String,
    pub rarity: Rarity,
    /// Portrait URL. Absolute, or relative to the site base URL.
    pub image: String,
}

/// Immutable id → character mapping.
#[derive(Debug, Clone, Default)]
pub struct CharacterCatalog {
    characters: HashMap<String, Character>,
}

impl CharacterCatalog {
    /// Build a catalog from a list of characters.
    ///
    /// Ids are lowercased. A later duplicate replaces an earlier entry.
    pub fn new(characters: impl IntoIterator<Item = Character>) -> Self {
        let mut map = HashMap::new();
        for mut character in characters {
            character.id = character.id.trim().to_lowercase();
            if let Some(previous) = map.insert(character.id.clone(), character) {
                tracing::warn!(id = %previous.id, "duplicate character id, keeping the later entry");
            }
        }
        Self { characters: map }
    }

    /// The characters shipped with the app.
    pub fn builtin() -> Self {
        Self::new(builtin_characters())
    }

    /// Load a catalog from a JSON array of characters.
    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::CatalogRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&raw).map_err(|err| match err {
            CatalogJsonError::Parse(source) => ConfigError::CatalogParse {
                path: path.to_path_buf(),
                source,
            },
            CatalogJsonError::EmptyId(index) => ConfigError::EmptyCharacterId { index },
        })
    }

    fn from_json_str(raw: &str) -> Result<Self, CatalogJsonError> {
        let characters: Vec<Character> =
            serde_json::from_str(raw).map_err(CatalogJsonError::Parse)?;
        if let Some(index) = characters.iter().position(|c| c.id.trim().is_empty()) {
            return Err(CatalogJsonError::EmptyId(index));
        }
        Ok(Self::new(characters))
    }

    /// Case-insensitive lookup. Unknown ids yield `None`, never an error.
    pub fn get(&self, id: &str) -> Option<&Character> {
        self.characters.get(&id.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.characters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    /// Iterate over all characters in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &Character> {
        self.characters.values()
    }
}

#[derive(Debug)]
enum CatalogJsonError {
    Parse(serde_json::Error),
    EmptyId(usize),
}

fn hero(
    id: &str,
    name: &str,
    title: &str,
    description: &str,
    ip: &str,
    rarity: Rarity,
) -> Character {
    Character {
        id: id.to_string(),
        name: name.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        ip: ip.to_string(),
        rarity,
        image: format!("{HERO_IMAGE_BASE}/{id}.png"),
    }
}

fn builtin_characters() -> Vec<Character> {
    vec![
        hero(
            "ryu",
            "Ryu",
            "THE ETERNAL WARRIOR",
            "A disciplined martial artist seeking true strength. Master of Ansatsuken with \
             powerful strikes and precise technique.",
            "Street Fighter",
            Rarity::Legendary,
        ),
        hero(
            "vegeta",
            "Vegeta",
            "THE SAIYAN PRINCE",
            "The Prince of all Saiyans. Royal pride with devastating power, constantly pushing \
             beyond his limits.",
            "Dragon Ball Z",
            Rarity::Legendary,
        ),
        hero(
            "guggimon",
            "Guggimon",
            "THE FASHION HORROR",
            "A fashion-obsessed horror bunny from the metaverse. Iconic, unpredictable, and \
             always dripping in style.",
            "Superplastic",
            Rarity::Epic,
        ),
    ]
}
