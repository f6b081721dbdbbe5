use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

use crate::data::models::DeckApiError;

/// One of the six HSK proficiency levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(into = "u8")]
pub struct Tier(u8);

impl Tier {
    pub const ALL: [Tier; 6] = [Tier(1), Tier(2), Tier(3), Tier(4), Tier(5), Tier(6)];

    pub fn number(self) -> u8 {
        self.0
    }

    /// Deck label as shown to users, e.g. "HSK 3"
    pub fn label(self) -> String {
        format!("HSK {}", self.0)
    }
}

impl TryFrom<u8> for Tier {
    type Error = DeckApiError;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        match level {
            1..=6 => Ok(Tier(level)),
            _ => Err(DeckApiError::InvalidTier(level)),
        }
    }
}

impl From<Tier> for u8 {
    fn from(tier: Tier) -> Self {
        tier.0
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HSK {}", self.0)
    }
}

/// Canonical flashcard entry handed to the rendering layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterEntry {
    #[serde(rename = "char")]
    pub character: String,     // Single Chinese glyph
    pub pinyin: String,        // Pinyin pronunciation
    pub meaning: String,       // Definitions joined with "; "
    pub example_zh: String,    // Example sentence in Chinese
    pub example_en: String,    // English translation of the example
}

/// Decks are shared read-only; a reload swaps the whole Arc
pub type Deck = Arc<Vec<CharacterEntry>>;

/// Vocabulary record as served by the remote word lists
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawVocabEntry {
    #[serde(default)]
    pub simplified: Option<String>,
    #[serde(default)]
    pub traditional: Option<String>,
    #[serde(default)]
    pub pinyin: Option<String>,
    #[serde(default)]
    pub definitions: Option<Definitions>,
}

/// `definitions` is either a single string or a list of senses
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Definitions {
    One(String),
    Many(Vec<String>),
}
