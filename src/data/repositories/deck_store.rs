use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::{Arc, PoisonError, RwLock};

use crate::data::models::{CharacterEntry, Deck, Tier};

#[derive(Default)]
struct StoreState {
    decks: HashMap<Tier, Deck>,
    loaded: BTreeSet<Tier>,
}

/// In-memory cache of every HSK deck plus the set of finished tiers.
///
/// Decks are replaced wholesale, never edited in place, so readers can keep
/// the `Arc` they got for as long as they like.
pub struct DeckStore {
    state: RwLock<StoreState>,
}

impl Default for DeckStore {
    fn default() -> Self {
        Self::new()
    }
}

impl DeckStore {
    pub fn new() -> Self {
        let decks = Tier::ALL
            .iter()
            .map(|&tier| (tier, Arc::new(Vec::new())))
            .collect();

        Self {
            state: RwLock::new(StoreState {
                decks,
                loaded: BTreeSet::new(),
            }),
        }
    }

    pub fn deck(&self, tier: Tier) -> Deck {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        state.decks.get(&tier).cloned().unwrap_or_default()
    }

    pub fn is_loaded(&self, tier: Tier) -> bool {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        state.loaded.contains(&tier)
    }

    pub fn loaded_tiers(&self) -> Vec<Tier> {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        state.loaded.iter().copied().collect()
    }

    /// Stores a finished deck and marks its tier loaded in one step.
    pub fn complete(&self, tier: Tier, entries: Vec<CharacterEntry>) -> Deck {
        let deck: Deck = Arc::new(entries);
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        state.decks.insert(tier, Arc::clone(&deck));
        state.loaded.insert(tier);
        deck
    }

    /// All decks keyed by label ("HSK 1" .. "HSK 6").
    pub fn snapshot(&self) -> BTreeMap<String, Deck> {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        state
            .decks
            .iter()
            .map(|(tier, deck)| (tier.label(), Arc::clone(deck)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(c: &str) -> CharacterEntry {
        CharacterEntry {
            character: c.to_string(),
            pinyin: String::new(),
            meaning: String::new(),
            example_zh: String::new(),
            example_en: String::new(),
        }
    }

    #[test]
    fn test_new_store_has_six_empty_decks() {
        let store = DeckStore::new();
        let snapshot = store.snapshot();
        assert_eq!(snapshot.len(), 6);
        assert!(snapshot.values().all(|deck| deck.is_empty()));
        assert!(snapshot.contains_key("HSK 6"));
        assert!(store.loaded_tiers().is_empty());
    }

    #[test]
    fn test_complete_replaces_deck_and_marks_loaded() {
        let store = DeckStore::new();
        let tier = Tier::try_from(2).unwrap();
        let before = store.deck(tier);

        let stored = store.complete(tier, vec![entry("班"), entry("办")]);

        assert!(store.is_loaded(tier));
        assert!(Arc::ptr_eq(&stored, &store.deck(tier)));
        assert_eq!(store.deck(tier).len(), 2);
        // Readers holding the old deck are unaffected
        assert!(before.is_empty());
        assert_eq!(store.loaded_tiers(), vec![tier]);
    }
}
