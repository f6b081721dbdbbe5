use futures_util::future::{BoxFuture, FutureExt, Shared, join_all};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use crate::data::fallback::fallback_deck;
use crate::data::models::{CharacterEntry, Deck, DeckStatus, Tier};
use crate::data::repositories::DeckStore;
use crate::features::decks::{EntryConverter, Notifier, VocabSource};

/// Handle that every request for a loading tier awaits
type PendingLoad = Shared<BoxFuture<'static, Deck>>;

/// Number of levels loaded eagerly at startup, in order
const BOOTSTRAP_TIERS: usize = 2;

/// Coordinates fetch-or-fallback for each HSK level.
///
/// A tier goes UNLOADED -> LOADING -> LOADED exactly once. Requests for a
/// tier that is already loading join the pending load instead of issuing a
/// second fetch; different tiers load independently.
#[derive(Clone)]
pub struct DeckLoader {
    source: Arc<dyn VocabSource>,
    store: Arc<DeckStore>,
    notifier: Notifier,
    in_flight: Arc<Mutex<HashMap<Tier, PendingLoad>>>,
}

impl DeckLoader {
    pub fn new(source: Arc<dyn VocabSource>, store: Arc<DeckStore>, notifier: Notifier) -> Self {
        Self {
            source,
            store,
            notifier,
            in_flight: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    pub fn store(&self) -> &DeckStore {
        &self.store
    }

    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    /// Returns the deck for `tier`, loading it first if needed.
    ///
    /// Never fails: a failed fetch resolves to the fallback deck.
    pub async fn request_tier(&self, tier: Tier) -> Deck {
        let pending = {
            let mut in_flight = self.in_flight.lock().unwrap_or_else(PoisonError::into_inner);

            // Checked under the in-flight lock: a finished load marks the
            // store before it drops its in-flight entry.
            if self.store.is_loaded(tier) {
                return self.store.deck(tier);
            }

            match in_flight.get(&tier).cloned() {
                Some(pending) => pending,
                None => {
                    // Spawned so the fetch runs to completion even if every
                    // requester goes away
                    let task = tokio::spawn(self.clone().load_tier(tier));
                    let loader = self.clone();
                    let pending = async move {
                        match task.await {
                            Ok(deck) => deck,
                            Err(err) => {
                                log::error!("Load task for {} aborted: {}", tier, err);
                                let reason = format!("Load task for {} aborted", tier);
                                loader.finish(tier, fallback_deck(tier), Some(reason))
                            }
                        }
                    }
                    .boxed()
                    .shared();
                    in_flight.insert(tier, pending.clone());
                    pending
                }
            }
        };

        pending.await
    }

    /// Requests every tier concurrently and waits for all of them.
    pub async fn preload_all(&self) {
        let decks = join_all(Tier::ALL.iter().map(|&tier| self.request_tier(tier))).await;
        let total: usize = decks.iter().map(|deck| deck.len()).sum();
        log::info!("All HSK levels loaded ({} characters)", total);
    }

    /// Loads HSK 1 and 2 in order, then preloads the rest after `preload_delay`
    /// without blocking the caller.
    pub async fn bootstrap(&self, preload_delay: Duration) {
        for &tier in Tier::ALL.iter().take(BOOTSTRAP_TIERS) {
            self.request_tier(tier).await;
        }

        let loader = self.clone();
        tokio::spawn(async move {
            tokio::time::sleep(preload_delay).await;
            loader.preload_all().await;
        });
    }

    pub fn status(&self) -> DeckStatus {
        let mut loading: Vec<Tier> = self
            .in_flight
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .copied()
            .collect();
        loading.sort();

        DeckStatus {
            loaded: self.store.loaded_tiers(),
            loading,
        }
    }

    async fn load_tier(self, tier: Tier) -> Deck {
        log::info!("Loading {} vocabulary...", tier);

        let (entries, error) = match self.source.fetch(tier).await {
            Ok(raw) => {
                let entries: Vec<_> = raw
                    .iter()
                    .filter(|record| EntryConverter::is_single_glyph(record))
                    .map(EntryConverter::convert)
                    .collect();
                log::info!("{} loaded: {} single characters", tier, entries.len());
                (entries, None)
            }
            Err(err) => {
                log::error!("Error loading {}: {}", tier, err);
                (fallback_deck(tier), Some(err.to_string()))
            }
        };

        self.finish(tier, entries, error)
    }

    /// Store write, then in-flight removal, then the single event.
    fn finish(&self, tier: Tier, entries: Vec<CharacterEntry>, error: Option<String>) -> Deck {
        let deck = self.store.complete(tier, entries);
        self.in_flight
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&tier);
        self.notifier.publish(tier, deck.len(), error);

        deck
    }
}
