pub mod entry_models;
pub mod error_models;
pub mod event_models;

pub use entry_models::{CharacterEntry, Deck, Definitions, RawVocabEntry, Tier};
pub use error_models::{DeckApiError, FetchError};
pub use event_models::{ApiResponse, DeckStatus, TierLoaded};
