pub mod decks;

pub use decks::{deck_router, tier_events};
