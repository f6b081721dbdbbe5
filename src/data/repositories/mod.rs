pub mod deck_store;

pub use deck_store::DeckStore;
