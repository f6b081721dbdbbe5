pub mod converter;
pub mod error_conversions;
pub mod error_responses;
pub mod fetcher;
pub mod loader;
pub mod notifier;

pub use converter::EntryConverter;
pub use fetcher::{RemoteFetcher, VocabSource};
pub use loader::DeckLoader;
pub use notifier::Notifier;
