use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::sse::{Event, KeepAlive, Sse},
    routing::{get, post},
};
use futures_util::{Stream, stream};
use std::collections::BTreeMap;
use tokio::sync::broadcast::error::RecvError;

use crate::data::models::{ApiResponse, Deck, DeckApiError, DeckStatus, Tier};
use crate::features::decks::DeckLoader;

// Every deck keyed by label, loaded or not
pub async fn list_decks(State(loader): State<DeckLoader>) -> Json<BTreeMap<String, Deck>> {
    Json(loader.store().snapshot())
}

pub async fn deck_status(State(loader): State<DeckLoader>) -> Json<DeckStatus> {
    Json(loader.status())
}

#[axum::debug_handler]
pub async fn get_deck(
    State(loader): State<DeckLoader>,
    Path(level): Path<String>,
) -> Result<Json<Deck>, DeckApiError> {
    // Parsed here so out-of-range and non-numeric levels share one error body
    let number: u8 = level
        .parse()
        .map_err(|_| DeckApiError::UnparsableTier(level.clone()))?;
    let tier = Tier::try_from(number)?;
    Ok(Json(loader.request_tier(tier).await))
}

pub async fn preload_decks(State(loader): State<DeckLoader>) -> (StatusCode, Json<ApiResponse>) {
    tokio::spawn(async move { loader.preload_all().await });

    (
        StatusCode::ACCEPTED,
        Json(ApiResponse {
            success: true,
            message: "Preloading all HSK levels".to_string(),
        }),
    )
}

/// Streams `tierLoaded` events as they are published.
pub async fn tier_events(
    State(loader): State<DeckLoader>,
) -> Sse<impl Stream<Item = Result<Event, axum::Error>>> {
    let receiver = loader.notifier().subscribe();

    let events = stream::unfold(receiver, |mut receiver| async move {
        loop {
            match receiver.recv().await {
                Ok(loaded) => {
                    let event = Event::default().event("tierLoaded").json_data(&loaded);
                    return Some((event, receiver));
                }
                Err(RecvError::Lagged(skipped)) => {
                    log::warn!("Event subscriber lagged, {} events skipped", skipped);
                }
                Err(RecvError::Closed) => return None,
            }
        }
    });

    Sse::new(events).keep_alive(KeepAlive::default())
}

pub fn deck_router(loader: DeckLoader) -> Router {
    Router::new()
        .route("/", get(list_decks))
        .route("/status", get(deck_status))
        .route("/preload", post(preload_decks))
        .route("/{level}", get(get_deck))
        .with_state(loader)
}
