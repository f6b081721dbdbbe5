use axum::{Router, routing::get};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

mod config;
mod data;
mod features;
mod handlers;
mod utils;

use config::AppConfig;
use data::repositories::DeckStore;
use features::decks::{DeckLoader, Notifier, RemoteFetcher};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Configuration
    dotenv::dotenv().ok();
    utils::init_logger();
    let config = AppConfig::from_env()?;

    // Deck loading
    let fetcher = RemoteFetcher::new(&config.base_url, config.fetch_timeout)?;
    let loader = DeckLoader::new(Arc::new(fetcher), Arc::new(DeckStore::new()), Notifier::new());

    // HSK 1 and 2 start loading right away; the rest follow after the delay
    let startup = loader.clone();
    let preload_delay = config.preload_delay;
    tokio::spawn(async move { startup.bootstrap(preload_delay).await });

    // API routes
    let api_router = Router::new()
        .route("/events", get(handlers::decks::tier_events))
        .with_state(loader.clone())
        .nest("/decks", handlers::decks::deck_router(loader));

    let app = Router::new()
        .nest("/api", api_router)
        .layer(CorsLayer::permissive());

    // Start server
    let listener = TcpListener::bind(config.bind_addr.as_str()).await?;
    log::info!("Server running on http://{}", config.bind_addr);

    axum::serve(listener, app).await?;
    Ok(())
}
