use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use crate::data::models::{FetchError, RawVocabEntry, Tier};

/// Anything that can produce the raw word list for one HSK level
#[async_trait]
pub trait VocabSource: Send + Sync {
    async fn fetch(&self, tier: Tier) -> Result<Vec<RawVocabEntry>, FetchError>;
}

/// Fetches `<base_url>/<level>.json` over HTTP
pub struct RemoteFetcher {
    client: Client,
    base_url: String,
}

impl RemoteFetcher {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, tier: Tier) -> String {
        format!("{}/{}.json", self.base_url, tier.number())
    }
}

#[async_trait]
impl VocabSource for RemoteFetcher {
    async fn fetch(&self, tier: Tier) -> Result<Vec<RawVocabEntry>, FetchError> {
        let response = self.client.get(self.url(tier)).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::NetworkError(format!(
                "Failed to fetch {}: {}",
                tier, status
            )));
        }

        // Read the body first so transport and JSON failures stay distinct
        let body = response.text().await?;
        let entries: Vec<RawVocabEntry> = serde_json::from_str(&body)?;

        log::info!("Loaded {} words for {}", entries.len(), tier);
        Ok(entries)
    }
}
