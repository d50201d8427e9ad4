use serde::Deserialize;

use crate::config::ClientConfig;
use crate::error::{PicaronesError, Result};
use crate::request::SearchRequest;
use crate::response::{SearchResponse, SearchResponseBody};

/// Body the backend returns on failure statuses. Anything undecodable is
/// treated as a missing message.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: Option<String>,
}

/// HTTP client for the search backend. One POST per submission, no
/// retries; transport failures, failure statuses and undecodable bodies
/// map to separate error variants, all of which degrade to a displayable
/// message.
pub struct SearchClient {
    base_url: String,
    http_client: reqwest::Client,
}

impl SearchClient {
    pub fn new(config: &ClientConfig) -> Self {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http_client = builder.build().unwrap_or_else(|_| reqwest::Client::new());

        SearchClient {
            base_url: config.base_url.clone(),
            http_client,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Execute one search. The attempt is unbounded unless
    /// [`ClientConfig::timeout`] was set.
    pub async fn search(&self, request: &SearchRequest) -> Result<SearchResponse> {
        let url = format!("{}/api/search", self.base_url);
        let body = request.body();
        tracing::debug!(mode = %body.mode, limit = body.limit, "Submitting search");

        let response = self
            .http_client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| PicaronesError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ApiErrorBody>()
                .await
                .ok()
                .and_then(|b| b.message);
            tracing::warn!(status = status.as_u16(), "Search request rejected");
            return Err(PicaronesError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let decoded = response
            .json::<SearchResponseBody>()
            .await
            .map_err(|e| PicaronesError::Decode(e.to_string()))?
            .normalize();
        tracing::debug!(results = decoded.results.len(), "Search completed");
        Ok(decoded)
    }

    /// Fetch restaurant names for the filter selector. Runs once at
    /// startup; a failure leaves the selector empty and never blocks
    /// search.
    pub async fn restaurants(&self) -> Result<Vec<String>> {
        let url = format!("{}/api/restaurants", self.base_url);

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| PicaronesError::RestaurantList(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(PicaronesError::RestaurantList(format!(
                "restaurant endpoint returned status {}",
                status.as_u16()
            )));
        }

        response
            .json::<Vec<String>>()
            .await
            .map_err(|e| PicaronesError::RestaurantList(e.to_string()))
    }
}
