//! HTTP Category Source - reads category summaries from the tournament API.
//!
//! # Configuration
//!
//! ```ignore
//! let config = TournamentApiConfig::new("https://api.example.com")
//!     .with_token(token)
//!     .with_timeout(Duration::from_secs(10));
//!
//! let source = HttpCategorySummarySource::new(config)?;
//! ```
//!
//! The summaries of an event are served at `GET {base_url}/events/{id}/categories`
//! as a JSON array of camelCase objects.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, Secret};
use std::time::Duration;

use crate::domain::category::CategorySummary;
use crate::domain::foundation::{DomainError, ErrorCode, EventId};
use crate::ports::CategorySummarySource;

/// Configuration for the tournament API client.
#[derive(Debug, Clone)]
pub struct TournamentApiConfig {
    /// Base URL without trailing slash.
    pub base_url: String,
    /// Bearer token sent with every request, if any.
    token: Option<Secret<String>>,
    /// Request timeout.
    pub timeout: Duration,
}

impl TournamentApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: None,
            timeout: Duration::from_secs(15),
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(Secret::new(token.into()));
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Category summary source backed by the tournament REST API.
pub struct HttpCategorySummarySource {
    config: TournamentApiConfig,
    client: Client,
}

impl HttpCategorySummarySource {
    /// Creates a new source with the given configuration.
    ///
    /// # Errors
    ///
    /// - `InternalError` if the HTTP client cannot be built
    pub fn new(config: TournamentApiConfig) -> Result<Self, DomainError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                DomainError::new(
                    ErrorCode::InternalError,
                    format!("Failed to create HTTP client: {}", e),
                )
            })?;

        Ok(Self { config, client })
    }

    /// Builds the categories endpoint URL for an event.
    fn categories_url(&self, event_id: &EventId) -> String {
        format!("{}/events/{}/categories", self.config.base_url, event_id)
    }

    fn unavailable(message: impl Into<String>) -> DomainError {
        DomainError::new(ErrorCode::RemoteUnavailable, message)
    }
}

#[async_trait]
impl CategorySummarySource for HttpCategorySummarySource {
    async fn fetch(&self, event_id: &EventId) -> Result<Vec<CategorySummary>, DomainError> {
        let url = self.categories_url(event_id);
        tracing::debug!(event_id = %event_id, url = %url, "Fetching category summaries");

        let mut request = self.client.get(&url).header("Accept", "application/json");
        if let Some(token) = &self.config.token {
            request = request.bearer_auth(token.expose_secret());
        }

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                Self::unavailable(format!(
                    "Request timed out after {}s",
                    self.config.timeout.as_secs()
                ))
            } else if e.is_connect() {
                Self::unavailable(format!("Connection failed: {}", e))
            } else {
                Self::unavailable(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(event_id = %event_id, status = %status, "Tournament API rejected request");
            let message = match status {
                StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                    format!("Not authorized ({})", status)
                }
                StatusCode::NOT_FOUND => format!("Event {} unknown to the API", event_id),
                _ => format!("Unexpected status {}: {}", status, body),
            };
            return Err(Self::unavailable(message).with_detail("status", status.as_u16().to_string()));
        }

        let summaries: Vec<CategorySummary> = response
            .json()
            .await
            .map_err(|e| Self::unavailable(format!("Invalid response body: {}", e)))?;

        tracing::debug!(event_id = %event_id, count = summaries.len(), "Fetched category summaries");
        Ok(summaries)
    }
}
