use chrono::{DateTime, Utc};
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, warn};

use crate::error::{ProgressError, Result};
use crate::fallback::demo_payload;
use crate::types::ProgressPayload;

// ---------------------------------------------------------------------------
// LoadOutcome
// ---------------------------------------------------------------------------

/// Where the payload in a `LoadOutcome` came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DataSource {
    Live,
    Fallback { reason: String },
}

impl DataSource {
    pub fn is_fallback(&self) -> bool {
        matches!(self, DataSource::Fallback { .. })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LoadOutcome {
    pub payload: ProgressPayload,
    pub source: DataSource,
    pub loaded_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// ProgressLoader
// ---------------------------------------------------------------------------

/// Retrieves the progress payload from a fixed endpoint.
///
/// `load` issues exactly one request. Any failure (transport error, non-2xx
/// status, body that doesn't parse) resolves to the demo payload instead of
/// an error. There is no retry.
#[derive(Debug, Clone)]
pub struct ProgressLoader {
    client: reqwest::Client,
    url: String,
}

impl ProgressLoader {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(client, url))
    }

    pub fn with_client(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch and parse the payload, surfacing every failure.
    pub async fn fetch(&self) -> Result<ProgressPayload> {
        debug!(url = %self.url, "fetching progress");
        let response = self.client.get(&self.url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ProgressError::HttpStatus {
                status: status.as_u16(),
            });
        }
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Fetch the payload, substituting the demo payload on any failure.
    pub async fn load(&self) -> LoadOutcome {
        let (payload, source) = match self.fetch().await {
            Ok(payload) => (payload, DataSource::Live),
            Err(e) => {
                warn!(url = %self.url, error = %e, "progress fetch failed, using demo data");
                (
                    demo_payload(),
                    DataSource::Fallback {
                        reason: e.to_string(),
                    },
                )
            }
        };
        LoadOutcome {
            payload,
            source,
            loaded_at: Utc::now(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
