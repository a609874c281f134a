use std::time::Duration;

use serde_json::Value;
use tracing::debug;

use crate::config::AdapterConfig;
use crate::error::{IngestError, Result};
use crate::scout::types::{IngestPayload, ScoutResults};

/// Bound on the full request/response exchange.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Sends Scout results to the runtime ingest endpoint.
///
/// Holds only immutable configuration; each [`submit`](Self::submit) builds
/// and drops its own HTTP client, so concurrent calls share nothing.
#[derive(Debug, Clone)]
pub struct IngestAdapter {
    config: AdapterConfig,
}

impl IngestAdapter {
    /// Use `endpoint` if given, otherwise `MCP_API_URL`, otherwise the default host.
    pub fn new(endpoint: Option<&str>) -> Self {
        Self::from_config(AdapterConfig::resolve(endpoint))
    }

    pub fn from_config(config: AdapterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AdapterConfig {
        &self.config
    }

    pub fn ingest_url(&self) -> &str {
        self.config.ingest_url()
    }

    /// Normalize without sending.
    pub fn prepare(&self, results: ScoutResults) -> IngestPayload {
        IngestPayload::build(results, chrono::Utc::now())
    }

    /// Normalize `results`, POST them once and return the decoded response body.
    pub async fn submit(&self, results: ScoutResults) -> Result<Value> {
        let payload = self.prepare(results);
        self.send(&payload).await
    }

    /// POST an already built payload. No retry on any failure.
    pub async fn send(&self, payload: &IngestPayload) -> Result<Value> {
        debug!(
            url = self.ingest_url(),
            scout_id = %payload.scout_id,
            links = payload.links.len(),
            semantic_changes = payload.semantic_changes.len(),
            "submitting scout results"
        );

        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(IngestError::ClientBuild)?;

        let resp = client.post(self.ingest_url()).json(payload).send().await?;

        let status = resp.status();
        debug!(status = status.as_u16(), "ingest endpoint responded");
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(IngestError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        let text = resp.text().await?;
        let json: Value = serde_json::from_str(&text)?;
        Ok(json)
    }
}
