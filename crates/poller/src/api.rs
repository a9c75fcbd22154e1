use std::time::Duration;

use reqwest::StatusCode;
use reqwest::header::AUTHORIZATION;
use serde_json::Value;

use hwbot_common::config::AppConfig;
use hwbot_common::error::BotError;

/// Client for the homework-status endpoint.
///
/// Performs exactly one GET per [`fetch`](Self::fetch) call. Retrying is the
/// poll loop's job.
pub struct HomeworkApiClient {
    client: reqwest::Client,
    endpoint: String,
    auth_header: String,
}

impl HomeworkApiClient {
    pub fn new(endpoint: impl Into<String>, token: &str, timeout: Duration) -> Result<Self, BotError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| BotError::InvalidConfig(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
            auth_header: format!("OAuth {token}"),
        })
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, BotError> {
        Self::new(
            config.endpoint.clone(),
            &config.practicum_token,
            config.request_timeout,
        )
    }

    /// Fetch status changes since `timestamp` and return the decoded body.
    ///
    /// The body is decoded before the status is checked, so a non-JSON error
    /// page surfaces as `Decode` rather than `UpstreamStatus`.
    pub async fn fetch(&self, timestamp: i64) -> Result<Value, BotError> {
        tracing::debug!(endpoint = %self.endpoint, from_date = timestamp, "Requesting homework statuses");

        let response = self
            .client
            .get(&self.endpoint)
            .header(AUTHORIZATION, &self.auth_header)
            .query(&[("from_date", timestamp)])
            .send()
            .await
            .map_err(|e| BotError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| BotError::Transport(e.to_string()))?;

        let payload: Value =
            serde_json::from_slice(&body).map_err(|e| BotError::Decode(e.to_string()))?;

        if status != StatusCode::OK {
            return Err(BotError::UpstreamStatus {
                status: status.as_u16(),
            });
        }

        Ok(payload)
    }
}
