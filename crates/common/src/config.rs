use std::time::Duration;

use crate::error::BotError;

/// Homework-status endpoint used when `PRACTICUM_ENDPOINT` is not set.
pub const DEFAULT_ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";

/// Bot API base used when `TELEGRAM_API_URL` is not set.
pub const DEFAULT_TELEGRAM_API_URL: &str = "https://api.telegram.org";

const DEFAULT_RETRY_PERIOD_SECS: u64 = 600;
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Required credentials, in the order they are checked.
pub const REQUIRED_VARS: [&str; 3] = ["PRACTICUM_TOKEN", "TELEGRAM_TOKEN", "TELEGRAM_CHAT_ID"];

/// Application configuration, built once at startup and passed by reference.
#[derive(Clone)]
pub struct AppConfig {
    /// Token for the homework API (`Authorization: OAuth <token>`)
    pub practicum_token: String,

    /// Chat-bot token
    pub telegram_token: String,

    /// Destination chat identifier
    pub telegram_chat_id: String,

    /// Homework-status endpoint URL
    pub endpoint: String,

    /// Bot API base URL
    pub telegram_api_url: String,

    /// Fixed sleep between polling cycles (default: 600s)
    pub retry_period: Duration,

    /// Per-request HTTP timeout (default: 30s)
    pub request_timeout: Duration,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("practicum_token", &"<redacted>")
            .field("telegram_token", &"<redacted>")
            .field("telegram_chat_id", &self.telegram_chat_id)
            .field("endpoint", &self.endpoint)
            .field("telegram_api_url", &self.telegram_api_url)
            .field("retry_period", &self.retry_period)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

impl AppConfig {
    /// Load configuration from environment variables (and `.env` if present).
    pub fn from_env() -> Result<Self, BotError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// Every missing credential is logged before the first one is returned
    /// as `ConfigMissing`. Empty values count as missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, BotError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let missing: Vec<&'static str> = REQUIRED_VARS
            .iter()
            .copied()
            .filter(|key| get(*key).is_none())
            .collect();

        if let Some(first) = missing.first() {
            for key in &missing {
                tracing::error!(variable = *key, "Required environment variable is missing");
            }
            return Err(BotError::ConfigMissing(*first));
        }

        let required = |key: &'static str| get(key).ok_or(BotError::ConfigMissing(key));

        Ok(Self {
            practicum_token: required("PRACTICUM_TOKEN")?,
            telegram_token: required("TELEGRAM_TOKEN")?,
            telegram_chat_id: required("TELEGRAM_CHAT_ID")?,
            endpoint: get("PRACTICUM_ENDPOINT").unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            telegram_api_url: get("TELEGRAM_API_URL")
                .unwrap_or_else(|| DEFAULT_TELEGRAM_API_URL.to_string()),
            retry_period: Duration::from_secs(parse_secs(
                get("RETRY_PERIOD_SECS"),
                "RETRY_PERIOD_SECS",
                DEFAULT_RETRY_PERIOD_SECS,
            )?),
            request_timeout: Duration::from_secs(parse_secs(
                get("REQUEST_TIMEOUT_SECS"),
                "REQUEST_TIMEOUT_SECS",
                DEFAULT_REQUEST_TIMEOUT_SECS,
            )?),
        })
    }
}

fn parse_secs(raw: Option<String>, key: &str, default: u64) -> Result<u64, BotError> {
    match raw {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| BotError::InvalidConfig(format!("{key} must be a valid u64, got {value:?}"))),
    }
}
