use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use hwbot_common::config::AppConfig;
use hwbot_common::error::BotError;

use crate::Notifier;

#[derive(Debug, Serialize)]
struct SendMessageRequest<'a> {
    chat_id: &'a str,
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct TelegramResponse {
    ok: bool,
    #[serde(default)]
    description: Option<String>,
}

/// Sends messages through the Bot API `sendMessage` method.
pub struct TelegramNotifier {
    client: reqwest::Client,
    send_url: String,
    chat_id: String,
}

impl TelegramNotifier {
    pub fn new(
        api_url: &str,
        bot_token: &str,
        chat_id: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, BotError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| BotError::InvalidConfig(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            send_url: format!("{}/bot{}/sendMessage", api_url.trim_end_matches('/'), bot_token),
            chat_id: chat_id.into(),
        })
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, BotError> {
        Self::new(
            &config.telegram_api_url,
            &config.telegram_token,
            config.telegram_chat_id.clone(),
            config.request_timeout,
        )
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn notify(&self, message: &str) -> Result<(), BotError> {
        let body = SendMessageRequest {
            chat_id: &self.chat_id,
            text: message,
        };

        // The URL embeds the bot token, so reqwest errors are stripped of it.
        let response = self
            .client
            .post(&self.send_url)
            .json(&body)
            .send()
            .await
            .map_err(|e| BotError::Delivery(e.without_url().to_string()))?;

        let status = response.status();
        let parsed = response.json::<TelegramResponse>().await;

        match parsed {
            Ok(TelegramResponse { ok: true, .. }) if status.is_success() => {
                tracing::debug!(chat_id = %self.chat_id, "Message sent");
                Ok(())
            }
            Ok(TelegramResponse { description, .. }) => {
                let reason = description.unwrap_or_else(|| "no description".to_string());
                tracing::error!(
                    chat_id = %self.chat_id,
                    status = status.as_u16(),
                    reason = %reason,
                    "Bot API rejected message"
                );
                Err(BotError::Delivery(format!("HTTP {}: {reason}", status.as_u16())))
            }
            Err(e) => {
                tracing::error!(
                    chat_id = %self.chat_id,
                    status = status.as_u16(),
                    error = %e.without_url(),
                    "Unreadable Bot API response"
                );
                Err(BotError::Delivery(format!(
                    "HTTP {}: unreadable response",
                    status.as_u16()
                )))
            }
        }
    }
}
