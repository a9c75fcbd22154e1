//! Outbound chat notifications.
//!
//! The poll loop only depends on the [`Notifier`] trait; [`TelegramNotifier`]
//! is the production implementation backed by the Telegram Bot API.

pub mod telegram;

use async_trait::async_trait;
use hwbot_common::error::BotError;

pub use telegram::TelegramNotifier;

/// Delivers a plain-text message to a single, fixed chat destination.
///
/// Implementations send exactly one outbound message per call and do not
/// retry. Any failure is reported as [`BotError::Delivery`].
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, message: &str) -> Result<(), BotError>;
}
