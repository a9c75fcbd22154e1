use thiserror::Error;

/// Every failure the bot can hit, from startup through one polling cycle.
#[derive(Debug, Error)]
pub enum BotError {
    #[error("Request to the homework API failed: {0}")]
    Transport(String),

    #[error("Unable to decode API response as JSON: {0}")]
    Decode(String),

    #[error("Homework API returned HTTP {status}")]
    UpstreamStatus { status: u16 },

    #[error("Field `{0}` is missing from the API response")]
    MissingField(&'static str),

    #[error("Unexpected data type in API response: {0}")]
    TypeMismatch(String),

    #[error("Unknown homework status: {0}")]
    UnknownStatus(String),

    #[error("Message delivery failed: {0}")]
    Delivery(String),

    #[error("Required environment variable {0} is missing")]
    ConfigMissing(&'static str),

    #[error("Configuration error: {0}")]
    InvalidConfig(String),
}

impl BotError {
    /// Only configuration failures stop the process; everything else is
    /// absorbed by the poll loop and retried on the next cycle.
    pub fn is_fatal(&self) -> bool {
        matches!(self, BotError::ConfigMissing(_) | BotError::InvalidConfig(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_config_errors_are_fatal() {
        assert!(BotError::ConfigMissing("TELEGRAM_TOKEN").is_fatal());
        assert!(BotError::InvalidConfig("bad".into()).is_fatal());
        assert!(!BotError::Transport("timed out".into()).is_fatal());
        assert!(!BotError::UpstreamStatus { status: 401 }.is_fatal());
        assert!(!BotError::Delivery("chat not found".into()).is_fatal());
    }

    #[test]
    fn test_display_names_the_field() {
        let err = BotError::MissingField("homework_name");
        assert_eq!(
            err.to_string(),
            "Field `homework_name` is missing from the API response"
        );
    }
}
