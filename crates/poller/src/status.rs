use serde_json::Value;

use hwbot_common::error::BotError;
use hwbot_common::types::{HomeworkRecord, HomeworkStatus};

use crate::validator::kind;

/// Parse the raw API entry that is about to be reported.
pub fn parse_record(entry: &Value) -> Result<HomeworkRecord, BotError> {
    if !entry.is_object() {
        return Err(BotError::TypeMismatch(format!(
            "homework entry must be an object, got {}",
            kind(entry)
        )));
    }
    serde_json::from_value(entry.clone())
        .map_err(|e| BotError::TypeMismatch(format!("homework entry: {e}")))
}

/// Turn one homework record into the chat message announcing its verdict.
pub fn parse_status(record: &HomeworkRecord) -> Result<String, BotError> {
    let name = record
        .homework_name
        .as_deref()
        .ok_or(BotError::MissingField("homework_name"))?;
    let code = record
        .status
        .as_deref()
        .ok_or(BotError::MissingField("status"))?;

    let status =
        HomeworkStatus::from_code(code).ok_or_else(|| BotError::UnknownStatus(code.to_string()))?;

    Ok(format!(
        "Changed review status of \"{name}\": {}",
        status.verdict()
    ))
}
