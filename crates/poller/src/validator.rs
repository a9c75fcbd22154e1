//! Shape checks for the homework API payload.

use serde_json::Value;

use hwbot_common::error::BotError;
use hwbot_common::types::ApiResponse;

/// Check the payload shape and return the validated response.
///
/// `current_date` must be an integer and `homeworks` an array. Entries are
/// passed through untouched; an empty `homeworks` array is valid.
pub fn validate_response(payload: &Value) -> Result<ApiResponse, BotError> {
    let object = payload.as_object().ok_or_else(|| {
        BotError::TypeMismatch(format!("expected a JSON object, got {}", kind(payload)))
    })?;

    let current_date = object
        .get("current_date")
        .ok_or(BotError::MissingField("current_date"))?;
    let homeworks = object
        .get("homeworks")
        .ok_or(BotError::MissingField("homeworks"))?;

    let current_date = current_date.as_i64().ok_or_else(|| {
        BotError::TypeMismatch(format!(
            "`current_date` must be an integer, got {}",
            kind(current_date)
        ))
    })?;

    let items = homeworks.as_array().ok_or_else(|| {
        BotError::TypeMismatch(format!(
            "`homeworks` must be an array, got {}",
            kind(homeworks)
        ))
    })?;

    Ok(ApiResponse {
        current_date,
        homeworks: items.clone(),
    })
}

pub(crate) fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_i64() => "integer",
        Value::Number(n) if n.is_u64() => "integer out of range",
        Value::Number(_) => "float",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
