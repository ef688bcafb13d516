use axum::body::Bytes;
use serde_json::{Map, Value};

use crate::error::AppError;
use feedback::{
    payloads::FeedbackSubmission,
    validation::{EMAIL_INVALID, NAME_REQUIRED, PHONE_TYPE_INVALID},
};

pub fn parse_submission(body: &Bytes) -> Result<FeedbackSubmission, AppError> {
    let json: Value = serde_json::from_slice(body).map_err(|_| AppError::MalformedPayload)?;
    let fields = json.as_object().ok_or(AppError::MalformedPayload)?;

    Ok(FeedbackSubmission {
        name: string_field(fields, "name", NAME_REQUIRED)?,
        email: string_field(fields, "email", EMAIL_INVALID)?,
        phone: optional_field(fields, "phone", PHONE_TYPE_INVALID)?,
    })
}

fn string_field(
    fields: &Map<String, Value>,
    key: &str,
    message: &str,
) -> Result<String, AppError> {
    Ok(optional_field(fields, key, message)?.unwrap_or_default())
}

// The payload is untyped JSON, so a field may hold any type. Missing and null
// both read as absent; anything other than a string is rejected with that
// field's own message, which the validation pass would produce anyway.
fn optional_field(
    fields: &Map<String, Value>,
    key: &str,
    message: &str,
) -> Result<Option<String>, AppError> {
    match fields.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(AppError::Validation(message.to_string())),
    }
}
