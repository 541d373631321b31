//! Feature API modules.
//!
//! Each operation is a thin pass-through: shape the payload, then hand a
//! fixed endpoint from the registry to `ApiClient::call`. Retry, timeout and
//! tenant headers all come from the client.

pub mod dues;
pub mod expenses;
pub mod fees;
pub mod masters;
pub mod students;

use crate::api::Payload;
use crate::error::AppError;
use serde::Serialize;
use serde_json::Value;

/// Serializes a payload struct into the object map the client core expects.
pub(crate) fn to_payload<T: Serialize>(value: &T) -> Result<Payload, AppError> {
    match serde_json::to_value(value)? {
        Value::Object(map) => Ok(map),
        other => Err(AppError::invalid_request(format!(
            "Payload must serialize to a JSON object, got {other}"
        ))),
    }
}

/// Single-key payload, e.g. `{"studentId": 42}`.
pub(crate) fn keyed_payload(key: &str, value: impl Into<Value>) -> Payload {
    let mut payload = Payload::new();
    payload.insert(key.to_string(), value.into());
    payload
}
