//! Successful response bodies, decoded by content type

use crate::error::AppError;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt;
use tracing::{debug, error};

/// Body of a successful call.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse {
    /// The server declared a JSON content type
    Json(Value),
    /// Anything else, returned as received
    Text(String),
}

impl ApiResponse {
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            ApiResponse::Json(value) => Some(value),
            ApiResponse::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            ApiResponse::Text(text) => Some(text),
            ApiResponse::Json(_) => None,
        }
    }

    /// JSON value of the body; text bodies become a JSON string.
    pub fn into_json(self) -> Value {
        match self {
            ApiResponse::Json(value) => value,
            ApiResponse::Text(text) => Value::String(text),
        }
    }

    /// Deserializes the body into `T`.
    ///
    /// Text bodies are tried as JSON too, since some endpoints answer with
    /// JSON under a `text/plain` content type.
    pub fn deserialize<T: DeserializeOwned>(self, url: &str) -> Result<T, AppError> {
        let parsed = match self {
            ApiResponse::Json(value) => serde_json::from_value(value),
            ApiResponse::Text(text) => serde_json::from_str(&text),
        };
        parsed.map_err(|e| AppError::api_decode(e.to_string(), url))
    }
}

impl fmt::Display for ApiResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiResponse::Json(value) => match serde_json::to_string_pretty(value) {
                Ok(pretty) => f.write_str(&pretty),
                Err(_) => write!(f, "{value}"),
            },
            ApiResponse::Text(text) => f.write_str(text),
        }
    }
}

/// `application/json` and any `+json` media type, parameters ignored.
pub fn is_json_content_type(content_type: Option<&str>) -> bool {
    content_type
        .and_then(|ct| ct.split(';').next())
        .map(|media| {
            let media = media.trim().to_ascii_lowercase();
            media == "application/json" || media.ends_with("+json")
        })
        .unwrap_or(false)
}

/// Turns a success body into an `ApiResponse` based on its content type.
pub fn decode_body(content_type: Option<&str>, body: String, url: &str) -> Result<ApiResponse, AppError> {
    if !is_json_content_type(content_type) {
        debug!("Non-JSON response ({:?}) from {}", content_type, url);
        return Ok(ApiResponse::Text(body));
    }

    if body.trim().is_empty() {
        return Ok(ApiResponse::Json(Value::Null));
    }

    serde_json::from_str::<Value>(&body)
        .map(ApiResponse::Json)
        .map_err(|e| {
            error!("Failed to parse API response: {} (URL: {})", e, url);
            error!(
                "Response text (first 200 chars): {}",
                body.chars().take(200).collect::<String>()
            );
            AppError::api_decode(e.to_string(), url)
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[test]
    fn test_json_content_types() {
        assert!(is_json_content_type(Some("application/json")));
        assert!(is_json_content_type(Some("application/json; charset=utf-8")));
        assert!(is_json_content_type(Some("Application/JSON")));
        assert!(is_json_content_type(Some("application/problem+json")));
        assert!(!is_json_content_type(Some("text/plain")));
        assert!(!is_json_content_type(Some("text/html; charset=utf-8")));
        assert!(!is_json_content_type(None));
    }

    #[test]
    fn test_decode_json_body() {
        let response = decode_body(Some("application/json"), r#"{"id":1}"#.to_string(), "url").unwrap();
        assert_eq!(response, ApiResponse::Json(json!({"id": 1})));
    }

    #[test]
    fn test_decode_text_body() {
        let response = decode_body(Some("text/plain"), "Saved".to_string(), "url").unwrap();
        assert_eq!(response.as_text(), Some("Saved"));
        assert_eq!(response.into_json(), json!("Saved"));
    }

    #[test]
    fn test_decode_empty_json_body_is_null() {
        let response = decode_body(Some("application/json"), "  ".to_string(), "url").unwrap();
        assert_eq!(response, ApiResponse::Json(Value::Null));
    }

    #[test]
    fn test_decode_malformed_json_body() {
        let err = decode_body(Some("application/json"), "{oops".to_string(), "url").unwrap_err();
        assert!(matches!(err, AppError::ApiDecode { .. }));
        assert!(err.is_retryable());
    }

    #[test]
    fn test_deserialize_typed() {
        #[derive(Debug, Deserialize)]
        struct Row {
            id: u32,
        }

        let rows: Vec<Row> = ApiResponse::Json(json!([{"id": 3}])).deserialize("url").unwrap();
        assert_eq!(rows[0].id, 3);

        let rows: Vec<Row> = ApiResponse::Text(r#"[{"id":4}]"#.to_string())
            .deserialize("url")
            .unwrap();
        assert_eq!(rows[0].id, 4);

        let err = ApiResponse::Text("nope".to_string())
            .deserialize::<Vec<Row>>("url")
            .unwrap_err();
        assert!(matches!(err, AppError::ApiDecode { .. }));
    }

    #[test]
    fn test_display() {
        assert_eq!(ApiResponse::Text("plain".to_string()).to_string(), "plain");
        assert_eq!(
            ApiResponse::Json(json!({"a": 1})).to_string(),
            "{\n  \"a\": 1\n}"
        );
    }
}
