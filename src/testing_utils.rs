//! Shared fixtures for unit and integration tests.

use crate::api::{ApiClient, Payload, RetryPolicy, TenantContext, TenantResolver};
use crate::config::Config;
use crate::error::AppError;
use serde_json::Value;
use std::time::Duration;

/// Config with the given default base URL and no configured tenants.
pub fn test_config(default_base_url: &str) -> Config {
    Config {
        default_base_url: default_base_url.to_string(),
        ..Config::default()
    }
}

/// Three attempts with a 5 ms step, so retry tests finish quickly.
pub fn fast_retry_policy() -> RetryPolicy {
    RetryPolicy::new(3, Duration::from_millis(5))
}

/// Client that maps `school_code` to `base_url` (typically a mock server)
/// and sends that school code on every call.
pub fn mock_client(base_url: &str, school_code: &str) -> Result<ApiClient, AppError> {
    ApiClient::builder()
        .resolver(TenantResolver::new([(school_code, base_url)], ""))
        .tenant(TenantContext::new(school_code))
        .retry_policy(fast_retry_policy())
        .build()
}

/// Object payload from a JSON literal; anything but an object yields an empty payload.
pub fn payload(value: Value) -> Payload {
    match value {
        Value::Object(map) => map,
        _ => Payload::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_payload_helper() {
        assert_eq!(payload(json!({"a": 1})).len(), 1);
        assert!(payload(json!([1, 2])).is_empty());
    }

    #[test]
    fn test_mock_client_routes_school_code() {
        let client = mock_client("http://127.0.0.1:9", "demo").unwrap();
        assert_eq!(client.tenant().school_code(), "demo");
        assert_eq!(client.resolver().resolve(Some("DEMO")), Some("http://127.0.0.1:9"));
        assert_eq!(client.retry_policy(), fast_retry_policy());
    }
}
