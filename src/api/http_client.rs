//! HTTP client creation and configuration utilities

use crate::constants::{HTTP_CONNECT_TIMEOUT_SECONDS, HTTP_POOL_MAX_IDLE_PER_HOST};
use reqwest::Client;
use std::time::Duration;

/// Creates the pooled HTTP client shared by every `ApiClient` clone.
///
/// No overall request timeout is set here: each attempt gets its own timer
/// in the client core so a timed-out attempt can be retried with a fresh
/// budget. Only the TCP connect phase is bounded at this level.
pub fn create_http_client() -> Result<Client, reqwest::Error> {
    Client::builder()
        .connect_timeout(Duration::from_secs(HTTP_CONNECT_TIMEOUT_SECONDS))
        .pool_max_idle_per_host(HTTP_POOL_MAX_IDLE_PER_HOST)
        .build()
}

/// Creates an HTTP client for testing
#[cfg(test)]
pub fn create_test_http_client() -> Client {
    create_http_client().expect("Failed to create test HTTP client")
}
