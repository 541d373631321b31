//! Request shaping: target resolution, headers and body encoding
//!
//! Everything here is pure. `prepare_request` turns an endpoint, a payload
//! and the tenant state into a `PreparedRequest` value that the client core
//! then executes, so the wire format can be tested without a server.

use crate::api::endpoints::is_absolute;
use crate::api::tenant::{TenantContext, TenantResolver};
use crate::constants::{headers, wire};
use crate::error::AppError;
use reqwest::Url;
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// JSON object sent as the request payload
pub type Payload = Map<String, Value>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HttpMethod {
    Get,
    #[default]
    Post,
    Put,
    Delete,
    Patch,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Patch => "PATCH",
        }
    }

    pub(crate) fn to_reqwest(self) -> reqwest::Method {
        match self {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Delete => reqwest::Method::DELETE,
            HttpMethod::Patch => reqwest::Method::PATCH,
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HttpMethod {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(HttpMethod::Get),
            "POST" => Ok(HttpMethod::Post),
            "PUT" => Ok(HttpMethod::Put),
            "DELETE" => Ok(HttpMethod::Delete),
            "PATCH" => Ok(HttpMethod::Patch),
            other => Err(AppError::invalid_request(format!(
                "Unsupported HTTP method: {other}"
            ))),
        }
    }
}

/// Per-call options. Unset timeout means the client's default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestOptions {
    pub method: HttpMethod,
    pub headers: Vec<(String, String)>,
    pub timeout: Option<Duration>,
    pub retry: bool,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            method: HttpMethod::default(),
            headers: Vec::new(),
            timeout: None,
            retry: true,
        }
    }
}

impl RequestOptions {
    pub fn new(method: HttpMethod) -> Self {
        Self {
            method,
            ..Default::default()
        }
    }

    pub fn get() -> Self {
        Self::new(HttpMethod::Get)
    }

    pub fn post() -> Self {
        Self::new(HttpMethod::Post)
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Per-attempt timeout for this call. Zero means the client default.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn without_retry(mut self) -> Self {
        self.retry = false;
        self
    }
}

/// Where a call is going. Computed per request, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTarget {
    /// Tenant base URL; `None` for absolute endpoints
    pub base_url: Option<String>,
    pub final_url: String,
}

/// A fully shaped request, ready to send
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// Resolves the final URL for an endpoint.
///
/// Absolute endpoints are used verbatim and the resolver is not consulted.
/// For GET, a non-empty payload is appended as a query string.
pub fn resolve_target(
    endpoint: &str,
    method: HttpMethod,
    payload: &Payload,
    resolver: &TenantResolver,
    tenant: &TenantContext,
) -> Result<ResolvedTarget, AppError> {
    let (base_url, joined) = if is_absolute(endpoint) {
        (None, endpoint.to_string())
    } else {
        let base = resolver
            .resolve(tenant.school_code.as_deref())
            .ok_or_else(|| AppError::configuration(tenant.school_code(), endpoint))?;
        (Some(base.to_string()), join_url(base, endpoint))
    };

    let final_url = if method == HttpMethod::Get && !payload.is_empty() {
        let mut url = Url::parse(&joined)
            .map_err(|e| AppError::invalid_request(format!("Invalid URL '{joined}': {e}")))?;
        {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in payload {
                pairs.append_pair(key, &query_value(value));
            }
        }
        url.to_string()
    } else {
        joined
    };

    Ok(ResolvedTarget {
        base_url,
        final_url,
    })
}

/// Joins a base URL and a path with exactly one `/` between them.
///
/// # Example
/// ```
/// use school_erp_client::api::request::join_url;
///
/// assert_eq!(join_url("https://a.example.com/", "/api/x"), "https://a.example.com/api/x");
/// assert_eq!(join_url("https://a.example.com", "api/x"), "https://a.example.com/api/x");
/// ```
pub fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Fixed headers, then tenant headers, then caller overrides.
///
/// Overrides replace an existing header when the names match
/// case-insensitively, otherwise they are appended.
pub fn build_headers(tenant: &TenantContext, overrides: &[(String, String)]) -> Vec<(String, String)> {
    let mut result: Vec<(String, String)> = vec![
        (headers::ACCEPT.to_string(), headers::ACCEPT_VALUE.to_string()),
        (
            headers::CONTENT_TYPE.to_string(),
            headers::CONTENT_TYPE_VALUE.to_string(),
        ),
        (
            headers::SCHOOL_CODE.to_string(),
            tenant.school_code().to_string(),
        ),
        (
            headers::AUTHORIZATION_TOKEN.to_string(),
            tenant.auth_token().to_string(),
        ),
        (
            headers::USER_TOKEN.to_string(),
            tenant.user_token().to_string(),
        ),
    ];

    for (name, value) in overrides {
        match result
            .iter_mut()
            .find(|(existing, _)| existing.eq_ignore_ascii_case(name))
        {
            Some(slot) => slot.1 = value.clone(),
            None => result.push((name.clone(), value.clone())),
        }
    }
    result
}

/// JSON body for non-GET methods: the tracking field first, then the payload.
pub fn build_body(method: HttpMethod, payload: &Payload) -> Result<Option<String>, AppError> {
    if method == HttpMethod::Get {
        return Ok(None);
    }
    let mut body = Map::with_capacity(payload.len() + 1);
    body.insert(
        wire::TRACKING_FIELD.to_string(),
        Value::String(wire::TRACKING_VALUE.to_string()),
    );
    for (key, value) in payload {
        body.insert(key.clone(), value.clone());
    }
    Ok(Some(serde_json::to_string(&Value::Object(body))?))
}

/// Query-string text for one payload value
fn query_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Shapes a complete request for the given tenant.
pub fn prepare_request(
    endpoint: &str,
    payload: &Payload,
    options: &RequestOptions,
    resolver: &TenantResolver,
    tenant: &TenantContext,
) -> Result<PreparedRequest, AppError> {
    let target = resolve_target(endpoint, options.method, payload, resolver, tenant)?;
    Ok(PreparedRequest {
        method: options.method,
        url: target.final_url,
        headers: build_headers(tenant, &options.headers),
        body: build_body(options.method, payload)?,
    })
}
