use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to send request: {0}")]
    ApiFetch(#[from] reqwest::Error),

    #[error("Failed to encode or decode JSON: {0}")]
    ApiParse(#[from] serde_json::Error),

    // Local, fatal: a relative endpoint with no base URL to resolve against
    #[error("No base URL configured for school code '{school_code}' (endpoint: {endpoint})")]
    Configuration {
        school_code: String,
        endpoint: String,
    },

    #[error("Request timed out after {timeout_ms} ms: {url}")]
    Timeout { url: String, timeout_ms: u64 },

    #[error("API request failed ({status} {status_text}): {body} (URL: {url})")]
    HttpStatus {
        status: u16,
        status_text: String,
        body: String,
        url: String,
    },

    #[error("Connection failed to: {url} - {message}")]
    Network { url: String, message: String },

    #[error("Failed to decode API response: {message} (URL: {url})")]
    ApiDecode { message: String, url: String },

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Log setup error: {0}")]
    LogSetup(String),
}

impl AppError {
    /// Create a configuration file error with context
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a log setup error with context
    pub fn log_setup_error(msg: impl Into<String>) -> Self {
        Self::LogSetup(msg.into())
    }

    /// Create an invalid request error (bad URL, header or CLI input)
    pub fn invalid_request(msg: impl Into<String>) -> Self {
        Self::InvalidRequest(msg.into())
    }

    /// Create the unresolvable-base-URL error for a relative endpoint
    pub fn configuration(school_code: impl Into<String>, endpoint: impl Into<String>) -> Self {
        Self::Configuration {
            school_code: school_code.into(),
            endpoint: endpoint.into(),
        }
    }

    /// Create a timeout error for an aborted attempt
    pub fn timeout(url: impl Into<String>, timeout_ms: u64) -> Self {
        Self::Timeout {
            url: url.into(),
            timeout_ms,
        }
    }

    /// Create an error for a non-OK HTTP response
    pub fn http_status(
        status: u16,
        status_text: impl Into<String>,
        body: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self::HttpStatus {
            status,
            status_text: status_text.into(),
            body: body.into(),
            url: url.into(),
        }
    }

    /// Create a network-level failure (no HTTP response at all)
    pub fn network(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Network {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Create a decode error for a success response that could not be parsed
    pub fn api_decode(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::ApiDecode {
            message: message.into(),
            url: url.into(),
        }
    }

    /// Status code associated with the failure.
    ///
    /// Configuration errors report 500 and timeouts 408; network-level
    /// failures have no status.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            AppError::Configuration { .. } => Some(500),
            AppError::Timeout { .. } => Some(408),
            AppError::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Raw response body of a failed HTTP response
    pub fn response_body(&self) -> Option<&str> {
        match self {
            AppError::HttpStatus { body, .. } => Some(body),
            _ => None,
        }
    }

    /// The server answered with a 4xx status
    pub fn is_client_error(&self) -> bool {
        matches!(self, AppError::HttpStatus { status, .. } if (400..500).contains(status))
    }

    /// Status 500 or above, including the 500 reported for a missing base URL
    pub fn is_server_error(&self) -> bool {
        self.status_code().is_some_and(|status| status >= 500)
    }

    /// No usable response reached us: transport failure or client-side timeout
    pub fn is_network_error(&self) -> bool {
        matches!(
            self,
            AppError::Network { .. } | AppError::Timeout { .. } | AppError::ApiFetch(_)
        )
    }

    /// The attempt was aborted by the per-attempt timer
    pub fn is_timeout(&self) -> bool {
        matches!(self, AppError::Timeout { .. })
    }

    /// Whether the retry loop may try again after this error.
    ///
    /// Client errors are terminal. Local failures (configuration, invalid
    /// request, payload encoding, files) are never retried.
    pub fn is_retryable(&self) -> bool {
        match self {
            AppError::HttpStatus { .. } => !self.is_client_error(),
            AppError::Network { .. }
            | AppError::Timeout { .. }
            | AppError::ApiDecode { .. }
            | AppError::ApiFetch(_) => true,
            _ => false,
        }
    }
}
