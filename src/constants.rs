//! Application-wide constants and wire-format values
//!
//! This module centralizes the defaults and the fixed header/field names
//! the School ERP backend expects on every request.

/// Default timeout for a single request attempt in milliseconds
pub const DEFAULT_HTTP_TIMEOUT_MS: u64 = 30_000;

/// Maximum number of idle connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 32;

/// Connect timeout applied by the pooled client, independent of the per-attempt timer
pub const HTTP_CONNECT_TIMEOUT_SECONDS: u64 = 10;

/// Retry configuration
pub mod retry {
    /// Total attempts (first try included) when retry is enabled
    pub const MAX_ATTEMPTS: u32 = 3;

    /// Base delay; the wait before attempt n+1 is `BASE_DELAY_MS * n`
    pub const BASE_DELAY_MS: u64 = 1000;
}

/// Header names and fixed values sent on every call.
///
/// The custom `BS-*` names are case-sensitive on the backend side.
pub mod headers {
    pub const ACCEPT: &str = "accept";
    pub const ACCEPT_VALUE: &str = "text/plain";
    pub const CONTENT_TYPE: &str = "Content-Type";
    pub const CONTENT_TYPE_VALUE: &str = "application/json";
    pub const SCHOOL_CODE: &str = "BS-SchoolCode";
    pub const USER_TOKEN: &str = "BS-UserToken";
    pub const AUTHORIZATION_TOKEN: &str = "BS-AuthorizationToken";
}

/// Request body wire format
pub mod wire {
    /// Field inserted into every non-GET body
    pub const TRACKING_FIELD: &str = "trackingID";

    /// Literal placeholder value the backend expects for the tracking field
    pub const TRACKING_VALUE: &str = "string";

    /// User token sent when the session has none
    pub const DEFAULT_USER_TOKEN: &str = "string";

    /// Body substituted when a failed response body cannot be read
    pub const UNKNOWN_ERROR_BODY: &str = "Unknown error";
}

/// Built-in school-code table, merged under any tenants from the config file
pub const BUILTIN_TENANTS: &[(&str, &str)] = &[
    ("DEMO", "https://demo.example.com"),
    ("BSDEMO", "https://bsdemo.example.com"),
];

/// Environment variable names
pub mod env_vars {
    /// Override for the default base URL
    pub const BASE_URL: &str = "SCHOOL_ERP_BASE_URL";

    /// Override for the log file path
    pub const LOG_FILE: &str = "SCHOOL_ERP_LOG_FILE";

    /// Override for the per-attempt timeout in milliseconds
    pub const HTTP_TIMEOUT_MS: &str = "SCHOOL_ERP_HTTP_TIMEOUT_MS";

    /// Override for the retry attempt budget
    pub const RETRY_ATTEMPTS: &str = "SCHOOL_ERP_RETRY_ATTEMPTS";

    /// Session values picked up by the CLI when no flag is given
    pub const SCHOOL_CODE: &str = "SCHOOL_ERP_SCHOOL_CODE";
    pub const AUTH_TOKEN: &str = "SCHOOL_ERP_AUTH_TOKEN";
    pub const USER_TOKEN: &str = "SCHOOL_ERP_USER_TOKEN";
}

/// Name used for the config directory and the default log file
pub const APP_DIR_NAME: &str = "school_erp_client";

/// Default log file name
pub const LOG_FILE_NAME: &str = "school_erp_client.log";
