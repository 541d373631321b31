use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};
use school_erp_client::error::AppError;

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// True when any option that rewrites the config file is present.
pub fn is_config_update(args: &Args) -> bool {
    args.new_base_url.is_some()
        || args.add_tenant.is_some()
        || args.remove_tenant.is_some()
        || args.new_log_file_path.is_some()
        || args.clear_log_file_path
}

/// Splits `KEY=VALUE`, trimming both sides. The key must be non-empty.
pub fn parse_key_value(raw: &str) -> Result<(String, String), AppError> {
    let (key, value) = raw.split_once('=').ok_or_else(|| {
        AppError::invalid_request(format!("Expected KEY=VALUE, got '{raw}'"))
    })?;
    let key = key.trim();
    if key.is_empty() {
        return Err(AppError::invalid_request(format!(
            "Missing key in '{raw}'"
        )));
    }
    Ok((key.to_string(), value.trim().to_string()))
}

/// School ERP API client
///
/// Sends a single call to the School ERP backend for the selected school,
/// with the same tenant headers, tracking field, timeout and retry behavior
/// the application uses.
///
/// Examples:
/// - school_erp_client --operation masters.get_classes --method GET --school-code DEMO
/// - school_erp_client -e /api/Students/AddStudent -p '{"name":"A"}' --school-code DEMO
/// - school_erp_client --add-tenant SPRING=https://spring.example.com
#[derive(Parser, Debug)]
#[command(about, long_about = None, version)]
#[command(styles = get_styles())]
pub struct Args {
    /// Endpoint path (resolved against the school's base URL) or an absolute URL.
    #[arg(
        long = "endpoint",
        short = 'e',
        help_heading = "Request",
        conflicts_with = "operation"
    )]
    pub endpoint: Option<String>,

    /// Logical operation name from the endpoint registry, e.g. masters.get_classes.
    /// See --list-endpoints.
    #[arg(long = "operation", short = 'o', help_heading = "Request")]
    pub operation: Option<String>,

    /// HTTP method: GET, POST, PUT, DELETE or PATCH.
    /// Defaults to the registry method for --operation, else POST.
    #[arg(long = "method", short = 'm', help_heading = "Request")]
    pub method: Option<String>,

    /// JSON object payload. Sent as the body, or as query parameters for GET.
    #[arg(long = "payload", short = 'p', help_heading = "Request")]
    pub payload: Option<String>,

    /// Extra header, replaces a default header of the same name. Repeatable.
    #[arg(
        long = "header",
        short = 'H',
        value_name = "KEY=VALUE",
        help_heading = "Request"
    )]
    pub headers: Vec<String>,

    /// Per-attempt timeout in milliseconds, greater than zero. Defaults to the configured value.
    #[arg(long = "timeout-ms", help_heading = "Request")]
    pub timeout_ms: Option<u64>,

    /// Make a single attempt even for retryable failures.
    #[arg(long = "no-retry", help_heading = "Request")]
    pub no_retry: bool,

    /// Print the resolved URL, headers and body without sending anything.
    #[arg(long = "resolve", help_heading = "Request")]
    pub resolve: bool,

    /// School code. Falls back to SCHOOL_ERP_SCHOOL_CODE.
    #[arg(long = "school-code", short = 's', help_heading = "Session")]
    pub school_code: Option<String>,

    /// Authorization token. Falls back to SCHOOL_ERP_AUTH_TOKEN.
    #[arg(long = "auth-token", help_heading = "Session")]
    pub auth_token: Option<String>,

    /// User token. Falls back to SCHOOL_ERP_USER_TOKEN.
    #[arg(long = "user-token", help_heading = "Session")]
    pub user_token: Option<String>,

    /// List logical operation names and their paths
    #[arg(long = "list-endpoints", help_heading = "Info")]
    pub list_endpoints: bool,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Update the default base URL used for unmapped school codes.
    #[arg(
        long = "set-base-url",
        value_name = "URL",
        help_heading = "Configuration"
    )]
    pub new_base_url: Option<String>,

    /// Map a school code to a base URL in the config file.
    #[arg(
        long = "add-tenant",
        value_name = "CODE=URL",
        help_heading = "Configuration"
    )]
    pub add_tenant: Option<String>,

    /// Remove a school code mapping from the config file.
    #[arg(
        long = "remove-tenant",
        value_name = "CODE",
        help_heading = "Configuration"
    )]
    pub remove_tenant: Option<String>,

    /// Update log file path in config. This sets a persistent custom log file location.
    #[arg(long = "set-log-file", help_heading = "Configuration")]
    pub new_log_file_path: Option<String>,

    /// Clear the custom log file path from config. This reverts to using the default log location.
    #[arg(long = "clear-log-file", help_heading = "Configuration")]
    pub clear_log_file_path: bool,

    /// Enable debug logging, written to stderr as well as the log file.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}
