use crate::cli::{Args, parse_key_value};
use school_erp_client::api::endpoints::{self, ENDPOINTS};
use school_erp_client::api::{ApiClient, HttpMethod, Payload, RequestOptions, TenantContext};
use school_erp_client::config::Config;
use school_erp_client::constants::env_vars;
use school_erp_client::error::AppError;
use serde_json::Value;
use std::time::Duration;
use tracing::info;

/// Handles the --list-endpoints command.
pub fn handle_list_endpoints_command() {
    let width = ENDPOINTS
        .iter()
        .map(|(name, _, _)| name.len())
        .max()
        .unwrap_or(0);
    for (name, method, path) in ENDPOINTS {
        println!("{name:<width$}  {:<6} {path}", method.as_str());
    }
}

/// Handles the --list-config command.
pub async fn handle_list_config_command() -> Result<(), AppError> {
    Config::display().await
}

/// Handles configuration update commands (--set-base-url, --add-tenant,
/// --remove-tenant, --set-log-file, --clear-log-file).
///
/// Starts from the saved file (or defaults when there is none), applies the
/// changes, validates and saves.
pub async fn handle_config_update_command(args: &Args) -> Result<(), AppError> {
    let config_path = Config::get_config_path();
    let mut config = if std::path::Path::new(&config_path).exists() {
        Config::load_from_path(&config_path).await?
    } else {
        Config::default()
    };

    apply_config_updates(&mut config, args)?;
    config.validate()?;
    config.save().await?;
    println!("Config updated successfully!");

    Ok(())
}

fn apply_config_updates(config: &mut Config, args: &Args) -> Result<(), AppError> {
    if let Some(base_url) = &args.new_base_url {
        config.default_base_url = base_url.trim().to_string();
    }

    if let Some(raw) = &args.add_tenant {
        let (code, url) = parse_key_value(raw)?;
        config.tenants.insert(code.to_ascii_uppercase(), url);
    }

    if let Some(code) = &args.remove_tenant {
        let code = code.trim().to_ascii_uppercase();
        if config.tenants.remove(&code).is_none() {
            println!("No tenant '{code}' in config.");
        }
    }

    if let Some(new_log_path) = &args.new_log_file_path {
        config.log_file_path = Some(new_log_path.clone());
    } else if args.clear_log_file_path {
        config.log_file_path = None;
        println!("Custom log file path cleared. Using default location.");
    }

    Ok(())
}

/// Handles a single API call, or with --resolve, prints what would be sent.
pub async fn handle_call_command(args: &Args) -> Result<(), AppError> {
    let endpoint = endpoint_from_args(args)?;
    let payload = parse_payload(args.payload.as_deref())?;
    let options = request_options(args)?;

    let config = Config::load().await?;
    let client = ApiClient::new(&config)?.with_tenant(tenant_from_args(args));

    if args.resolve {
        let request = client.prepare(&endpoint, &payload, &options)?;
        println!("{} {}", request.method, request.url);
        for (name, value) in &request.headers {
            println!("{name}: {value}");
        }
        if let Some(body) = &request.body {
            println!();
            println!("{body}");
        }
        return Ok(());
    }

    let response = client.call(&endpoint, &payload, &options).await?;
    info!("Call to {} completed", endpoint);
    println!("{response}");
    Ok(())
}

/// Endpoint from --endpoint, or the registry path for --operation.
fn endpoint_from_args(args: &Args) -> Result<String, AppError> {
    match (&args.endpoint, &args.operation) {
        (Some(endpoint), _) => Ok(endpoint.clone()),
        (None, Some(operation)) => endpoints::lookup(operation)
            .map(str::to_string)
            .ok_or_else(|| {
                AppError::invalid_request(format!(
                    "Unknown operation '{operation}'. Use --list-endpoints to see available names"
                ))
            }),
        (None, None) => Err(AppError::invalid_request(
            "Nothing to call: pass --endpoint or --operation",
        )),
    }
}

fn parse_payload(raw: Option<&str>) -> Result<Payload, AppError> {
    let Some(raw) = raw else {
        return Ok(Payload::new());
    };
    match serde_json::from_str::<Value>(raw)? {
        Value::Object(map) => Ok(map),
        other => Err(AppError::invalid_request(format!(
            "Payload must be a JSON object, got {other}"
        ))),
    }
}

/// Explicit --method, else the registry method of --operation, else POST.
fn method_from_args(args: &Args) -> Result<HttpMethod, AppError> {
    if let Some(raw) = &args.method {
        return raw.parse();
    }
    Ok(args
        .operation
        .as_deref()
        .and_then(endpoints::lookup_method)
        .unwrap_or_default())
}

fn request_options(args: &Args) -> Result<RequestOptions, AppError> {
    let mut options = RequestOptions::new(method_from_args(args)?);
    for raw in &args.headers {
        let (name, value) = parse_key_value(raw)?;
        options = options.with_header(name, value);
    }
    if let Some(ms) = args.timeout_ms {
        if ms == 0 {
            return Err(AppError::invalid_request(
                "--timeout-ms must be greater than zero",
            ));
        }
        options = options.with_timeout(Duration::from_millis(ms));
    }
    if args.no_retry {
        options = options.without_retry();
    }
    Ok(options)
}

/// Session values from flags, falling back to the environment.
fn tenant_from_args(args: &Args) -> TenantContext {
    let from_env = |name: &str| std::env::var(name).ok().filter(|v| !v.is_empty());
    TenantContext {
        school_code: args
            .school_code
            .clone()
            .or_else(|| from_env(env_vars::SCHOOL_CODE)),
        auth_token: args
            .auth_token
            .clone()
            .or_else(|| from_env(env_vars::AUTH_TOKEN)),
        user_token: args
            .user_token
            .clone()
            .or_else(|| from_env(env_vars::USER_TOKEN)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use serde_json::json;

    fn args(extra: &[&str]) -> Args {
        let mut argv = vec!["school_erp_client"];
        argv.extend_from_slice(extra);
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_endpoint_from_operation() {
        assert_eq!(
            endpoint_from_args(&args(&["-o", "students.add_student"])).unwrap(),
            "/api/Students/AddStudent"
        );
        assert_eq!(
            endpoint_from_args(&args(&["-e", "https://x.example.com/ping"])).unwrap(),
            "https://x.example.com/ping"
        );
        assert!(endpoint_from_args(&args(&["-o", "students.nothing"])).is_err());
        assert!(endpoint_from_args(&args(&[])).is_err());
    }

    #[test]
    fn test_parse_payload() {
        assert!(parse_payload(None).unwrap().is_empty());
        let payload = parse_payload(Some(r#"{"name":"A"}"#)).unwrap();
        assert_eq!(Value::Object(payload), json!({"name": "A"}));
        assert!(matches!(
            parse_payload(Some("[1]")),
            Err(AppError::InvalidRequest(_))
        ));
        assert!(matches!(
            parse_payload(Some("{oops")),
            Err(AppError::ApiParse(_))
        ));
    }

    #[test]
    fn test_request_options_from_flags() {
        let options = request_options(&args(&[
            "-e",
            "/x",
            "-m",
            "get",
            "-H",
            "X-Trace=1",
            "--timeout-ms",
            "250",
            "--no-retry",
        ]))
        .unwrap();
        assert_eq!(options.method, HttpMethod::Get);
        assert_eq!(
            options.headers,
            vec![("X-Trace".to_string(), "1".to_string())]
        );
        assert_eq!(options.timeout, Some(Duration::from_millis(250)));
        assert!(!options.retry);

        assert!(request_options(&args(&["-m", "TRACE"])).is_err());
    }

    #[test]
    fn test_zero_timeout_is_rejected() {
        let err = request_options(&args(&["-e", "/x", "--timeout-ms", "0"])).unwrap_err();
        assert!(matches!(err, AppError::InvalidRequest(_)));
    }

    #[test]
    fn test_operation_uses_registry_method() {
        let options = request_options(&args(&["-o", "masters.get_classes"])).unwrap();
        assert_eq!(options.method, HttpMethod::Get);

        let options = request_options(&args(&["-o", "students.add_student"])).unwrap();
        assert_eq!(options.method, HttpMethod::Post);

        // An explicit method wins over the registry
        let options =
            request_options(&args(&["-o", "masters.get_classes", "-m", "POST"])).unwrap();
        assert_eq!(options.method, HttpMethod::Post);

        let options = request_options(&args(&["-e", "/api/x"])).unwrap();
        assert_eq!(options.method, HttpMethod::Post);
    }

    #[test]
    fn test_apply_config_updates() {
        let mut config = Config::default();
        config
            .tenants
            .insert("OLD".to_string(), "https://old.example.com".to_string());

        apply_config_updates(
            &mut config,
            &args(&[
                "--set-base-url",
                "https://api.example.com",
                "--add-tenant",
                "spring=https://spring.example.com",
                "--remove-tenant",
                "old",
                "--set-log-file",
                "/tmp/erp.log",
            ]),
        )
        .unwrap();

        assert_eq!(config.default_base_url, "https://api.example.com");
        assert_eq!(
            config.tenants.get("SPRING").map(String::as_str),
            Some("https://spring.example.com")
        );
        assert!(!config.tenants.contains_key("OLD"));
        assert_eq!(config.log_file_path.as_deref(), Some("/tmp/erp.log"));
    }
}
