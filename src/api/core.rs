//! The API client core: one logical call = resolve, shape, send with a
//! per-attempt timer, classify, retry.

use crate::api::http_client::create_http_client;
use crate::api::request::{
    HttpMethod, Payload, PreparedRequest, RequestOptions, ResolvedTarget, prepare_request,
    resolve_target,
};
use crate::api::response::{ApiResponse, decode_body};
use crate::api::retry::{RetryPolicy, with_retry};
use crate::api::tenant::{SessionStore, TenantContext, TenantResolver, TenantSource};
use crate::config::Config;
use crate::constants::{
    DEFAULT_HTTP_TIMEOUT_MS, HTTP_CONNECT_TIMEOUT_SECONDS, wire::UNKNOWN_ERROR_BODY,
};
use crate::error::AppError;
use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info, instrument, warn};

/// Constructible, cheaply cloneable client for the School ERP backend.
///
/// Clones share the pooled HTTP client and the resolver table. Tenant state
/// is read through a `TenantSource` on every call and never written.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    resolver: Arc<TenantResolver>,
    tenant: Arc<dyn TenantSource>,
    timeout: Duration,
    retry: RetryPolicy,
}

/// Builder for `ApiClient`; unset values take the crate defaults.
#[derive(Debug, Default)]
pub struct ApiClientBuilder {
    resolver: TenantResolver,
    tenant: Option<Arc<dyn TenantSource>>,
    timeout: Option<Duration>,
    retry: Option<RetryPolicy>,
    http: Option<Client>,
}

impl ApiClientBuilder {
    pub fn resolver(mut self, resolver: TenantResolver) -> Self {
        self.resolver = resolver;
        self
    }

    /// Fixed tenant values for every call
    pub fn tenant(mut self, context: TenantContext) -> Self {
        self.tenant = Some(Arc::new(context));
        self
    }

    /// Live session, re-read on every call
    pub fn session(mut self, store: SessionStore) -> Self {
        self.tenant = Some(Arc::new(store));
        self
    }

    /// Per-attempt timeout; zero keeps the crate default.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn retry_policy(mut self, policy: RetryPolicy) -> Self {
        self.retry = Some(policy);
        self
    }

    pub fn http_client(mut self, client: Client) -> Self {
        self.http = Some(client);
        self
    }

    pub fn build(self) -> Result<ApiClient, AppError> {
        let http = match self.http {
            Some(client) => client,
            None => create_http_client()?,
        };
        Ok(ApiClient {
            http,
            resolver: Arc::new(self.resolver),
            tenant: self
                .tenant
                .unwrap_or_else(|| Arc::new(TenantContext::default())),
            timeout: self
                .timeout
                .filter(|t| !t.is_zero())
                .unwrap_or(Duration::from_millis(DEFAULT_HTTP_TIMEOUT_MS)),
            retry: self.retry.unwrap_or_default(),
        })
    }
}

impl ApiClient {
    /// Client configured from the resolver table, timeout and retry policy in `config`.
    pub fn new(config: &Config) -> Result<Self, AppError> {
        Self::builder()
            .resolver(config.tenant_resolver())
            .timeout(config.timeout())
            .retry_policy(config.retry_policy())
            .build()
    }

    pub fn builder() -> ApiClientBuilder {
        ApiClientBuilder::default()
    }

    /// Same configuration, fixed tenant values.
    pub fn with_tenant(&self, context: TenantContext) -> Self {
        Self {
            tenant: Arc::new(context),
            ..self.clone()
        }
    }

    /// Same configuration, tenant values read from a live session.
    pub fn with_session(&self, store: SessionStore) -> Self {
        Self {
            tenant: Arc::new(store),
            ..self.clone()
        }
    }

    /// Current tenant values
    pub fn tenant(&self) -> TenantContext {
        self.tenant.snapshot()
    }

    pub fn resolver(&self) -> &TenantResolver {
        &self.resolver
    }

    pub fn default_timeout(&self) -> Duration {
        self.timeout
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        self.retry
    }

    /// Where a call with these arguments would go, without sending it.
    pub fn resolve_target(
        &self,
        endpoint: &str,
        method: HttpMethod,
        payload: &Payload,
    ) -> Result<ResolvedTarget, AppError> {
        resolve_target(endpoint, method, payload, &self.resolver, &self.tenant.snapshot())
    }

    /// The request a call would send, without sending it.
    pub fn prepare(
        &self,
        endpoint: &str,
        payload: &Payload,
        options: &RequestOptions,
    ) -> Result<PreparedRequest, AppError> {
        prepare_request(endpoint, payload, options, &self.resolver, &self.tenant.snapshot())
    }

    /// Executes one logical API call.
    ///
    /// A relative endpoint with no resolvable base URL fails before any
    /// network attempt. Each attempt runs under its own timer; when retry is
    /// enabled, everything except client errors and local failures is
    /// retried according to the client's `RetryPolicy`.
    #[instrument(skip(self, payload, options), fields(method = %options.method))]
    pub async fn call(
        &self,
        endpoint: &str,
        payload: &Payload,
        options: &RequestOptions,
    ) -> Result<ApiResponse, AppError> {
        let request = self.prepare(endpoint, payload, options)?;
        let timeout = options
            .timeout
            .filter(|t| !t.is_zero())
            .unwrap_or(self.timeout);
        let policy = if options.retry {
            self.retry
        } else {
            RetryPolicy::disabled()
        };

        info!("{} {}", request.method, request.url);
        debug!("Request headers: {:?}", request.headers);

        let request = &request;
        with_retry(&policy, |attempt| async move {
            debug!("Attempt {} for {}", attempt, request.url);
            self.execute_once(request, timeout).await
        })
        .await
    }

    /// `call`, then deserialize the body into `T`.
    pub async fn call_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        payload: &Payload,
        options: &RequestOptions,
    ) -> Result<T, AppError> {
        self.call(endpoint, payload, options)
            .await?
            .deserialize(endpoint)
    }

    pub async fn get(&self, endpoint: &str, payload: &Payload) -> Result<ApiResponse, AppError> {
        self.call(endpoint, payload, &RequestOptions::get()).await
    }

    pub async fn post(&self, endpoint: &str, payload: &Payload) -> Result<ApiResponse, AppError> {
        self.call(endpoint, payload, &RequestOptions::post()).await
    }

    pub async fn put(&self, endpoint: &str, payload: &Payload) -> Result<ApiResponse, AppError> {
        self.call(endpoint, payload, &RequestOptions::new(HttpMethod::Put))
            .await
    }

    pub async fn delete(&self, endpoint: &str, payload: &Payload) -> Result<ApiResponse, AppError> {
        self.call(endpoint, payload, &RequestOptions::new(HttpMethod::Delete))
            .await
    }

    pub async fn patch(&self, endpoint: &str, payload: &Payload) -> Result<ApiResponse, AppError> {
        self.call(endpoint, payload, &RequestOptions::new(HttpMethod::Patch))
            .await
    }

    /// One attempt under its own timer. Dropping the send future on expiry
    /// aborts the in-flight request.
    async fn execute_once(
        &self,
        request: &PreparedRequest,
        timeout: Duration,
    ) -> Result<ApiResponse, AppError> {
        let timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
        match tokio::time::timeout(timeout, self.send(request)).await {
            Ok(result) => result,
            Err(_) => {
                warn!("Request to {} aborted after {} ms", request.url, timeout_ms);
                Err(AppError::timeout(&request.url, timeout_ms))
            }
        }
    }

    async fn send(&self, request: &PreparedRequest) -> Result<ApiResponse, AppError> {
        let mut builder = self
            .http
            .request(request.method.to_reqwest(), &request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = &request.body {
            builder = builder.body(body.clone());
        }

        let response = builder
            .send()
            .await
            .map_err(|e| transport_error(e, &request.url))?;

        let status = response.status();
        debug!("Response status: {status}");

        if !status.is_success() {
            let status_text = status.canonical_reason().unwrap_or("Unknown error");
            let body = error_body(response.text().await, &request.url);
            error!(
                "HTTP {} - {} (URL: {})",
                status.as_u16(),
                status_text,
                request.url
            );
            return Err(AppError::http_status(
                status.as_u16(),
                status_text,
                body,
                &request.url,
            ));
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);

        let text = response
            .text()
            .await
            .map_err(|e| transport_error(e, &request.url))?;
        debug!("Response length: {} bytes", text.len());

        decode_body(content_type.as_deref(), text, &request.url)
    }
}

/// Body of a failed response. Best-effort: the status is what matters on this path.
fn error_body(read: Result<String, reqwest::Error>, url: &str) -> String {
    read.unwrap_or_else(|e| {
        debug!("Could not read error body from {}: {}", url, e);
        UNKNOWN_ERROR_BODY.to_string()
    })
}

/// Maps a reqwest failure that produced no HTTP status.
fn transport_error(e: reqwest::Error, url: &str) -> AppError {
    if e.is_builder() {
        AppError::invalid_request(format!("Could not build request for {url}: {e}"))
    } else if e.is_timeout() {
        AppError::timeout(url, HTTP_CONNECT_TIMEOUT_SECONDS * 1000)
    } else {
        error!("Request failed for URL {}: {}", url, e);
        AppError::network(url, e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::http_client::create_test_http_client;
    use serde_json::json;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{any, body_json, header, method, path, query_param},
    };

    fn fast_retry() -> RetryPolicy {
        RetryPolicy::new(3, Duration::from_millis(5))
    }

    fn client_for(server: &MockServer, school_code: &str) -> ApiClient {
        ApiClient::builder()
            .resolver(TenantResolver::new([(school_code, server.uri())], ""))
            .tenant(TenantContext::new(school_code))
            .retry_policy(fast_retry())
            .http_client(create_test_http_client())
            .build()
            .unwrap()
    }

    fn payload(value: serde_json::Value) -> Payload {
        match value {
            serde_json::Value::Object(map) => map,
            _ => panic!("payload must be an object"),
        }
    }

    #[tokio::test]
    async fn test_post_scenario_with_tracking_field_and_tenant_headers() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/Students/AddStudent"))
            .and(header("BS-SchoolCode", "DEMO"))
            .and(header("BS-AuthorizationToken", "auth"))
            .and(header("BS-UserToken", "string"))
            .and(header("accept", "text/plain"))
            .and(header("Content-Type", "application/json"))
            .and(body_json(json!({"trackingID": "string", "name": "A"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 7})))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server, "DEMO")
            .with_tenant(TenantContext::new("DEMO").with_auth_token("auth"));
        let response = client
            .call(
                "/api/Students/AddStudent",
                &payload(json!({"name": "A"})),
                &RequestOptions::post(),
            )
            .await
            .unwrap();

        assert_eq!(response, ApiResponse::Json(json!({"id": 7})));
    }

    #[tokio::test]
    async fn test_absolute_get_bypasses_tenant_resolution() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/x"))
            .respond_with(ResponseTemplate::new(200).set_body_string("pong"))
            .expect(1)
            .mount(&mock_server)
            .await;

        // No resolver entries and no default: only an absolute URL can work
        let client = ApiClient::builder()
            .http_client(create_test_http_client())
            .build()
            .unwrap();
        let url = format!("{}/x", mock_server.uri());
        let response = client
            .call(&url, &Payload::new(), &RequestOptions::get())
            .await
            .unwrap();

        assert_eq!(response.as_text(), Some("pong"));
        let received = mock_server.received_requests().await.unwrap();
        assert_eq!(received[0].url.query(), None);
        assert!(received[0].body.is_empty());
    }

    #[tokio::test]
    async fn test_get_payload_becomes_query_string() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/Masters/GetSections"))
            .and(query_param("classId", "4"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": 1}])))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server, "DEMO");
        let response = client
            .get("/api/Masters/GetSections", &payload(json!({"classId": 4})))
            .await
            .unwrap();
        assert_eq!(response.into_json(), json!([{"id": 1}]));
    }

    #[tokio::test]
    async fn test_configuration_error_makes_no_network_attempt() {
        let mock_server = MockServer::start().await;

        Mock::given(any())
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server, "OTHER").with_tenant(TenantContext::new("DEMO"));
        let err = client
            .post("/api/Masters/GetClasses", &Payload::new())
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Configuration { .. }));
        assert_eq!(err.status_code(), Some(500));
    }

    #[tokio::test]
    async fn test_not_found_is_attempted_once() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(404).set_body_string("no such student"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let err = client_for(&mock_server, "DEMO")
            .post("/api/Students/GetStudentById", &Payload::new())
            .await
            .unwrap_err();

        assert!(err.is_client_error());
        assert_eq!(err.status_code(), Some(404));
        assert_eq!(err.response_body(), Some("no such student"));
    }

    #[tokio::test]
    async fn test_service_unavailable_exhausts_retry_budget() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503).set_body_string("down"))
            .expect(3)
            .mount(&mock_server)
            .await;

        let err = client_for(&mock_server, "DEMO")
            .post("/api/Fees/GetFeeHeads", &Payload::new())
            .await
            .unwrap_err();

        assert!(err.is_server_error());
        assert_eq!(err.status_code(), Some(503));
        assert_eq!(err.response_body(), Some("down"));
    }

    #[tokio::test]
    async fn test_retry_disabled_per_call() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount(&mock_server)
            .await;

        let err = client_for(&mock_server, "DEMO")
            .call(
                "/api/Fees/GetFeeHeads",
                &Payload::new(),
                &RequestOptions::post().without_retry(),
            )
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), Some(500));
    }

    #[tokio::test]
    async fn test_recovers_after_server_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(502))
            .up_to_n_times(1)
            .expect(1)
            .mount(&mock_server)
            .await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
            .expect(1)
            .mount(&mock_server)
            .await;

        let response = client_for(&mock_server, "DEMO")
            .post("/api/Dues/GetStudentDues", &Payload::new())
            .await
            .unwrap();
        assert_eq!(response.into_json(), json!({"ok": true}));
    }

    #[tokio::test]
    async fn test_timeout_aborts_with_408() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({}))
                    .set_delay(Duration::from_millis(500)),
            )
            .mount(&mock_server)
            .await;

        let err = client_for(&mock_server, "DEMO")
            .call(
                "/api/Masters/GetClasses",
                &Payload::new(),
                &RequestOptions::post()
                    .with_timeout(Duration::from_millis(50))
                    .without_retry(),
            )
            .await
            .unwrap_err();

        assert!(err.is_timeout());
        assert_eq!(err.status_code(), Some(408));
        assert!(!err.is_client_error());
    }

    #[tokio::test]
    async fn test_timeout_is_retried_with_fresh_timer() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_millis(500)))
            .expect(2)
            .mount(&mock_server)
            .await;

        let client = ApiClient::builder()
            .resolver(TenantResolver::new([("DEMO", mock_server.uri())], ""))
            .tenant(TenantContext::new("DEMO"))
            .timeout(Duration::from_millis(50))
            .retry_policy(RetryPolicy::new(2, Duration::from_millis(5)))
            .build()
            .unwrap();

        let err = client
            .post("/api/Masters/GetClasses", &Payload::new())
            .await
            .unwrap_err();
        assert!(err.is_timeout());
    }

    #[tokio::test]
    async fn test_network_error_has_no_status() {
        // Bind then drop a listener so the port is very likely closed
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let client = ApiClient::builder()
            .retry_policy(RetryPolicy::new(2, Duration::from_millis(1)))
            .build()
            .unwrap();

        let err = client
            .get(&format!("http://127.0.0.1:{port}/x"), &Payload::new())
            .await
            .unwrap_err();

        assert!(err.is_network_error());
        assert_eq!(err.status_code(), None);
    }

    #[tokio::test]
    async fn test_caller_header_override_wins() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(header("accept", "application/json"))
            .and(header("BS-SchoolCode", "DEMO"))
            .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let response = client_for(&mock_server, "DEMO")
            .call(
                "/api/Masters/GetClasses",
                &Payload::new(),
                &RequestOptions::post().with_header("Accept", "application/json"),
            )
            .await
            .unwrap();
        assert_eq!(response.as_text(), Some("ok"));
    }

    #[tokio::test]
    async fn test_session_store_is_read_per_call() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(header("BS-AuthorizationToken", "first"))
            .respond_with(ResponseTemplate::new(200).set_body_string("one"))
            .expect(1)
            .mount(&mock_server)
            .await;
        Mock::given(method("POST"))
            .and(header("BS-AuthorizationToken", "second"))
            .respond_with(ResponseTemplate::new(200).set_body_string("two"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let session = SessionStore::new();
        let client = client_for(&mock_server, "DEMO").with_session(session.clone());

        session.login(TenantContext::new("DEMO").with_auth_token("first"));
        let first = client.post("/api/Masters/GetClasses", &Payload::new()).await.unwrap();
        session.login(TenantContext::new("DEMO").with_auth_token("second"));
        let second = client.post("/api/Masters/GetClasses", &Payload::new()).await.unwrap();

        assert_eq!(first.as_text(), Some("one"));
        assert_eq!(second.as_text(), Some("two"));

        // After logout there is no school code and no default base URL
        session.logout();
        let err = client
            .post("/api/Masters/GetClasses", &Payload::new())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Configuration { .. }));
    }

    #[tokio::test]
    async fn test_call_json_decodes_typed_body() {
        #[derive(serde::Deserialize)]
        struct ClassRow {
            id: u32,
            name: String,
        }

        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!([{"id": 1, "name": "Nursery"}])),
            )
            .mount(&mock_server)
            .await;

        let rows: Vec<ClassRow> = client_for(&mock_server, "DEMO")
            .call_json("/api/Masters/GetClasses", &Payload::new(), &RequestOptions::post())
            .await
            .unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, 1);
        assert_eq!(rows[0].name, "Nursery");
    }

    #[tokio::test]
    async fn test_put_delete_patch_send_their_method_with_tracking_field() {
        let mock_server = MockServer::start().await;

        for verb in ["PUT", "DELETE", "PATCH"] {
            Mock::given(method(verb))
                .and(path("/api/Students/UpdateStudent"))
                .and(body_json(json!({"trackingID": "string", "studentId": 3})))
                .respond_with(ResponseTemplate::new(200).set_body_string(verb))
                .expect(1)
                .mount(&mock_server)
                .await;
        }

        let client = client_for(&mock_server, "DEMO");
        let body = payload(json!({"studentId": 3}));

        let put = client.put("/api/Students/UpdateStudent", &body).await.unwrap();
        let delete = client
            .delete("/api/Students/UpdateStudent", &body)
            .await
            .unwrap();
        let patch = client.patch("/api/Students/UpdateStudent", &body).await.unwrap();

        assert_eq!(put.as_text(), Some("PUT"));
        assert_eq!(delete.as_text(), Some("DELETE"));
        assert_eq!(patch.as_text(), Some("PATCH"));
    }

    #[tokio::test]
    async fn test_zero_call_timeout_uses_client_default() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string("late but fine")
                    .set_delay(Duration::from_millis(100)),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server, "DEMO");
        let response = client
            .call(
                "/api/Masters/GetClasses",
                &Payload::new(),
                &RequestOptions::post().with_timeout(Duration::ZERO),
            )
            .await
            .unwrap();
        assert_eq!(response.as_text(), Some("late but fine"));
    }

    #[test]
    fn test_zero_builder_timeout_keeps_default() {
        let client = ApiClient::builder()
            .timeout(Duration::ZERO)
            .http_client(create_test_http_client())
            .build()
            .unwrap();
        assert_eq!(
            client.default_timeout(),
            Duration::from_millis(DEFAULT_HTTP_TIMEOUT_MS)
        );
    }

    #[tokio::test]
    async fn test_server_error_with_empty_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        let err = client_for(&mock_server, "DEMO")
            .call(
                "/api/Fees/CollectFee",
                &Payload::new(),
                &RequestOptions::post().without_retry(),
            )
            .await
            .unwrap_err();

        match &err {
            AppError::HttpStatus {
                status,
                status_text,
                body,
                url,
            } => {
                assert_eq!(*status, 500);
                assert_eq!(status_text, "Internal Server Error");
                assert_eq!(body, "");
                assert!(url.ends_with("/api/Fees/CollectFee"));
            }
            other => panic!("Expected HttpStatus, got {other:?}"),
        }
        assert!(err.is_server_error());
    }

    #[test]
    fn test_unreadable_error_body_falls_back() {
        let read_failure = reqwest::Client::new()
            .get("not a valid url")
            .build()
            .unwrap_err();
        assert_eq!(error_body(Err(read_failure), "url"), UNKNOWN_ERROR_BODY);
        assert_eq!(error_body(Ok("boom".to_string()), "url"), "boom");
    }

    #[test]
    fn test_new_from_config() {
        let config = crate::testing_utils::test_config("https://api.example.com");
        let client = ApiClient::new(&config).unwrap();
        assert_eq!(client.default_timeout(), config.timeout());
        assert_eq!(client.retry_policy(), config.retry_policy());
        assert_eq!(
            client
                .resolve_target("/api/Masters/GetClasses", HttpMethod::Post, &Payload::new())
                .unwrap()
                .final_url,
            "https://api.example.com/api/Masters/GetClasses"
        );
    }
}
