//! Tenant context and school-code → base-URL resolution

use crate::constants::wire::DEFAULT_USER_TOKEN;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};
use tracing::debug;

/// Session values attached to every request for one school.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TenantContext {
    pub school_code: Option<String>,
    pub auth_token: Option<String>,
    pub user_token: Option<String>,
}

impl TenantContext {
    pub fn new(school_code: impl Into<String>) -> Self {
        Self {
            school_code: Some(school_code.into()),
            ..Default::default()
        }
    }

    pub fn with_auth_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }

    pub fn with_user_token(mut self, token: impl Into<String>) -> Self {
        self.user_token = Some(token.into());
        self
    }

    /// School code, or an empty string when none is set
    pub fn school_code(&self) -> &str {
        self.school_code.as_deref().unwrap_or("")
    }

    /// Auth token, or an empty string when none is set
    pub fn auth_token(&self) -> &str {
        self.auth_token.as_deref().unwrap_or("")
    }

    /// User token, falling back to the static default
    pub fn user_token(&self) -> &str {
        self.user_token.as_deref().unwrap_or(DEFAULT_USER_TOKEN)
    }
}

/// Read side of the tenant session as seen by the client core.
pub trait TenantSource: Send + Sync + std::fmt::Debug {
    fn snapshot(&self) -> TenantContext;
}

impl TenantSource for TenantContext {
    fn snapshot(&self) -> TenantContext {
        self.clone()
    }
}

/// Mutable session shared between the login/logout flow and any clients.
///
/// Clients only ever call `snapshot`; `login` and `logout` belong to the
/// authentication flow.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<TenantContext>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the session with the values obtained at login.
    pub fn login(&self, context: TenantContext) {
        debug!("Session login for school code '{}'", context.school_code());
        let mut guard = self.inner.write().unwrap_or_else(|e| e.into_inner());
        *guard = context;
    }

    /// Clears every session value.
    pub fn logout(&self) {
        debug!("Session logout");
        let mut guard = self.inner.write().unwrap_or_else(|e| e.into_inner());
        *guard = TenantContext::default();
    }
}

impl TenantSource for SessionStore {
    fn snapshot(&self) -> TenantContext {
        self.inner
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

/// Static school-code table with a default fallback.
///
/// Unknown or absent codes silently resolve to the default base URL. `None`
/// comes back only when the default is empty as well.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TenantResolver {
    table: BTreeMap<String, String>,
    default_base_url: String,
}

impl TenantResolver {
    pub fn new<I, K, V>(table: I, default_base_url: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let table = table
            .into_iter()
            .map(|(code, url)| (normalize_code(code.as_ref()), url.into()))
            .collect();
        Self {
            table,
            default_base_url: default_base_url.into(),
        }
    }

    /// Adds or replaces a single mapping.
    pub fn with_tenant(mut self, school_code: &str, base_url: impl Into<String>) -> Self {
        self.table.insert(normalize_code(school_code), base_url.into());
        self
    }

    /// Table lookup without the default fallback.
    pub fn lookup(&self, school_code: &str) -> Option<&str> {
        let code = normalize_code(school_code);
        if code.is_empty() {
            return None;
        }
        self.table
            .get(&code)
            .map(String::as_str)
            .filter(|url| !url.is_empty())
    }

    /// Base URL for the given school code, falling back to the default.
    pub fn resolve(&self, school_code: Option<&str>) -> Option<&str> {
        let code = school_code.unwrap_or("");
        if let Some(url) = self.lookup(code) {
            return Some(url);
        }
        if !code.trim().is_empty() {
            debug!("School code '{}' is not mapped, using default base URL", code);
        }
        Some(self.default_base_url.as_str()).filter(|url| !url.is_empty())
    }

    pub fn default_base_url(&self) -> &str {
        &self.default_base_url
    }

    /// Mapped tenants in code order
    pub fn tenants(&self) -> impl Iterator<Item = (&str, &str)> {
        self.table.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

fn normalize_code(code: &str) -> String {
    code.trim().to_ascii_uppercase()
}
