//! Multi-tenant client for the School ERP REST backend.
//!
//! Every call resolves the school's base URL, attaches the tenant headers and
//! the tracking field, runs under a per-attempt timeout and is retried for
//! transient failures. Feature modules under [`services`] wrap the registry
//! endpoints in typed functions.
//!
//! # Examples
//!
//! ```rust,no_run
//! use school_erp_client::api::{ApiClient, TenantContext};
//! use school_erp_client::config::Config;
//! use school_erp_client::error::AppError;
//! use school_erp_client::models::StudentAdmission;
//! use school_erp_client::services::{masters, students};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let config = Config::load().await?;
//!     let client = ApiClient::new(&config)?
//!         .with_tenant(TenantContext::new("DEMO").with_auth_token("token"));
//!
//!     let masters = masters::load_admission_masters(&client).await?;
//!     println!("{}", masters.classes);
//!
//!     let admission = StudentAdmission {
//!         name: "A".to_string(),
//!         class_id: 1,
//!         session_id: 1,
//!         ..StudentAdmission::default()
//!     };
//!     let response = students::add_student(&client, &admission).await?;
//!     println!("{response}");
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod services;
pub mod testing_utils;

// Re-export commonly used types for convenience
pub use api::{ApiClient, ApiResponse, RequestOptions, SessionStore, TenantContext, TenantResolver};
pub use config::Config;
pub use error::AppError;

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
