pub mod endpoints;
pub mod http_client;
pub mod request;
pub mod response;
pub mod retry;
pub mod tenant;
mod core;

// Re-export the client surface
pub use core::{ApiClient, ApiClientBuilder};
pub use request::{HttpMethod, Payload, PreparedRequest, RequestOptions, ResolvedTarget};
pub use response::ApiResponse;
pub use retry::{RetryPolicy, with_retry};
pub use tenant::{SessionStore, TenantContext, TenantResolver, TenantSource};
