//! HTTP client layer for the scalptrack service.
//!
//! [`gateway::ApiGateway`] owns the reqwest client, credential attachment
//! and the unified 401 handling; the endpoint groups ([`auth::AuthApi`],
//! [`logs::LogApi`], [`users::UserApi`], [`reports::ReportApi`]) are thin
//! typed wrappers over it, one per server path family.

pub mod auth;
pub mod gateway;
pub mod logs;
pub mod reports;
pub mod users;

pub use auth::AuthApi;
pub use gateway::ApiGateway;
pub use logs::LogApi;
pub use reports::ReportApi;
pub use users::UserApi;
