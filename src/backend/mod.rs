//! User-management backend for the admin console.
//!
//! The admin console manages business users in a hosted Postgres exposed
//! over a PostgREST-style REST API. All operations go through the
//! [`BackendStore`] trait so the panel can be driven by a test double.

pub mod error;
pub mod http;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub use error::BackendError;
pub use http::HttpBackend;

/// One row in the business users table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessUser {
    pub id: u64,
    pub email: String,
    pub full_name: String,
    #[serde(default)]
    pub company: String,
    #[serde(default = "default_role")]
    pub role: String,
    #[serde(default)]
    pub active: bool,
}

fn default_role() -> String {
    "member".to_string()
}

/// Listing parameters: substring search plus sort column and direction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowQuery {
    pub search: String,
    pub order_by: Option<String>,
    pub descending: bool,
}

/// Fields to create a new user with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignUpRequest {
    pub email: String,
    pub full_name: String,
    pub company: String,
    pub role: String,
}

/// Partial update; `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UserPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

/// Operations the admin console needs from the backend.
///
/// Writes are last-write-wins; there is no retry layer, a failed call is
/// reported once and the operator decides whether to try again.
#[async_trait]
pub trait BackendStore: Send + Sync {
    /// Whether credentials are present. A panel against an unconfigured
    /// store shows the not-configured message instead of loading.
    fn is_configured(&self) -> bool;

    async fn list_users(&self, query: &RowQuery) -> Result<Vec<BusinessUser>, BackendError>;

    async fn create_user(&self, req: &SignUpRequest) -> Result<BusinessUser, BackendError>;

    async fn update_user(&self, id: u64, patch: &UserPatch) -> Result<BusinessUser, BackendError>;

    async fn delete_user(&self, id: u64) -> Result<(), BackendError>;
}
