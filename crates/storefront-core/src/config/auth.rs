//! Upstream identity service and bootstrap admin configuration.

use serde::{Deserialize, Serialize};

/// Authentication and bootstrap admin configuration.
///
/// Token issuance and verification are owned by the upstream identity
/// service; this section only points at it and names the bootstrap admin
/// emails that retain administrative standing independent of the role
/// tables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Base URL of the upstream identity service.
    #[serde(default = "default_service_url")]
    pub service_url: String,
    /// Path of the user-info endpoint (relative to `service_url`).
    #[serde(default = "default_user_endpoint")]
    pub user_endpoint: String,
    /// Request timeout for identity verification calls, in seconds.
    #[serde(default = "default_request_timeout")]
    pub request_timeout_seconds: u64,
    /// Primary bootstrap admin email.
    #[serde(default)]
    pub super_admin_email: String,
    /// Additional bootstrap admin emails, comma-separated.
    #[serde(default)]
    pub admin_emails: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            service_url: default_service_url(),
            user_endpoint: default_user_endpoint(),
            request_timeout_seconds: default_request_timeout(),
            super_admin_email: String::new(),
            admin_emails: String::new(),
        }
    }
}

fn default_service_url() -> String {
    "http://localhost:9999".to_string()
}

fn default_user_endpoint() -> String {
    "/auth/v1/user".to_string()
}

fn default_request_timeout() -> u64 {
    10
}
