//! Request DTOs.

use serde::Deserialize;

/// Body of a role assignment replacement.
#[derive(Debug, Clone, Deserialize)]
pub struct ReplaceRolesRequest {
    /// The complete set of role names the user should hold.
    pub roles: Vec<String>,
}

/// Query parameters for audit log listing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuditLogQuery {
    /// Maximum number of entries to return.
    pub limit: Option<i64>,
}

/// Query parameters for user listing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserListQuery {
    /// Maximum number of users to return.
    pub limit: Option<i64>,
}
