//! Response DTOs.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use storefront_entity::role::EffectiveRoleSet;

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Health check payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Crate version.
    pub version: String,
}

/// The authenticated caller's own identity and roles.
#[derive(Debug, Clone, Serialize)]
pub struct MeResponse {
    /// The caller's identity.
    pub user: UserSummary,
    /// Effective role names.
    pub roles: EffectiveRoleSet,
    /// Whether the caller may enter the admin surface at all.
    pub is_admin: bool,
}

/// Identity summary embedded in [`MeResponse`].
#[derive(Debug, Clone, Serialize)]
pub struct UserSummary {
    /// Identity id.
    pub id: Uuid,
    /// Email address.
    pub email: String,
}
