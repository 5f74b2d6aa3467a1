//! Role and role-assignment row models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A named administrative capability bucket from the fixed catalog.
///
/// Rows are seeded once at bootstrap and effectively immutable afterward;
/// there is no deletion path.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Role {
    /// Unique role identifier.
    pub id: Uuid,
    /// Unique role name (one of the catalog names).
    pub name: String,
    /// Human-readable description.
    pub description: String,
    /// When the role was seeded.
    pub created_at: DateTime<Utc>,
}

/// A many-to-many grant of a role to an identity.
///
/// The `(user_id, role_id)` pair is unique; re-assigning is a no-op.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct RoleAssignment {
    /// The identity holding the role.
    pub user_id: Uuid,
    /// The granted role.
    pub role_id: Uuid,
}
