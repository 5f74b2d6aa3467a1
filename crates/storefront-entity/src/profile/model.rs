//! Profile entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// The local record mirroring an upstream identity.
///
/// Exactly one row per identity, created lazily on the first authenticated
/// request. The `role` column is the legacy single-role value kept for
/// backward compatibility with pre-RBAC deployments; the role-assignment
/// table is the primary source of explicit grants.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Profile {
    /// Identity id, shared with the upstream identity provider.
    pub id: Uuid,
    /// Email address, kept in sync with the identity's current email.
    pub email: String,
    /// Legacy single-role column (`user`, `admin`, or a named role).
    pub role: String,
    /// When the profile was created.
    pub created_at: DateTime<Utc>,
}

impl Profile {
    /// Whether the legacy role column carries any administrative value.
    pub fn has_legacy_grant(&self) -> bool {
        !self.role.is_empty() && self.role != "user"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_legacy_grant() {
        let mut profile = Profile {
            id: Uuid::new_v4(),
            email: "a@x.com".to_string(),
            role: "user".to_string(),
            created_at: Utc::now(),
        };
        assert!(!profile.has_legacy_grant());

        profile.role = "admin".to_string();
        assert!(profile.has_legacy_grant());

        profile.role = String::new();
        assert!(!profile.has_legacy_grant());
    }
}
