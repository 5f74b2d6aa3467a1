//! Request context carrying the authenticated identity and resolved roles.

use serde::Serialize;
use uuid::Uuid;

use storefront_entity::role::EffectiveRoleSet;

/// Context for the current authenticated request.
///
/// Extracted by middleware and passed into service methods so that every
/// operation knows *who* is acting and with *which* roles.
#[derive(Debug, Clone, Serialize)]
pub struct RequestContext {
    /// The authenticated identity's ID.
    pub user_id: Uuid,
    /// The identity's email.
    pub email: String,
    /// The identity's effective role set at resolution time.
    pub roles: EffectiveRoleSet,
}

impl RequestContext {
    /// Creates a new request context.
    pub fn new(user_id: Uuid, email: String, roles: EffectiveRoleSet) -> Self {
        Self {
            user_id,
            email,
            roles,
        }
    }

    /// Whether the caller holds any of the required roles.
    pub fn has_any_role(&self, required: &[&str]) -> bool {
        self.roles.allows(required)
    }

    /// Whether the caller holds the super admin role.
    pub fn is_super_admin(&self) -> bool {
        self.roles.contains("super_admin")
    }
}
