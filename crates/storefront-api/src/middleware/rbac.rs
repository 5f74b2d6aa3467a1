//! Role guards for route handlers.
//!
//! Each admin route declares the role names that may reach it; a caller
//! holding `super_admin` passes every guard. Denials are uniform so a probe
//! cannot map out which roles a route wants.

use storefront_core::error::AppError;
use storefront_entity::role::ADMIN_BASE_ROLES;

use crate::extractors::AuthUser;

/// Roles that may list storefront users.
pub const USER_LISTING_ROLES: &[&str] = &["super_admin", "admin_manager", "support_agent"];

/// Roles that may read the audit trail.
pub const AUDIT_ROLES: &[&str] = &["super_admin", "admin_manager"];

/// Roles that may change role assignments.
pub const ROLE_MANAGEMENT_ROLES: &[&str] = &["super_admin"];

/// Checks that the caller holds at least one of the required roles.
pub fn require_any_role(auth: &AuthUser, required: &[&str]) -> Result<(), AppError> {
    if auth.has_any_role(required) {
        Ok(())
    } else {
        Err(AppError::forbidden("Insufficient privileges"))
    }
}

/// Checks that the caller holds any admin-tier role at all.
pub fn require_admin(auth: &AuthUser) -> Result<(), AppError> {
    require_any_role(auth, ADMIN_BASE_ROLES)
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_entity::role::EffectiveRoleSet;
    use storefront_service::context::RequestContext;
    use uuid::Uuid;

    fn auth_with(roles: &[&str]) -> AuthUser {
        AuthUser(RequestContext::new(
            Uuid::new_v4(),
            "user@shop.com".to_string(),
            roles.iter().copied().collect::<EffectiveRoleSet>(),
        ))
    }

    #[test]
    fn super_admin_passes_every_guard() {
        let auth = auth_with(&["super_admin"]);
        assert!(require_any_role(&auth, USER_LISTING_ROLES).is_ok());
        assert!(require_any_role(&auth, AUDIT_ROLES).is_ok());
        assert!(require_any_role(&auth, ROLE_MANAGEMENT_ROLES).is_ok());
        assert!(require_admin(&auth).is_ok());
    }

    #[test]
    fn support_agent_sees_users_but_not_audit() {
        let auth = auth_with(&["support_agent"]);
        assert!(require_any_role(&auth, USER_LISTING_ROLES).is_ok());
        assert!(require_any_role(&auth, AUDIT_ROLES).is_err());
        assert!(require_any_role(&auth, ROLE_MANAGEMENT_ROLES).is_err());
    }

    #[test]
    fn empty_role_set_is_denied_everywhere() {
        let auth = auth_with(&[]);
        assert!(require_admin(&auth).is_err());
        assert!(require_any_role(&auth, USER_LISTING_ROLES).is_err());
    }

    #[test]
    fn legacy_admin_passes_the_admin_gate() {
        let auth = auth_with(&["admin"]);
        assert!(require_admin(&auth).is_ok());
        assert!(require_any_role(&auth, ROLE_MANAGEMENT_ROLES).is_err());
    }
}
