//! Role administration — catalog listing, user/role overview, assignment replacement.

use std::collections::HashMap;
use std::str::FromStr;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use storefront_auth::RoleCatalog;
use storefront_core::error::AppError;
use storefront_core::result::AppResult;
use storefront_database::{ProfileRepository, RoleRepository};
use storefront_entity::role::{AdminRole, Role};

use crate::audit::AuditRecorder;
use crate::context::RequestContext;

/// A storefront user together with every role source visible to admins.
#[derive(Debug, Clone, Serialize)]
pub struct UserWithRoles {
    /// Identity id.
    pub id: Uuid,
    /// Mirrored email.
    pub email: String,
    /// Legacy single-role column value.
    pub role: String,
    /// Explicitly assigned role names.
    pub roles: Vec<String>,
    /// When the profile was created.
    pub created_at: DateTime<Utc>,
}

/// Result of a role assignment replacement.
#[derive(Debug, Clone, Serialize)]
pub struct RoleUpdateOutcome {
    /// The role names now assigned.
    pub roles: Vec<String>,
    /// Whether the write landed in the legacy role column instead of the
    /// assignment table.
    pub fallback: bool,
}

/// Handles administrative role management operations.
#[derive(Clone)]
pub struct RoleAdminService {
    catalog: Arc<RoleCatalog>,
    roles: RoleRepository,
    profiles: ProfileRepository,
    audit: AuditRecorder,
}

impl RoleAdminService {
    /// Creates a new role administration service.
    pub fn new(
        catalog: Arc<RoleCatalog>,
        roles: RoleRepository,
        profiles: ProfileRepository,
        audit: AuditRecorder,
    ) -> Self {
        Self {
            catalog,
            roles,
            profiles,
            audit,
        }
    }

    /// Lists the assignable role catalog.
    pub async fn list_catalog(&self) -> AppResult<Vec<Role>> {
        self.catalog.ensure_seeded().await;
        self.roles.find_all().await
    }

    /// Lists users together with their legacy role and explicit assignments.
    ///
    /// A failure loading the assignment table degrades the listing to legacy
    /// roles only rather than failing the request.
    pub async fn list_users_with_roles(&self, limit: i64) -> AppResult<Vec<UserWithRoles>> {
        let profiles = self.profiles.find_all(limit).await?;

        let mut assignments: HashMap<Uuid, Vec<String>> =
            match self.roles.assignment_names_for_all().await {
                Ok(map) => map,
                Err(e) => {
                    warn!(error = %e, "Assignment listing failed, showing legacy roles only");
                    HashMap::new()
                }
            };

        Ok(profiles
            .into_iter()
            .map(|p| {
                let mut roles = assignments.remove(&p.id).unwrap_or_default();
                roles.sort();
                UserWithRoles {
                    id: p.id,
                    email: p.email,
                    role: p.role,
                    roles,
                    created_at: p.created_at,
                }
            })
            .collect())
    }

    /// Replaces a user's role assignments with the given set.
    ///
    /// Rejects unknown role names and an actor removing their own
    /// `super_admin` role. When the assignment table is unavailable the
    /// grant falls back to the legacy role column so the mutation still
    /// takes effect, and the audit entry marks the degraded write.
    pub async fn replace_roles(
        &self,
        ctx: &RequestContext,
        target_user_id: Uuid,
        requested: &[String],
    ) -> AppResult<RoleUpdateOutcome> {
        let names = validate_role_names(requested)?;
        check_self_demotion(ctx, target_user_id, &names)?;

        self.catalog.ensure_seeded().await;

        let target = self
            .profiles
            .find_by_id(target_user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))?;

        let fallback = match self.replace_assignments(target_user_id, &names).await {
            Ok(()) => false,
            Err(e) if e.is_degradable() => {
                warn!(user_id = %target_user_id, error = %e, "Assignment write failed, using legacy role fallback");
                let legacy = legacy_fallback_role(&names);
                self.profiles
                    .update_legacy_role(target_user_id, legacy)
                    .await?;
                true
            }
            Err(e) => return Err(e),
        };

        info!(
            actor_id = %ctx.user_id,
            user_id = %target_user_id,
            roles = ?names,
            fallback,
            "Replaced role assignments"
        );

        self.audit
            .record(
                Some(ctx.user_id),
                "roles_updated",
                "user",
                Some(target_user_id),
                Some(serde_json::json!({
                    "email": target.email,
                    "roles": names,
                    "fallback": fallback,
                })),
            )
            .await;

        Ok(RoleUpdateOutcome {
            roles: names,
            fallback,
        })
    }

    async fn replace_assignments(&self, user_id: Uuid, names: &[String]) -> AppResult<()> {
        let rows = self.roles.find_by_names(names).await?;
        if rows.len() != names.len() {
            let found: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
            let missing: Vec<&String> =
                names.iter().filter(|n| !found.contains(&n.as_str())).collect();
            return Err(AppError::validation(format!(
                "Unknown roles: {missing:?}"
            )));
        }

        let ids: Vec<Uuid> = rows.iter().map(|r| r.id).collect();
        self.roles.replace_assignments(user_id, &ids).await
    }
}

/// Validate, deduplicate, and sort the requested role names.
fn validate_role_names(requested: &[String]) -> AppResult<Vec<String>> {
    let mut names: Vec<String> = Vec::new();
    for name in requested {
        let role = AdminRole::from_str(name)?;
        let canonical = role.as_str().to_string();
        if !names.contains(&canonical) {
            names.push(canonical);
        }
    }
    names.sort();
    Ok(names)
}

/// Reject an actor stripping `super_admin` from themselves.
fn check_self_demotion(
    ctx: &RequestContext,
    target_user_id: Uuid,
    new_names: &[String],
) -> AppResult<()> {
    if ctx.user_id == target_user_id
        && ctx.is_super_admin()
        && !new_names.iter().any(|n| n == "super_admin")
    {
        return Err(AppError::validation(
            "Cannot remove your own super_admin role",
        ));
    }
    Ok(())
}

/// The legacy single-role value that best approximates a role set.
fn legacy_fallback_role(names: &[String]) -> &'static str {
    if names.iter().any(|n| n == "super_admin") {
        "super_admin"
    } else if names.is_empty() {
        "user"
    } else {
        "admin"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_entity::role::EffectiveRoleSet;

    fn ctx(user_id: Uuid, roles: &[&str]) -> RequestContext {
        RequestContext::new(
            user_id,
            "actor@shop.com".to_string(),
            roles.iter().copied().collect::<EffectiveRoleSet>(),
        )
    }

    #[test]
    fn validates_and_canonicalizes_names() {
        let names = validate_role_names(&[
            "order_manager".to_string(),
            "super_admin".to_string(),
            "order_manager".to_string(),
        ])
        .unwrap();
        assert_eq!(names, vec!["order_manager", "super_admin"]);
    }

    #[test]
    fn rejects_unknown_names() {
        assert!(validate_role_names(&["warehouse_wizard".to_string()]).is_err());
        assert!(validate_role_names(&["admin".to_string()]).is_err());
    }

    #[test]
    fn blocks_self_super_admin_removal() {
        let id = Uuid::new_v4();
        let context = ctx(id, &["super_admin"]);
        let err = check_self_demotion(&context, id, &["order_manager".to_string()]);
        assert!(err.is_err());
    }

    #[test]
    fn allows_self_update_keeping_super_admin() {
        let id = Uuid::new_v4();
        let context = ctx(id, &["super_admin"]);
        let names = vec!["order_manager".to_string(), "super_admin".to_string()];
        assert!(check_self_demotion(&context, id, &names).is_ok());
    }

    #[test]
    fn allows_demoting_other_users() {
        let context = ctx(Uuid::new_v4(), &["super_admin"]);
        assert!(check_self_demotion(&context, Uuid::new_v4(), &[]).is_ok());
    }

    #[test]
    fn fallback_role_reflects_the_strongest_grant() {
        assert_eq!(
            legacy_fallback_role(&["super_admin".to_string()]),
            "super_admin"
        );
        assert_eq!(legacy_fallback_role(&["order_manager".to_string()]), "admin");
        assert_eq!(legacy_fallback_role(&[]), "user");
    }
}
