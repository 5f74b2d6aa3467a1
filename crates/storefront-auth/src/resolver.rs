//! Effective role set computation.
//!
//! Resolution unions every grant source: explicit assignment rows, the
//! profile's legacy single-role column, and the bootstrap admin list. The
//! resolver never fails; a storage error during resolution means the caller
//! ends up with fewer roles, not with a failed request.

use std::sync::Arc;

use tracing::{error, warn};

use storefront_core::result::AppResult;
use storefront_database::{ProfileRepository, RoleRepository};
use storefront_entity::profile::Profile;
use storefront_entity::role::EffectiveRoleSet;

use crate::bootstrap::BootstrapAdmins;
use crate::catalog::RoleCatalog;
use crate::identity::Identity;

/// Computes the effective role set for a verified identity.
#[derive(Clone)]
pub struct RoleResolver {
    catalog: Arc<RoleCatalog>,
    roles: RoleRepository,
    profiles: ProfileRepository,
    bootstrap: BootstrapAdmins,
}

impl RoleResolver {
    /// Create a resolver over the given catalog, repositories, and
    /// bootstrap list.
    pub fn new(
        catalog: Arc<RoleCatalog>,
        roles: RoleRepository,
        profiles: ProfileRepository,
        bootstrap: BootstrapAdmins,
    ) -> Self {
        Self {
            catalog,
            roles,
            profiles,
            bootstrap,
        }
    }

    /// Resolve the effective role set for an identity.
    ///
    /// `profile` is the identity's mirrored profile when the caller already
    /// has it; `None` means the legacy role source is skipped.
    pub async fn resolve(&self, identity: &Identity, profile: Option<&Profile>) -> EffectiveRoleSet {
        self.catalog.ensure_seeded().await;

        let mut roles = EffectiveRoleSet::new();

        let assigned = degrade(
            self.roles.assignment_names_for_user(identity.id).await,
            Vec::new(),
            "role assignments",
        );
        for name in assigned {
            roles.insert(name);
        }

        if let Some(profile) = profile {
            roles.apply_legacy_role(&profile.role);
        }

        if self.bootstrap.contains(&identity.email) {
            roles.apply_bootstrap_grant();
            self.record_bootstrap_grant(identity, profile).await;
        }

        roles
    }

    /// Persist the bootstrap grant into the legacy role column so the grant
    /// survives even if the bootstrap list later shrinks. Best effort.
    async fn record_bootstrap_grant(&self, identity: &Identity, profile: Option<&Profile>) {
        let already_recorded = profile.map(Profile::has_legacy_grant).unwrap_or(false);
        if already_recorded {
            return;
        }

        if let Err(e) = self.profiles.update_legacy_role(identity.id, "admin").await {
            warn!(user_id = %identity.id, error = %e, "Failed to record bootstrap grant");
        }
    }
}

/// Substitute a fallback for a failed resolution step.
///
/// Storage trouble is logged as a warning since degraded resolution is the
/// designed behavior there; anything else on this path is unexpected and
/// logged as an error, but still degraded.
fn degrade<T>(result: AppResult<T>, fallback: T, what: &str) -> T {
    match result {
        Ok(value) => value,
        Err(e) if e.is_degradable() => {
            warn!(error = %e, "Degrading {what} to fallback");
            fallback
        }
        Err(e) => {
            error!(error = %e, "Unexpected failure resolving {what}, degrading");
            fallback
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::error::AppError;

    #[test]
    fn degrade_passes_through_success() {
        let value = degrade(Ok(7), 0, "test");
        assert_eq!(value, 7);
    }

    #[test]
    fn degrade_substitutes_on_database_error() {
        let result: AppResult<i32> = Err(AppError::database("connection refused"));
        assert_eq!(degrade(result, 42, "test"), 42);
    }

    #[test]
    fn degrade_substitutes_on_unexpected_error() {
        let result: AppResult<i32> = Err(AppError::validation("bad input"));
        assert_eq!(degrade(result, 42, "test"), 42);
    }
}
