//! Role catalog seeding.
//!
//! The catalog of assignable admin roles is fixed in code; this module makes
//! sure the database mirrors it. Seeding is lazy and idempotent: the first
//! resolution (or an explicit startup call) inserts whichever names are
//! missing, and later calls are no-ops.

use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{info, warn};

use storefront_core::result::AppResult;
use storefront_database::RoleRepository;
use storefront_entity::role::AdminRole;

/// Ensures the role catalog table contains every assignable admin role.
#[derive(Debug)]
pub struct RoleCatalog {
    roles: RoleRepository,
    seeded: AtomicBool,
}

impl RoleCatalog {
    /// Create a catalog backed by the given repository.
    pub fn new(roles: RoleRepository) -> Self {
        Self {
            roles,
            seeded: AtomicBool::new(false),
        }
    }

    /// Seed missing catalog entries, at most once per successful run.
    ///
    /// The seeded flag is only set after a fully successful pass, so a
    /// partial failure is retried on the next call. Errors are swallowed
    /// after a warning; an unseeded catalog degrades role resolution but
    /// must not take down the request path.
    pub async fn ensure_seeded(&self) {
        if self.seeded.load(Ordering::Acquire) {
            return;
        }

        if let Err(e) = self.seed().await {
            warn!(error = %e, "Role catalog seeding failed, will retry");
            return;
        }

        self.seeded.store(true, Ordering::Release);
    }

    async fn seed(&self) -> AppResult<()> {
        let existing = self.roles.find_names().await?;
        let missing = missing_entries(&existing);

        if missing.is_empty() {
            return Ok(());
        }

        info!(count = missing.len(), "Seeding role catalog");
        self.roles.insert_missing(&missing).await
    }
}

/// Catalog entries not yet present among the existing names.
fn missing_entries(existing: &[String]) -> Vec<(&'static str, &'static str)> {
    AdminRole::ALL
        .iter()
        .filter(|role| !existing.iter().any(|name| name == role.as_str()))
        .map(|role| (role.as_str(), role.description()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_catalog_needs_all_entries() {
        let missing = missing_entries(&[]);
        assert_eq!(missing.len(), AdminRole::ALL.len());
    }

    #[test]
    fn full_catalog_needs_nothing() {
        let existing: Vec<String> = AdminRole::ALL
            .iter()
            .map(|r| r.as_str().to_string())
            .collect();
        assert!(missing_entries(&existing).is_empty());
    }

    #[test]
    fn partial_catalog_needs_only_the_gap() {
        let existing = vec!["super_admin".to_string(), "order_manager".to_string()];
        let missing = missing_entries(&existing);
        assert_eq!(missing.len(), AdminRole::ALL.len() - 2);
        assert!(missing.iter().all(|(name, _)| *name != "super_admin"));
        assert!(missing.iter().all(|(name, _)| *name != "order_manager"));
    }

    #[test]
    fn unknown_rows_are_left_alone() {
        let mut existing: Vec<String> = AdminRole::ALL
            .iter()
            .map(|r| r.as_str().to_string())
            .collect();
        existing.push("legacy_custom_role".to_string());
        assert!(missing_entries(&existing).is_empty());
    }
}
