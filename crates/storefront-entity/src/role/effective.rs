//! The per-request effective role set and the authorization decision rule.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::catalog::AdminRole;

/// The computed union of every role source for one identity.
///
/// Derived per request, never persisted. The set is open: besides the six
/// catalog names it can carry the legacy `admin` tag or any other string a
/// legacy profile row contributed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EffectiveRoleSet {
    roles: BTreeSet<String>,
}

impl EffectiveRoleSet {
    /// An empty role set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a role by name.
    pub fn insert(&mut self, name: impl Into<String>) {
        self.roles.insert(name.into());
    }

    /// Insert a catalog role.
    pub fn insert_role(&mut self, role: AdminRole) {
        self.roles.insert(role.as_str().to_string());
    }

    /// Fold the legacy single-column profile role into the set.
    ///
    /// Mapping: `super_admin` grants itself; `admin` grants the legacy tag
    /// plus `admin_manager`; `user` grants nothing; any other non-empty
    /// value passes through unchanged.
    pub fn apply_legacy_role(&mut self, legacy: &str) {
        match legacy {
            "" | "user" => {}
            "super_admin" => self.insert_role(AdminRole::SuperAdmin),
            "admin" => {
                self.insert("admin");
                self.insert_role(AdminRole::AdminManager);
            }
            other => self.insert(other),
        }
    }

    /// Fold the bootstrap-admin grant into the set.
    ///
    /// A bootstrap email carries the legacy-`admin` equivalent, not
    /// `super_admin`: every base admin surface opens, role management does
    /// not.
    pub fn apply_bootstrap_grant(&mut self) {
        self.apply_legacy_role("admin");
    }

    /// Whether the set contains the given role name.
    pub fn contains(&self, name: &str) -> bool {
        self.roles.contains(name)
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }

    /// The authorization decision rule.
    ///
    /// Allow iff `super_admin` is present, or the set intersects
    /// `required` non-emptily.
    pub fn allows(&self, required: &[&str]) -> bool {
        if self.roles.contains(AdminRole::SuperAdmin.as_str()) {
            return true;
        }
        required.iter().any(|r| self.roles.contains(*r))
    }

    /// Iterate role names in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.roles.iter().map(String::as_str)
    }

    /// Role names as a sorted vector (for responses and audit metadata).
    pub fn names(&self) -> Vec<String> {
        self.roles.iter().cloned().collect()
    }
}

impl<S: Into<String>> FromIterator<S> for EffectiveRoleSet {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self {
            roles: iter.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::role::catalog::ADMIN_BASE_ROLES;

    #[test]
    fn test_super_admin_short_circuits_any_requirement() {
        let set: EffectiveRoleSet = ["super_admin"].into_iter().collect();
        assert!(set.allows(&["order_manager"]));
        assert!(set.allows(&["product_manager", "marketing_manager"]));
        assert!(set.allows(&[]));
    }

    #[test]
    fn test_allows_requires_non_empty_intersection() {
        let set: EffectiveRoleSet = ["order_manager"].into_iter().collect();
        assert!(set.allows(&["order_manager"]));
        assert!(set.allows(&["product_manager", "order_manager"]));
        assert!(!set.allows(&["product_manager"]));
        assert!(!set.allows(&[]));
    }

    #[test]
    fn test_empty_set_denies_everything() {
        let set = EffectiveRoleSet::new();
        assert!(!set.allows(ADMIN_BASE_ROLES));
    }

    #[test]
    fn test_legacy_admin_maps_to_admin_and_admin_manager() {
        let mut set = EffectiveRoleSet::new();
        set.apply_legacy_role("admin");
        assert!(set.contains("admin"));
        assert!(set.contains("admin_manager"));
        assert!(!set.contains("super_admin"));
    }

    #[test]
    fn test_legacy_super_admin_maps_to_super_admin() {
        let mut set = EffectiveRoleSet::new();
        set.apply_legacy_role("super_admin");
        assert!(set.contains("super_admin"));
        assert!(set.allows(&["anything_at_all"]));
    }

    #[test]
    fn test_legacy_user_contributes_nothing() {
        let mut set = EffectiveRoleSet::new();
        set.apply_legacy_role("user");
        set.apply_legacy_role("");
        assert!(set.is_empty());
    }

    #[test]
    fn test_legacy_named_role_passes_through() {
        let mut set = EffectiveRoleSet::new();
        set.apply_legacy_role("order_manager");
        assert!(set.contains("order_manager"));
        assert_eq!(set.names(), vec!["order_manager".to_string()]);
    }

    #[test]
    fn test_bootstrap_grant_opens_base_admin_but_not_role_management() {
        let mut set = EffectiveRoleSet::new();
        set.apply_bootstrap_grant();
        assert!(set.allows(ADMIN_BASE_ROLES));
        assert!(set.allows(&["admin_manager"]));
        assert!(!set.allows(&["super_admin"]));
    }

    #[test]
    fn test_union_deduplicates() {
        let mut set: EffectiveRoleSet = ["admin_manager", "order_manager"].into_iter().collect();
        set.apply_legacy_role("admin");
        assert_eq!(
            set.names(),
            vec![
                "admin".to_string(),
                "admin_manager".to_string(),
                "order_manager".to_string()
            ]
        );
    }
}
