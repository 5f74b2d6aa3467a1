//! The fixed administrative role catalog.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The six named administrative roles.
///
/// This is the closed catalog seeded into the `roles` table. The derived
/// [`EffectiveRoleSet`](super::EffectiveRoleSet) remains an open string set
/// so that legacy single-column role values can still flow through
/// authorization decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdminRole {
    /// Full system access; short-circuits every authorization check.
    SuperAdmin,
    /// Manage admins and roles.
    AdminManager,
    /// Manage products and categories.
    ProductManager,
    /// Manage orders and fulfillment.
    OrderManager,
    /// View customers and orders.
    SupportAgent,
    /// Manage promotions and featured products.
    MarketingManager,
}

/// Every role name treated as administrative, including the legacy bare
/// `admin` tag carried by old profile rows.
pub const ADMIN_BASE_ROLES: &[&str] = &[
    "admin",
    "super_admin",
    "admin_manager",
    "product_manager",
    "order_manager",
    "support_agent",
    "marketing_manager",
];

impl AdminRole {
    /// All catalog entries, in seed order.
    pub const ALL: [AdminRole; 6] = [
        Self::SuperAdmin,
        Self::AdminManager,
        Self::ProductManager,
        Self::OrderManager,
        Self::SupportAgent,
        Self::MarketingManager,
    ];

    /// Return the role as its wire/storage name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SuperAdmin => "super_admin",
            Self::AdminManager => "admin_manager",
            Self::ProductManager => "product_manager",
            Self::OrderManager => "order_manager",
            Self::SupportAgent => "support_agent",
            Self::MarketingManager => "marketing_manager",
        }
    }

    /// Human-readable description, used when seeding the catalog.
    pub fn description(&self) -> &'static str {
        match self {
            Self::SuperAdmin => "Full system access",
            Self::AdminManager => "Manage admins and roles",
            Self::ProductManager => "Manage products and categories",
            Self::OrderManager => "Manage orders and fulfillment",
            Self::SupportAgent => "View customers and orders",
            Self::MarketingManager => "Manage promotions and featured products",
        }
    }
}

impl fmt::Display for AdminRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AdminRole {
    type Err = storefront_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "super_admin" => Ok(Self::SuperAdmin),
            "admin_manager" => Ok(Self::AdminManager),
            "product_manager" => Ok(Self::ProductManager),
            "order_manager" => Ok(Self::OrderManager),
            "support_agent" => Ok(Self::SupportAgent),
            "marketing_manager" => Ok(Self::MarketingManager),
            _ => Err(storefront_core::AppError::validation(format!(
                "Unknown role: '{s}'"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_six_entries() {
        assert_eq!(AdminRole::ALL.len(), 6);
        let names: Vec<&str> = AdminRole::ALL.iter().map(|r| r.as_str()).collect();
        assert!(names.contains(&"super_admin"));
        assert!(names.contains(&"marketing_manager"));
    }

    #[test]
    fn test_from_str_round_trip() {
        for role in AdminRole::ALL {
            assert_eq!(role.as_str().parse::<AdminRole>().unwrap(), role);
        }
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        assert!("admin".parse::<AdminRole>().is_err());
        assert!("user".parse::<AdminRole>().is_err());
        assert!("".parse::<AdminRole>().is_err());
    }

    #[test]
    fn test_admin_base_roles_cover_catalog_plus_legacy_tag() {
        assert_eq!(ADMIN_BASE_ROLES.len(), AdminRole::ALL.len() + 1);
        assert!(ADMIN_BASE_ROLES.contains(&"admin"));
        for role in AdminRole::ALL {
            assert!(ADMIN_BASE_ROLES.contains(&role.as_str()));
        }
    }
}
