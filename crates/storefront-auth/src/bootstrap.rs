//! Configuration-driven bootstrap administrator list.
//!
//! Bootstrap admins exist so the very first operator can reach the admin
//! surface before any role assignment rows exist. Membership is matched by
//! email and grants the legacy `admin` role during resolution, never
//! `super_admin`.

use storefront_core::config::AuthConfig;
use tracing::warn;

/// Fallback address used when configuration yields no bootstrap admins at
/// all, so a misconfigured deployment still has a documented way in.
const FALLBACK_ADMIN_EMAIL: &str = "admin@storefront.local";

/// The set of emails granted bootstrap admin access.
#[derive(Debug, Clone)]
pub struct BootstrapAdmins {
    emails: Vec<String>,
}

impl BootstrapAdmins {
    /// Build the list from the auth configuration section.
    ///
    /// Emails are trimmed, lowercased, and deduplicated. The super admin
    /// email and the comma-separated admin email list both contribute.
    pub fn from_config(config: &AuthConfig) -> Self {
        let mut emails: Vec<String> = Vec::new();

        let candidates = std::iter::once(config.super_admin_email.as_str())
            .chain(config.admin_emails.split(','));

        for candidate in candidates {
            let normalized = candidate.trim().to_lowercase();
            if !normalized.is_empty() && !emails.contains(&normalized) {
                emails.push(normalized);
            }
        }

        if emails.is_empty() {
            warn!(
                fallback = FALLBACK_ADMIN_EMAIL,
                "No bootstrap admin emails configured, using fallback"
            );
            emails.push(FALLBACK_ADMIN_EMAIL.to_string());
        }

        Self { emails }
    }

    /// Whether the given email belongs to a bootstrap admin.
    ///
    /// Matching is case-insensitive on the caller's side too.
    pub fn contains(&self, email: &str) -> bool {
        let normalized = email.trim().to_lowercase();
        self.emails.iter().any(|e| e == &normalized)
    }

    /// The normalized email list.
    pub fn emails(&self) -> &[String] {
        &self.emails
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(super_admin: &str, admins: &str) -> AuthConfig {
        AuthConfig {
            super_admin_email: super_admin.to_string(),
            admin_emails: admins.to_string(),
            ..AuthConfig::default()
        }
    }

    #[test]
    fn normalizes_and_deduplicates() {
        let admins =
            BootstrapAdmins::from_config(&config("Root@Shop.com", " root@shop.com , ops@shop.com"));
        assert_eq!(admins.emails(), &["root@shop.com", "ops@shop.com"]);
    }

    #[test]
    fn empty_config_falls_back() {
        let admins = BootstrapAdmins::from_config(&config("", "  , "));
        assert_eq!(admins.emails(), &[FALLBACK_ADMIN_EMAIL]);
    }

    #[test]
    fn membership_is_case_insensitive() {
        let admins = BootstrapAdmins::from_config(&config("root@shop.com", ""));
        assert!(admins.contains("ROOT@shop.com"));
        assert!(admins.contains("  root@shop.com "));
        assert!(!admins.contains("other@shop.com"));
    }
}
