//! # storefront-auth
//!
//! Identity verification and role resolution for the storefront admin surface.
//!
//! ## Modules
//!
//! - `identity` — bearer token verification against the upstream identity service
//! - `bootstrap` — configuration-driven bootstrap administrator list
//! - `catalog` — role catalog seeding
//! - `profile_sync` — local profile mirror of upstream identities
//! - `resolver` — effective role set computation

pub mod bootstrap;
pub mod catalog;
pub mod identity;
pub mod profile_sync;
pub mod resolver;

pub use bootstrap::BootstrapAdmins;
pub use catalog::RoleCatalog;
pub use identity::{AuthApiClient, Identity, IdentityProvider};
pub use profile_sync::ProfileSynchronizer;
pub use resolver::RoleResolver;
