//! # storefront-database
//!
//! PostgreSQL database connection management and concrete repository
//! implementations for the storefront admin entities.

pub mod connection;
pub mod migration;
pub mod repositories;

pub use connection::DatabasePool;
pub use repositories::{AuditLogRepository, ProfileRepository, RoleRepository};
