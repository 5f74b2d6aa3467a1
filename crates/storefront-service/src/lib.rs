//! # storefront-service
//!
//! Business logic service layer for the storefront admin surface. Each
//! service orchestrates repositories and auth components to implement
//! application-level use cases.
//!
//! Services follow constructor injection — all dependencies are provided
//! at construction time.

pub mod audit;
pub mod context;
pub mod roles;

pub use audit::AuditRecorder;
pub use context::RequestContext;
pub use roles::{RoleAdminService, RoleUpdateOutcome, UserWithRoles};
