//! Role catalog listing and role assignment administration.

mod service;

pub use service::{RoleAdminService, RoleUpdateOutcome, UserWithRoles};
