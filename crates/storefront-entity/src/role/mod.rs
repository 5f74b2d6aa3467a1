//! Role catalog, role assignment rows, and the derived effective role set.

pub mod catalog;
pub mod effective;
pub mod model;

pub use catalog::{ADMIN_BASE_ROLES, AdminRole};
pub use effective::EffectiveRoleSet;
pub use model::{Role, RoleAssignment};
