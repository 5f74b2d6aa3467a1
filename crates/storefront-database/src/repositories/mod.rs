//! Repository implementations for the storefront admin entities.

pub mod audit;
pub mod profile;
pub mod role;

pub use audit::AuditLogRepository;
pub use profile::ProfileRepository;
pub use role::RoleRepository;
