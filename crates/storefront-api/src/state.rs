//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use storefront_auth::identity::IdentityProvider;
use storefront_auth::profile_sync::ProfileSynchronizer;
use storefront_auth::resolver::RoleResolver;
use storefront_core::config::AppConfig;
use storefront_service::audit::AuditRecorder;
use storefront_service::roles::RoleAdminService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Upstream identity verifier
    pub identity: Arc<dyn IdentityProvider>,
    /// Profile mirror synchronizer
    pub synchronizer: Arc<ProfileSynchronizer>,
    /// Effective role resolver
    pub resolver: Arc<RoleResolver>,
    /// Role administration service
    pub role_admin: Arc<RoleAdminService>,
    /// Audit recorder
    pub audit: Arc<AuditRecorder>,
}
