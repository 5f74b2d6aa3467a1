//! Storefront Admin Server
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use storefront_api::state::AppState;
use storefront_auth::bootstrap::BootstrapAdmins;
use storefront_auth::catalog::RoleCatalog;
use storefront_auth::identity::AuthApiClient;
use storefront_auth::profile_sync::ProfileSynchronizer;
use storefront_auth::resolver::RoleResolver;
use storefront_core::config::AppConfig;
use storefront_core::error::{AppError, ErrorKind};
use storefront_database::DatabasePool;
use storefront_database::repositories::{AuditLogRepository, ProfileRepository, RoleRepository};
use storefront_service::audit::AuditRecorder;
use storefront_service::roles::RoleAdminService;

#[tokio::main]
async fn main() {
    let env = std::env::var("STOREFRONT_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!(
        "Starting storefront admin server v{}",
        env!("CARGO_PKG_VERSION")
    );

    // Database connection + migrations
    let db = DatabasePool::connect(&config.database).await?;
    storefront_database::migration::run_migrations(db.pool()).await?;

    // Repositories
    let pool = db.into_pool();
    let profile_repo = ProfileRepository::new(pool.clone());
    let role_repo = RoleRepository::new(pool.clone());
    let audit_repo = AuditLogRepository::new(pool);

    // Auth components
    let identity = Arc::new(AuthApiClient::new(&config.auth)?);
    let bootstrap = BootstrapAdmins::from_config(&config.auth);
    let catalog = Arc::new(RoleCatalog::new(role_repo.clone()));
    let synchronizer = Arc::new(ProfileSynchronizer::new(profile_repo.clone()));
    let resolver = Arc::new(RoleResolver::new(
        Arc::clone(&catalog),
        role_repo.clone(),
        profile_repo.clone(),
        bootstrap,
    ));

    // Seed the role catalog up front; failures retry lazily on first use
    catalog.ensure_seeded().await;

    // Services
    let audit = Arc::new(AuditRecorder::new(audit_repo));
    let role_admin = Arc::new(RoleAdminService::new(
        Arc::clone(&catalog),
        role_repo,
        profile_repo,
        AuditRecorder::clone(&audit),
    ));

    let state = AppState {
        config: Arc::new(config.clone()),
        identity,
        synchronizer,
        resolver,
        role_admin,
        audit,
    };

    let app = storefront_api::build_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    tracing::info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await.map_err(|e| {
        AppError::with_source(ErrorKind::Internal, format!("Failed to bind {addr}"), e)
    })?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Internal, "Server error", e))?;

    tracing::info!("Server shut down cleanly");
    Ok(())
}

/// Resolves when the process receives SIGINT or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {e}");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => tracing::error!("Failed to install SIGTERM handler: {e}"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
