//! Route definitions for the storefront admin HTTP API.
//!
//! All routes are mounted under `/api`. The router receives `AppState` and
//! passes it to all handlers via Axum's `State` extractor.

use axum::{
    Router,
    middleware as axum_middleware,
    routing::{get, put},
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(health_routes())
        .merge(admin_routes());

    let cors = middleware::cors::build_cors_layer(&state.config.server.cors);

    Router::new()
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Health endpoints.
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}

/// Admin surface endpoints. Authorization happens inside each handler via
/// the `AuthUser` extractor and the role guards.
fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/admin/me", get(handlers::admin::me::me))
        .route("/admin/roles", get(handlers::admin::roles::list_roles))
        .route("/admin/users", get(handlers::admin::users::list_users))
        .route(
            "/admin/users/{id}/roles",
            put(handlers::admin::roles::replace_user_roles),
        )
        .route(
            "/admin/audit-logs",
            get(handlers::admin::audit::list_audit_logs),
        )
}
