//! Shared test helpers for integration tests.
//!
//! The test app wires the real router and services over a lazy database
//! pool pointing at an unreachable address and a stub identity provider.
//! That exercises the authorization pipeline, including its degraded
//! paths, without any external services.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

use storefront_api::state::AppState;
use storefront_auth::bootstrap::BootstrapAdmins;
use storefront_auth::catalog::RoleCatalog;
use storefront_auth::identity::{Identity, IdentityProvider};
use storefront_auth::profile_sync::ProfileSynchronizer;
use storefront_auth::resolver::RoleResolver;
use storefront_core::config::AppConfig;
use storefront_core::error::AppError;
use storefront_core::result::AppResult;
use storefront_database::DatabasePool;
use storefront_database::repositories::{AuditLogRepository, ProfileRepository, RoleRepository};
use storefront_service::audit::AuditRecorder;
use storefront_service::roles::RoleAdminService;

pub const SUPER_ADMIN_EMAIL: &str = "root@shop.test";

/// Identity provider backed by a fixed token table.
pub struct StubIdentityProvider {
    identities: HashMap<String, Identity>,
}

impl StubIdentityProvider {
    pub fn new() -> Self {
        Self {
            identities: HashMap::new(),
        }
    }

    pub fn with_identity(mut self, token: &str, email: &str) -> Self {
        self.identities.insert(
            token.to_string(),
            Identity {
                id: Uuid::new_v4(),
                email: email.to_string(),
            },
        );
        self
    }
}

#[async_trait]
impl IdentityProvider for StubIdentityProvider {
    async fn verify(&self, token: &str) -> AppResult<Identity> {
        self.identities
            .get(token)
            .cloned()
            .ok_or_else(|| AppError::unauthorized("Invalid or expired token"))
    }
}

/// A parsed test response.
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

/// Test application context.
pub struct TestApp {
    pub router: Router,
}

impl TestApp {
    /// Build the app with the given stub identities registered.
    pub fn new(identities: StubIdentityProvider) -> Self {
        let mut config = AppConfig::default();
        // Nothing listens here; queries fail fast and exercise degradation.
        config.database.url = "postgres://127.0.0.1:1/storefront_test".to_string();
        config.database.connect_timeout_seconds = 1;
        config.auth.super_admin_email = SUPER_ADMIN_EMAIL.to_string();

        let pool = DatabasePool::connect_lazy(&config.database)
            .expect("lazy pool")
            .into_pool();

        let profile_repo = ProfileRepository::new(pool.clone());
        let role_repo = RoleRepository::new(pool.clone());
        let audit_repo = AuditLogRepository::new(pool);

        let bootstrap = BootstrapAdmins::from_config(&config.auth);
        let catalog = Arc::new(RoleCatalog::new(role_repo.clone()));
        let synchronizer = Arc::new(ProfileSynchronizer::new(profile_repo.clone()));
        let resolver = Arc::new(RoleResolver::new(
            Arc::clone(&catalog),
            role_repo.clone(),
            profile_repo.clone(),
            bootstrap,
        ));

        let audit = Arc::new(AuditRecorder::new(audit_repo));
        let role_admin = Arc::new(RoleAdminService::new(
            Arc::clone(&catalog),
            role_repo,
            profile_repo,
            AuditRecorder::clone(&audit),
        ));

        let state = AppState {
            config: Arc::new(config),
            identity: Arc::new(identities),
            synchronizer,
            resolver,
            role_admin,
            audit,
        };

        Self {
            router: storefront_api::build_router(state),
        }
    }

    /// Issue a request and parse the JSON body.
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(path);

        if let Some(token) = token {
            builder = builder.header("authorization", format!("Bearer {token}"));
        }

        let request = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(json.to_string()))
                .expect("request"),
            None => builder.body(Body::empty()).expect("request"),
        };

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("response");

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("json body")
        };

        TestResponse { status, body }
    }
}
