//! `AuthUser` extractor — verifies the bearer token upstream, syncs the
//! profile mirror, resolves roles, and injects the request context.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use storefront_core::error::AppError;
use storefront_service::context::RequestContext;

use crate::error::ApiError;
use crate::state::AppState;

/// Extracted authenticated user context available in handlers.
#[derive(Debug, Clone)]
pub struct AuthUser(pub RequestContext);

impl AuthUser {
    /// Returns the inner `RequestContext`.
    pub fn context(&self) -> &RequestContext {
        &self.0
    }
}

impl std::ops::Deref for AuthUser {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // Extract Bearer token from Authorization header
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| AppError::unauthorized("Missing Authorization header"))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| AppError::unauthorized("Invalid Authorization header format"))?;

        // Verify with the upstream identity service
        let identity = state.identity.verify(token).await?;

        // Profile sync and role resolution degrade rather than fail: a
        // verified identity always gets a context, possibly with no roles.
        let profile = match state.synchronizer.ensure_profile(&identity).await {
            Ok(profile) => Some(profile),
            Err(e) => {
                tracing::warn!(user_id = %identity.id, error = %e, "Profile sync failed");
                None
            }
        };

        let roles = state.resolver.resolve(&identity, profile.as_ref()).await;

        Ok(AuthUser(RequestContext::new(
            identity.id,
            identity.email,
            roles,
        )))
    }
}
