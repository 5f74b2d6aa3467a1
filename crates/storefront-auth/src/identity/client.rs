//! HTTP client for the upstream identity service.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;
use uuid::Uuid;

use storefront_core::config::AuthConfig;
use storefront_core::error::AppError;
use storefront_core::result::AppResult;

use super::{Identity, IdentityProvider};

/// Response body of the identity service's user endpoint.
#[derive(Debug, Deserialize)]
struct UserResponse {
    id: Uuid,
    email: String,
}

/// Verifies bearer tokens by calling the identity service's user endpoint.
#[derive(Debug, Clone)]
pub struct AuthApiClient {
    client: reqwest::Client,
    user_url: String,
}

impl AuthApiClient {
    /// Build a client from the auth configuration section.
    pub fn new(config: &AuthConfig) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_seconds))
            .build()
            .map_err(|e| {
                AppError::with_source(
                    storefront_core::error::ErrorKind::Configuration,
                    "Failed to build identity service client",
                    e,
                )
            })?;

        let user_url = format!(
            "{}{}",
            config.service_url.trim_end_matches('/'),
            config.user_endpoint
        );

        Ok(Self { client, user_url })
    }
}

#[async_trait]
impl IdentityProvider for AuthApiClient {
    async fn verify(&self, token: &str) -> AppResult<Identity> {
        let response = self
            .client
            .get(&self.user_url)
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| {
                debug!(error = %e, "Identity service request failed");
                AppError::unauthorized("Invalid or expired token")
            })?;

        if !response.status().is_success() {
            debug!(status = %response.status(), "Identity service rejected token");
            return Err(AppError::unauthorized("Invalid or expired token"));
        }

        let user: UserResponse = response.json().await.map_err(|e| {
            debug!(error = %e, "Identity service returned malformed body");
            AppError::unauthorized("Invalid or expired token")
        })?;

        Ok(Identity {
            id: user.id,
            email: user.email,
        })
    }
}
