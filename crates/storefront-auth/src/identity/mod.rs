//! Bearer token verification against the upstream identity service.

mod client;

pub use client::AuthApiClient;

use async_trait::async_trait;
use uuid::Uuid;

use storefront_core::result::AppResult;

/// A verified upstream identity.
#[derive(Debug, Clone)]
pub struct Identity {
    /// Stable identity id, shared with the profiles table.
    pub id: Uuid,
    /// Email address as reported by the identity service.
    pub email: String,
}

/// Verifies bearer tokens with the upstream identity service.
///
/// Implemented by [`AuthApiClient`] in production; tests substitute a stub so
/// the authorization pipeline can run without a live identity service.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Verify a bearer token and return the identity it belongs to.
    ///
    /// Any failure, whether the token is invalid or the service is
    /// unreachable, is reported as `ErrorKind::Unauthorized` so callers
    /// never treat an unverified caller as anything but anonymous.
    async fn verify(&self, token: &str) -> AppResult<Identity>;
}
