//! JSON body extractor with validation-error rejections.

use axum::extract::{FromRequest, Request};

use storefront_core::error::AppError;

use crate::error::ApiError;

/// `axum::Json` with rejections mapped into the error envelope.
///
/// The default `Json` rejection answers a malformed body with a bare-text
/// 422. Every error leaving this API carries the `{success, message}`
/// envelope, so body parse failures are routed through `AppError` like any
/// other validation failure and come back as a 400.
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: serde::de::DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let axum::Json(value) = axum::Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                AppError::validation(format!("Invalid request body: {rejection}"))
            })?;
        Ok(Self(value))
    }
}
