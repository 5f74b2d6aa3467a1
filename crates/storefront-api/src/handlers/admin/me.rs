//! The caller's own identity and effective roles.

use axum::Json;

use storefront_entity::role::ADMIN_BASE_ROLES;

use crate::dto::response::{ApiResponse, MeResponse, UserSummary};
use crate::error::ApiResult;
use crate::extractors::AuthUser;
use crate::middleware::rbac::require_admin;

/// GET /api/admin/me
///
/// Requires any admin-tier role; the response tells the admin frontend
/// which sections to show.
pub async fn me(auth: AuthUser) -> ApiResult<Json<ApiResponse<MeResponse>>> {
    require_admin(&auth)?;

    let is_admin = auth.roles.allows(ADMIN_BASE_ROLES);

    Ok(Json(ApiResponse::ok(MeResponse {
        user: UserSummary {
            id: auth.user_id,
            email: auth.email.clone(),
        },
        roles: auth.roles.clone(),
        is_admin,
    })))
}
