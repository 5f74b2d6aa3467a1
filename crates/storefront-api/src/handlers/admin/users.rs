//! Storefront user listing for the admin surface.

use axum::Json;
use axum::extract::{Query, State};

use storefront_service::roles::UserWithRoles;

use crate::dto::request::UserListQuery;
use crate::dto::response::ApiResponse;
use crate::error::ApiResult;
use crate::extractors::AuthUser;
use crate::middleware::rbac::{USER_LISTING_ROLES, require_any_role};
use crate::state::AppState;

/// Upper bound on one user listing page.
const MAX_USER_LIMIT: i64 = 500;

/// GET /api/admin/users
pub async fn list_users(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<UserListQuery>,
) -> ApiResult<Json<ApiResponse<Vec<UserWithRoles>>>> {
    require_any_role(&auth, USER_LISTING_ROLES)?;

    let limit = query.limit.unwrap_or(100).clamp(1, MAX_USER_LIMIT);
    let users = state.role_admin.list_users_with_roles(limit).await?;
    Ok(Json(ApiResponse::ok(users)))
}
