//! Role catalog listing and role assignment mutation.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;

use storefront_entity::role::Role;
use storefront_service::roles::RoleUpdateOutcome;

use crate::dto::request::ReplaceRolesRequest;
use crate::dto::response::ApiResponse;
use crate::error::ApiResult;
use crate::extractors::{AuthUser, JsonBody};
use crate::middleware::rbac::{ROLE_MANAGEMENT_ROLES, require_any_role};
use crate::state::AppState;

/// GET /api/admin/roles
pub async fn list_roles(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<ApiResponse<Vec<Role>>>> {
    require_any_role(&auth, ROLE_MANAGEMENT_ROLES)?;

    let roles = state.role_admin.list_catalog().await?;
    Ok(Json(ApiResponse::ok(roles)))
}

/// PUT /api/admin/users/{id}/roles
pub async fn replace_user_roles(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(user_id): Path<Uuid>,
    JsonBody(body): JsonBody<ReplaceRolesRequest>,
) -> ApiResult<Json<ApiResponse<RoleUpdateOutcome>>> {
    require_any_role(&auth, ROLE_MANAGEMENT_ROLES)?;

    let outcome = state
        .role_admin
        .replace_roles(auth.context(), user_id, &body.roles)
        .await?;
    Ok(Json(ApiResponse::ok(outcome)))
}
