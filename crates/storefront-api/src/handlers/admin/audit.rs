//! Audit trail listing.

use axum::Json;
use axum::extract::{Query, State};

use storefront_entity::audit::AuditLogEntry;

use crate::dto::request::AuditLogQuery;
use crate::dto::response::ApiResponse;
use crate::error::ApiResult;
use crate::extractors::AuthUser;
use crate::middleware::rbac::{AUDIT_ROLES, require_any_role};
use crate::state::AppState;

/// GET /api/admin/audit-logs
pub async fn list_audit_logs(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<AuditLogQuery>,
) -> ApiResult<Json<ApiResponse<Vec<AuditLogEntry>>>> {
    require_any_role(&auth, AUDIT_ROLES)?;

    let entries = state.audit.recent(query.limit).await?;
    Ok(Json(ApiResponse::ok(entries)))
}
