//! Audit log entry entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// An immutable audit log entry recording a privileged action.
///
/// Append-only: there is no update or delete path.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AuditLogEntry {
    /// Unique audit entry identifier.
    pub id: Uuid,
    /// The admin who performed the action; `None` for system actions.
    pub actor_id: Option<Uuid>,
    /// The action that was performed (e.g., `"roles_updated"`).
    pub action: String,
    /// The type of target entity (e.g., `"user"`, `"product"`).
    pub entity_type: String,
    /// The target entity ID (if applicable).
    pub entity_id: Option<Uuid>,
    /// Additional details about the action (JSON).
    pub metadata: Option<serde_json::Value>,
    /// When the action occurred.
    pub created_at: DateTime<Utc>,
}

/// Data required to create a new audit log entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAuditLogEntry {
    /// The admin who performed the action; `None` for system actions.
    pub actor_id: Option<Uuid>,
    /// The action performed.
    pub action: String,
    /// Target entity type.
    pub entity_type: String,
    /// Target entity ID.
    pub entity_id: Option<Uuid>,
    /// Additional details.
    pub metadata: Option<serde_json::Value>,
}
