//! Best-effort audit recording.

use tracing::warn;
use uuid::Uuid;

use storefront_core::result::AppResult;
use storefront_database::AuditLogRepository;
use storefront_entity::audit::{AuditLogEntry, CreateAuditLogEntry};

/// Default number of entries returned when the caller gives no limit.
const DEFAULT_LIMIT: i64 = 100;
/// Hard ceiling on a single listing.
const MAX_LIMIT: i64 = 500;

/// Records administrative actions and serves the recent trail.
#[derive(Debug, Clone)]
pub struct AuditRecorder {
    audit_logs: AuditLogRepository,
}

impl AuditRecorder {
    /// Create a recorder backed by the given repository.
    pub fn new(audit_logs: AuditLogRepository) -> Self {
        Self { audit_logs }
    }

    /// Record an administrative action.
    ///
    /// Audit storage failures are logged and swallowed; the action the
    /// entry describes has already happened, so the mutation's outcome
    /// must not depend on the trail.
    pub async fn record(
        &self,
        actor_id: Option<Uuid>,
        action: &str,
        entity_type: &str,
        entity_id: Option<Uuid>,
        metadata: Option<serde_json::Value>,
    ) {
        let entry = CreateAuditLogEntry {
            actor_id,
            action: action.to_string(),
            entity_type: entity_type.to_string(),
            entity_id,
            metadata,
        };

        if let Err(e) = self.audit_logs.create(&entry).await {
            warn!(action, error = %e, "Failed to record audit entry");
        }
    }

    /// The most recent audit entries, newest first.
    pub async fn recent(&self, limit: Option<i64>) -> AppResult<Vec<AuditLogEntry>> {
        self.audit_logs.find_recent(clamp_limit(limit)).await
    }
}

/// Apply the default and the ceiling to a requested listing size.
fn clamp_limit(limit: Option<i64>) -> i64 {
    limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_limit_uses_default() {
        assert_eq!(clamp_limit(None), 100);
    }

    #[test]
    fn oversized_limit_is_capped() {
        assert_eq!(clamp_limit(Some(10_000)), 500);
    }

    #[test]
    fn nonpositive_limit_is_raised_to_one() {
        assert_eq!(clamp_limit(Some(0)), 1);
        assert_eq!(clamp_limit(Some(-5)), 1);
    }

    #[test]
    fn reasonable_limit_passes_through() {
        assert_eq!(clamp_limit(Some(25)), 25);
    }
}
