//! Administrative audit trail.

mod recorder;

pub use recorder::AuditRecorder;
