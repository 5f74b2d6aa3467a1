//! HTTP middleware: role guards, CORS, and request logging.

pub mod cors;
pub mod logging;
pub mod rbac;
