//! Admin surface handlers.

pub mod audit;
pub mod me;
pub mod roles;
pub mod users;
