//! # storefront-api
//!
//! HTTP API layer for the storefront admin surface. Routes, middleware,
//! handlers, and DTOs built on Axum.

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use router::build_router;
pub use state::AppState;
