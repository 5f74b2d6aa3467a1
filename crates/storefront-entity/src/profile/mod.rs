//! Profile entity.

pub mod model;

pub use model::Profile;
