//! Document metadata domain entities.

pub mod model;

pub use model::{Document, NewDocument};
