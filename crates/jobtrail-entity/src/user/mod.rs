//! User domain entities.

pub mod model;

pub use model::{UpdateProfile, User};
