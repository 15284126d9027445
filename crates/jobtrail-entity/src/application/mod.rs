//! Job application domain entities.

pub mod model;
pub mod status;

pub use model::{Application, NewApplication, UpdateApplication};
pub use status::ApplicationStatus;
