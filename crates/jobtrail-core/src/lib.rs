//! Core building blocks shared across the JobTrail workspace:
//! configuration schemas, the unified error type, and common value types.

pub mod config;
pub mod error;
pub mod result;
pub mod types;

pub use error::{AppError, ErrorKind};
pub use result::AppResult;
