//! # jobtrail-api
//!
//! HTTP API layer for JobTrail. Routes are mounted under `/api` and share
//! a single [`state::AppState`]; authentication is a bearer JWT validated
//! against the external issuer's shared secret.

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use error::ApiError;
pub use router::build_router;
pub use state::AppState;
