//! Core type definitions used across the JobTrail workspace.

pub mod pagination;

pub use pagination::{PageRequest, PageResponse};
