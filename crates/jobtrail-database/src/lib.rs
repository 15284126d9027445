//! PostgreSQL persistence layer for JobTrail: connection pool management,
//! embedded migrations, store traits, and repository implementations.

pub mod connection;
pub mod migration;
pub mod repositories;
pub mod store;

pub use connection::create_pool;
pub use store::{ApplicationStore, NotificationStore, UserStore};
