//! # Zenith Infrastructure
//!
//! Concrete implementations of the ports defined in `zenith-core`.
//!
//! ## Feature Flags
//!
//! - `postgres` (default) - PostgreSQL repositories via SeaORM
//! - `minimal` - No external services, in-memory repositories only

pub mod database;
pub mod memory;

pub use database::DatabaseConfig;
pub use memory::{InMemoryArticleRepository, InMemoryScheduledPostRepository};

#[cfg(feature = "postgres")]
pub use database::{PostgresArticleRepository, PostgresScheduledPostRepository};
