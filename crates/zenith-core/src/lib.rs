//! # Zenith Core
//!
//! The domain layer of the Zenith planner backend.
//! Entities, the scheduling view-model and repository ports live here, with
//! zero infrastructure dependencies so the crate can be shared with clients.

pub mod domain;
pub mod error;
pub mod history;
pub mod planner;
pub mod ports;

pub use error::{DomainError, RepoError};
