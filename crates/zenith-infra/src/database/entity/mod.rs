//! SeaORM entities.

pub mod article;
pub mod enums;
pub mod scheduled_post;
