//! In-memory repositories - used when no database is configured.
//!
//! Note: data is lost on process restart.

mod article;
mod scheduled_post;

pub use article::InMemoryArticleRepository;
pub use scheduled_post::InMemoryScheduledPostRepository;
