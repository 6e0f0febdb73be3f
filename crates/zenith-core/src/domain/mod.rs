//! Domain entities - the core business objects.

mod article;
mod draft;
mod integration;
mod scheduled_post;

pub use article::{Article, AutoPostStatus};
pub use draft::{DATE_FORMAT, PostDraft, TIME_FORMAT, ValidDraft};
pub use integration::{FacebookPage, IntegrationConfig, OAuthApp};
pub use scheduled_post::{MediaType, Platform, PostOrigin, PostStatus, ScheduledPost};
