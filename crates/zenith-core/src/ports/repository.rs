use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Article, ScheduledPost};
use crate::error::RepoError;

/// Generic repository trait defining standard CRUD operations.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Save an entity (create or update, keyed by ID).
    async fn save(&self, entity: T) -> Result<T, RepoError>;
}

/// Scheduled post repository.
#[async_trait]
pub trait ScheduledPostRepository: BaseRepository<ScheduledPost, Uuid> {
    /// All posts of a user, earliest `scheduled_at` first.
    async fn find_by_user_id(&self, user_id: Uuid) -> Result<Vec<ScheduledPost>, RepoError>;
}

/// Article repository.
#[async_trait]
pub trait ArticleRepository: BaseRepository<Article, Uuid> {
    async fn find_by_user_id(&self, user_id: Uuid) -> Result<Vec<Article>, RepoError>;
}
