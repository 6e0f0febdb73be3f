use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use zenith_core::RepoError;
use zenith_core::domain::ScheduledPost;
use zenith_core::planner;
use zenith_core::ports::{BaseRepository, ScheduledPostRepository};

/// Scheduled posts kept in insertion order behind an async RwLock.
#[derive(Default)]
pub struct InMemoryScheduledPostRepository {
    posts: RwLock<Vec<ScheduledPost>>,
}

impl InMemoryScheduledPostRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store, e.g. with posts produced by the auto-poster.
    pub fn with_posts(posts: Vec<ScheduledPost>) -> Self {
        Self {
            posts: RwLock::new(posts),
        }
    }
}

#[async_trait]
impl BaseRepository<ScheduledPost, Uuid> for InMemoryScheduledPostRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<ScheduledPost>, RepoError> {
        let posts = self.posts.read().await;
        Ok(posts.iter().find(|p| p.id == id).cloned())
    }

    async fn save(&self, entity: ScheduledPost) -> Result<ScheduledPost, RepoError> {
        let mut posts = self.posts.write().await;
        *posts = planner::upsert(&posts, entity.clone());
        tracing::debug!(post_id = %entity.id, total = posts.len(), "Post saved in memory");
        Ok(entity)
    }
}

#[async_trait]
impl ScheduledPostRepository for InMemoryScheduledPostRepository {
    async fn find_by_user_id(&self, user_id: Uuid) -> Result<Vec<ScheduledPost>, RepoError> {
        let posts = self.posts.read().await;
        let mut owned: Vec<ScheduledPost> = posts
            .iter()
            .filter(|p| p.user_id == user_id)
            .cloned()
            .collect();
        owned.sort_by_key(|p| p.scheduled_at);
        Ok(owned)
    }
}
