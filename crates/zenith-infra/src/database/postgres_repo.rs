//! PostgreSQL repository implementations.

use async_trait::async_trait;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};
use uuid::Uuid;

use zenith_core::RepoError;
use zenith_core::domain::{Article, ScheduledPost};
use zenith_core::ports::{ArticleRepository, ScheduledPostRepository};

use super::entity::article::{self, Entity as ArticleEntity};
use super::entity::scheduled_post::{self, Entity as ScheduledPostEntity};
use super::postgres_base::PostgresBaseRepository;

/// PostgreSQL scheduled post repository.
pub type PostgresScheduledPostRepository = PostgresBaseRepository<ScheduledPostEntity>;

/// PostgreSQL article repository.
pub type PostgresArticleRepository = PostgresBaseRepository<ArticleEntity>;

#[async_trait]
impl ScheduledPostRepository for PostgresScheduledPostRepository {
    async fn find_by_user_id(&self, user_id: Uuid) -> Result<Vec<ScheduledPost>, RepoError> {
        tracing::debug!(%user_id, "Loading scheduled posts");

        let result = ScheduledPostEntity::find()
            .filter(scheduled_post::Column::UserId.eq(user_id))
            .order_by_asc(scheduled_post::Column::ScheduledAt)
            .all(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(result.into_iter().map(Into::into).collect())
    }
}

#[async_trait]
impl ArticleRepository for PostgresArticleRepository {
    async fn find_by_user_id(&self, user_id: Uuid) -> Result<Vec<Article>, RepoError> {
        tracing::debug!(%user_id, "Loading articles");

        let result = ArticleEntity::find()
            .filter(article::Column::UserId.eq(user_id))
            .order_by_desc(article::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(result.into_iter().map(Into::into).collect())
    }
}
