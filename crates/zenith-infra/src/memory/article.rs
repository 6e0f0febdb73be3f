use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use zenith_core::RepoError;
use zenith_core::domain::Article;
use zenith_core::ports::{ArticleRepository, BaseRepository};

/// Articles keyed by id behind an async RwLock.
#[derive(Default)]
pub struct InMemoryArticleRepository {
    articles: RwLock<HashMap<Uuid, Article>>,
}

impl InMemoryArticleRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BaseRepository<Article, Uuid> for InMemoryArticleRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Article>, RepoError> {
        Ok(self.articles.read().await.get(&id).cloned())
    }

    async fn save(&self, entity: Article) -> Result<Article, RepoError> {
        self.articles
            .write()
            .await
            .insert(entity.id, entity.clone());
        Ok(entity)
    }
}

#[async_trait]
impl ArticleRepository for InMemoryArticleRepository {
    async fn find_by_user_id(&self, user_id: Uuid) -> Result<Vec<Article>, RepoError> {
        let articles = self.articles.read().await;
        let mut owned: Vec<Article> = articles
            .values()
            .filter(|a| a.user_id == user_id)
            .cloned()
            .collect();
        owned.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(owned)
    }
}
