//! Application state - shared across all handlers.

use std::sync::Arc;

use zenith_core::ports::{ArticleRepository, ScheduledPostRepository};
use zenith_infra::{DatabaseConfig, InMemoryArticleRepository, InMemoryScheduledPostRepository};

#[cfg(feature = "postgres")]
use zenith_infra::{PostgresArticleRepository, PostgresScheduledPostRepository};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn ScheduledPostRepository>,
    pub articles: Arc<dyn ArticleRepository>,
    /// Which store backs the repositories, reported by the health check.
    pub storage: &'static str,
}

impl AppState {
    /// State backed by in-memory repositories.
    pub fn in_memory() -> Self {
        Self {
            posts: Arc::new(InMemoryScheduledPostRepository::new()),
            articles: Arc::new(InMemoryArticleRepository::new()),
            storage: "memory",
        }
    }

    /// Build the state, falling back to memory when the database is
    /// unconfigured or unreachable.
    pub async fn new(db_config: Option<&DatabaseConfig>) -> Self {
        #[cfg(feature = "postgres")]
        let connected = match db_config {
            Some(config) => match zenith_infra::database::connect(config).await {
                Ok(conn) => Some(Self {
                    posts: Arc::new(PostgresScheduledPostRepository::new(conn.clone())),
                    articles: Arc::new(PostgresArticleRepository::new(conn)),
                    storage: "postgres",
                }),
                Err(e) => {
                    tracing::error!(error = %e, "Failed to connect to database. Using in-memory fallback.");
                    None
                }
            },
            None => {
                tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
                None
            }
        };

        #[cfg(not(feature = "postgres"))]
        let connected: Option<Self> = {
            let _ = db_config;
            tracing::info!("Running without postgres feature - using in-memory repositories");
            None
        };

        let state = connected.unwrap_or_else(Self::in_memory);
        tracing::info!(storage = state.storage, "Application state initialized");
        state
    }
}
