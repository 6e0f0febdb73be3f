use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::scheduled_post::Platform;

/// Outcome of the automatic posting attempt for an article.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AutoPostStatus {
    Pending,
    Success,
    Error,
    /// Never attempted.
    None,
}

/// Article entity - a blog article imported from the connected site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub original_link: Option<String>,
    pub auto_post_status: AutoPostStatus,
    pub auto_posted_at: Option<DateTime<Utc>>,
    pub auto_post_platform: Option<Platform>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Article {
    /// Create a new article that has not been auto-posted yet.
    pub fn new(user_id: Uuid, title: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            title,
            original_link: None,
            auto_post_status: AutoPostStatus::None,
            auto_posted_at: None,
            auto_post_platform: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Record the result of an auto-post attempt.
    pub fn auto_posted(
        mut self,
        status: AutoPostStatus,
        platform: Platform,
        at: DateTime<Utc>,
    ) -> Self {
        self.auto_post_status = status;
        self.auto_post_platform = Some(platform);
        self.auto_posted_at = Some(at);
        self.updated_at = Utc::now();
        self
    }

    /// The instant the history view files this article under.
    pub fn history_date(&self) -> DateTime<Utc> {
        self.auto_posted_at.unwrap_or(self.created_at)
    }
}
