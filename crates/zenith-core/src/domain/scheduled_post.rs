use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Social network a post (or integration) targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Platform {
    Facebook,
    Instagram,
    TikTok,
    LinkedIn,
    WordPress,
}

impl Platform {
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Facebook => "Facebook",
            Platform::Instagram => "Instagram",
            Platform::TikTok => "TikTok",
            Platform::LinkedIn => "LinkedIn",
            Platform::WordPress => "WordPress",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Publication state of a scheduled post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PostStatus {
    Scheduled,
    Draft,
    Published,
    Error,
}

impl PostStatus {
    /// Ordering used by the planner list: problems first, finished work last.
    pub fn rank(&self) -> u8 {
        match self {
            PostStatus::Error => 0,
            PostStatus::Scheduled => 1,
            PostStatus::Draft => 2,
            PostStatus::Published => 3,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PostStatus::Scheduled => "Scheduled",
            PostStatus::Draft => "Draft",
            PostStatus::Published => "Published",
            PostStatus::Error => "Error",
        }
    }
}

impl fmt::Display for PostStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of media attached to a post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Image,
    Video,
}

/// Where a scheduled post came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PostOrigin {
    /// Generated from a blog article.
    Article(Uuid),
    /// Created ad hoc from the planner.
    Manual,
}

impl PostOrigin {
    pub fn article_id(&self) -> Option<Uuid> {
        match self {
            PostOrigin::Article(id) => Some(*id),
            PostOrigin::Manual => None,
        }
    }
}

impl From<Option<Uuid>> for PostOrigin {
    fn from(article_id: Option<Uuid>) -> Self {
        article_id.map_or(PostOrigin::Manual, PostOrigin::Article)
    }
}

/// ScheduledPost entity - one planned or published social update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledPost {
    pub id: Uuid,
    pub user_id: Uuid,
    pub origin: PostOrigin,
    pub platform: Platform,
    pub content: String,
    pub scheduled_at: DateTime<Utc>,
    pub status: PostStatus,
    pub media_url: Option<String>,
    pub media_type: Option<MediaType>,
    /// Only meaningful when `status` is [`PostStatus::Error`].
    pub error_message: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ScheduledPost {
    /// Create a new post with a generated ID and timestamps.
    pub fn new(
        user_id: Uuid,
        origin: PostOrigin,
        platform: Platform,
        content: String,
        scheduled_at: DateTime<Utc>,
        status: PostStatus,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            origin,
            platform,
            content,
            scheduled_at,
            status,
            media_url: None,
            media_type: None,
            error_message: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Mark the post as failed with a human-readable reason.
    pub fn failed(mut self, message: impl Into<String>) -> Self {
        self.status = PostStatus::Error;
        self.error_message = Some(message.into());
        self
    }
}
