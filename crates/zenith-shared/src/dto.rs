//! Data Transfer Objects - request/response types for the API.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use zenith_core::domain::{
    Article, AutoPostStatus, IntegrationConfig, MediaType, Platform, PostDraft, PostStatus,
    ScheduledPost,
};
use zenith_core::history::{HistoryDateFilter, HistoryStatusFilter};
use zenith_core::planner::{CalendarGrid, CalendarMode, StatusFilter, TimeFilter};

/// Query of the planner list view.
///
/// `tz_offset_minutes` is the viewer's offset east of UTC; calendar windows
/// are computed in that offset. Absent means UTC.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostListQuery {
    #[serde(default)]
    pub status: StatusFilter,
    #[serde(default)]
    pub time: TimeFilter,
    pub tz_offset_minutes: Option<i32>,
}

/// Query of the planner calendar view. `date` defaults to today.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CalendarQuery {
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub mode: CalendarMode,
    pub tz_offset_minutes: Option<i32>,
}

/// Create or edit a scheduled post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchedulePostRequest {
    #[serde(flatten)]
    pub draft: PostDraft,
    /// Offset east of UTC the date and time were entered in.
    #[serde(default)]
    pub tz_offset_minutes: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledPostResponse {
    pub id: Uuid,
    /// `None` for posts created from the planner.
    pub article_id: Option<Uuid>,
    pub platform: Platform,
    pub content: String,
    pub scheduled_at: DateTime<Utc>,
    pub status: PostStatus,
    pub media_url: Option<String>,
    pub media_type: Option<MediaType>,
    pub error_message: Option<String>,
}

impl From<&ScheduledPost> for ScheduledPostResponse {
    fn from(post: &ScheduledPost) -> Self {
        Self {
            id: post.id,
            article_id: post.origin.article_id(),
            platform: post.platform,
            content: post.content.clone(),
            scheduled_at: post.scheduled_at,
            status: post.status,
            media_url: post.media_url.clone(),
            media_type: post.media_type,
            error_message: post.error_message.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarDayResponse {
    pub date: NaiveDate,
    pub posts: Vec<ScheduledPostResponse>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarResponse {
    pub mode: CalendarMode,
    pub leading_empty_slots: u32,
    pub days: Vec<CalendarDayResponse>,
    /// Dates to request for the previous and next periods.
    pub previous: NaiveDate,
    pub next: NaiveDate,
}

impl CalendarResponse {
    pub fn new(
        mode: CalendarMode,
        grid: &CalendarGrid<'_>,
        previous: NaiveDate,
        next: NaiveDate,
    ) -> Self {
        Self {
            mode,
            leading_empty_slots: grid.leading_empty_slots,
            days: grid
                .days
                .iter()
                .map(|day| CalendarDayResponse {
                    date: day.date,
                    posts: day.posts.iter().map(|p| (*p).into()).collect(),
                })
                .collect(),
            previous,
            next,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AutoPostHistoryQuery {
    #[serde(default)]
    pub status: HistoryStatusFilter,
    #[serde(default)]
    pub date: HistoryDateFilter,
    pub tz_offset_minutes: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AutoPostEntryResponse {
    pub article_id: Uuid,
    pub title: String,
    pub status: AutoPostStatus,
    pub platform: Option<Platform>,
    pub posted_at: Option<DateTime<Utc>>,
    pub original_link: Option<String>,
}

impl From<&Article> for AutoPostEntryResponse {
    fn from(article: &Article) -> Self {
        Self {
            article_id: article.id,
            title: article.title.clone(),
            status: article.auto_post_status,
            platform: article.auto_post_platform,
            posted_at: article.auto_posted_at,
            original_link: article.original_link.clone(),
        }
    }
}

/// Integration settings to check before connecting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntegrationCheckRequest {
    /// Account username, shown when the platform has no better label.
    #[serde(default)]
    pub username: String,
    pub config: IntegrationConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntegrationCheckResponse {
    pub platform: Platform,
    pub label: String,
}
