//! Post form contract - what the planner accepts before touching the collection.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::scheduled_post::{MediaType, Platform, PostOrigin, PostStatus, ScheduledPost};
use crate::error::DomainError;

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIME_FORMAT: &str = "%H:%M";

/// Raw create/edit form for a scheduled post.
///
/// Date and time are local to the author and kept as entered; they are
/// resolved to an instant by [`PostDraft::validate`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostDraft {
    pub platform: Platform,
    pub content: String,
    pub date: String,
    pub time: String,
    pub status: PostStatus,
    #[serde(default)]
    pub media_url: Option<String>,
    #[serde(default)]
    pub media_type: Option<MediaType>,
}

/// A draft that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidDraft {
    pub platform: Platform,
    pub content: String,
    pub scheduled_at: DateTime<Utc>,
    pub status: PostStatus,
    pub media_url: Option<String>,
    pub media_type: Option<MediaType>,
}

impl PostDraft {
    /// Check required fields and resolve the local date/time at `offset`.
    ///
    /// Every problem is reported, not just the first one.
    pub fn validate(self, offset: &FixedOffset) -> Result<ValidDraft, DomainError> {
        let mut problems = Vec::new();

        if self.content.trim().is_empty() {
            problems.push("content is required".to_string());
        }

        let date = match self.date.trim() {
            "" => {
                problems.push("date is required".to_string());
                None
            }
            raw => NaiveDate::parse_from_str(raw, DATE_FORMAT)
                .map_err(|_| problems.push(format!("date '{raw}' is not YYYY-MM-DD")))
                .ok(),
        };

        let time = match self.time.trim() {
            "" => {
                problems.push("time is required".to_string());
                None
            }
            raw => NaiveTime::parse_from_str(raw, TIME_FORMAT)
                .map_err(|_| problems.push(format!("time '{raw}' is not HH:MM")))
                .ok(),
        };

        let (Some(date), Some(time)) = (date, time) else {
            return Err(DomainError::Validation(problems));
        };
        if !problems.is_empty() {
            return Err(DomainError::Validation(problems));
        }

        let scheduled_at = offset
            .from_local_datetime(&NaiveDateTime::new(date, time))
            .single()
            .ok_or_else(|| DomainError::invalid("date and time do not name a single instant"))?
            .with_timezone(&Utc);

        // Media type only travels with a URL; a bare URL is an image.
        let media_url = self.media_url.filter(|url| !url.trim().is_empty());
        let media_type = media_url
            .as_ref()
            .map(|_| self.media_type.unwrap_or(MediaType::Image));

        Ok(ValidDraft {
            platform: self.platform,
            content: self.content,
            scheduled_at,
            status: self.status,
            media_url,
            media_type,
        })
    }
}

impl ValidDraft {
    /// Build a new ad hoc post owned by `user_id`.
    pub fn into_post(self, user_id: Uuid) -> ScheduledPost {
        let mut post = ScheduledPost::new(
            user_id,
            PostOrigin::Manual,
            self.platform,
            self.content,
            self.scheduled_at,
            self.status,
        );
        post.media_url = self.media_url;
        post.media_type = self.media_type;
        post
    }

    /// Replace every editable field of `post`; identity, ownership and
    /// origin are kept.
    pub fn apply_to(self, post: ScheduledPost) -> ScheduledPost {
        let error_message = match self.status {
            PostStatus::Error => post.error_message,
            _ => None,
        };

        ScheduledPost {
            platform: self.platform,
            content: self.content,
            scheduled_at: self.scheduled_at,
            status: self.status,
            media_url: self.media_url,
            media_type: self.media_type,
            error_message,
            updated_at: Utc::now(),
            ..post
        }
    }
}
