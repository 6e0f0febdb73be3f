//! List view: filtering, ordering and merging of scheduled posts.

use chrono::{DateTime, Datelike, Days, NaiveDate, TimeZone};
use serde::{Deserialize, Serialize};

use crate::domain::{PostStatus, ScheduledPost};

/// Status selector of the list view. On the wire it is `"All"` or a bare
/// status name such as `"Draft"`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusFilter {
    #[default]
    All,
    #[serde(untagged)]
    Only(PostStatus),
}

impl StatusFilter {
    pub fn matches(&self, status: PostStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => *wanted == status,
        }
    }
}

/// Time window of the list view, relative to "now".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeFilter {
    #[default]
    All,
    Month,
    Week,
}

/// Calendar date of `post` as seen from `tz`.
pub(crate) fn local_date<Tz: TimeZone>(post: &ScheduledPost, tz: &Tz) -> NaiveDate {
    post.scheduled_at.with_timezone(tz).date_naive()
}

/// Sunday on or before `date`; `None` when that Sunday precedes
/// [`NaiveDate::MIN`].
pub(crate) fn start_of_week(date: NaiveDate) -> Option<NaiveDate> {
    date.checked_sub_days(Days::new(u64::from(date.weekday().num_days_from_sunday())))
}

/// Filter `posts` for the list view and order them by status rank, then time.
///
/// Month and week windows are calendar windows in `now`'s time zone; the week
/// runs Sunday through Saturday, both days included. Ties keep input order.
pub fn filter_and_sort<'a, Tz: TimeZone>(
    posts: &'a [ScheduledPost],
    status: StatusFilter,
    time: TimeFilter,
    now: &DateTime<Tz>,
) -> Vec<&'a ScheduledPost> {
    let tz = now.timezone();
    let today = now.date_naive();
    let week_start = start_of_week(today).unwrap_or(NaiveDate::MIN);
    let week_end = week_start
        .checked_add_days(Days::new(6))
        .unwrap_or(NaiveDate::MAX);

    let mut result: Vec<&ScheduledPost> = posts
        .iter()
        .filter(|post| status.matches(post.status))
        .filter(|post| match time {
            TimeFilter::All => true,
            TimeFilter::Month => {
                let date = local_date(post, &tz);
                date.year() == today.year() && date.month() == today.month()
            }
            TimeFilter::Week => (week_start..=week_end).contains(&local_date(post, &tz)),
        })
        .collect();

    result.sort_by_key(|post| (post.status.rank(), post.scheduled_at));
    result
}

/// Merge `post` into `posts`: replace the entry with the same id, or append.
///
/// The input is left untouched; ids stay unique.
pub fn upsert(posts: &[ScheduledPost], post: ScheduledPost) -> Vec<ScheduledPost> {
    let mut merged = posts.to_vec();
    match merged.iter_mut().find(|existing| existing.id == post.id) {
        Some(existing) => *existing = post,
        None => merged.push(post),
    }
    merged
}
