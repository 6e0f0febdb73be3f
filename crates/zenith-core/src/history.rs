//! Auto-post history: articles the automatic poster has tried to publish.

use chrono::{DateTime, Datelike, Months, NaiveDate, TimeZone};
use serde::{Deserialize, Serialize};

use crate::domain::{Article, AutoPostStatus};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HistoryStatusFilter {
    #[default]
    All,
    Success,
    Error,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HistoryDateFilter {
    #[default]
    All,
    ThisMonth,
    LastMonth,
}

/// Articles with an auto-post attempt, filtered and newest first.
///
/// Articles never attempted are skipped. Date windows apply to the posting
/// time, falling back to the article's creation time; articles without a
/// posting time sort last.
pub fn auto_post_history<'a, Tz: TimeZone>(
    articles: &'a [Article],
    status: HistoryStatusFilter,
    date: HistoryDateFilter,
    now: &DateTime<Tz>,
) -> Vec<&'a Article> {
    let tz = now.timezone();
    let this_month = now.date_naive();
    let last_month = this_month
        .checked_sub_months(Months::new(1))
        .unwrap_or(this_month);

    let same_month = |article: &Article, reference: NaiveDate| {
        let day = article.history_date().with_timezone(&tz).date_naive();
        day.year() == reference.year() && day.month() == reference.month()
    };

    let mut history: Vec<&Article> = articles
        .iter()
        .filter(|article| article.auto_post_status != AutoPostStatus::None)
        .filter(|article| match status {
            HistoryStatusFilter::All => true,
            HistoryStatusFilter::Success => article.auto_post_status == AutoPostStatus::Success,
            HistoryStatusFilter::Error => article.auto_post_status == AutoPostStatus::Error,
        })
        .filter(|article| match date {
            HistoryDateFilter::All => true,
            HistoryDateFilter::ThisMonth => same_month(*article, this_month),
            HistoryDateFilter::LastMonth => same_month(*article, last_month),
        })
        .collect();

    history.sort_by(|a, b| b.auto_posted_at.cmp(&a.auto_posted_at));
    history
}
