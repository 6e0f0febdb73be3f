//! Calendar view: day grids and period navigation.

use chrono::{DateTime, Datelike, Days, Months, NaiveDate, TimeZone};
use serde::{Deserialize, Serialize};

use super::list::{local_date, start_of_week};
use crate::domain::ScheduledPost;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalendarMode {
    #[default]
    Month,
    Week,
}

/// Posts falling on one calendar day.
#[derive(Debug, Clone, PartialEq)]
pub struct DayBucket<'a> {
    pub date: NaiveDate,
    pub posts: Vec<&'a ScheduledPost>,
}

/// A rendered period: its days plus the blank cells before day one.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarGrid<'a> {
    /// Empty cells before the first day so it lands under its weekday
    /// header. Always 0 in week mode.
    pub leading_empty_slots: u32,
    pub days: Vec<DayBucket<'a>>,
}

impl CalendarGrid<'_> {
    /// Total posts across all day cells.
    pub fn post_count(&self) -> usize {
        self.days.iter().map(|day| day.posts.len()).sum()
    }
}

fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first| first.pred_opt())
        .map_or(31, |last| last.day())
}

/// Bucket `posts` into the days of the period containing `view_date`.
///
/// Month mode lists days 1..=N of the month only; posts on neighbouring
/// months' days are not shown and no trailing cells are added. Week mode
/// lists the seven days from the Sunday on or before `view_date`. Dates are
/// read in `tz`; each day keeps the posts in input order.
///
/// Days past the ends of the calendar are left out, so a period only comes
/// back complete when [`next_period`] and [`previous_period`] are both
/// `Some` for `view_date`.
pub fn bucket_for_calendar<'a, Tz: TimeZone>(
    posts: &'a [ScheduledPost],
    view_date: NaiveDate,
    mode: CalendarMode,
    tz: &Tz,
) -> CalendarGrid<'a> {
    let (dates, leading_empty_slots): (Vec<NaiveDate>, u32) = match mode {
        CalendarMode::Week => (
            start_of_week(view_date)
                .map(|sunday| sunday.iter_days().take(7).collect())
                .unwrap_or_default(),
            0,
        ),
        CalendarMode::Month => {
            let first = view_date.with_day(1).unwrap_or(view_date);
            let count = days_in_month(first.year(), first.month()) as usize;
            (
                first.iter_days().take(count).collect(),
                first.weekday().num_days_from_sunday(),
            )
        }
    };

    let local: Vec<(NaiveDate, &ScheduledPost)> =
        posts.iter().map(|post| (local_date(post, tz), post)).collect();

    let days = dates
        .into_iter()
        .map(|date| DayBucket {
            date,
            posts: local
                .iter()
                .filter(|(day, _)| *day == date)
                .map(|(_, post)| *post)
                .collect(),
        })
        .collect();

    CalendarGrid {
        leading_empty_slots,
        days,
    }
}

/// The period after the one containing `view_date`, or `None` past the
/// end of the calendar.
///
/// Month steps clamp to the last day of a shorter month (Jan 31 -> Feb 29).
pub fn next_period(view_date: NaiveDate, mode: CalendarMode) -> Option<NaiveDate> {
    match mode {
        CalendarMode::Week => view_date.checked_add_days(Days::new(7)),
        CalendarMode::Month => view_date.checked_add_months(Months::new(1)),
    }
}

/// The period before the one containing `view_date`, or `None` before the
/// start of the calendar.
pub fn previous_period(view_date: NaiveDate, mode: CalendarMode) -> Option<NaiveDate> {
    match mode {
        CalendarMode::Week => view_date.checked_sub_days(Days::new(7)),
        CalendarMode::Month => view_date.checked_sub_months(Months::new(1)),
    }
}

/// "Today" button target.
pub fn today<Tz: TimeZone>(now: &DateTime<Tz>) -> NaiveDate {
    now.date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Platform, PostOrigin, PostStatus};
    use chrono::{FixedOffset, TimeDelta, Utc, Weekday};
    use uuid::Uuid;

    fn post(at: &str) -> ScheduledPost {
        let scheduled_at = DateTime::parse_from_rfc3339(at).unwrap().with_timezone(&Utc);
        ScheduledPost::new(
            Uuid::nil(),
            PostOrigin::Manual,
            Platform::LinkedIn,
            at.to_string(),
            scheduled_at,
            PostStatus::Scheduled,
        )
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_month_grid_for_january_2024() {
        let grid = bucket_for_calendar(&[], date(2024, 1, 15), CalendarMode::Month, &Utc);

        assert_eq!(grid.days.len(), 31);
        // 2024-01-01 is a Monday.
        assert_eq!(grid.leading_empty_slots, 1);
        assert_eq!(grid.days[0].date, date(2024, 1, 1));
        assert_eq!(grid.days[30].date, date(2024, 1, 31));
    }

    #[test]
    fn test_month_grid_lengths() {
        let cases = [
            (date(2024, 2, 10), 29, 4),
            (date(2023, 2, 10), 28, 3),
            (date(2024, 9, 30), 30, 0),
            (date(2024, 12, 1), 31, 0),
        ];
        for (view, len, slots) in cases {
            let grid = bucket_for_calendar(&[], view, CalendarMode::Month, &Utc);
            assert_eq!(grid.days.len(), len, "{view}");
            assert_eq!(grid.leading_empty_slots, slots, "{view}");
        }
    }

    #[test]
    fn test_month_buckets_hold_exactly_the_months_posts() {
        let posts = vec![
            post("2024-04-30T10:00:00Z"),
            post("2024-05-01T10:00:00Z"),
            post("2024-04-01T08:00:00Z"),
            post("2024-04-01T07:00:00Z"),
            post("2024-03-31T23:59:59Z"),
        ];

        let grid = bucket_for_calendar(&posts, date(2024, 4, 17), CalendarMode::Month, &Utc);

        assert_eq!(grid.days.len(), 30);
        assert_eq!(grid.post_count(), 3);
        // insertion order inside a day, not time order
        assert_eq!(grid.days[0].posts, vec![&posts[2], &posts[3]]);
        assert_eq!(grid.days[29].posts, vec![&posts[0]]);
    }

    #[test]
    fn test_week_always_has_seven_days_from_sunday() {
        for offset in 0..7 {
            let view = date(2024, 1, 14) + TimeDelta::days(offset);
            let grid = bucket_for_calendar(&[], view, CalendarMode::Week, &Utc);

            assert_eq!(grid.days.len(), 7);
            assert_eq!(grid.leading_empty_slots, 0);
            assert_eq!(grid.days[0].date, date(2024, 1, 14));
            assert_eq!(grid.days[0].date.weekday(), Weekday::Sun);
        }
    }

    #[test]
    fn test_week_spanning_months() {
        let posts = vec![post("2024-01-30T12:00:00Z"), post("2024-02-02T12:00:00Z")];

        let grid = bucket_for_calendar(&posts, date(2024, 2, 1), CalendarMode::Week, &Utc);

        assert_eq!(grid.days[0].date, date(2024, 1, 28));
        assert_eq!(grid.days[2].posts, vec![&posts[0]]);
        assert_eq!(grid.days[5].posts, vec![&posts[1]]);
    }

    #[test]
    fn test_days_are_local_to_the_given_zone() {
        let tokyo = FixedOffset::east_opt(9 * 3600).unwrap();
        let posts = vec![post("2024-06-30T20:00:00Z")];

        let grid = bucket_for_calendar(&posts, date(2024, 6, 1), CalendarMode::Month, &tokyo);

        // Already July 1st in Tokyo.
        assert_eq!(grid.post_count(), 0);
    }

    #[test]
    fn test_navigation() {
        assert_eq!(
            next_period(date(2024, 1, 31), CalendarMode::Month),
            Some(date(2024, 2, 29))
        );
        assert_eq!(
            previous_period(date(2024, 1, 15), CalendarMode::Month),
            Some(date(2023, 12, 15))
        );
        assert_eq!(
            next_period(date(2024, 12, 29), CalendarMode::Week),
            Some(date(2025, 1, 5))
        );
        assert_eq!(
            previous_period(date(2024, 3, 3), CalendarMode::Week),
            Some(date(2024, 2, 25))
        );
    }

    #[test]
    fn test_navigation_stops_at_the_ends_of_the_calendar() {
        for mode in [CalendarMode::Week, CalendarMode::Month] {
            assert_eq!(next_period(NaiveDate::MAX, mode), None);
            assert_eq!(previous_period(NaiveDate::MIN, mode), None);
        }
        assert!(next_period(NaiveDate::MAX - TimeDelta::days(7), CalendarMode::Week).is_some());
    }

    #[test]
    fn test_grids_at_the_ends_of_the_calendar_do_not_panic() {
        for view in [NaiveDate::MAX, NaiveDate::MIN] {
            for mode in [CalendarMode::Week, CalendarMode::Month] {
                let grid = bucket_for_calendar(&[], view, mode, &Utc);
                assert!(grid.days.len() <= 31);
                assert!(grid.days.iter().all(|day| day.posts.is_empty()));
            }
        }
    }
}
