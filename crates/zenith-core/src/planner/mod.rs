//! Scheduling view-model.
//!
//! Pure functions turning the caller-owned post collection into the list
//! and calendar views, and merging edits back into it. Nothing here keeps
//! state; every call recomputes from its arguments.

mod calendar;
mod list;

pub use calendar::{
    CalendarGrid, CalendarMode, DayBucket, bucket_for_calendar, next_period, previous_period,
    today,
};
pub use list::{StatusFilter, TimeFilter, filter_and_sort, upsert};
