use chrono::{Datelike, NaiveDate};

use crate::model::{TimeRange, WeekSchedule};

/// Resolve the open window for a calendar date. The date contributes only
/// its weekday; `None` means closed.
pub fn hours_for(schedule: &WeekSchedule, date: NaiveDate) -> Option<TimeRange> {
    schedule.day(date.weekday())
}
