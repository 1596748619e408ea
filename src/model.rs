use std::collections::HashMap;

use chrono::Weekday;
use serde::{Deserialize, Serialize};
use ulid::Ulid;

/// Minutes since midnight — the only time-of-day type.
pub type Minutes = i32;

/// Parse a zero-padded 24h `"HH:mm"` clock string into minutes since midnight.
pub fn parse_clock(s: &str) -> Option<Minutes> {
    let (h, m) = s.split_once(':')?;
    if h.len() != 2 || m.len() != 2 {
        return None;
    }
    if !h.chars().all(|c| c.is_ascii_digit()) || !m.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let h: Minutes = h.parse().ok()?;
    let m: Minutes = m.parse().ok()?;
    if h > 23 || m > 59 {
        return None;
    }
    Some(h * 60 + m)
}

/// Render minutes since midnight as a zero-padded `"HH:mm"` string.
pub fn format_clock(m: Minutes) -> String {
    format!("{:02}:{:02}", m / 60, m % 60)
}

/// Half-open time-of-day window `[start, end)` in minutes since midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    pub start: Minutes,
    pub end: Minutes,
}

impl TimeRange {
    pub fn new(start: Minutes, end: Minutes) -> Self {
        debug_assert!(start < end, "TimeRange start must be before end");
        Self { start, end }
    }

    /// Parse from a pair of clock strings; `None` unless `open < close`.
    pub fn from_clock(open: &str, close: &str) -> Option<Self> {
        let start = parse_clock(open)?;
        let end = parse_clock(close)?;
        (start < end).then_some(Self { start, end })
    }

    pub fn duration_min(&self) -> Minutes {
        self.end - self.start
    }

    pub fn overlaps(&self, other: &TimeRange) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// Store-boundary shape of one weekday's hours, as the settings collaborator
/// holds it. Validated into an `Option<TimeRange>` before the engine sees it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayHoursRecord {
    pub is_open: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub close: Option<String>,
}

impl DayHoursRecord {
    /// The open window, or `None` for a closed or malformed record
    /// (missing clock values, `open >= close`).
    pub fn window(&self) -> Option<TimeRange> {
        if !self.is_open {
            return None;
        }
        TimeRange::from_clock(self.open.as_deref()?, self.close.as_deref()?)
    }
}

/// Weekly opening hours: one optional open window per weekday.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekSchedule {
    days: [Option<TimeRange>; 7],
}

impl WeekSchedule {
    /// A schedule with every day closed.
    pub fn closed() -> Self {
        Self::default()
    }

    pub fn day(&self, weekday: Weekday) -> Option<TimeRange> {
        self.days[weekday.num_days_from_monday() as usize]
    }

    pub fn set_day(&mut self, weekday: Weekday, window: Option<TimeRange>) {
        self.days[weekday.num_days_from_monday() as usize] = window;
    }

    /// Builder form of [`WeekSchedule::set_day`]. A malformed clock pair
    /// leaves the day closed.
    pub fn with_day(mut self, weekday: Weekday, open: &str, close: &str) -> Self {
        self.set_day(weekday, TimeRange::from_clock(open, close));
        self
    }

    /// Validate loosely-typed per-day records into a schedule. Unknown keys
    /// and malformed entries come out closed.
    pub fn from_records(records: &HashMap<String, DayHoursRecord>) -> Self {
        let mut week = Self::closed();
        for (key, rec) in records {
            if let Some(weekday) = weekday_from_key(key) {
                week.set_day(weekday, rec.window());
            }
        }
        week
    }
}

fn weekday_from_key(key: &str) -> Option<Weekday> {
    match key {
        "monday" => Some(Weekday::Mon),
        "tuesday" => Some(Weekday::Tue),
        "wednesday" => Some(Weekday::Wed),
        "thursday" => Some(Weekday::Thu),
        "friday" => Some(Weekday::Fri),
        "saturday" => Some(Weekday::Sat),
        "sunday" => Some(Weekday::Sun),
        _ => None,
    }
}

/// Per-business booking settings, owned by the external settings store and
/// read-only here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessSettings {
    pub week: WeekSchedule,
    pub slot_interval_min: Minutes,
}

impl Default for BusinessSettings {
    /// Fallback applied when the settings store has no record for a
    /// business: weekdays 09:00–17:00, weekends closed, 30-minute slots.
    fn default() -> Self {
        let week = WeekSchedule::closed()
            .with_day(Weekday::Mon, "09:00", "17:00")
            .with_day(Weekday::Tue, "09:00", "17:00")
            .with_day(Weekday::Wed, "09:00", "17:00")
            .with_day(Weekday::Thu, "09:00", "17:00")
            .with_day(Weekday::Fri, "09:00", "17:00");
        Self {
            week,
            slot_interval_min: 30,
        }
    }
}

/// A staff resource named by a booking or a query: one concrete member, or
/// whoever is free.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StaffSelector {
    Specific(Ulid),
    Any,
}

impl StaffSelector {
    pub fn specific(&self) -> Option<Ulid> {
        match self {
            StaffSelector::Specific(id) => Some(*id),
            StaffSelector::Any => None,
        }
    }
}

/// Lifecycle state of an appointment. Only pending and confirmed bookings
/// consume capacity; the transitions themselves belong to the external
/// booking workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentStatus {
    Pending,
    Confirmed,
    Cancelled,
    Completed,
    NoShow,
}

impl AppointmentStatus {
    pub fn is_active(&self) -> bool {
        matches!(self, AppointmentStatus::Pending | AppointmentStatus::Confirmed)
    }
}

/// One booked appointment, as the appointment store returns it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: Ulid,
    pub date: chrono::NaiveDate,
    pub window: TimeRange,
    pub assignee: StaffSelector,
    pub status: AppointmentStatus,
}

/// A staff resource from the roster store. Only active members count toward
/// capacity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffMember {
    pub id: Ulid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub active: bool,
}

/// One consumed unit of slot capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BusyMarker {
    /// Booked by a named staff member.
    Staff(Ulid),
    /// An any-staff booking, keyed by appointment id. Consumes one unit of
    /// the pool without naming a member.
    Anonymous(Ulid),
}

/// Why a day came back with no bookable slots at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoSlotsReason {
    Closed,
    NoActiveStaff,
}

/// Result of one availability query: bookable slot starts in ascending
/// order, plus a reason when the day was ruled out wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayAvailability {
    pub slots: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<NoSlotsReason>,
}

impl DayAvailability {
    pub fn open(slots: Vec<String>) -> Self {
        Self {
            slots,
            reason: None,
        }
    }

    pub fn none(reason: NoSlotsReason) -> Self {
        Self {
            slots: Vec::new(),
            reason: Some(reason),
        }
    }
}
