use crate::model::{Minutes, TimeRange};

/// Enumerate candidate slots inside an open window: starts step from the
/// window's open time by `interval_min`, and a start is kept while the full
/// service still fits before close.
///
/// A duration longer than the window yields an empty list — a valid
/// outcome, not an error. Non-positive duration or interval is the caller's
/// input-validation responsibility.
pub fn candidate_slots(
    window: &TimeRange,
    duration_min: Minutes,
    interval_min: Minutes,
) -> Vec<TimeRange> {
    debug_assert!(duration_min > 0, "caller validates duration");
    debug_assert!(interval_min > 0, "caller validates interval");

    let mut slots = Vec::new();
    let mut start = window.start;
    while start + duration_min <= window.end {
        slots.push(TimeRange::new(start, start + duration_min));
        start += interval_min;
    }
    slots
}

#[cfg(test)]
mod tests {
    use crate::model::{format_clock, parse_clock};

    use super::*;

    fn window(open: &str, close: &str) -> TimeRange {
        TimeRange::from_clock(open, close).unwrap()
    }

    fn starts(slots: &[TimeRange]) -> Vec<String> {
        slots.iter().map(|s| format_clock(s.start)).collect()
    }

    #[test]
    fn full_day_every_half_hour() {
        let slots = candidate_slots(&window("09:00", "18:00"), 30, 30);
        assert_eq!(slots.len(), 18);
        assert_eq!(slots[0], TimeRange::new(540, 570));
        assert_eq!(starts(&slots)[0], "09:00");
        assert_eq!(starts(&slots)[17], "17:30");
        // ascending, no duplicates
        for pair in slots.windows(2) {
            assert!(pair[0].start < pair[1].start);
        }
    }

    #[test]
    fn hourly_slots_in_a_morning() {
        let slots = candidate_slots(&window("09:00", "12:00"), 60, 60);
        assert_eq!(starts(&slots), vec!["09:00", "10:00", "11:00"]);
    }

    #[test]
    fn duration_longer_than_window_yields_nothing() {
        let slots = candidate_slots(&window("09:00", "10:00"), 90, 30);
        assert!(slots.is_empty());
    }

    #[test]
    fn last_slot_may_end_exactly_at_close() {
        let slots = candidate_slots(&window("09:00", "10:00"), 60, 30);
        assert_eq!(slots, vec![TimeRange::new(540, 600)]);
    }

    #[test]
    fn duration_and_interval_may_differ() {
        // 45-minute service on a 30-minute grid: the 10:00 start no longer fits
        let slots = candidate_slots(&window("09:00", "10:30"), 45, 30);
        assert_eq!(
            slots,
            vec![
                TimeRange::new(540, 585),
                TimeRange::new(570, 615),
            ]
        );
        assert_eq!(slots[1].end, parse_clock("10:15").unwrap());
    }
}
