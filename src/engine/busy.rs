use std::collections::HashSet;

use crate::model::{Appointment, BusyMarker, StaffSelector, TimeRange};

/// Project the day's appointments onto one candidate slot.
///
/// Only pending/confirmed appointments count. Overlap is strict half-open on
/// both sides: an appointment ending exactly at the slot's start, or
/// starting exactly at its end, leaves the slot untouched. Flipping either
/// inequality would silently shift effective capacity by one adjacent slot.
pub fn busy_markers(slot: &TimeRange, appointments: &[Appointment]) -> HashSet<BusyMarker> {
    let mut busy = HashSet::new();
    for appt in appointments {
        if !appt.status.is_active() || !slot.overlaps(&appt.window) {
            continue;
        }
        busy.insert(match appt.assignee {
            StaffSelector::Specific(id) => BusyMarker::Staff(id),
            StaffSelector::Any => BusyMarker::Anonymous(appt.id),
        });
    }
    busy
}
