use std::collections::HashSet;

use ulid::Ulid;

use crate::model::{BusyMarker, StaffSelector};

/// Decide whether one slot can still be booked for the requested resource.
///
/// A specific request only cares about that member's own marker. An any
/// request counts remaining pool units: active members minus members with a
/// named booking minus anonymous bookings. Each anonymous booking consumes
/// one generic unit regardless of which member ends up assigned to it.
pub fn slot_open(
    busy: &HashSet<BusyMarker>,
    requested: StaffSelector,
    active_staff: &[Ulid],
) -> bool {
    match requested {
        StaffSelector::Specific(id) => !busy.contains(&BusyMarker::Staff(id)),
        StaffSelector::Any => {
            let busy_named = active_staff
                .iter()
                .filter(|id| busy.contains(&BusyMarker::Staff(**id)))
                .count();
            let busy_anon = busy
                .iter()
                .filter(|m| matches!(m, BusyMarker::Anonymous(_)))
                .count();
            active_staff.len() > busy_named + busy_anon
        }
    }
}
