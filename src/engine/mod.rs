mod busy;
mod capacity;
mod error;
mod hours;
mod slots;

pub use busy::busy_markers;
pub use capacity::slot_open;
pub use error::EngineError;
pub use hours::hours_for;
pub use slots::candidate_slots;

use std::sync::Arc;
use std::time::Instant;

use tracing::debug;
use ulid::Ulid;

use crate::model::{DayAvailability, NoSlotsReason, StaffSelector, format_clock};
use crate::observability;
use crate::query::SlotQuery;
use crate::store::{AppointmentStore, SettingsStore, StaffRoster};

/// The availability resolver: a pure read over three injected collaborator
/// snapshots. Holds no state of its own, so one instance serves any number
/// of concurrent queries.
///
/// The answer is a point-in-time snapshot: this check and the eventual
/// booking write share no lock, so two concurrent callers can both see the
/// same slot open. The booking-write path must enforce its own exclusion
/// constraint on `(staff, date, window)`.
pub struct AvailabilityService {
    settings: Arc<dyn SettingsStore>,
    appointments: Arc<dyn AppointmentStore>,
    roster: Arc<dyn StaffRoster>,
}

impl AvailabilityService {
    pub fn new(
        settings: Arc<dyn SettingsStore>,
        appointments: Arc<dyn AppointmentStore>,
        roster: Arc<dyn StaffRoster>,
    ) -> Self {
        Self {
            settings,
            appointments,
            roster,
        }
    }

    /// Compute the bookable slot starts for one business day, ascending.
    pub async fn available_slots(
        &self,
        query: &SlotQuery,
    ) -> Result<DayAvailability, EngineError> {
        let started = Instant::now();
        let result = self.resolve(query).await;
        metrics::histogram!(observability::QUERY_DURATION_SECONDS)
            .record(started.elapsed().as_secs_f64());
        metrics::counter!(
            observability::QUERIES_TOTAL,
            "outcome" => observability::outcome_label(&result)
        )
        .increment(1);
        result
    }

    async fn resolve(&self, query: &SlotQuery) -> Result<DayAvailability, EngineError> {
        if query.duration_min <= 0 {
            return Err(EngineError::BadDuration(i64::from(query.duration_min)));
        }

        let settings = self.settings.settings(query.business_id).await?;
        if settings.slot_interval_min <= 0 {
            return Err(EngineError::BadInterval(settings.slot_interval_min));
        }

        let Some(window) = hours_for(&settings.week, query.date) else {
            debug!(business = %query.business_id, date = %query.date, "closed");
            return Ok(DayAvailability::none(NoSlotsReason::Closed));
        };

        // For an any request the pool is the active roster; a specific
        // request names its own pool of one and is not re-checked against
        // the roster.
        let relevant_staff: Vec<Ulid> = match query.staff {
            StaffSelector::Specific(id) => vec![id],
            StaffSelector::Any => self
                .roster
                .list_active(query.business_id)
                .await?
                .into_iter()
                .filter(|m| m.active)
                .map(|m| m.id)
                .collect(),
        };
        if relevant_staff.is_empty() {
            debug!(business = %query.business_id, date = %query.date, "no active staff");
            return Ok(DayAvailability::none(NoSlotsReason::NoActiveStaff));
        }

        let candidates = candidate_slots(&window, query.duration_min, settings.slot_interval_min);
        metrics::histogram!(observability::CANDIDATE_SLOTS).record(candidates.len() as f64);

        let appointments = self
            .appointments
            .active_for_date(query.business_id, query.date)
            .await?;

        let slots: Vec<String> = candidates
            .iter()
            .filter(|slot| {
                slot_open(&busy_markers(slot, &appointments), query.staff, &relevant_staff)
            })
            .map(|slot| format_clock(slot.start))
            .collect();

        debug!(
            business = %query.business_id,
            date = %query.date,
            candidates = candidates.len(),
            open = slots.len(),
            "availability resolved"
        );
        Ok(DayAvailability::open(slots))
    }
}
