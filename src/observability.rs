use crate::engine::EngineError;
use crate::model::{DayAvailability, NoSlotsReason};

// ── RED metrics (request-driven) ────────────────────────────────

/// Counter: availability queries resolved. Labels: outcome.
pub const QUERIES_TOTAL: &str = "slotwise_queries_total";

/// Histogram: query latency in seconds.
pub const QUERY_DURATION_SECONDS: &str = "slotwise_query_duration_seconds";

/// Histogram: candidate slots generated per query.
pub const CANDIDATE_SLOTS: &str = "slotwise_candidate_slots";

/// Map a query result to a short outcome label for metrics.
pub fn outcome_label(result: &Result<DayAvailability, EngineError>) -> &'static str {
    match result {
        Ok(day) => match day.reason {
            None => "ok",
            Some(NoSlotsReason::Closed) => "closed",
            Some(NoSlotsReason::NoActiveStaff) => "no_active_staff",
        },
        Err(e) if e.is_invalid_input() => "invalid_input",
        Err(_) => "store_error",
    }
}

#[cfg(test)]
mod tests {
    use crate::store::StoreError;

    use super::*;

    #[test]
    fn labels_cover_the_outcome_space() {
        assert_eq!(outcome_label(&Ok(DayAvailability::open(vec![]))), "ok");
        assert_eq!(
            outcome_label(&Ok(DayAvailability::none(NoSlotsReason::Closed))),
            "closed"
        );
        assert_eq!(
            outcome_label(&Ok(DayAvailability::none(NoSlotsReason::NoActiveStaff))),
            "no_active_staff"
        );
        assert_eq!(
            outcome_label(&Err(EngineError::BadDuration(0))),
            "invalid_input"
        );
        assert_eq!(
            outcome_label(&Err(EngineError::Store(StoreError::new("down")))),
            "store_error"
        );
    }
}
