use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ulid::Ulid;

use crate::engine::EngineError;
use crate::model::{Minutes, StaffSelector};

/// One availability query as the transport layer hands it over, before any
/// validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotQueryRequest {
    pub business_id: String,
    /// Calendar date, `"YYYY-MM-DD"`.
    pub date: String,
    pub duration_min: i64,
    /// A staff ULID, or `"any"`.
    #[serde(default = "any_staff")]
    pub staff: String,
}

fn any_staff() -> String {
    "any".into()
}

/// A validated availability query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotQuery {
    pub business_id: Ulid,
    pub date: NaiveDate,
    pub duration_min: Minutes,
    pub staff: StaffSelector,
}

impl SlotQuery {
    /// Validate a raw request. Each rejection names the offending field so
    /// transports can answer with a client error.
    pub fn parse(req: &SlotQueryRequest) -> Result<Self, EngineError> {
        Self::parse_inner(req).inspect_err(|e| tracing::warn!("rejected query: {e}"))
    }

    fn parse_inner(req: &SlotQueryRequest) -> Result<Self, EngineError> {
        let business_id = req.business_id.trim();
        if business_id.is_empty() {
            return Err(EngineError::MissingBusinessId);
        }
        let business_id = Ulid::from_string(business_id)
            .map_err(|_| EngineError::BadBusinessId(req.business_id.clone()))?;

        let date = req.date.trim();
        if date.is_empty() {
            return Err(EngineError::MissingDate);
        }
        let date: NaiveDate = date
            .parse()
            .map_err(|_| EngineError::BadDate(req.date.clone()))?;

        if req.duration_min <= 0 {
            return Err(EngineError::BadDuration(req.duration_min));
        }
        let duration_min = Minutes::try_from(req.duration_min)
            .map_err(|_| EngineError::BadDuration(req.duration_min))?;

        let staff = match req.staff.trim() {
            "any" => StaffSelector::Any,
            s => StaffSelector::Specific(
                Ulid::from_string(s).map_err(|_| EngineError::BadStaffId(req.staff.clone()))?,
            ),
        };

        Ok(Self {
            business_id,
            date,
            duration_min,
            staff,
        })
    }
}
