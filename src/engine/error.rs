use crate::model::Minutes;
use crate::store::StoreError;

/// Errors surfaced by the availability service. Input variants map to a
/// client error upstream; `Store` maps to a server error.
#[derive(Debug)]
pub enum EngineError {
    MissingBusinessId,
    BadBusinessId(String),
    MissingDate,
    BadDate(String),
    BadStaffId(String),
    BadDuration(i64),
    BadInterval(Minutes),
    Store(StoreError),
}

impl EngineError {
    pub fn is_invalid_input(&self) -> bool {
        !matches!(self, EngineError::Store(_))
    }
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineError::MissingBusinessId => write!(f, "business id is required"),
            EngineError::BadBusinessId(s) => write!(f, "not a business id: {s}"),
            EngineError::MissingDate => write!(f, "date is required"),
            EngineError::BadDate(s) => write!(f, "not a calendar date: {s}"),
            EngineError::BadStaffId(s) => write!(f, "not a staff id: {s}"),
            EngineError::BadDuration(d) => {
                write!(f, "service duration must be a positive number of minutes: {d}")
            }
            EngineError::BadInterval(i) => {
                write!(f, "slot interval must be a positive number of minutes: {i}")
            }
            EngineError::Store(e) => write!(f, "store error: {e}"),
        }
    }
}

impl std::error::Error for EngineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EngineError::Store(e) => Some(e),
            _ => None,
        }
    }
}

impl From<StoreError> for EngineError {
    fn from(e: StoreError) -> Self {
        EngineError::Store(e)
    }
}
