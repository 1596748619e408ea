use async_trait::async_trait;
use chrono::NaiveDate;
use dashmap::DashMap;
use ulid::Ulid;

use crate::model::{Appointment, BusinessSettings, StaffMember};

/// Failure inside one of the read-only collaborators. Carried through the
/// engine unchanged — a failed fetch aborts the whole computation instead of
/// being read as "no bookings" or "no staff".
#[derive(Debug)]
pub struct StoreError(Box<dyn std::error::Error + Send + Sync>);

impl StoreError {
    pub fn new<E>(source: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        Self(source.into())
    }
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.0.as_ref())
    }
}

// ── Collaborator ports ───────────────────────────────────────────

/// Read-only settings collaborator. Implementations apply
/// [`BusinessSettings::default`] when no record exists for the business.
#[async_trait]
pub trait SettingsStore: Send + Sync {
    async fn settings(&self, business_id: Ulid) -> Result<BusinessSettings, StoreError>;
}

/// Read-only appointment collaborator.
#[async_trait]
pub trait AppointmentStore: Send + Sync {
    /// Appointments for one business day, pre-filtered to active statuses
    /// where the backing store can do so. The engine re-checks status, so a
    /// non-filtering implementation is still correct.
    async fn active_for_date(
        &self,
        business_id: Ulid,
        date: NaiveDate,
    ) -> Result<Vec<Appointment>, StoreError>;
}

/// Read-only staff roster collaborator. Only consulted for any-staff
/// queries; specific-staff queries trust the caller-supplied id.
#[async_trait]
pub trait StaffRoster: Send + Sync {
    async fn list_active(&self, business_id: Ulid) -> Result<Vec<StaffMember>, StoreError>;
}

// ── In-memory implementations ────────────────────────────────────

/// In-memory settings store for tests and in-process embedding.
#[derive(Default)]
pub struct InMemorySettings {
    records: DashMap<Ulid, BusinessSettings>,
}

impl InMemorySettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn put(&self, business_id: Ulid, settings: BusinessSettings) {
        self.records.insert(business_id, settings);
    }
}

#[async_trait]
impl SettingsStore for InMemorySettings {
    async fn settings(&self, business_id: Ulid) -> Result<BusinessSettings, StoreError> {
        Ok(self
            .records
            .get(&business_id)
            .map(|e| e.value().clone())
            .unwrap_or_default())
    }
}

/// In-memory appointment store keyed by business.
#[derive(Default)]
pub struct InMemoryAppointments {
    records: DashMap<Ulid, Vec<Appointment>>,
}

impl InMemoryAppointments {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn put(&self, business_id: Ulid, appointment: Appointment) {
        self.records
            .entry(business_id)
            .or_default()
            .push(appointment);
    }
}

#[async_trait]
impl AppointmentStore for InMemoryAppointments {
    async fn active_for_date(
        &self,
        business_id: Ulid,
        date: NaiveDate,
    ) -> Result<Vec<Appointment>, StoreError> {
        Ok(self
            .records
            .get(&business_id)
            .map(|e| {
                e.value()
                    .iter()
                    .filter(|a| a.date == date && a.status.is_active())
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }
}

/// In-memory staff roster keyed by business.
#[derive(Default)]
pub struct InMemoryRoster {
    records: DashMap<Ulid, Vec<StaffMember>>,
}

impl InMemoryRoster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn put(&self, business_id: Ulid, member: StaffMember) {
        self.records.entry(business_id).or_default().push(member);
    }
}

#[async_trait]
impl StaffRoster for InMemoryRoster {
    async fn list_active(&self, business_id: Ulid) -> Result<Vec<StaffMember>, StoreError> {
        Ok(self
            .records
            .get(&business_id)
            .map(|e| e.value().iter().filter(|m| m.active).cloned().collect())
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use crate::model::{AppointmentStatus, StaffSelector, TimeRange};

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[tokio::test]
    async fn settings_fall_back_to_default() {
        let store = InMemorySettings::new();
        let settings = store.settings(Ulid::new()).await.unwrap();
        assert_eq!(settings, BusinessSettings::default());
    }

    #[tokio::test]
    async fn appointments_filtered_by_date_and_status() {
        let store = InMemoryAppointments::new();
        let business = Ulid::new();
        let staff = Ulid::new();
        let window = TimeRange::from_clock("10:00", "11:00").unwrap();

        let mk = |date: NaiveDate, status: AppointmentStatus| Appointment {
            id: Ulid::new(),
            date,
            window,
            assignee: StaffSelector::Specific(staff),
            status,
        };

        let monday = date(2024, 1, 1);
        store.put(business, mk(monday, AppointmentStatus::Confirmed));
        store.put(business, mk(monday, AppointmentStatus::Cancelled));
        store.put(business, mk(date(2024, 1, 2), AppointmentStatus::Confirmed));

        let listed = store.active_for_date(business, monday).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].status, AppointmentStatus::Confirmed);
        assert_eq!(listed[0].date, monday);

        let other_business = store.active_for_date(Ulid::new(), monday).await.unwrap();
        assert!(other_business.is_empty());
    }

    #[tokio::test]
    async fn roster_lists_only_active_members() {
        let store = InMemoryRoster::new();
        let business = Ulid::new();
        let active = Ulid::new();
        store.put(
            business,
            StaffMember {
                id: active,
                name: Some("Ada".into()),
                active: true,
            },
        );
        store.put(
            business,
            StaffMember {
                id: Ulid::new(),
                name: None,
                active: false,
            },
        );

        let listed = store.list_active(business).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, active);
    }
}
