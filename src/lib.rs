//! slotwise — appointment-slot availability resolution.
//!
//! Given a business's weekly hours, a slot granularity, a staff roster, and
//! the day's booked appointments, compute which fixed-width slots remain
//! bookable. The crate is a pure read: it owns no storage and performs no
//! writes. Settings, appointments, and staff arrive as snapshots from the
//! read-only collaborators injected into [`engine::AvailabilityService`];
//! booking writes, and the double-booking protection they need, live behind
//! those collaborators.

pub mod engine;
pub mod model;
pub mod observability;
pub mod query;
pub mod store;
