//! Core of the schedule-it calendar.
//!
//! This crate holds everything that is not presentation:
//! - `Event`, `EventDraft` and the same-day overlap rule
//! - `EventManager`, which validates, persists, sorts, searches and reschedules
//! - the `store` seam over a key-value blob store
//! - month-grid arithmetic and JSON/CSV export for the front end

pub mod clock;
pub mod config;
pub mod error;
pub mod event;
pub mod export;
pub mod manager;
pub mod month;
pub mod overlap;
pub mod reschedule;
pub mod search;
pub mod store;

pub use error::{EventError, EventResult};
pub use event::{Day, Event, EventDraft, EventType};
pub use manager::EventManager;
pub use reschedule::RescheduleOutcome;
