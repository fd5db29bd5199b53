//! The event collection as a single serialized blob.

use super::KeyValueStore;
use crate::error::{StoreError, StoreResult};
use crate::event::Event;

/// Storage key holding the JSON array of events.
pub const EVENTS_KEY: &str = "events";

/// Reads and writes the whole event collection at once.
#[derive(Debug, Clone)]
pub struct EventStore<S: KeyValueStore> {
    backend: S,
}

impl<S: KeyValueStore> EventStore<S> {
    pub fn new(backend: S) -> Self {
        EventStore { backend }
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    /// Load every event. Absent or malformed data loads as an empty list.
    pub fn load(&self) -> Vec<Event> {
        let Some(raw) = self.backend.get(EVENTS_KEY) else {
            return Vec::new();
        };

        match serde_json::from_str(&raw) {
            Ok(events) => events,
            Err(e) => {
                log::warn!("Ignoring unreadable event data: {}", e);
                Vec::new()
            }
        }
    }

    /// Replace the stored collection with `events` in one write.
    pub fn save_all(&mut self, events: &[Event]) -> StoreResult<()> {
        let content =
            serde_json::to_string(events).map_err(|e| StoreError::Serialization(e.to_string()))?;
        self.backend.set(EVENTS_KEY, &content)?;
        log::debug!("Saved {} events", events.len());
        Ok(())
    }
}
