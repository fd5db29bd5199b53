//! Moving an event to another day (the drag-and-drop path).

use crate::error::{EventError, EventResult};
use crate::event::{Day, Event};
use crate::manager::EventManager;
use crate::overlap;
use crate::store::KeyValueStore;

/// What happened to a reschedule request that did not conflict.
#[derive(Debug, Clone, PartialEq)]
pub enum RescheduleOutcome {
    /// The event now sits on the target day.
    Moved(Event),
    /// No event with that id exists; nothing was written.
    NotFound,
}

impl<S: KeyValueStore> EventManager<S> {
    /// Move event `id` to `target`, keeping every other field.
    ///
    /// The conflict check runs before anything is written, so a rejected move
    /// leaves the collection exactly as it was. The moving event never
    /// conflicts with itself, which matters when `target` is its current day.
    pub fn reschedule(&mut self, id: &str, target: Day) -> EventResult<RescheduleOutcome> {
        let mut events = self.store.load();

        let Some(index) = events.iter().position(|e| e.id == id) else {
            log::debug!("Event {} not found, nothing to reschedule", id);
            return Ok(RescheduleOutcome::NotFound);
        };

        let mut candidate = events[index].clone();
        candidate.date = target.date;
        candidate.month = target.month;
        candidate.year = target.year;

        if overlap::overlaps(&events, &candidate, Some(id)) {
            return Err(EventError::Overlap);
        }

        events[index] = candidate.clone();
        self.store.save_all(&events)?;
        log::debug!(
            "Moved event {} to {}-{:02}-{:02}",
            id,
            target.year,
            target.month + 1,
            target.date
        );

        Ok(RescheduleOutcome::Moved(candidate))
    }
}
