//! Create, edit, delete and query events.
//!
//! Every mutation reads the full collection, changes it in memory and
//! writes it back in one `save_all`.

use uuid::Uuid;

use crate::clock;
use crate::error::{EventError, EventResult};
use crate::event::{Day, Event, EventDraft};
use crate::overlap;
use crate::search;
use crate::store::{EventStore, KeyValueStore};

const REQUIRED_FIELDS: &str = "Name, Start Time and End Time are required";

pub struct EventManager<S: KeyValueStore> {
    pub(crate) store: EventStore<S>,
}

impl<S: KeyValueStore> EventManager<S> {
    pub fn new(backend: S) -> Self {
        EventManager {
            store: EventStore::new(backend),
        }
    }

    /// All events in storage order.
    pub fn list(&self) -> Vec<Event> {
        self.store.load()
    }

    /// All events by (year, month, date, start time). Ties keep storage order.
    pub fn list_sorted(&self) -> Vec<Event> {
        let mut events = self.list();
        events.sort_by_key(Event::sort_key);
        events
    }

    /// Sorted events matching `query`. See [`search::matches`].
    pub fn search(&self, query: &str) -> Vec<Event> {
        search::filter(self.list_sorted(), query)
    }

    pub fn find(&self, id: &str) -> Option<Event> {
        self.list().into_iter().find(|e| e.id == id)
    }

    pub fn events_on_day(&self, day: Day) -> Vec<Event> {
        self.list().into_iter().filter(|e| e.is_on(day)).collect()
    }

    /// Events in a month, in storage order. `month` is zero-based.
    pub fn events_in_month(&self, month: u32, year: i32) -> Vec<Event> {
        self.list()
            .into_iter()
            .filter(|e| e.month == month && e.year == year)
            .collect()
    }

    /// Create an event, or replace the fields of the event `editing_id`.
    ///
    /// Editing an id that is no longer stored changes nothing.
    pub fn save(&mut self, draft: EventDraft, editing_id: Option<&str>) -> EventResult<()> {
        validate(&draft)?;

        let mut events = self.store.load();

        if overlap::overlaps(&events, &draft, editing_id) {
            return Err(EventError::Overlap);
        }

        match editing_id {
            Some(id) => match events.iter_mut().find(|e| e.id == id) {
                Some(event) => {
                    event.apply(draft);
                    log::debug!("Updated event {}", id);
                }
                None => log::debug!("Event {} no longer exists, nothing to update", id),
            },
            None => {
                let event = Event::from_draft(Uuid::new_v4().to_string(), draft);
                log::debug!("Created event {}", event.id);
                events.push(event);
            }
        }

        self.store.save_all(&events)?;
        Ok(())
    }

    /// Remove the event with `id`. Unknown ids are ignored.
    pub fn delete(&mut self, id: &str) -> EventResult<()> {
        let mut events = self.store.load();
        events.retain(|e| e.id != id);
        self.store.save_all(&events)?;
        log::debug!("Deleted event {}", id);
        Ok(())
    }
}

fn validate(draft: &EventDraft) -> EventResult<()> {
    if draft.name.trim().is_empty() || draft.start_time.is_empty() || draft.end_time.is_empty() {
        return Err(EventError::Validation(REQUIRED_FIELDS.to_string()));
    }

    for (label, value) in [("Start Time", &draft.start_time), ("End Time", &draft.end_time)] {
        if clock::parse(value).is_none() {
            return Err(EventError::Validation(format!(
                "{} must be a time like 09:30, got '{}'",
                label, value
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::EventType;
    use crate::store::MemoryStore;

    fn make_draft(name: &str, date: u32, start: &str, end: &str) -> EventDraft {
        EventDraft {
            name: name.to_string(),
            date,
            month: 2,
            year: 2024,
            start_time: start.to_string(),
            end_time: end.to_string(),
            ..Default::default()
        }
    }

    fn manager() -> EventManager<MemoryStore> {
        EventManager::new(MemoryStore::new())
    }

    #[test]
    fn test_save_standup_into_empty_collection() {
        let mut manager = manager();
        manager
            .save(make_draft("Standup", 5, "09:00", "09:30"), None)
            .unwrap();

        let events = manager.list();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].name, "Standup");
        assert!(Uuid::parse_str(&events[0].id).is_ok());
    }

    #[test]
    fn test_overlapping_save_is_rejected() {
        let mut manager = manager();
        manager
            .save(make_draft("Standup", 5, "09:00", "09:30"), None)
            .unwrap();

        let err = manager
            .save(make_draft("Sync", 5, "09:15", "09:45"), None)
            .unwrap_err();
        assert!(matches!(err, EventError::Overlap));
        assert_eq!(err.to_string(), "Event overlaps with another existing event.");
        assert_eq!(manager.list().len(), 1);
    }

    #[test]
    fn test_back_to_back_events_are_rejected() {
        let mut manager = manager();
        manager
            .save(make_draft("First", 5, "09:00", "10:00"), None)
            .unwrap();
        let err = manager
            .save(make_draft("Second", 5, "10:00", "11:00"), None)
            .unwrap_err();
        assert!(matches!(err, EventError::Overlap));
    }

    #[test]
    fn test_missing_required_fields() {
        let mut manager = manager();
        for draft in [
            make_draft("", 5, "09:00", "09:30"),
            make_draft("Standup", 5, "", "09:30"),
            make_draft("Standup", 5, "09:00", ""),
        ] {
            let err = manager.save(draft, None).unwrap_err();
            assert!(matches!(err, EventError::Validation(_)));
            assert_eq!(err.to_string(), REQUIRED_FIELDS);
        }
        assert!(manager.list().is_empty());
    }

    #[test]
    fn test_whitespace_only_name_is_missing() {
        let mut manager = manager();
        let err = manager
            .save(make_draft("   ", 5, "09:00", "09:30"), None)
            .unwrap_err();
        assert_eq!(err.to_string(), REQUIRED_FIELDS);
        assert!(manager.list().is_empty());
    }

    #[test]
    fn test_malformed_time_is_rejected() {
        let mut manager = manager();
        let err = manager
            .save(make_draft("Standup", 5, "9am", "09:30"), None)
            .unwrap_err();
        assert!(matches!(err, EventError::Validation(_)));
    }

    #[test]
    fn test_edit_does_not_conflict_with_itself() {
        let mut manager = manager();
        manager
            .save(make_draft("Standup", 5, "09:00", "09:30"), None)
            .unwrap();
        let id = manager.list()[0].id.clone();

        let mut draft = make_draft("Standup (moved room)", 5, "09:00", "09:30");
        draft.event_type = Some(EventType::Work);
        manager.save(draft, Some(&id)).unwrap();

        let events = manager.list();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].id, id);
        assert_eq!(events[0].name, "Standup (moved room)");
        assert_eq!(events[0].event_type, Some(EventType::Work));
    }

    #[test]
    fn test_edit_still_checks_other_events() {
        let mut manager = manager();
        manager
            .save(make_draft("Standup", 5, "09:00", "09:30"), None)
            .unwrap();
        manager
            .save(make_draft("Review", 5, "11:00", "12:00"), None)
            .unwrap();
        let review_id = manager.list()[1].id.clone();

        let err = manager
            .save(make_draft("Review", 5, "09:15", "10:00"), Some(&review_id))
            .unwrap_err();
        assert!(matches!(err, EventError::Overlap));
        assert_eq!(manager.find(&review_id).unwrap().start_time, "11:00");
    }

    #[test]
    fn test_edit_keeps_position() {
        let mut manager = manager();
        manager.save(make_draft("A", 1, "09:00", "10:00"), None).unwrap();
        manager.save(make_draft("B", 2, "09:00", "10:00"), None).unwrap();
        manager.save(make_draft("C", 3, "09:00", "10:00"), None).unwrap();
        let b_id = manager.list()[1].id.clone();

        manager
            .save(make_draft("B2", 20, "13:00", "14:00"), Some(&b_id))
            .unwrap();

        let names: Vec<_> = manager.list().into_iter().map(|e| e.name).collect();
        assert_eq!(names, vec!["A", "B2", "C"]);
    }

    #[test]
    fn test_edit_of_missing_id_changes_nothing() {
        let mut manager = manager();
        manager.save(make_draft("A", 1, "09:00", "10:00"), None).unwrap();
        let before = manager.list();

        manager
            .save(make_draft("Ghost", 2, "09:00", "10:00"), Some("missing"))
            .unwrap();
        assert_eq!(manager.list(), before);
    }

    #[test]
    fn test_delete_is_idempotent() {
        let mut manager = manager();
        manager.save(make_draft("A", 1, "09:00", "10:00"), None).unwrap();
        manager.save(make_draft("B", 2, "09:00", "10:00"), None).unwrap();
        let a_id = manager.list()[0].id.clone();

        manager.delete("does-not-exist").unwrap();
        assert_eq!(manager.list().len(), 2);

        manager.delete(&a_id).unwrap();
        let once = manager.list();
        manager.delete(&a_id).unwrap();
        assert_eq!(manager.list(), once);
        assert_eq!(once.len(), 1);
        assert_eq!(once[0].name, "B");
    }

    #[test]
    fn test_list_sorted_is_chronological_and_stable() {
        let mut manager = manager();
        let mut next_year = make_draft("Next year", 1, "08:00", "08:15");
        next_year.year = 2025;
        next_year.month = 0;
        manager.save(next_year, None).unwrap();
        manager.save(make_draft("Late", 5, "15:00", "16:00"), None).unwrap();
        manager.save(make_draft("Early", 5, "08:00", "08:30"), None).unwrap();
        let mut april = make_draft("April", 1, "07:00", "07:15");
        april.month = 3;
        manager.save(april, None).unwrap();
        manager.save(make_draft("Day four", 4, "23:00", "23:45"), None).unwrap();

        // Same key as "Early", written through the store so the overlap rule
        // does not reject it.
        let mut events = manager.list();
        let mut twin = events[2].clone();
        twin.id = "twin".to_string();
        twin.name = "Early twin".to_string();
        events.push(twin);
        manager.store.save_all(&events).unwrap();

        let names: Vec<_> = manager.list_sorted().into_iter().map(|e| e.name).collect();
        assert_eq!(
            names,
            vec!["Day four", "Early", "Early twin", "Late", "April", "Next year"]
        );
    }

    #[test]
    fn test_search_is_sorted() {
        let mut manager = manager();
        let mut late = make_draft("Workshop", 20, "10:00", "11:00");
        late.event_type = Some(EventType::Other);
        manager.save(late, None).unwrap();
        let mut early = make_draft("Planning", 3, "10:00", "11:00");
        early.event_type = Some(EventType::Work);
        manager.save(early, None).unwrap();
        manager.save(make_draft("Gym", 4, "18:00", "19:00"), None).unwrap();

        let names: Vec<_> = manager.search("WORK").into_iter().map(|e| e.name).collect();
        assert_eq!(names, vec!["Planning", "Workshop"]);
        assert_eq!(manager.search("").len(), 3);
    }

    #[test]
    fn test_events_in_month_and_on_day() {
        let mut manager = manager();
        manager.save(make_draft("A", 5, "09:00", "10:00"), None).unwrap();
        manager.save(make_draft("B", 5, "11:00", "12:00"), None).unwrap();
        let mut other = make_draft("C", 5, "09:00", "10:00");
        other.month = 3;
        manager.save(other, None).unwrap();

        assert_eq!(manager.events_in_month(2, 2024).len(), 2);
        assert_eq!(manager.events_in_month(3, 2024).len(), 1);
        assert_eq!(manager.events_on_day(Day::new(5, 2, 2024)).len(), 2);
        assert!(manager.events_on_day(Day::new(6, 2, 2024)).is_empty());
    }
}
