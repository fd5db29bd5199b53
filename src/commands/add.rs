use anyhow::Result;
use owo_colors::OwoColorize;
use schedule_it_core::EventManager;
use schedule_it_core::store::KeyValueStore;

use super::EventForm;
use crate::render::Render;

pub fn run<S: KeyValueStore>(manager: &mut EventManager<S>, form: EventForm) -> Result<()> {
    form.check_times()?;

    let day = form.day;
    let name = form.name.clone();
    manager.save(form.into_draft(), None)?;

    println!("{}", format!("  Created: {} on {}", name, day.render()).green());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use schedule_it_core::store::MemoryStore;
    use schedule_it_core::{Day, EventError};

    fn make_form(name: &str, start: &str, end: &str) -> EventForm {
        EventForm {
            name: name.to_string(),
            description: None,
            event_type: None,
            day: Day::new(5, 2, 2024),
            start: start.to_string(),
            end: end.to_string(),
        }
    }

    #[test]
    fn test_add_persists_event() {
        let mut manager = EventManager::new(MemoryStore::new());
        run(&mut manager, make_form("Standup", "09:00", "09:30")).unwrap();
        assert_eq!(manager.list().len(), 1);
    }

    #[test]
    fn test_add_reports_overlap() {
        let mut manager = EventManager::new(MemoryStore::new());
        run(&mut manager, make_form("Standup", "09:00", "09:30")).unwrap();

        let err = run(&mut manager, make_form("Sync", "09:15", "09:45")).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<EventError>(),
            Some(EventError::Overlap)
        ));
        assert_eq!(manager.list().len(), 1);
    }

    #[test]
    fn test_add_rejects_reversed_times_before_saving() {
        let mut manager = EventManager::new(MemoryStore::new());
        assert!(run(&mut manager, make_form("Standup", "10:00", "09:00")).is_err());
        assert!(manager.list().is_empty());
    }
}
