use anyhow::Result;
use owo_colors::OwoColorize;
use schedule_it_core::store::KeyValueStore;
use schedule_it_core::{Day, EventManager, EventType};

use super::EventForm;

/// Fields given on the command line. `month` is zero-based.
#[derive(Default)]
pub struct Changes {
    pub name: Option<String>,
    pub day: Option<u32>,
    pub month: Option<u32>,
    pub year: Option<i32>,
    pub start: Option<String>,
    pub end: Option<String>,
    pub description: Option<String>,
    pub event_type: Option<EventType>,
}

pub fn run<S: KeyValueStore>(
    manager: &mut EventManager<S>,
    id: &str,
    changes: Changes,
) -> Result<()> {
    let Some(event) = manager.find(id) else {
        anyhow::bail!("Event '{}' not found", id);
    };

    let form = EventForm {
        name: changes.name.unwrap_or(event.name),
        description: changes.description.or(event.description),
        event_type: changes.event_type.or(event.event_type),
        day: Day::new(
            changes.day.unwrap_or(event.date),
            changes.month.unwrap_or(event.month),
            changes.year.unwrap_or(event.year),
        ),
        start: changes.start.unwrap_or(event.start_time),
        end: changes.end.unwrap_or(event.end_time),
    };
    form.check_times()?;

    let name = form.name.clone();
    manager.save(form.into_draft(), Some(id))?;

    println!("{}", format!("  Updated: {}", name).yellow());
    Ok(())
}
