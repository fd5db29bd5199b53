use anyhow::Result;
use owo_colors::OwoColorize;
use schedule_it_core::store::KeyValueStore;
use schedule_it_core::{Day, EventManager, RescheduleOutcome};

use crate::render::Render;

/// Move an event to another day. `month` is zero-based and, like `year`,
/// defaults to the event's current one.
pub fn run<S: KeyValueStore>(
    manager: &mut EventManager<S>,
    id: &str,
    day: u32,
    month: Option<u32>,
    year: Option<i32>,
) -> Result<()> {
    let Some(event) = manager.find(id) else {
        println!("{}", format!("No event with id '{}'", id).dimmed());
        return Ok(());
    };

    let target = Day::new(
        day,
        month.unwrap_or(event.month),
        year.unwrap_or(event.year),
    );

    match manager.reschedule(id, target)? {
        RescheduleOutcome::Moved(moved) => {
            println!(
                "{}",
                format!("  Moved: {} to {}", moved.name, target.render()).green()
            );
        }
        RescheduleOutcome::NotFound => {
            println!("{}", format!("No event with id '{}'", id).dimmed());
        }
    }

    Ok(())
}
