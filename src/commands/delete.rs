use anyhow::Result;
use dialoguer::Confirm;
use owo_colors::OwoColorize;
use schedule_it_core::EventManager;
use schedule_it_core::store::KeyValueStore;

pub fn run<S: KeyValueStore>(manager: &mut EventManager<S>, id: &str, yes: bool) -> Result<()> {
    let Some(event) = manager.find(id) else {
        println!("{}", format!("No event with id '{}'", id).dimmed());
        return Ok(());
    };

    if !yes {
        let confirmed = Confirm::new()
            .with_prompt(format!("  Delete '{}' ({})?", event.name, event.time_range()))
            .default(false)
            .interact()?;
        if !confirmed {
            return Ok(());
        }
    }

    manager.delete(id)?;
    println!("{}", format!("  Deleted: {}", event.name).red());
    Ok(())
}
