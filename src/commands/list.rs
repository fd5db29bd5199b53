use anyhow::Result;
use owo_colors::OwoColorize;
use schedule_it_core::EventManager;
use schedule_it_core::store::KeyValueStore;

use crate::render::Render;

pub fn run<S: KeyValueStore>(manager: &EventManager<S>, query: Option<&str>) -> Result<()> {
    let events = manager.search(query.unwrap_or(""));

    if events.is_empty() {
        println!("{}", "No events found".dimmed());
        return Ok(());
    }

    for event in &events {
        println!("{}", event.render());
    }

    Ok(())
}
