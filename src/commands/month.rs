use anyhow::Result;
use schedule_it_core::EventManager;
use schedule_it_core::month::{self, MonthCursor};
use schedule_it_core::store::KeyValueStore;

use crate::render::render_month;

pub fn run<S: KeyValueStore>(manager: &EventManager<S>, cursor: MonthCursor) -> Result<()> {
    let events = manager.events_in_month(cursor.month, cursor.year);
    println!("{}", render_month(cursor, &events, month::today()));
    Ok(())
}
