//! Case-insensitive free-text filter over events.

use crate::event::Event;

/// True if `query` appears in the event's name, description, type, date,
/// start time or end time, ignoring case. An empty query matches everything.
pub fn matches(event: &Event, query: &str) -> bool {
    let needle = query.to_lowercase();
    if needle.is_empty() {
        return true;
    }

    let fields = [
        event.name.clone(),
        event.description.clone().unwrap_or_default(),
        event.event_type.map(|t| t.to_string()).unwrap_or_default(),
        event.date.to_string(),
        event.start_time.clone(),
        event.end_time.clone(),
    ];

    fields
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Keep the events matching `query`, preserving order.
pub fn filter(events: Vec<Event>, query: &str) -> Vec<Event> {
    events.into_iter().filter(|e| matches(e, query)).collect()
}
