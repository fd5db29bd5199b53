//! "HH:MM" clock times.
//!
//! Times are kept as zero-padded strings so that string order is
//! chronological order.

use chrono::{NaiveTime, Timelike};

/// Granularity of the time pickers, in minutes.
pub const SLOT_MINUTES: u32 = 15;

pub const DEFAULT_START: &str = "09:00";
pub const DEFAULT_END: &str = "10:00";

/// Parse a strict, zero-padded "HH:MM" string.
pub fn parse(s: &str) -> Option<NaiveTime> {
    if s.len() != 5 {
        return None;
    }
    NaiveTime::parse_from_str(s, "%H:%M").ok()
}

/// Every selectable time of day: 00:00, 00:15, ... 23:45.
pub fn time_slots() -> Vec<String> {
    (0..24)
        .flat_map(|hour| {
            (0..60)
                .step_by(SLOT_MINUTES as usize)
                .map(move |minute| format!("{:02}:{:02}", hour, minute))
        })
        .collect()
}

pub fn is_time_slot(s: &str) -> bool {
    parse(s).is_some_and(|t| t.minute() % SLOT_MINUTES == 0)
}
