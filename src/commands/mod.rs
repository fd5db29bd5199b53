pub mod add;
pub mod delete;
pub mod edit;
pub mod export;
pub mod list;
pub mod month;
pub mod move_event;

use anyhow::Result;
use schedule_it_core::clock;
use schedule_it_core::month::MonthCursor;
use schedule_it_core::{Day, EventDraft, EventType};

/// Month from 1-based CLI arguments, falling back to the current month/year.
pub fn resolve_month(month: Option<u32>, year: Option<i32>) -> MonthCursor {
    let current = MonthCursor::current();
    MonthCursor {
        month: month.map(|m| m - 1).unwrap_or(current.month),
        year: year.unwrap_or(current.year),
    }
}

/// What the add/edit form submits.
pub struct EventForm {
    pub name: String,
    pub description: Option<String>,
    pub event_type: Option<EventType>,
    pub day: Day,
    pub start: String,
    pub end: String,
}

impl EventForm {
    /// The time pickers only offer 15-minute slots, and the end must come
    /// after the start.
    pub fn check_times(&self) -> Result<()> {
        for (label, value) in [("Start time", &self.start), ("End time", &self.end)] {
            if !clock::is_time_slot(value) {
                anyhow::bail!(
                    "{} '{}' must be HH:MM in {}-minute steps",
                    label,
                    value,
                    clock::SLOT_MINUTES
                );
            }
        }

        if self.end <= self.start {
            anyhow::bail!("End time must be after start time");
        }

        Ok(())
    }

    pub fn into_draft(self) -> EventDraft {
        EventDraft {
            name: self.name,
            description: self.description.filter(|d| !d.is_empty()),
            event_type: self.event_type,
            date: self.day.date,
            month: self.day.month,
            year: self.day.year,
            start_time: self.start,
            end_time: self.end,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_form(start: &str, end: &str) -> EventForm {
        EventForm {
            name: "Standup".to_string(),
            description: Some(String::new()),
            event_type: None,
            day: Day::new(5, 2, 2024),
            start: start.to_string(),
            end: end.to_string(),
        }
    }

    #[test]
    fn test_check_times() {
        assert!(make_form("09:00", "09:15").check_times().is_ok());
        assert!(make_form("09:00", "09:00").check_times().is_err());
        assert!(make_form("10:00", "09:00").check_times().is_err());
        assert!(make_form("09:10", "10:00").check_times().is_err());
        assert!(make_form("9:00", "10:00").check_times().is_err());
    }

    #[test]
    fn test_into_draft_drops_empty_description() {
        let draft = make_form("09:00", "10:00").into_draft();
        assert_eq!(draft.description, None);
        assert_eq!((draft.date, draft.month, draft.year), (5, 2, 2024));
    }

    #[test]
    fn test_resolve_month_is_zero_based() {
        let cursor = resolve_month(Some(3), Some(2024));
        assert_eq!(cursor, MonthCursor { month: 2, year: 2024 });
    }
}
