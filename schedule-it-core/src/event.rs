//! The event record and the draft a form submits.
//!
//! Field names on the wire are fixed: `id`, `name`, `description`, `type`,
//! `date`, `month`, `year`, `startTime`, `endTime`. `month` is zero-based.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::clock;

/// Classification shown as a colour in the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventType {
    Work,
    Personal,
    Other,
}

impl EventType {
    pub const ALL: [EventType; 3] = [EventType::Work, EventType::Personal, EventType::Other];

    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::Work => "Work",
            EventType::Personal => "Personal",
            EventType::Other => "Other",
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EventType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown event type '{}'. Expected Work, Personal or Other", s))
    }
}

/// A calendar day. `month` is zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Day {
    pub date: u32,
    pub month: u32,
    pub year: i32,
}

impl Day {
    pub fn new(date: u32, month: u32, year: i32) -> Self {
        Day { date, month, year }
    }
}

/// Anything that occupies a time range on a day.
pub trait Scheduled {
    fn day(&self) -> Day;
    fn start_time(&self) -> &str;
    fn end_time(&self) -> &str;
}

/// A stored calendar event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub name: String,
    #[serde(default, with = "blank_as_none")]
    pub description: Option<String>,
    #[serde(rename = "type", default, with = "event_type_field")]
    pub event_type: Option<EventType>,
    pub date: u32,
    pub month: u32,
    pub year: i32,
    pub start_time: String,
    pub end_time: String,
}

/// The user-editable fields of an event.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventDraft {
    pub name: String,
    pub description: Option<String>,
    pub event_type: Option<EventType>,
    pub date: u32,
    pub month: u32,
    pub year: i32,
    pub start_time: String,
    pub end_time: String,
}

impl Event {
    pub fn from_draft(id: String, draft: EventDraft) -> Self {
        Event {
            id,
            name: draft.name,
            description: draft.description,
            event_type: draft.event_type,
            date: draft.date,
            month: draft.month,
            year: draft.year,
            start_time: draft.start_time,
            end_time: draft.end_time,
        }
    }

    /// Replace every mutable field, keeping the id.
    pub fn apply(&mut self, draft: EventDraft) {
        let id = std::mem::take(&mut self.id);
        *self = Event::from_draft(id, draft);
    }

    pub fn draft(&self) -> EventDraft {
        EventDraft {
            name: self.name.clone(),
            description: self.description.clone(),
            event_type: self.event_type,
            date: self.date,
            month: self.month,
            year: self.year,
            start_time: self.start_time.clone(),
            end_time: self.end_time.clone(),
        }
    }

    pub fn is_on(&self, day: Day) -> bool {
        self.day() == day
    }

    /// Chronological key: (year, month, date, start).
    pub fn sort_key(&self) -> (i32, u32, u32, Option<NaiveTime>) {
        (
            self.year,
            self.month,
            self.date,
            clock::parse(&self.start_time),
        )
    }

    /// "09:00 - 10:00"
    pub fn time_range(&self) -> String {
        format!("{} - {}", self.start_time, self.end_time)
    }
}

impl Scheduled for Event {
    fn day(&self) -> Day {
        Day::new(self.date, self.month, self.year)
    }

    fn start_time(&self) -> &str {
        &self.start_time
    }

    fn end_time(&self) -> &str {
        &self.end_time
    }
}

impl Scheduled for EventDraft {
    fn day(&self) -> Day {
        Day::new(self.date, self.month, self.year)
    }

    fn start_time(&self) -> &str {
        &self.start_time
    }

    fn end_time(&self) -> &str {
        &self.end_time
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Unset type is persisted as `""`. Null, missing and unknown values load as unset.
mod event_type_field {
    use super::EventType;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Option<EventType>, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(value.map(|t| t.as_str()).unwrap_or(""))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<EventType>, D::Error> {
        let raw = Option::<String>::deserialize(d)?;
        Ok(raw.and_then(|s| s.parse().ok()))
    }
}

/// Empty strings and `None` are the same thing on the wire.
mod blank_as_none {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Option<String>, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(value.as_deref().unwrap_or(""))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
        let raw = Option::<String>::deserialize(d)?;
        Ok(raw.filter(|s| !s.is_empty()))
    }
}
