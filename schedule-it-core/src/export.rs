//! JSON and CSV export of one month's events.
//!
//! Exports show `month` 1-based. The shift is applied to copies; the events
//! passed in are never modified.

use std::fmt;
use std::str::FromStr;

use crate::error::{StoreError, StoreResult};
use crate::event::Event;

pub const CSV_HEADER: [&str; 9] = [
    "ID",
    "Name",
    "Type",
    "Start Time",
    "End Time",
    "Description",
    "Date",
    "Month",
    "Year",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Csv,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
        }
    }

    /// Render the events of `month` (zero-based) in `year`.
    pub fn render(&self, events: &[Event], month: u32, year: i32) -> StoreResult<String> {
        let selected = for_month(events, month, year);
        match self {
            ExportFormat::Json => to_json(&selected),
            ExportFormat::Csv => Ok(to_csv(&selected)),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "csv" => Ok(ExportFormat::Csv),
            other => Err(format!("Unknown export format '{}'. Expected json or csv", other)),
        }
    }
}

/// Copies of the events in `month`/`year`, with `month` made 1-based.
fn for_month(events: &[Event], month: u32, year: i32) -> Vec<Event> {
    events
        .iter()
        .filter(|e| e.month == month && e.year == year)
        .cloned()
        .map(|mut e| {
            e.month += 1;
            e
        })
        .collect()
}

fn to_json(events: &[Event]) -> StoreResult<String> {
    serde_json::to_string_pretty(events).map_err(|e| StoreError::Serialization(e.to_string()))
}

// Fields are joined as-is; a comma inside a name or description shifts the
// columns of that row.
fn to_csv(events: &[Event]) -> String {
    let mut rows = vec![CSV_HEADER.join(",")];

    rows.extend(events.iter().map(|e| {
        [
            e.id.clone(),
            e.name.clone(),
            e.event_type.map(|t| t.to_string()).unwrap_or_default(),
            e.start_time.clone(),
            e.end_time.clone(),
            e.description.clone().unwrap_or_default(),
            e.date.to_string(),
            e.month.to_string(),
            e.year.to_string(),
        ]
        .join(",")
    }));

    rows.join("\n")
}
