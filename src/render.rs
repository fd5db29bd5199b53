//! Terminal rendering for schedule-it types.
//!
//! Extension traits and helpers that add colored output to core types
//! using owo_colors.

use owo_colors::OwoColorize;
use schedule_it_core::month::{self, MonthCursor, DAYS, MONTHS};
use schedule_it_core::event::Scheduled;
use schedule_it_core::{Day, Event, EventType};

/// Width of one day column in the month grid, borders excluded.
const CELL_WIDTH: usize = 14;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for Day {
    /// "5 March 2024"
    fn render(&self) -> String {
        let month = MONTHS.get(self.month as usize).copied().unwrap_or("?");
        format!("{} {} {}", self.date, month, self.year)
    }
}

impl Render for Event {
    fn render(&self) -> String {
        let mut line = format!(
            "{}  {}  {}",
            self.day().render().bold(),
            self.time_range(),
            colorize_type(self.event_type, &self.name),
        );
        if let Some(t) = self.event_type {
            line.push_str(&format!(" {}", format!("[{}]", t).dimmed()));
        }
        line.push_str(&format!("  {}", self.id.dimmed()));

        if let Some(description) = &self.description {
            line.push_str(&format!("\n    {}", description.dimmed()));
        }
        line
    }
}

/// Colour an event label by its type.
fn colorize_type(event_type: Option<EventType>, text: &str) -> String {
    match event_type {
        Some(EventType::Work) => text.blue().to_string(),
        Some(EventType::Personal) => text.yellow().to_string(),
        Some(EventType::Other) => text.red().to_string(),
        None => text.green().to_string(),
    }
}

/// Truncate or pad `s` to exactly `width` characters.
pub fn fit(s: &str, width: usize) -> String {
    let count = s.chars().count();
    if count > width {
        let mut out: String = s.chars().take(width.saturating_sub(1)).collect();
        out.push('…');
        out
    } else {
        format!("{}{}", s, " ".repeat(width - count))
    }
}

/// Render one month as a 7-column grid. `events` may contain other months;
/// only those on a day of `cursor` are shown.
pub fn render_month(cursor: MonthCursor, events: &[Event], today: Day) -> String {
    let mut lines = vec![cursor.title().bold().to_string()];

    let header: Vec<String> = DAYS.iter().map(|d| fit(d, CELL_WIDTH)).collect();
    lines.push(format!("|{}|", header.join("|")).bold().to_string());

    let separator = format!("+{}+", vec!["-".repeat(CELL_WIDTH); 7].join("+"));
    lines.push(separator.clone());

    let mut cells = cursor.cells();
    while cells.len() % 7 != 0 {
        cells.push(None);
    }

    for week in cells.chunks(7) {
        let columns: Vec<Vec<String>> = week
            .iter()
            .map(|cell| render_cell(*cell, events, today))
            .collect();
        let height = columns.iter().map(Vec::len).max().unwrap_or(1);

        for row in 0..height {
            let parts: Vec<String> = columns
                .iter()
                .map(|col| {
                    col.get(row)
                        .cloned()
                        .unwrap_or_else(|| " ".repeat(CELL_WIDTH))
                })
                .collect();
            lines.push(format!("|{}|", parts.join("|")));
        }
        lines.push(separator.clone());
    }

    lines.join("\n")
}

/// Lines of one day cell, each already padded to CELL_WIDTH.
fn render_cell(cell: Option<Day>, events: &[Event], today: Day) -> Vec<String> {
    let Some(day) = cell else {
        return vec![" ".repeat(CELL_WIDTH)];
    };

    let weekend = month::is_weekend(day);
    let number = fit(&day.date.to_string(), CELL_WIDTH);
    let number = if day == today {
        number.reversed().bold().to_string()
    } else if weekend {
        number.dimmed().to_string()
    } else {
        number.bold().to_string()
    };

    let mut lines = vec![number];
    for event in events.iter().filter(|e| e.is_on(day)) {
        let label = fit(&format!("{} {}", event.start_time, event.name), CELL_WIDTH);
        let label = if weekend {
            label.dimmed().to_string()
        } else {
            colorize_type(event.event_type, &label)
        };
        lines.push(label);
    }
    lines
}
