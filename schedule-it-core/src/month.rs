//! Month-grid arithmetic. Months are zero-based throughout.

use chrono::{Datelike, Local, NaiveDate};

use crate::event::Day;

pub const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

pub const DAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Number of days in `month` of `year`, or 0 for an out-of-range month.
pub fn days_in_month(month: u32, year: i32) -> u32 {
    let (next_month, next_year) = if month >= 11 {
        (0, year + 1)
    } else {
        (month + 1, year)
    };

    match (
        NaiveDate::from_ymd_opt(year, month + 1, 1),
        NaiveDate::from_ymd_opt(next_year, next_month + 1, 1),
    ) {
        (Some(first), Some(next)) => (next - first).num_days() as u32,
        _ => 0,
    }
}

/// Weekday of the 1st, 0 = Sunday.
pub fn first_weekday(month: u32, year: i32) -> Option<u32> {
    NaiveDate::from_ymd_opt(year, month + 1, 1).map(|d| d.weekday().num_days_from_sunday())
}

pub fn is_weekend(day: Day) -> bool {
    NaiveDate::from_ymd_opt(day.year, day.month + 1, day.date)
        .is_some_and(|d| matches!(d.weekday().num_days_from_sunday(), 0 | 6))
}

pub fn today() -> Day {
    let now = Local::now().date_naive();
    Day::new(now.day(), now.month0(), now.year())
}

/// The month currently shown in the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthCursor {
    pub month: u32,
    pub year: i32,
}

impl MonthCursor {
    pub fn new(month: u32, year: i32) -> Option<Self> {
        (month < 12).then_some(MonthCursor { month, year })
    }

    pub fn current() -> Self {
        let today = today();
        MonthCursor {
            month: today.month,
            year: today.year,
        }
    }

    pub fn prev(&self) -> Self {
        match self.month {
            0 => MonthCursor {
                month: 11,
                year: self.year - 1,
            },
            m => MonthCursor {
                month: m - 1,
                year: self.year,
            },
        }
    }

    pub fn next(&self) -> Self {
        match self.month {
            11 => MonthCursor {
                month: 0,
                year: self.year + 1,
            },
            m => MonthCursor {
                month: m + 1,
                year: self.year,
            },
        }
    }

    /// "March 2024"
    pub fn title(&self) -> String {
        let month = MONTHS.get(self.month as usize).copied().unwrap_or("?");
        format!("{} {}", month, self.year)
    }

    pub fn day(&self, date: u32) -> Day {
        Day::new(date, self.month, self.year)
    }

    /// Grid cells, Sunday first: `None` for the blanks before the 1st.
    pub fn cells(&self) -> Vec<Option<Day>> {
        let blanks = first_weekday(self.month, self.year).unwrap_or(0) as usize;
        let days = (1..=days_in_month(self.month, self.year)).map(|d| Some(self.day(d)));

        std::iter::repeat_n(None, blanks).chain(days).collect()
    }
}
