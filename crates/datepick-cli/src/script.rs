//! Session scripts: calendar options plus a sequence of user events.
//!
//! A script is a JSON document:
//!
//! ```json
//! {
//!   "options": { "today": "2024-01-10", "max_value": "2024-01-31" },
//!   "unavailable": { "dates": ["2024-01-15"], "weekdays": ["Sun"] },
//!   "events": [
//!     { "event": "select", "date": "2024-01-10" },
//!     { "event": "select", "date": "2024-01-20" }
//!   ]
//! }
//! ```

use std::fmt;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{Datelike, Weekday};
use datepick_model::{DateRange, DateValue, RangeCalendarOptions};
use serde::{Deserialize, Serialize};

/// A replayable selection session.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Script {
    #[serde(default)]
    pub options: RangeCalendarOptions,
    #[serde(default)]
    pub unavailable: UnavailableDays,
    /// Replay with a caller-owned value that accepts every change.
    #[serde(default)]
    pub controlled: bool,
    pub events: Vec<Event>,
}

/// Days that cannot be selected, as data.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UnavailableDays {
    #[serde(default)]
    pub dates: Vec<DateValue>,
    #[serde(default)]
    pub weekdays: Vec<Weekday>,
    #[serde(default)]
    pub ranges: Vec<DateRange>,
}

impl UnavailableDays {
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty() && self.weekdays.is_empty() && self.ranges.is_empty()
    }

    pub fn contains(&self, date: &DateValue) -> bool {
        self.dates.iter().any(|blocked| blocked.is_same_day(date))
            || self.weekdays.contains(&date.date().weekday())
            || self.ranges.iter().any(|range| range.contains(date))
    }
}

/// One user interaction with the calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Event {
    Select { date: DateValue },
    SelectFocused,
    Highlight { date: DateValue },
    Focus { date: DateValue },
    NextPage,
    PreviousPage,
    SetDragging { dragging: bool },
    Reset,
    SetValue { value: Option<DateRange> },
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Select { date } => write!(f, "select {date}"),
            Self::SelectFocused => f.write_str("select_focused"),
            Self::Highlight { date } => write!(f, "highlight {date}"),
            Self::Focus { date } => write!(f, "focus {date}"),
            Self::NextPage => f.write_str("next_page"),
            Self::PreviousPage => f.write_str("previous_page"),
            Self::SetDragging { dragging } => write!(f, "set_dragging {dragging}"),
            Self::Reset => f.write_str("reset"),
            Self::SetValue { value: Some(value) } => write!(f, "set_value {value}"),
            Self::SetValue { value: None } => f.write_str("set_value -"),
        }
    }
}

impl Script {
    /// Options with the script's unavailable days attached as a predicate.
    pub fn calendar_options(&self) -> RangeCalendarOptions {
        let options = self.options.clone();
        if self.unavailable.is_empty() {
            return options;
        }
        let unavailable = self.unavailable.clone();
        options.with_unavailable(move |date| unavailable.contains(date))
    }
}

pub fn parse_script(text: &str) -> Result<Script> {
    serde_json::from_str(text).context("parse session script")
}

pub fn load_script(path: &Path) -> Result<Script> {
    let text =
        fs::read_to_string(path).with_context(|| format!("read script {}", path.display()))?;
    parse_script(&text).with_context(|| format!("load script {}", path.display()))
}
