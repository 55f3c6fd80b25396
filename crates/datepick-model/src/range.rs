use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::date::DateValue;
use crate::error::DateParseError;

/// An inclusive date range whose start day is never after its end day.
///
/// Endpoints may carry a time of day and a calendar system; neither takes
/// part in ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawRange", into = "RawRange")]
pub struct DateRange {
    start: DateValue,
    end: DateValue,
}

#[derive(Serialize, Deserialize)]
struct RawRange {
    start: DateValue,
    end: DateValue,
}

impl From<RawRange> for DateRange {
    fn from(raw: RawRange) -> Self {
        Self::new(raw.start, raw.end)
    }
}

impl From<DateRange> for RawRange {
    fn from(range: DateRange) -> Self {
        Self {
            start: range.start,
            end: range.end,
        }
    }
}

impl DateRange {
    /// Builds a range from endpoints in either order.
    ///
    /// Endpoints are ordered by day. Two endpoints on the same day keep the
    /// order they were given in, so a time of day stays on its own side.
    pub fn new(a: DateValue, b: DateValue) -> Self {
        if b.compare_day(&a) == Ordering::Less {
            Self { start: b, end: a }
        } else {
            Self { start: a, end: b }
        }
    }

    pub fn start(&self) -> DateValue {
        self.start
    }

    pub fn end(&self) -> DateValue {
        self.end
    }

    /// Returns the range with both endpoints reduced to pure dates.
    #[must_use]
    pub fn to_calendar_dates(self) -> Self {
        Self::new(self.start.to_calendar_date(), self.end.to_calendar_date())
    }

    /// Whether `date` falls on a day within the range, inclusive.
    pub fn contains(&self, date: &DateValue) -> bool {
        date.compare_day(&self.start) != Ordering::Less
            && date.compare_day(&self.end) != Ordering::Greater
    }

    /// Number of days covered, counting both endpoints.
    pub fn len_days(&self) -> i64 {
        (self.end.date() - self.start.date()).num_days() + 1
    }

    /// Iterates every day from start to end as pure dates.
    pub fn days(&self) -> impl Iterator<Item = DateValue> + use<> {
        let start = self.start.to_calendar_date();
        (0..self.len_days()).filter_map(move |offset| start.add_days(offset))
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.start, self.end)
    }
}

impl FromStr for DateRange {
    type Err = DateParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (start, end) = s
            .split_once('/')
            .ok_or_else(|| DateParseError::InvalidRange(s.to_string()))?;
        Ok(Self::new(start.parse()?, end.parse()?))
    }
}

/// Contiguous bounds around an anchor date that contain no unavailable day.
///
/// A missing side is unconstrained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AvailableRange {
    pub start: Option<DateValue>,
    pub end: Option<DateValue>,
}

impl AvailableRange {
    /// Whether `date` falls before `start` or after `end`.
    pub fn excludes(&self, date: &DateValue) -> bool {
        self.start
            .is_some_and(|start| date.compare_day(&start) == Ordering::Less)
            || self
                .end
                .is_some_and(|end| date.compare_day(&end) == Ordering::Greater)
    }
}

impl fmt::Display for AvailableRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.start {
            Some(start) => write!(f, "{start}")?,
            None => f.write_str("..")?,
        }
        f.write_str("/")?;
        match self.end {
            Some(end) => write!(f, "{end}"),
            None => f.write_str(".."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> DateValue {
        s.parse().expect("valid date")
    }

    #[test]
    fn new_swaps_unordered_endpoints() {
        let range = DateRange::new(date("2024-01-10"), date("2024-01-05"));
        assert_eq!(range.start(), date("2024-01-05"));
        assert_eq!(range.end(), date("2024-01-10"));
        assert_eq!(range.len_days(), 6);
    }

    #[test]
    fn deserialize_normalizes() {
        let range: DateRange =
            serde_json::from_str(r#"{"start": "2024-02-01", "end": "2024-01-01"}"#).unwrap();
        assert_eq!(range.start(), date("2024-01-01"));
    }

    #[test]
    fn contains_ignores_time() {
        let range = DateRange::new(date("2024-01-01T09:00"), date("2024-01-05"));
        assert!(range.contains(&date("2024-01-01")));
        assert!(range.contains(&date("2024-01-05T23:00")));
        assert!(!range.contains(&date("2024-01-06")));
    }

    #[test]
    fn available_range_open_sides() {
        let bounds = AvailableRange {
            start: None,
            end: Some(date("2024-01-14")),
        };
        assert!(!bounds.excludes(&date("1999-01-01")));
        assert!(!bounds.excludes(&date("2024-01-14")));
        assert!(bounds.excludes(&date("2024-01-15")));
        assert_eq!(bounds.to_string(), "../2024-01-14");
    }
}
