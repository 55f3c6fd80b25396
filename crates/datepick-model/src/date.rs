//! Calendar-aware date values.
//!
//! A [`DateValue`] is a Gregorian day tagged with the calendar system it should
//! be presented and emitted in, plus an optional time of day. The textual form
//! follows ISO 8601 extended format with an optional calendar annotation:
//!
//! - `2024-01-10`
//! - `2024-01-10T09:00`
//! - `2024-01-10T09:00:00[u-ca=japanese]`

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Days, Months, NaiveDate, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

use crate::calendar::{CalendarFields, CalendarSystem};
use crate::duration::VisibleDuration;
use crate::error::DateParseError;

const ANNOTATION_PREFIX: &str = "[u-ca=";

/// A date in a specific calendar system, optionally carrying a time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DateValue {
    date: NaiveDate,
    time: Option<NaiveTime>,
    calendar: CalendarSystem,
}

impl DateValue {
    /// Creates a pure Gregorian date.
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            time: None,
            calendar: CalendarSystem::Gregorian,
        }
    }

    /// Creates a pure Gregorian date from year, month and day.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self::new)
    }

    /// Creates a pure date in the given calendar system.
    pub fn in_calendar(date: NaiveDate, calendar: CalendarSystem) -> Self {
        Self {
            date,
            time: None,
            calendar,
        }
    }

    /// Builds a date from fields expressed in `calendar`.
    pub fn from_fields(calendar: CalendarSystem, fields: &CalendarFields) -> Option<Self> {
        calendar
            .to_gregorian(fields)
            .map(|date| Self::in_calendar(date, calendar))
    }

    /// Returns the underlying Gregorian day.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn time(&self) -> Option<NaiveTime> {
        self.time
    }

    pub fn calendar(&self) -> CalendarSystem {
        self.calendar
    }

    pub fn has_time(&self) -> bool {
        self.time.is_some()
    }

    /// Era, year, month and day in this value's own calendar system.
    pub fn fields(&self) -> CalendarFields {
        self.calendar.fields(self.date)
    }

    /// Replaces the time of day, keeping day and calendar.
    #[must_use]
    pub fn with_time(self, time: Option<NaiveTime>) -> Self {
        Self { time, ..self }
    }

    /// Replaces the day, keeping time of day and calendar.
    #[must_use]
    pub fn with_date(self, date: NaiveDate) -> Self {
        Self { date, ..self }
    }

    /// Re-expresses this value in another calendar system.
    ///
    /// The day and time of day are unchanged.
    #[must_use]
    pub fn to_calendar(self, calendar: CalendarSystem) -> Self {
        Self { calendar, ..self }
    }

    /// Drops the time of day.
    #[must_use]
    pub fn to_calendar_date(self) -> Self {
        Self { time: None, ..self }
    }

    pub fn add_days(self, days: i64) -> Option<Self> {
        let date = if days >= 0 {
            self.date.checked_add_days(Days::new(days.unsigned_abs()))?
        } else {
            self.date.checked_sub_days(Days::new(days.unsigned_abs()))?
        };
        Some(self.with_date(date))
    }

    pub fn subtract_days(self, days: i64) -> Option<Self> {
        self.add_days(days.checked_neg()?)
    }

    /// Adds a duration. Month arithmetic clamps to the end of shorter months.
    pub fn checked_add(self, duration: VisibleDuration) -> Option<Self> {
        let date = match duration {
            VisibleDuration::Days(n) => self.date.checked_add_days(Days::new(u64::from(n)))?,
            VisibleDuration::Weeks(n) => self
                .date
                .checked_add_days(Days::new(u64::from(n).checked_mul(7)?))?,
            VisibleDuration::Months(n) => self.date.checked_add_months(Months::new(n))?,
            VisibleDuration::Years(n) => self
                .date
                .checked_add_months(Months::new(n.checked_mul(12)?))?,
        };
        Some(self.with_date(date))
    }

    /// Subtracts a duration. Month arithmetic clamps to the end of shorter months.
    pub fn checked_sub(self, duration: VisibleDuration) -> Option<Self> {
        let date = match duration {
            VisibleDuration::Days(n) => self.date.checked_sub_days(Days::new(u64::from(n)))?,
            VisibleDuration::Weeks(n) => self
                .date
                .checked_sub_days(Days::new(u64::from(n).checked_mul(7)?))?,
            VisibleDuration::Months(n) => self.date.checked_sub_months(Months::new(n))?,
            VisibleDuration::Years(n) => self
                .date
                .checked_sub_months(Months::new(n.checked_mul(12)?))?,
        };
        Some(self.with_date(date))
    }

    pub fn start_of_month(self) -> Self {
        self.with_date(self.date.with_day(1).unwrap_or(self.date))
    }

    pub fn start_of_year(self) -> Self {
        self.with_date(self.date.with_ordinal(1).unwrap_or(self.date))
    }

    /// Returns the latest day on or before this one that falls on `first_day`.
    pub fn start_of_week(self, first_day: Weekday) -> Self {
        let offset = (7 + self.date.weekday().num_days_from_monday()
            - first_day.num_days_from_monday())
            % 7;
        self.subtract_days(i64::from(offset)).unwrap_or(self)
    }

    /// Compares day first, then time of day. A value without a time sorts
    /// before the same day with one.
    pub fn compare(&self, other: &Self) -> Ordering {
        self.date
            .cmp(&other.date)
            .then_with(|| self.time.cmp(&other.time))
    }

    /// Compares the day only, ignoring time of day and calendar system.
    pub fn compare_day(&self, other: &Self) -> Ordering {
        self.date.cmp(&other.date)
    }

    pub fn is_same_day(&self, other: &Self) -> bool {
        self.date == other.date
    }
}

impl fmt::Display for DateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.date.format("%Y-%m-%d"))?;
        if let Some(time) = self.time {
            write!(f, "T{}", time.format("%H:%M:%S%.f"))?;
        }
        if self.calendar != CalendarSystem::Gregorian {
            write!(f, "{ANNOTATION_PREFIX}{}]", self.calendar.identifier())?;
        }
        Ok(())
    }
}

impl FromStr for DateValue {
    type Err = DateParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DateParseError::Empty);
        }
        let (body, calendar) = split_annotation(trimmed)?;
        let (date_part, time_part) = match body.split_once('T') {
            Some((date, time)) => (date, Some(time)),
            None => (body, None),
        };
        let date = NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
            .map_err(|_| DateParseError::InvalidDate(date_part.to_string()))?;
        let time = time_part.map(parse_time).transpose()?;
        Ok(Self {
            date,
            time,
            calendar,
        })
    }
}

impl TryFrom<String> for DateValue {
    type Error = DateParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DateValue> for String {
    fn from(value: DateValue) -> Self {
        value.to_string()
    }
}

fn split_annotation(value: &str) -> Result<(&str, CalendarSystem), DateParseError> {
    let Some(index) = value.find('[') else {
        return Ok((value, CalendarSystem::Gregorian));
    };
    let (body, annotation) = value.split_at(index);
    let id = annotation
        .strip_prefix(ANNOTATION_PREFIX)
        .and_then(|rest| rest.strip_suffix(']'))
        .ok_or_else(|| DateParseError::MalformedAnnotation(value.to_string()))?;
    Ok((body, CalendarSystem::from_identifier(id)?))
}

fn parse_time(value: &str) -> Result<NaiveTime, DateParseError> {
    NaiveTime::parse_from_str(value, "%H:%M:%S%.f")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M"))
        .map_err(|_| DateParseError::InvalidTime(value.to_string()))
}
