//! Calendar systems supported by [`DateValue`](crate::DateValue).
//!
//! Every supported system shares the proleptic Gregorian day count and month
//! layout; they differ only in how eras and years are numbered. Converting a
//! date between systems therefore never changes the underlying day, which is
//! what lets a picker display one system while emitting another.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::DateParseError;

/// A calendar system used to interpret era and year fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalendarSystem {
    /// Proleptic Gregorian calendar (`gregory`).
    #[default]
    #[serde(alias = "gregory")]
    Gregorian,
    /// Thai Buddhist calendar: Buddhist Era year = Gregorian year + 543.
    Buddhist,
    /// Japanese imperial calendar, counting years within the reigning era.
    Japanese,
    /// Republic of China (Minguo) calendar: year 1 = 1912.
    Roc,
}

/// Era in which a [`CalendarFields::year`] is counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Era {
    Bc,
    Ad,
    Be,
    Meiji,
    Taisho,
    Showa,
    Heisei,
    Reiwa,
    BeforeMinguo,
    Minguo,
}

/// Japanese era start dates (year, month, day) in Gregorian terms.
const JAPANESE_ERAS: [(Era, i32, u32, u32); 5] = [
    (Era::Meiji, 1868, 9, 8),
    (Era::Taisho, 1912, 7, 30),
    (Era::Showa, 1926, 12, 25),
    (Era::Heisei, 1989, 1, 8),
    (Era::Reiwa, 2019, 5, 1),
];

const BUDDHIST_YEAR_OFFSET: i32 = 543;
const ROC_YEAR_OFFSET: i32 = 1911;

/// Era, year, month and day of a date as seen in one calendar system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CalendarFields {
    pub era: Era,
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl CalendarSystem {
    /// Returns the identifier used in `[u-ca=...]` annotations.
    pub fn identifier(self) -> &'static str {
        match self {
            Self::Gregorian => "gregory",
            Self::Buddhist => "buddhist",
            Self::Japanese => "japanese",
            Self::Roc => "roc",
        }
    }

    /// Looks up a calendar system by its annotation identifier.
    pub fn from_identifier(id: &str) -> Result<Self, DateParseError> {
        match id.trim().to_ascii_lowercase().as_str() {
            "gregory" | "gregorian" => Ok(Self::Gregorian),
            "buddhist" => Ok(Self::Buddhist),
            "japanese" => Ok(Self::Japanese),
            "roc" => Ok(Self::Roc),
            other => Err(DateParseError::UnknownCalendar(other.to_string())),
        }
    }

    /// Splits a Gregorian day into this system's era and year fields.
    pub fn fields(self, date: NaiveDate) -> CalendarFields {
        let year = date.year();
        let (era, year) = match self {
            Self::Gregorian => gregorian_era(year),
            Self::Buddhist => (Era::Be, year + BUDDHIST_YEAR_OFFSET),
            Self::Roc => {
                if year > ROC_YEAR_OFFSET {
                    (Era::Minguo, year - ROC_YEAR_OFFSET)
                } else {
                    (Era::BeforeMinguo, ROC_YEAR_OFFSET + 1 - year)
                }
            }
            Self::Japanese => match japanese_era(date) {
                Some((era, start_year)) => (era, year - start_year + 1),
                None => gregorian_era(year),
            },
        };
        CalendarFields {
            era,
            year,
            month: date.month(),
            day: date.day(),
        }
    }

    /// Resolves calendar fields back to a Gregorian day.
    ///
    /// Returns `None` when the era does not belong to this system or the
    /// fields do not name a real day.
    pub fn to_gregorian(self, fields: &CalendarFields) -> Option<NaiveDate> {
        let year = match (self, fields.era) {
            (Self::Gregorian | Self::Japanese, Era::Ad) => fields.year,
            (Self::Gregorian | Self::Japanese, Era::Bc) => 1 - fields.year,
            (Self::Buddhist, Era::Be) => fields.year - BUDDHIST_YEAR_OFFSET,
            (Self::Roc, Era::Minguo) => fields.year + ROC_YEAR_OFFSET,
            (Self::Roc, Era::BeforeMinguo) => ROC_YEAR_OFFSET + 1 - fields.year,
            (Self::Japanese, era) => {
                let (_, start_year, _, _) = JAPANESE_ERAS.iter().find(|(e, ..)| *e == era)?;
                start_year + fields.year - 1
            }
            _ => return None,
        };
        NaiveDate::from_ymd_opt(year, fields.month, fields.day)
    }
}

fn gregorian_era(year: i32) -> (Era, i32) {
    if year > 0 {
        (Era::Ad, year)
    } else {
        (Era::Bc, 1 - year)
    }
}

fn japanese_era(date: NaiveDate) -> Option<(Era, i32)> {
    JAPANESE_ERAS
        .iter()
        .rev()
        .find(|(_, y, m, d)| NaiveDate::from_ymd_opt(*y, *m, *d).is_some_and(|start| date >= start))
        .map(|(era, start_year, ..)| (*era, *start_year))
}
