//! Day-level bound helpers shared by the grid and the range engine.

use std::cmp::Ordering;

use datepick_model::DateValue;

/// Clamps `date` into `[min, max]` by day.
///
/// A clamped result keeps the calendar system and time of day of `date`.
pub fn constrain_value(
    date: DateValue,
    min: Option<&DateValue>,
    max: Option<&DateValue>,
) -> DateValue {
    if let Some(min) = min
        && date.compare_day(min) == Ordering::Less
    {
        return date.with_date(min.date());
    }
    if let Some(max) = max
        && date.compare_day(max) == Ordering::Greater
    {
        return date.with_date(max.date());
    }
    date
}

/// Whether `date` falls before `min` or after `max`.
pub fn is_outside_bounds(date: &DateValue, min: Option<&DateValue>, max: Option<&DateValue>) -> bool {
    min.is_some_and(|min| date.compare_day(min) == Ordering::Less)
        || max.is_some_and(|max| date.compare_day(max) == Ordering::Greater)
}

/// The later of two optional bounds; a missing bound is ignored.
pub fn later_of(a: Option<DateValue>, b: Option<DateValue>) -> Option<DateValue> {
    match (a, b) {
        (Some(a), Some(b)) => Some(if b.compare_day(&a) == Ordering::Greater { b } else { a }),
        (a, b) => a.or(b),
    }
}

/// The earlier of two optional bounds; a missing bound is ignored.
pub fn earlier_of(a: Option<DateValue>, b: Option<DateValue>) -> Option<DateValue> {
    match (a, b) {
        (Some(a), Some(b)) => Some(if b.compare_day(&a) == Ordering::Less { b } else { a }),
        (a, b) => a.or(b),
    }
}

/// Walks backward from an unavailable `date` to the nearest available day.
///
/// Available dates are returned unchanged. The walk never goes before
/// `floor`; `None` means every day from `date` down to `floor` is unavailable.
pub fn previous_available_date(
    date: DateValue,
    floor: &DateValue,
    is_unavailable: Option<&dyn Fn(&DateValue) -> bool>,
) -> Option<DateValue> {
    let Some(is_unavailable) = is_unavailable else {
        return Some(date);
    };
    let mut current = date;
    while is_unavailable(&current) {
        current = current.subtract_days(1)?;
        if current.compare_day(floor) == Ordering::Less {
            return None;
        }
    }
    Some(current)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> DateValue {
        s.parse().expect("valid date")
    }

    #[test]
    fn constrain_keeps_time_and_calendar() {
        let min = date("2024-01-05");
        let picked = date("2024-01-01T08:30[u-ca=buddhist]");
        let clamped = constrain_value(picked, Some(&min), None);
        assert_eq!(clamped, date("2024-01-05T08:30[u-ca=buddhist]"));
    }

    #[test]
    fn missing_bounds_are_identity() {
        let d = date("2024-06-01");
        assert_eq!(constrain_value(d, None, None), d);
        assert!(!is_outside_bounds(&d, None, None));
        assert_eq!(later_of(None, Some(d)), Some(d));
        assert_eq!(earlier_of(Some(d), None), Some(d));
        assert_eq!(later_of(None, None), None);
    }

    #[test]
    fn later_and_earlier_pick_by_day() {
        let a = date("2024-01-01");
        let b = date("2024-01-09");
        assert_eq!(later_of(Some(a), Some(b)), Some(b));
        assert_eq!(earlier_of(Some(a), Some(b)), Some(a));
    }

    #[test]
    fn previous_available_snaps_back() {
        let blocked = [date("2024-01-10"), date("2024-01-09")];
        let is_unavailable = |d: &DateValue| blocked.iter().any(|b| b.is_same_day(d));
        let floor = date("2024-01-01");
        assert_eq!(
            previous_available_date(date("2024-01-10"), &floor, Some(&is_unavailable)),
            Some(date("2024-01-08"))
        );
        assert_eq!(
            previous_available_date(date("2024-01-11"), &floor, Some(&is_unavailable)),
            Some(date("2024-01-11"))
        );
    }

    #[test]
    fn previous_available_stops_at_floor() {
        let is_unavailable = |_: &DateValue| true;
        let floor = date("2024-01-01");
        assert_eq!(
            previous_available_date(date("2024-01-03"), &floor, Some(&is_unavailable)),
            None
        );
    }
}
