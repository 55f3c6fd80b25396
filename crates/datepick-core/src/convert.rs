//! Conversion of picked days into emitted range endpoints.

use datepick_model::{CalendarSystem, DateRange, DateValue};

/// Converts a picked day into the form of the endpoint it replaces.
///
/// The result uses `old_value`'s calendar system (Gregorian when there is no
/// previous endpoint) and carries `old_value`'s time of day, if it had one.
/// Only the day comes from `new_value`; the display calendar never leaks into
/// the emitted value.
pub fn convert_value(new_value: DateValue, old_value: Option<&DateValue>) -> DateValue {
    let calendar = old_value.map_or(CalendarSystem::Gregorian, DateValue::calendar);
    let converted = new_value.to_calendar_date().to_calendar(calendar);
    match old_value.and_then(DateValue::time) {
        Some(time) => converted.with_time(Some(time)),
        None => converted,
    }
}

/// Converts both endpoints of `range` against the matching endpoints of
/// `previous`: start against start, end against end.
pub fn convert_range(range: &DateRange, previous: Option<&DateRange>) -> DateRange {
    let start = convert_value(range.start(), previous.map(DateRange::start).as_ref());
    let end = convert_value(range.end(), previous.map(DateRange::end).as_ref());
    DateRange::new(start, end)
}

/// Orders two optional days into a range of pure dates.
pub fn make_range(start: Option<DateValue>, end: Option<DateValue>) -> Option<DateRange> {
    Some(DateRange::new(start?, end?).to_calendar_dates())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> DateValue {
        s.parse().expect("valid date")
    }

    #[test]
    fn defaults_to_gregorian_pure_date() {
        let picked = date("2024-01-10[u-ca=japanese]");
        assert_eq!(convert_value(picked, None), date("2024-01-10"));
    }

    #[test]
    fn adopts_previous_calendar_and_time() {
        let previous = date("2023-12-01T09:00[u-ca=buddhist]");
        let picked = date("2024-01-10[u-ca=japanese]");
        assert_eq!(
            convert_value(picked, Some(&previous)),
            date("2024-01-10T09:00[u-ca=buddhist]")
        );
    }

    #[test]
    fn endpoints_convert_independently() {
        let previous = DateRange::new(date("2024-01-01T09:00[u-ca=japanese]"), date("2024-01-05"));
        let picked = DateRange::new(date("2024-01-03"), date("2024-01-03"));
        let converted = convert_range(&picked, Some(&previous));
        assert_eq!(converted.start(), date("2024-01-03T09:00[u-ca=japanese]"));
        assert_eq!(converted.end(), date("2024-01-03"));
    }

    #[test]
    fn make_range_needs_both_ends() {
        assert_eq!(make_range(Some(date("2024-01-01")), None), None);
        let range = make_range(Some(date("2024-01-09T10:00")), Some(date("2024-01-02"))).unwrap();
        assert_eq!(range.start(), date("2024-01-02"));
        assert_eq!(range.end(), date("2024-01-09"));
    }
}
