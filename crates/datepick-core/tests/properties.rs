//! Property tests for range picking over random picks and unavailable days.

use std::cmp::Ordering;

use chrono::Datelike;
use datepick_core::{RangeCalendarState, scan_available_range};
use datepick_model::{CalendarSystem, DateRange, DateValue, RangeCalendarOptions};
use proptest::prelude::*;

fn january(day: u32) -> DateValue {
    DateValue::from_ymd(2024, 1, day).expect("valid January day")
}

fn window() -> DateRange {
    DateRange::new(january(1), january(31))
}

/// Bit `n` set means January `n + 1` is unavailable.
fn is_blocked(mask: u32, date: &DateValue) -> bool {
    let d = date.date();
    d.year() == 2024 && d.month() == 1 && mask & (1 << (d.day() - 1)) != 0
}

fn options(mask: u32) -> RangeCalendarOptions {
    RangeCalendarOptions::new()
        .with_today(january(15))
        .with_unavailable(move |d| is_blocked(mask, d))
}

proptest! {
    #[test]
    fn committed_range_is_ordered(first in 1u32..=31, second in 1u32..=31) {
        let mut state = RangeCalendarState::new(RangeCalendarOptions::new().with_today(january(15)));
        state.select_date(january(first));
        state.select_date(january(second));
        let value = state.value().expect("two picks commit");
        prop_assert_ne!(value.start().compare_day(&value.end()), Ordering::Greater);
        prop_assert_eq!(value.start().date().day(), first.min(second));
        prop_assert_eq!(value.end().date().day(), first.max(second));
    }

    #[test]
    fn range_construction_ignores_argument_order(a in 1u32..=31, b in 1u32..=31) {
        prop_assert_eq!(
            DateRange::new(january(a), january(b)),
            DateRange::new(january(b), january(a))
        );
    }

    #[test]
    fn available_range_holds_no_unavailable_day(mask in any::<u32>(), anchor in 1u32..=31) {
        let anchor = january(anchor);
        prop_assume!(!is_blocked(mask, &anchor));
        let predicate = |d: &DateValue| is_blocked(mask, d);
        let available = scan_available_range(Some(&anchor), &window(), Some(&predicate), false)
            .expect("scan applies");
        let start = available.start.unwrap_or(january(1));
        let end = available.end.unwrap_or(january(31));
        for day in DateRange::new(start, end).days() {
            prop_assert!(!is_blocked(mask, &day), "{day} is unavailable");
        }
        if let Some(start) = available.start.filter(|s| s.date().day() > 1) {
            let before = start.subtract_days(1).expect("in range");
            prop_assert!(is_blocked(mask, &before));
        }
        if let Some(end) = available.end.filter(|e| e.date().day() < 31) {
            let after = end.add_days(1).expect("in range");
            prop_assert!(is_blocked(mask, &after));
        }
    }

    #[test]
    fn committed_range_never_spans_unavailable_day(
        mask in any::<u32>(),
        first in 1u32..=31,
        second in 1u32..=31,
    ) {
        let mut state = RangeCalendarState::new(options(mask));
        state.select_date(january(first));
        state.select_date(january(second));
        if let Some(value) = state.value() {
            for day in value.days() {
                prop_assert!(!is_blocked(mask, &day), "{value} spans unavailable {day}");
            }
        }
    }

    #[test]
    fn picks_stay_within_bounds(
        min in 1u32..=15,
        max in 16u32..=31,
        first in 1u32..=31,
        second in 1u32..=31,
    ) {
        let options = RangeCalendarOptions::new()
            .with_today(january(15))
            .with_min_value(january(min))
            .with_max_value(january(max));
        let mut state = RangeCalendarState::new(options);
        state.select_date(january(first));
        state.select_date(january(second));
        let value = state.value().expect("two picks commit");
        prop_assert!(value.start().date().day() >= min);
        prop_assert!(value.end().date().day() <= max);
        prop_assert!(!state.is_value_invalid());
    }

    #[test]
    fn calendar_conversion_keeps_the_day(
        day in 1u32..=31,
        calendar in prop::sample::select(vec![
            CalendarSystem::Gregorian,
            CalendarSystem::Buddhist,
            CalendarSystem::Japanese,
            CalendarSystem::Roc,
        ]),
    ) {
        let original = january(day);
        let converted = original.to_calendar(calendar);
        prop_assert!(converted.is_same_day(&original));
        prop_assert_eq!(converted.to_calendar(CalendarSystem::Gregorian), original);
    }
}
