//! Tests for validation state derived by the range engine.

use datepick_core::RangeCalendarState;
use datepick_model::{DateRange, DateValue, RangeCalendarOptions, ValidationState};

fn date(s: &str) -> DateValue {
    s.parse().expect("valid date")
}

fn range(start: &str, end: &str) -> DateRange {
    DateRange::new(date(start), date(end))
}

fn options() -> RangeCalendarOptions {
    RangeCalendarOptions::new().with_today(date("2024-01-10"))
}

#[test]
fn test_no_value_has_no_state() {
    let state = RangeCalendarState::new(options());
    assert_eq!(state.validation_state(), None);
    assert!(!state.is_value_invalid());
}

#[test]
fn test_committed_value_in_bounds_is_valid() {
    let mut state = RangeCalendarState::new(options().with_max_value(date("2024-01-31")));
    state.select_date(date("2024-01-03"));
    state.select_date(date("2024-01-09"));
    assert_eq!(state.validation_state(), Some(ValidationState::Valid));
}

#[test]
fn test_value_outside_bounds_is_invalid_until_reselected() {
    let options = options()
        .with_min_value(date("2024-01-05"))
        .with_default_value(range("2024-01-01", "2024-01-08"));
    let mut state = RangeCalendarState::new(options);
    assert_eq!(state.validation_state(), Some(ValidationState::Invalid));

    // An in-progress selection suspends the check.
    state.select_date(date("2024-01-06"));
    assert_eq!(state.validation_state(), Some(ValidationState::Valid));

    state.select_date(date("2024-01-09"));
    assert_eq!(state.value(), Some(range("2024-01-06", "2024-01-09")));
    assert_eq!(state.validation_state(), Some(ValidationState::Valid));
}

#[test]
fn test_unavailable_endpoint_is_invalid() {
    let blocked = date("2024-01-08");
    let options = options()
        .with_default_value(range("2024-01-02", "2024-01-08"))
        .with_unavailable(move |d| d.is_same_day(&blocked));
    let state = RangeCalendarState::new(options);
    assert!(state.is_value_invalid());
}

#[test]
fn test_explicit_invalid_overrides_everything() {
    let mut state =
        RangeCalendarState::new(options().with_validation_state(ValidationState::Invalid));
    assert_eq!(state.validation_state(), Some(ValidationState::Invalid));
    state.select_date(date("2024-01-03"));
    assert_eq!(state.validation_state(), Some(ValidationState::Invalid));

    let state = RangeCalendarState::new(options().with_invalid(true));
    assert!(state.is_value_invalid());
}

#[test]
fn test_bounds_disable_paging() {
    let options = options()
        .with_min_value(date("2024-01-01"))
        .with_max_value(date("2024-02-15"));
    let mut state = RangeCalendarState::new(options);
    assert!(state.is_previous_visible_range_invalid());
    assert!(!state.is_next_visible_range_invalid());
    state.focus_next_page();
    assert!(state.is_next_visible_range_invalid());
    assert!(!state.is_previous_visible_range_invalid());
}
