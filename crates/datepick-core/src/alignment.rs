//! Visible-window alignment.
//!
//! A window of `duration` is described by its first day. These helpers pick
//! that first day so a given date lands at the start, centre or end of the
//! window, while keeping the window inside the pages that contain the
//! `min`/`max` bounds.

use std::cmp::Ordering;

use chrono::Weekday;
use datepick_model::{DateRange, DateValue, SelectionAlignment, VisibleDuration};

/// First day of the window that starts with the unit containing `date`.
pub fn align_start(
    date: DateValue,
    duration: VisibleDuration,
    first_day: Weekday,
    min: Option<&DateValue>,
    max: Option<&DateValue>,
) -> DateValue {
    let aligned = match duration {
        VisibleDuration::Years(_) => date.start_of_year(),
        VisibleDuration::Months(_) => date.start_of_month(),
        VisibleDuration::Weeks(_) => date.start_of_week(first_day),
        VisibleDuration::Days(_) => date,
    };
    constrain_start(date, aligned, duration, first_day, min, max)
}

/// First day of the window that places the unit containing `date` in the middle.
pub fn align_center(
    date: DateValue,
    duration: VisibleDuration,
    first_day: Weekday,
    min: Option<&DateValue>,
    max: Option<&DateValue>,
) -> DateValue {
    let start = align_start(date, duration, first_day, None, None);
    let aligned = start.checked_sub(duration.half()).unwrap_or(start);
    constrain_start(date, aligned, duration, first_day, min, max)
}

/// First day of the window that ends with the unit containing `date`.
pub fn align_end(
    date: DateValue,
    duration: VisibleDuration,
    first_day: Weekday,
    min: Option<&DateValue>,
    max: Option<&DateValue>,
) -> DateValue {
    let start = align_start(date, duration, first_day, None, None);
    let aligned = start.checked_sub(duration.shortened()).unwrap_or(start);
    constrain_start(date, aligned, duration, first_day, min, max)
}

/// Pulls an aligned window start back inside the pages holding `min`/`max`.
///
/// Bounds only apply while `date` itself lies within them.
pub fn constrain_start(
    date: DateValue,
    aligned: DateValue,
    duration: VisibleDuration,
    first_day: Weekday,
    min: Option<&DateValue>,
    max: Option<&DateValue>,
) -> DateValue {
    let mut aligned = aligned;
    if let Some(min) = min
        && date.compare_day(min) != Ordering::Less
    {
        let floor = align_start(*min, duration, first_day, None, None);
        if floor.compare_day(&aligned) == Ordering::Greater {
            aligned = aligned.with_date(floor.date());
        }
    }
    if let Some(max) = max
        && date.compare_day(max) != Ordering::Greater
    {
        let ceiling = align_end(*max, duration, first_day, None, None);
        if ceiling.compare_day(&aligned) == Ordering::Less {
            aligned = aligned.with_date(ceiling.date());
        }
    }
    aligned
}

/// Last day of the window starting at `start`.
pub fn window_end(start: DateValue, duration: VisibleDuration) -> DateValue {
    start
        .checked_add(duration)
        .and_then(|end| end.subtract_days(1))
        .unwrap_or(start)
}

/// Alignment that keeps a pre-existing value visible.
///
/// Centres on the value's start unless that would push its end past the
/// window, in which case the window starts with the value instead.
pub fn initial_alignment(
    value: Option<&DateRange>,
    duration: VisibleDuration,
    first_day: Weekday,
    min: Option<&DateValue>,
    max: Option<&DateValue>,
) -> SelectionAlignment {
    let Some(value) = value else {
        return SelectionAlignment::Center;
    };
    let start = align_center(value.start().to_calendar_date(), duration, first_day, min, max);
    let end = window_end(start, duration);
    if value.end().compare_day(&end) == Ordering::Greater {
        SelectionAlignment::Start
    } else {
        SelectionAlignment::Center
    }
}
