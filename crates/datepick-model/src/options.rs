//! Configuration options for range calendar state.

use std::fmt;
use std::sync::Arc;

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::calendar::CalendarSystem;
use crate::date::DateValue;
use crate::duration::{PageBehavior, VisibleDuration};
use crate::range::DateRange;
use crate::validation::ValidationState;

/// Predicate marking individual days as unavailable.
pub type DatePredicate = Arc<dyn Fn(&DateValue) -> bool + Send + Sync>;

/// Options controlling range selection behavior.
///
/// Everything except the unavailability predicate can be loaded from JSON;
/// the predicate is attached with [`RangeCalendarOptions::with_unavailable`].
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RangeCalendarOptions {
    /// Earliest selectable day.
    pub min_value: Option<DateValue>,
    /// Latest selectable day.
    pub max_value: Option<DateValue>,
    /// Marks days that cannot be selected or spanned by a range.
    #[serde(skip)]
    pub is_date_unavailable: Option<DatePredicate>,
    /// Allow ranges that span unavailable days.
    ///
    /// When true, the availability scan is skipped entirely.
    pub allows_non_contiguous_ranges: bool,
    /// Size of the visible window.
    pub visible_duration: VisibleDuration,
    pub page_behavior: PageBehavior,
    /// Ignore all picks.
    pub is_read_only: bool,
    /// Disable every cell and ignore all picks.
    pub is_disabled: bool,
    /// Force the committed value to be reported invalid.
    pub is_invalid: bool,
    /// Explicit validation override.
    pub validation_state: Option<ValidationState>,
    /// Initial value when the value is not controlled by the caller.
    pub default_value: Option<DateRange>,
    /// Initial focus cursor; falls back to the value's start, then `today`.
    pub default_focused_value: Option<DateValue>,
    /// Calendar system the grid displays dates in.
    pub calendar: CalendarSystem,
    pub first_day_of_week: Weekday,
    /// Fixed "today"; the local date is used when unset.
    pub today: Option<DateValue>,
}

impl Default for RangeCalendarOptions {
    fn default() -> Self {
        Self {
            min_value: None,
            max_value: None,
            is_date_unavailable: None,
            allows_non_contiguous_ranges: false,
            visible_duration: VisibleDuration::default(),
            page_behavior: PageBehavior::default(),
            is_read_only: false,
            is_disabled: false,
            is_invalid: false,
            validation_state: None,
            default_value: None,
            default_focused_value: None,
            calendar: CalendarSystem::default(),
            first_day_of_week: Weekday::Sun,
            today: None,
        }
    }
}

impl fmt::Debug for RangeCalendarOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RangeCalendarOptions")
            .field("min_value", &self.min_value)
            .field("max_value", &self.max_value)
            .field("has_unavailable_predicate", &self.is_date_unavailable.is_some())
            .field(
                "allows_non_contiguous_ranges",
                &self.allows_non_contiguous_ranges,
            )
            .field("visible_duration", &self.visible_duration)
            .field("page_behavior", &self.page_behavior)
            .field("is_read_only", &self.is_read_only)
            .field("is_disabled", &self.is_disabled)
            .field("is_invalid", &self.is_invalid)
            .field("validation_state", &self.validation_state)
            .field("default_value", &self.default_value)
            .field("default_focused_value", &self.default_focused_value)
            .field("calendar", &self.calendar)
            .field("first_day_of_week", &self.first_day_of_week)
            .field("today", &self.today)
            .finish()
    }
}

impl RangeCalendarOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_min_value(mut self, value: DateValue) -> Self {
        self.min_value = Some(value);
        self
    }

    #[must_use]
    pub fn with_max_value(mut self, value: DateValue) -> Self {
        self.max_value = Some(value);
        self
    }

    /// Attach an unavailability predicate.
    #[must_use]
    pub fn with_unavailable<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&DateValue) -> bool + Send + Sync + 'static,
    {
        self.is_date_unavailable = Some(Arc::new(predicate));
        self
    }

    #[must_use]
    pub fn with_non_contiguous_ranges(mut self, allow: bool) -> Self {
        self.allows_non_contiguous_ranges = allow;
        self
    }

    #[must_use]
    pub fn with_visible_duration(mut self, duration: VisibleDuration) -> Self {
        self.visible_duration = duration;
        self
    }

    #[must_use]
    pub fn with_page_behavior(mut self, behavior: PageBehavior) -> Self {
        self.page_behavior = behavior;
        self
    }

    #[must_use]
    pub fn with_read_only(mut self, read_only: bool) -> Self {
        self.is_read_only = read_only;
        self
    }

    #[must_use]
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.is_disabled = disabled;
        self
    }

    #[must_use]
    pub fn with_invalid(mut self, invalid: bool) -> Self {
        self.is_invalid = invalid;
        self
    }

    #[must_use]
    pub fn with_validation_state(mut self, state: ValidationState) -> Self {
        self.validation_state = Some(state);
        self
    }

    #[must_use]
    pub fn with_default_value(mut self, value: DateRange) -> Self {
        self.default_value = Some(value);
        self
    }

    #[must_use]
    pub fn with_default_focused_value(mut self, value: DateValue) -> Self {
        self.default_focused_value = Some(value);
        self
    }

    #[must_use]
    pub fn with_calendar(mut self, calendar: CalendarSystem) -> Self {
        self.calendar = calendar;
        self
    }

    #[must_use]
    pub fn with_first_day_of_week(mut self, weekday: Weekday) -> Self {
        self.first_day_of_week = weekday;
        self
    }

    #[must_use]
    pub fn with_today(mut self, today: DateValue) -> Self {
        self.today = Some(today);
        self
    }

    /// Evaluates the unavailability predicate; `false` when none is set.
    pub fn is_unavailable(&self, date: &DateValue) -> bool {
        self.is_date_unavailable
            .as_ref()
            .is_some_and(|predicate| predicate(date))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_load_from_json() {
        let options: RangeCalendarOptions = serde_json::from_str(
            r#"{
                "min_value": "2024-01-01",
                "max_value": "2024-01-31",
                "visible_duration": {"months": 2},
                "page_behavior": "single",
                "calendar": "japanese",
                "first_day_of_week": "Mon"
            }"#,
        )
        .expect("deserialize options");
        assert_eq!(options.min_value, DateValue::from_ymd(2024, 1, 1));
        assert_eq!(options.visible_duration, VisibleDuration::Months(2));
        assert_eq!(options.page_behavior, PageBehavior::Single);
        assert_eq!(options.calendar, CalendarSystem::Japanese);
        assert_eq!(options.first_day_of_week, Weekday::Mon);
        assert!(options.is_date_unavailable.is_none());
        assert!(!options.is_read_only);
    }

    #[test]
    fn predicate_defaults_to_available() {
        let date = DateValue::from_ymd(2024, 1, 15).unwrap();
        assert!(!RangeCalendarOptions::new().is_unavailable(&date));
        let options = RangeCalendarOptions::new().with_unavailable(move |d| d.is_same_day(&date));
        assert!(options.is_unavailable(&date));
    }
}
