//! Validation of committed range values.

use datepick_model::{DateRange, RangeCalendarOptions, ValidationState};

use crate::bounds::is_outside_bounds;

/// Classifies a committed range against caller bounds and availability.
#[derive(Debug, Clone, Copy)]
pub struct RangeValidator<'a> {
    options: &'a RangeCalendarOptions,
}

impl<'a> RangeValidator<'a> {
    pub fn new(options: &'a RangeCalendarOptions) -> Self {
        Self { options }
    }

    /// Whether the explicit override forces the value invalid.
    pub fn is_forced_invalid(&self) -> bool {
        self.options.is_invalid || self.options.validation_state == Some(ValidationState::Invalid)
    }

    /// Whether the committed value itself breaks a constraint.
    ///
    /// Never true mid-selection: an active anchor suppresses the check.
    pub fn is_invalid_selection(&self, value: Option<&DateRange>, is_anchored: bool) -> bool {
        let Some(value) = value else {
            return false;
        };
        if is_anchored {
            return false;
        }
        let min = self.options.min_value.as_ref();
        let max = self.options.max_value.as_ref();
        let (start, end) = (value.start(), value.end());
        self.options.is_unavailable(&start)
            || self.options.is_unavailable(&end)
            || is_outside_bounds(&start, min, max)
            || is_outside_bounds(&end, min, max)
    }

    pub fn is_value_invalid(&self, value: Option<&DateRange>, is_anchored: bool) -> bool {
        self.is_forced_invalid() || self.is_invalid_selection(value, is_anchored)
    }

    /// Derives the validation state.
    ///
    /// `Invalid` wins whenever either check fails; otherwise a present value
    /// is `Valid` and an absent one has no state.
    pub fn validate(&self, value: Option<&DateRange>, is_anchored: bool) -> Option<ValidationState> {
        if self.is_value_invalid(value, is_anchored) {
            Some(ValidationState::Invalid)
        } else if value.is_some() {
            Some(ValidationState::Valid)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use datepick_model::DateValue;

    use super::*;

    fn date(s: &str) -> DateValue {
        s.parse().expect("valid date")
    }

    fn range(start: &str, end: &str) -> DateRange {
        DateRange::new(date(start), date(end))
    }

    #[test]
    fn absent_value_has_no_state() {
        let options = RangeCalendarOptions::new();
        assert_eq!(RangeValidator::new(&options).validate(None, false), None);
    }

    #[test]
    fn out_of_bounds_endpoint_is_invalid() {
        let options = RangeCalendarOptions::new().with_max_value(date("2024-01-31"));
        let validator = RangeValidator::new(&options);
        let value = range("2024-01-20", "2024-02-02");
        assert_eq!(validator.validate(Some(&value), false), Some(ValidationState::Invalid));
        assert_eq!(validator.validate(Some(&value), true), Some(ValidationState::Valid));
    }

    #[test]
    fn unavailable_endpoint_is_invalid() {
        let blocked = date("2024-01-05");
        let options = RangeCalendarOptions::new().with_unavailable(move |d| d.is_same_day(&blocked));
        let validator = RangeValidator::new(&options);
        assert!(validator.is_invalid_selection(Some(&range("2024-01-01", "2024-01-05")), false));
        // Spanning an unavailable day is not checked here, only endpoints.
        assert!(!validator.is_invalid_selection(Some(&range("2024-01-01", "2024-01-09")), false));
    }

    #[test]
    fn explicit_override_wins() {
        let options = RangeCalendarOptions::new().with_validation_state(ValidationState::Invalid);
        let validator = RangeValidator::new(&options);
        assert_eq!(validator.validate(None, true), Some(ValidationState::Invalid));
        let options = RangeCalendarOptions::new().with_invalid(true);
        assert!(RangeValidator::new(&options).is_value_invalid(None, false));
    }
}
