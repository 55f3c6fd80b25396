//! Single-date calendar grid.
//!
//! The range engine reads the grid through [`CalendarGrid`]: the visible
//! window, the focus cursor, and per-cell queries. [`CalendarState`] is the
//! stock implementation, covering focus movement and paging over a window of
//! [`VisibleDuration`].

use std::cmp::Ordering;

use chrono::{Local, Weekday};
use datepick_model::{
    CalendarSystem, DatePredicate, DateRange, DateValue, PageBehavior, RangeCalendarOptions,
    SelectionAlignment, VisibleDuration,
};
use tracing::trace;

use crate::alignment::{align_center, align_end, align_start, constrain_start, window_end};
use crate::bounds::{constrain_value, is_outside_bounds};

/// Grid queries and navigation consumed by the range engine.
pub trait CalendarGrid {
    /// First and last visible day.
    fn visible_range(&self) -> DateRange;

    fn focused_date(&self) -> DateValue;

    /// Moves the focus cursor, scrolling the window when needed.
    fn set_focused_date(&mut self, date: DateValue);

    fn is_cell_disabled(&self, date: &DateValue) -> bool;

    fn is_cell_unavailable(&self, date: &DateValue) -> bool;

    /// Whether `date` falls outside the grid's own bounds.
    fn is_invalid(&self, date: &DateValue) -> bool;

    fn focus_next_page(&mut self);

    fn focus_previous_page(&mut self);

    fn is_next_visible_range_invalid(&self) -> bool;

    fn is_previous_visible_range_invalid(&self) -> bool;
}

/// Visible window and focus cursor of a calendar grid.
#[derive(Clone)]
pub struct CalendarState {
    min_value: Option<DateValue>,
    max_value: Option<DateValue>,
    is_date_unavailable: Option<DatePredicate>,
    is_disabled: bool,
    visible_duration: VisibleDuration,
    page_behavior: PageBehavior,
    calendar: CalendarSystem,
    first_day_of_week: Weekday,
    focused_date: DateValue,
    start_date: DateValue,
}

impl std::fmt::Debug for CalendarState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CalendarState")
            .field("min_value", &self.min_value)
            .field("max_value", &self.max_value)
            .field("has_unavailable_predicate", &self.is_date_unavailable.is_some())
            .field("is_disabled", &self.is_disabled)
            .field("visible_duration", &self.visible_duration)
            .field("page_behavior", &self.page_behavior)
            .field("calendar", &self.calendar)
            .field("focused_date", &self.focused_date)
            .field("start_date", &self.start_date)
            .finish()
    }
}

impl CalendarState {
    /// Builds grid state from range options.
    ///
    /// The initial focus is `default_focused_value`, else `value`, else today,
    /// clamped to the bounds and expressed in the display calendar. The window
    /// is placed around it according to `alignment`.
    pub fn new(
        options: &RangeCalendarOptions,
        value: Option<DateValue>,
        alignment: SelectionAlignment,
    ) -> Self {
        let today = options
            .today
            .unwrap_or_else(|| DateValue::new(Local::now().date_naive()));
        let focused = options.default_focused_value.or(value).unwrap_or(today);
        let focused = constrain_value(
            focused.to_calendar_date().to_calendar(options.calendar),
            options.min_value.as_ref(),
            options.max_value.as_ref(),
        );
        let min = options.min_value.as_ref();
        let max = options.max_value.as_ref();
        let duration = options.visible_duration;
        let first_day = options.first_day_of_week;
        let start_date = match alignment {
            SelectionAlignment::Center => align_center(focused, duration, first_day, min, max),
            SelectionAlignment::Start => align_start(focused, duration, first_day, min, max),
            SelectionAlignment::End => align_end(focused, duration, first_day, min, max),
        };
        Self {
            min_value: options.min_value,
            max_value: options.max_value,
            is_date_unavailable: options.is_date_unavailable.clone(),
            is_disabled: options.is_disabled,
            visible_duration: duration,
            page_behavior: options.page_behavior,
            calendar: options.calendar,
            first_day_of_week: first_day,
            focused_date: focused,
            start_date,
        }
    }

    pub fn calendar(&self) -> CalendarSystem {
        self.calendar
    }

    pub fn visible_duration(&self) -> VisibleDuration {
        self.visible_duration
    }

    fn end_date(&self) -> DateValue {
        window_end(self.start_date, self.visible_duration)
    }

    fn page_duration(&self) -> VisibleDuration {
        match self.page_behavior {
            PageBehavior::Visible => self.visible_duration,
            PageBehavior::Single => self.visible_duration.unit(),
        }
    }

    fn constrain(&self, date: DateValue) -> DateValue {
        constrain_value(date, self.min_value.as_ref(), self.max_value.as_ref())
    }

    /// Moves focus by `days`, clamped to the bounds.
    fn focus_by_days(&mut self, days: i64) {
        if let Some(date) = self.focused_date.add_days(days) {
            self.set_focused_date(date);
        }
    }

    pub fn focus_next_day(&mut self) {
        self.focus_by_days(1);
    }

    pub fn focus_previous_day(&mut self) {
        self.focus_by_days(-1);
    }

    pub fn focus_next_row(&mut self) {
        self.focus_by_days(7);
    }

    pub fn focus_previous_row(&mut self) {
        self.focus_by_days(-7);
    }

    /// Focuses the first visible day.
    pub fn focus_page_start(&mut self) {
        self.set_focused_date(self.start_date);
    }

    /// Focuses the last visible day.
    pub fn focus_page_end(&mut self) {
        self.set_focused_date(self.end_date());
    }

    fn page(&mut self, forward: bool) {
        let duration = self.page_duration();
        let shifted = if forward {
            self.start_date.checked_add(duration)
        } else {
            self.start_date.checked_sub(duration)
        };
        let focused = if forward {
            self.focused_date.checked_add(duration)
        } else {
            self.focused_date.checked_sub(duration)
        };
        let (Some(start), Some(focused)) = (shifted, focused) else {
            return;
        };
        let min = self.min_value.as_ref();
        let max = self.max_value.as_ref();
        let constrained = constrain_start(
            self.focused_date,
            start,
            duration,
            self.first_day_of_week,
            min,
            max,
        );
        self.start_date = align_start(constrained, duration, self.first_day_of_week, None, None);
        self.focused_date = self.constrain(focused);
        trace!(start = %self.start_date, focused = %self.focused_date, "paged calendar");
    }
}

impl CalendarGrid for CalendarState {
    fn visible_range(&self) -> DateRange {
        DateRange::new(self.start_date, self.end_date())
    }

    fn focused_date(&self) -> DateValue {
        self.focused_date
    }

    fn set_focused_date(&mut self, date: DateValue) {
        let date = self.constrain(date.to_calendar_date().to_calendar(self.calendar));
        self.focused_date = date;
        let min = self.min_value.as_ref();
        let max = self.max_value.as_ref();
        if date.compare_day(&self.start_date) == Ordering::Less {
            self.start_date = align_end(date, self.visible_duration, self.first_day_of_week, min, max);
        } else if date.compare_day(&self.end_date()) == Ordering::Greater {
            self.start_date =
                align_start(date, self.visible_duration, self.first_day_of_week, min, max);
        }
    }

    fn is_cell_disabled(&self, date: &DateValue) -> bool {
        self.is_disabled || !self.visible_range().contains(date) || self.is_invalid(date)
    }

    fn is_cell_unavailable(&self, date: &DateValue) -> bool {
        self.is_date_unavailable
            .as_ref()
            .is_some_and(|predicate| predicate(date))
    }

    fn is_invalid(&self, date: &DateValue) -> bool {
        is_outside_bounds(date, self.min_value.as_ref(), self.max_value.as_ref())
    }

    fn focus_next_page(&mut self) {
        self.page(true);
    }

    fn focus_previous_page(&mut self) {
        self.page(false);
    }

    fn is_next_visible_range_invalid(&self) -> bool {
        if self.is_disabled {
            return true;
        }
        self.end_date()
            .add_days(1)
            .is_none_or(|next| self.is_invalid(&next))
    }

    fn is_previous_visible_range_invalid(&self) -> bool {
        if self.is_disabled {
            return true;
        }
        self.start_date
            .subtract_days(1)
            .is_none_or(|previous| self.is_invalid(&previous))
    }
}
