//! Range selection engine.
//!
//! A range is picked in two steps. The first pick sets an anchor and the
//! range previews from the anchor to the focus cursor; the second pick
//! commits the ordered range and returns to idle. While anchored, the
//! availability scan limits how far the range may extend.

use datepick_model::{
    AvailableRange, DateRange, DateValue, RangeCalendarOptions, ValidationState,
};
use tracing::{debug, trace};

use crate::alignment::initial_alignment;
use crate::availability::scan_available_range;
use crate::bounds::{constrain_value, earlier_of, later_of, previous_available_date};
use crate::convert::{convert_range, make_range};
use crate::grid::{CalendarGrid, CalendarState};
use crate::store::ControlledState;
use crate::validator::RangeValidator;

/// Progress of an in-flight range selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    /// No pick in progress; the committed value is shown.
    #[default]
    Idle,
    /// First pick made; the range previews from this anchor.
    Anchored(DateValue),
}

impl Selection {
    pub fn anchor(&self) -> Option<DateValue> {
        match self {
            Self::Idle => None,
            Self::Anchored(anchor) => Some(*anchor),
        }
    }

    pub fn is_anchored(&self) -> bool {
        matches!(self, Self::Anchored(_))
    }
}

/// State of a date range calendar.
pub struct RangeCalendarState<G = CalendarState> {
    options: RangeCalendarOptions,
    grid: G,
    value: ControlledState<DateRange>,
    selection: Selection,
    is_dragging: bool,
}

impl RangeCalendarState<CalendarState> {
    /// Creates state that owns its value, starting from `default_value`.
    pub fn new(options: RangeCalendarOptions) -> Self {
        let value = ControlledState::uncontrolled(options.default_value);
        let grid = Self::build_grid(&options, value.value());
        Self::from_parts(options, grid, value)
    }

    /// Creates state whose value is controlled by the caller.
    ///
    /// Commits are reported through the change handler only; push accepted
    /// values back with [`RangeCalendarState::sync_value`].
    pub fn controlled(options: RangeCalendarOptions, value: Option<DateRange>) -> Self {
        let value = ControlledState::controlled(value);
        let grid = Self::build_grid(&options, value.value());
        Self::from_parts(options, grid, value)
    }

    fn build_grid(options: &RangeCalendarOptions, value: Option<&DateRange>) -> CalendarState {
        let alignment = initial_alignment(
            value,
            options.visible_duration,
            options.first_day_of_week,
            options.min_value.as_ref(),
            options.max_value.as_ref(),
        );
        CalendarState::new(options, value.map(DateRange::start), alignment)
    }
}

impl<G: CalendarGrid> RangeCalendarState<G> {
    /// Assembles state from an existing grid and value store.
    pub fn from_parts(
        options: RangeCalendarOptions,
        grid: G,
        value: ControlledState<DateRange>,
    ) -> Self {
        Self {
            options,
            grid,
            value,
            selection: Selection::Idle,
            is_dragging: false,
        }
    }

    /// Registers a handler for committed values.
    #[must_use]
    pub fn on_change<F>(mut self, handler: F) -> Self
    where
        F: FnMut(Option<&DateRange>) + 'static,
    {
        self.value.set_on_change(Box::new(handler));
        self
    }

    pub fn options(&self) -> &RangeCalendarOptions {
        &self.options
    }

    pub fn grid(&self) -> &G {
        &self.grid
    }

    /// Direct access to grid navigation.
    ///
    /// Availability is derived from the grid's current window on every query,
    /// so navigating here is picked up by the next pick.
    pub fn grid_mut(&mut self) -> &mut G {
        &mut self.grid
    }

    pub fn value(&self) -> Option<DateRange> {
        self.value.value().copied()
    }

    pub fn set_value(&mut self, value: Option<DateRange>) {
        self.value.set_value(value);
    }

    /// Accepts a value from the controlling caller.
    pub fn sync_value(&mut self, value: Option<DateRange>) {
        self.value.sync_controlled(value);
    }

    pub fn is_controlled(&self) -> bool {
        self.value.is_controlled()
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn anchor_date(&self) -> Option<DateValue> {
        self.selection.anchor()
    }

    pub fn set_anchor_date(&mut self, date: Option<DateValue>) {
        self.selection = match date {
            Some(date) => Selection::Anchored(date.to_calendar_date()),
            None => Selection::Idle,
        };
    }

    /// Cancels an in-progress selection.
    pub fn reset_selection(&mut self) {
        if self.selection.is_anchored() {
            debug!("selection cancelled");
        }
        self.selection = Selection::Idle;
        self.is_dragging = false;
    }

    pub fn is_dragging(&self) -> bool {
        self.is_dragging
    }

    pub fn set_dragging(&mut self, dragging: bool) {
        self.is_dragging = dragging;
    }

    pub fn focused_date(&self) -> DateValue {
        self.grid.focused_date()
    }

    pub fn set_focused_date(&mut self, date: DateValue) {
        self.grid.set_focused_date(date);
    }

    pub fn visible_range(&self) -> DateRange {
        self.grid.visible_range()
    }

    pub fn focus_next_page(&mut self) {
        self.grid.focus_next_page();
    }

    pub fn focus_previous_page(&mut self) {
        self.grid.focus_previous_page();
    }

    pub fn is_next_visible_range_invalid(&self) -> bool {
        self.grid.is_next_visible_range_invalid()
    }

    pub fn is_previous_visible_range_invalid(&self) -> bool {
        self.grid.is_previous_visible_range_invalid()
    }

    /// Bounds around the anchor free of unavailable days, for the current window.
    pub fn available_range(&self) -> Option<AvailableRange> {
        let anchor = self.selection.anchor();
        let is_unavailable = |date: &DateValue| self.grid.is_cell_unavailable(date);
        let predicate = self
            .options
            .is_date_unavailable
            .is_some()
            .then_some(&is_unavailable as &dyn Fn(&DateValue) -> bool);
        scan_available_range(
            anchor.as_ref(),
            &self.grid.visible_range(),
            predicate,
            self.options.allows_non_contiguous_ranges,
        )
    }

    /// Lower pick bound: the caller minimum or the available start, whichever is later.
    pub fn effective_min(&self) -> Option<DateValue> {
        later_of(
            self.options.min_value,
            self.available_range().and_then(|range| range.start),
        )
    }

    /// Upper pick bound: the caller maximum or the available end, whichever is earlier.
    pub fn effective_max(&self) -> Option<DateValue> {
        earlier_of(
            self.options.max_value,
            self.available_range().and_then(|range| range.end),
        )
    }

    /// The anchor-to-focus preview while anchored, else the committed value.
    pub fn highlighted_range(&self) -> Option<DateRange> {
        match self.selection {
            Selection::Anchored(anchor) => make_range(Some(anchor), Some(self.grid.focused_date())),
            Selection::Idle => self
                .value
                .value()
                .and_then(|value| make_range(Some(value.start()), Some(value.end()))),
        }
    }

    /// Picks a day: the first pick anchors, the second commits.
    ///
    /// The day is clamped to the effective bounds, then snapped back to the
    /// nearest available day no earlier than the window start. Picks on a
    /// read-only or disabled calendar, and picks with no available day to
    /// snap to, are dropped.
    pub fn select_date(&mut self, date: DateValue) {
        if self.options.is_read_only || self.options.is_disabled {
            debug!(date = %date, "pick ignored on read-only calendar");
            return;
        }
        let min = self.effective_min();
        let max = self.effective_max();
        let constrained = constrain_value(date.to_calendar_date(), min.as_ref(), max.as_ref());
        let window_start = self.grid.visible_range().start();
        let is_unavailable = |day: &DateValue| self.grid.is_cell_unavailable(day);
        let predicate = self
            .options
            .is_date_unavailable
            .is_some()
            .then_some(&is_unavailable as &dyn Fn(&DateValue) -> bool);
        let Some(candidate) = previous_available_date(constrained, &window_start, predicate) else {
            debug!(date = %date, "pick dropped: no available day to snap to");
            return;
        };
        if !candidate.is_same_day(&date) {
            trace!(picked = %date, adjusted = %candidate, "pick adjusted");
        }

        match self.selection {
            Selection::Idle => {
                debug!(anchor = %candidate, "anchor set");
                self.set_anchor_date(Some(candidate));
            }
            Selection::Anchored(anchor) => {
                let range = DateRange::new(anchor, candidate);
                let committed = convert_range(&range, self.value.value());
                debug!(value = %committed, "range committed");
                self.value.set_value(Some(committed));
                self.set_anchor_date(None);
            }
        }
    }

    pub fn select_focused_date(&mut self) {
        self.select_date(self.grid.focused_date());
    }

    /// Moves the focus cursor while anchored, extending the preview.
    ///
    /// The cursor stays within the effective bounds. Ignored when idle.
    pub fn highlight_date(&mut self, date: DateValue) {
        if !self.selection.is_anchored() {
            trace!(date = %date, "highlight ignored without anchor");
            return;
        }
        let min = self.effective_min();
        let max = self.effective_max();
        let date = constrain_value(date, min.as_ref(), max.as_ref());
        self.grid.set_focused_date(date);
    }

    /// Whether `date` is inside the highlighted range and selectable.
    pub fn is_selected(&self, date: &DateValue) -> bool {
        self.highlighted_range()
            .is_some_and(|range| range.contains(date))
            && !self.is_cell_disabled(date)
            && !self.is_cell_unavailable(date)
    }

    /// Whether `date` is out of bounds, including beyond the available range.
    pub fn is_invalid(&self, date: &DateValue) -> bool {
        self.grid.is_invalid(date) || self.is_beyond_available(date)
    }

    pub fn is_cell_disabled(&self, date: &DateValue) -> bool {
        self.grid.is_cell_disabled(date) || self.is_beyond_available(date)
    }

    pub fn is_cell_unavailable(&self, date: &DateValue) -> bool {
        self.grid.is_cell_unavailable(date)
    }

    fn is_beyond_available(&self, date: &DateValue) -> bool {
        self.available_range()
            .is_some_and(|range| range.excludes(date))
    }

    pub fn is_value_invalid(&self) -> bool {
        RangeValidator::new(&self.options)
            .is_value_invalid(self.value.value(), self.selection.is_anchored())
    }

    pub fn validation_state(&self) -> Option<ValidationState> {
        RangeValidator::new(&self.options).validate(self.value.value(), self.selection.is_anchored())
    }
}

impl<G: std::fmt::Debug> std::fmt::Debug for RangeCalendarState<G> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RangeCalendarState")
            .field("options", &self.options)
            .field("grid", &self.grid)
            .field("value", &self.value)
            .field("selection", &self.selection)
            .field("is_dragging", &self.is_dragging)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> DateValue {
        s.parse().expect("valid date")
    }

    fn state() -> RangeCalendarState {
        RangeCalendarState::new(RangeCalendarOptions::new().with_today(date("2024-01-10")))
    }

    #[test]
    fn selection_tags() {
        assert_eq!(Selection::default(), Selection::Idle);
        assert_eq!(Selection::Idle.anchor(), None);
        let anchor = date("2024-01-10");
        assert!(Selection::Anchored(anchor).is_anchored());
        assert_eq!(Selection::Anchored(anchor).anchor(), Some(anchor));
    }

    #[test]
    fn highlight_requires_anchor() {
        let mut state = state();
        state.highlight_date(date("2024-01-20"));
        assert_eq!(state.focused_date(), date("2024-01-10"));
        state.select_date(date("2024-01-12"));
        state.highlight_date(date("2024-01-20"));
        assert_eq!(state.focused_date(), date("2024-01-20"));
        assert_eq!(
            state.highlighted_range(),
            Some(DateRange::new(date("2024-01-12"), date("2024-01-20")))
        );
    }

    #[test]
    fn reset_clears_anchor_and_drag() {
        let mut state = state();
        state.set_dragging(true);
        state.select_date(date("2024-01-12"));
        state.reset_selection();
        assert_eq!(state.selection(), Selection::Idle);
        assert!(!state.is_dragging());
        assert_eq!(state.value(), None);
    }

    #[test]
    fn anchor_is_stored_as_pure_date() {
        let mut state = state();
        state.set_anchor_date(Some(date("2024-01-12T10:00")));
        assert_eq!(state.anchor_date(), Some(date("2024-01-12")));
    }
}
