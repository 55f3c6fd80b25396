//! Replays a session script against the range selection engine.

use std::cell::RefCell;
use std::rc::Rc;

use datepick_core::RangeCalendarState;
use datepick_model::{AvailableRange, DateRange, DateValue, ValidationState};
use serde::Serialize;
use tracing::{debug, info, info_span};

use crate::script::{Event, Script};

/// Engine state observed after one event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Step {
    pub index: usize,
    pub event: String,
    pub anchor: Option<DateValue>,
    pub focused: DateValue,
    pub window: DateRange,
    pub available: Option<AvailableRange>,
    pub highlighted: Option<DateRange>,
    pub value: Option<DateRange>,
    pub validation: Option<ValidationState>,
    pub dragging: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReplayReport {
    pub controlled: bool,
    pub steps: Vec<Step>,
    /// Number of value change notifications.
    pub changes: usize,
    pub value: Option<DateRange>,
    pub validation: Option<ValidationState>,
}

/// Applies every event in order, capturing state after each one.
///
/// A controlled script plays a caller that accepts every reported change.
pub fn replay(script: &Script) -> ReplayReport {
    let span = info_span!("replay", events = script.events.len(), controlled = script.controlled);
    let _guard = span.enter();

    let options = script.calendar_options();
    let notifications: Rc<RefCell<Vec<Option<DateRange>>>> = Rc::default();
    let sink = Rc::clone(&notifications);
    let state = if script.controlled {
        let initial = options.default_value;
        RangeCalendarState::controlled(options, initial)
    } else {
        RangeCalendarState::new(options)
    };
    let mut state = state.on_change(move |value| sink.borrow_mut().push(value.copied()));

    let mut steps = Vec::with_capacity(script.events.len());
    let mut changes = 0;
    for (index, event) in script.events.iter().enumerate() {
        debug!(index = index + 1, event = %event, "applying event");
        apply_event(&mut state, event);
        let pending: Vec<_> = notifications.borrow_mut().drain(..).collect();
        changes += pending.len();
        if script.controlled
            && let Some(accepted) = pending.last()
        {
            state.sync_value(*accepted);
        }
        steps.push(capture(index + 1, event, &state));
    }

    info!(changes, value = ?state.value().map(|v| v.to_string()), "replay complete");
    ReplayReport {
        controlled: script.controlled,
        steps,
        changes,
        value: state.value(),
        validation: state.validation_state(),
    }
}

fn apply_event(state: &mut RangeCalendarState, event: &Event) {
    match event {
        Event::Select { date } => state.select_date(*date),
        Event::SelectFocused => state.select_focused_date(),
        Event::Highlight { date } => state.highlight_date(*date),
        Event::Focus { date } => state.set_focused_date(*date),
        Event::NextPage => state.focus_next_page(),
        Event::PreviousPage => state.focus_previous_page(),
        Event::SetDragging { dragging } => state.set_dragging(*dragging),
        Event::Reset => state.reset_selection(),
        Event::SetValue { value } => state.set_value(*value),
    }
}

fn capture(index: usize, event: &Event, state: &RangeCalendarState) -> Step {
    Step {
        index,
        event: event.to_string(),
        anchor: state.anchor_date(),
        focused: state.focused_date(),
        window: state.visible_range(),
        available: state.available_range(),
        highlighted: state.highlighted_range(),
        value: state.value(),
        validation: state.validation_state(),
        dragging: state.is_dragging(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script::parse_script;

    #[test]
    fn controlled_replay_accepts_changes() {
        let script = parse_script(
            r#"{
                "controlled": true,
                "options": { "today": "2024-01-10" },
                "events": [
                    { "event": "select", "date": "2024-01-04" },
                    { "event": "select", "date": "2024-01-02" },
                    { "event": "set_value", "value": null }
                ]
            }"#,
        )
        .unwrap();
        let report = replay(&script);
        assert!(report.controlled);
        assert_eq!(report.changes, 2);
        assert_eq!(
            report.steps[1].value.map(|v| v.to_string()).as_deref(),
            Some("2024-01-02/2024-01-04")
        );
        assert_eq!(report.value, None);
    }

    #[test]
    fn every_event_produces_a_step() {
        let script = parse_script(
            r#"{
                "options": { "today": "2024-01-10" },
                "events": [
                    { "event": "set_dragging", "dragging": true },
                    { "event": "select_focused" },
                    { "event": "highlight", "date": "2024-01-12" },
                    { "event": "reset" }
                ]
            }"#,
        )
        .unwrap();
        let report = replay(&script);
        assert_eq!(report.steps.len(), 4);
        assert!(report.steps[0].dragging);
        assert_eq!(
            report.steps[1].anchor.map(|d| d.to_string()).as_deref(),
            Some("2024-01-10")
        );
        assert_eq!(report.steps[2].focused.to_string(), "2024-01-12");
        assert_eq!(report.steps[3].anchor, None);
        assert!(!report.steps[3].dragging);
        assert_eq!(report.changes, 0);
    }
}
