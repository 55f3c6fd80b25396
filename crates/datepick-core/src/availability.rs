//! Availability scan around an anchor date.
//!
//! Given an anchor and the visible window, finds how far a range may extend
//! in each direction before it would span an unavailable day. The scan is a
//! pure function of its inputs and is re-run whenever the range engine needs
//! it, so a window change is always seen by the next pick.

use std::cmp::Ordering;

use datepick_model::{AvailableRange, DateRange, DateValue};
use tracing::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Backward,
    Forward,
}

impl Direction {
    fn step(self) -> i64 {
        match self {
            Self::Backward => -1,
            Self::Forward => 1,
        }
    }

    /// Whether the walk has not yet passed the window edge it is heading for.
    ///
    /// Only the leading edge counts, so an anchor left behind by paging still
    /// walks into the current window.
    fn within(self, date: &DateValue, window: &DateRange) -> bool {
        match self {
            Self::Backward => date.compare_day(&window.start()) != Ordering::Less,
            Self::Forward => date.compare_day(&window.end()) != Ordering::Greater,
        }
    }
}

/// Computes the contiguous available bounds around `anchor`.
///
/// Returns `None` when there is no anchor, no unavailability predicate, or
/// non-contiguous ranges are allowed. Otherwise each side holds the last
/// available day before the first unavailable day met on the way to that
/// side's window edge, or `None` when the walk passes the edge without
/// meeting one.
pub fn scan_available_range(
    anchor: Option<&DateValue>,
    window: &DateRange,
    is_unavailable: Option<&dyn Fn(&DateValue) -> bool>,
    allows_non_contiguous_ranges: bool,
) -> Option<AvailableRange> {
    let anchor = anchor?.to_calendar_date();
    let is_unavailable = is_unavailable?;
    if allows_non_contiguous_ranges {
        return None;
    }
    let range = AvailableRange {
        start: boundary(anchor, window, is_unavailable, Direction::Backward),
        end: boundary(anchor, window, is_unavailable, Direction::Forward),
    };
    trace!(anchor = %anchor, window = %window, available = %range, "scanned availability");
    Some(range)
}

fn boundary(
    anchor: DateValue,
    window: &DateRange,
    is_unavailable: &dyn Fn(&DateValue) -> bool,
    direction: Direction,
) -> Option<DateValue> {
    let step = direction.step();
    let mut current = anchor.add_days(step)?;
    while direction.within(&current, window) {
        if is_unavailable(&current) {
            return current.add_days(-step);
        }
        current = current.add_days(step)?;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> DateValue {
        s.parse().expect("valid date")
    }

    fn january() -> DateRange {
        DateRange::new(date("2024-01-01"), date("2024-01-31"))
    }

    #[test]
    fn no_predicate_means_no_constraint() {
        let anchor = date("2024-01-10");
        assert_eq!(scan_available_range(Some(&anchor), &january(), None, false), None);
    }

    #[test]
    fn non_contiguous_disables_scan() {
        let anchor = date("2024-01-10");
        let is_unavailable = |_: &DateValue| true;
        assert_eq!(
            scan_available_range(Some(&anchor), &january(), Some(&is_unavailable), true),
            None
        );
    }

    #[test]
    fn no_anchor_means_no_constraint() {
        let is_unavailable = |_: &DateValue| true;
        assert_eq!(scan_available_range(None, &january(), Some(&is_unavailable), false), None);
    }

    #[test]
    fn adjacent_obstruction_pins_boundary_to_anchor() {
        let anchor = date("2024-01-10");
        let blocked = date("2024-01-11");
        let is_unavailable = move |d: &DateValue| d.is_same_day(&blocked);
        let range = scan_available_range(Some(&anchor), &january(), Some(&is_unavailable), false)
            .expect("scan applies");
        assert_eq!(range.start, None);
        assert_eq!(range.end, Some(anchor));
    }

    #[test]
    fn obstruction_outside_window_is_ignored() {
        let anchor = date("2024-01-30");
        let blocked = date("2024-02-01");
        let is_unavailable = move |d: &DateValue| d.is_same_day(&blocked);
        let range = scan_available_range(Some(&anchor), &january(), Some(&is_unavailable), false)
            .expect("scan applies");
        assert_eq!(range, AvailableRange::default());
    }
}
