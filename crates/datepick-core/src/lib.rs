pub mod alignment;
pub mod availability;
pub mod bounds;
pub mod convert;
pub mod grid;
pub mod selection;
pub mod store;
pub mod validator;

pub use alignment::{
    align_center, align_end, align_start, constrain_start, initial_alignment, window_end,
};
pub use availability::scan_available_range;
pub use bounds::{
    constrain_value, earlier_of, is_outside_bounds, later_of, previous_available_date,
};
pub use convert::{convert_range, convert_value, make_range};
pub use grid::{CalendarGrid, CalendarState};
pub use selection::{RangeCalendarState, Selection};
pub use store::{ChangeHandler, ControlledState};
pub use validator::RangeValidator;
