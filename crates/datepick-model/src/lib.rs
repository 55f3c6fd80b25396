pub mod calendar;
pub mod date;
pub mod duration;
pub mod error;
pub mod options;
pub mod range;
pub mod validation;

pub use calendar::{CalendarFields, CalendarSystem, Era};
pub use date::DateValue;
pub use duration::{PageBehavior, SelectionAlignment, VisibleDuration};
pub use error::{DateParseError, Result};
pub use options::{DatePredicate, RangeCalendarOptions};
pub use range::{AvailableRange, DateRange};
pub use validation::ValidationState;
