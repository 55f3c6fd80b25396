//! Session replay and reporting for the datepick CLI.

pub mod logging;
pub mod replay;
pub mod script;
pub mod summary;
