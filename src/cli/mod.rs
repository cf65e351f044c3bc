//! Command-line interface handlers

pub mod fare;
pub mod report;

pub use fare::{handle_fare_command, FareCommands};
pub use report::{handle_report_command, ReportArgs};
