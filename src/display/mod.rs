//! Terminal display formatting

pub mod fare;
pub mod report;

pub use fare::{format_discounted, format_tariff};
pub use report::format_report_table;
