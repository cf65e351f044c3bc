//! Report export

pub mod csv;

pub use self::csv::{write_report_csv, REPORT_TITLE};
