//! CSV report export
//!
//! Writes the fuel report in the layout the back office expects: a title
//! line, an "Exported by" attribution line, then the header row and one row
//! per filtered log with 1-based sequence numbers.

use std::io::Write;

use chrono::Local;

use crate::error::FleetResult;
use crate::reports::{FuelReport, REPORT_HEADERS};

/// Title used in the export preamble and default file names
pub const REPORT_TITLE: &str = "Fuel Report";

/// Write a fuel report as CSV
pub fn write_report_csv<W: Write>(
    report: &FuelReport,
    exported_by: &str,
    writer: W,
) -> FleetResult<()> {
    let mut csv_writer = csv::WriterBuilder::new().flexible(true).from_writer(writer);

    csv_writer.write_record([REPORT_TITLE])?;
    csv_writer.write_record([
        "Exported by",
        exported_by,
        &Local::now().format("%B %-d, %Y").to_string(),
    ])?;

    csv_writer.write_record(REPORT_HEADERS)?;
    for row in report.rows() {
        csv_writer.write_record(&row)?;
    }

    csv_writer.flush().map_err(crate::error::FleetError::from)?;
    Ok(())
}
