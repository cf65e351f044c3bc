//! Fuel report display formatting
//!
//! Renders the filtered log list as a terminal table.

use tabled::{settings::Style, Table, Tabled};

use crate::reports::FuelReport;

/// One displayed row of the fuel report table
#[derive(Tabled)]
struct FuelLogRow {
    #[tabled(rename = "#")]
    seq: usize,
    #[tabled(rename = "Timestamp")]
    timestamp: String,
    #[tabled(rename = "Driver Name")]
    driver: String,
    #[tabled(rename = "Officer")]
    officer: String,
    #[tabled(rename = "Amount Spent")]
    amount: String,
    #[tabled(rename = "Unit")]
    vehicle: String,
}

/// Render the filtered logs as a table
pub fn format_report_table(report: &FuelReport, currency_symbol: &str) -> String {
    if report.logs.is_empty() {
        return "No fuel logs matched the current filter.\n".to_string();
    }

    let rows: Vec<FuelLogRow> = report
        .logs
        .iter()
        .enumerate()
        .map(|(i, log)| FuelLogRow {
            seq: i + 1,
            timestamp: log.formatted_timestamp(),
            driver: log.driver.clone(),
            officer: log.officer.clone(),
            amount: format!("{}{:.2}", currency_symbol, log.amount),
            vehicle: log.vehicle.clone(),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    format!("{}\n", table)
}
