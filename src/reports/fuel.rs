//! Fuel expense report
//!
//! The report is a pure derivation over a snapshot of fuel logs: apply the
//! filter, compute summary statistics, expose export rows. It is recomputed
//! from scratch on every new snapshot or filter change; no state accumulates
//! between runs.

use std::collections::HashSet;
use std::io::Write;

use crate::error::FleetResult;
use crate::export;
use crate::models::{FuelLog, FuelStats, LogFilter, LogStatus};

/// Column headers for report export, one per row field
pub const REPORT_HEADERS: [&str; 6] = [
    "ID",
    "Timestamp",
    "Driver Name",
    "Officer",
    "Amount Spent",
    "Unit",
];

/// Apply the filter to a log snapshot, preserving input order
pub fn filter_logs(logs: &[FuelLog], filter: &LogFilter) -> Vec<FuelLog> {
    logs.iter().filter(|log| filter.matches(log)).cloned().collect()
}

/// Compute summary statistics over a filtered log set
///
/// `personnel_count` comes from the roster export and passes through
/// untouched, even when the filtered set is empty.
pub fn compute_stats(filtered: &[FuelLog], unit_price: f64, personnel_count: usize) -> FuelStats {
    if filtered.is_empty() {
        return FuelStats {
            personnel_count,
            drivers_fueled: 0,
            total_expense: 0.0,
        };
    }

    let total_expense = filtered.iter().map(|log| log.amount * unit_price).sum();

    let fueled: HashSet<&str> = filtered
        .iter()
        .filter(|log| log.status == LogStatus::Done && !log.driver.is_empty())
        .map(|log| log.driver.as_str())
        .collect();

    FuelStats {
        personnel_count,
        drivers_fueled: fueled.len(),
        total_expense,
    }
}

/// Fuel expense report over one snapshot
#[derive(Debug, Clone)]
pub struct FuelReport {
    /// The filter that produced this report
    pub filter: LogFilter,
    /// Unit price used for the expense total
    pub unit_price: f64,
    /// Filtered logs, in snapshot order
    pub logs: Vec<FuelLog>,
    /// Summary statistics
    pub stats: FuelStats,
}

impl FuelReport {
    /// Generate a report from a full log snapshot
    ///
    /// Pure: the same snapshot, filter, price, and personnel count always
    /// produce the same report.
    pub fn generate(
        snapshot: &[FuelLog],
        filter: LogFilter,
        unit_price: f64,
        personnel_count: usize,
    ) -> Self {
        let logs = filter_logs(snapshot, &filter);
        let stats = compute_stats(&logs, unit_price, personnel_count);
        Self {
            filter,
            unit_price,
            logs,
            stats,
        }
    }

    /// Export rows: 1-based sequence number, formatted timestamp, driver,
    /// officer, amount, vehicle
    pub fn rows(&self) -> Vec<[String; 6]> {
        self.logs
            .iter()
            .enumerate()
            .map(|(i, log)| {
                [
                    (i + 1).to_string(),
                    log.formatted_timestamp(),
                    log.driver.clone(),
                    log.officer.clone(),
                    format!("{:.2}", log.amount),
                    log.vehicle.clone(),
                ]
            })
            .collect()
    }

    /// Summary block for terminal display
    pub fn format_summary(&self, currency_symbol: &str) -> String {
        let mut output = String::new();
        output.push_str("Fuel Report\n");
        output.push_str(&"=".repeat(50));
        output.push('\n');
        output.push_str(&format!(
            "Drivers & Relievers:  {}\n",
            self.stats.personnel_count
        ));
        output.push_str(&format!(
            "Drivers Fueled:       {}\n",
            self.stats.drivers_fueled
        ));
        output.push_str(&format!(
            "Total Fuel Expense:   {}{:.2}\n",
            currency_symbol, self.stats.total_expense
        ));
        output.push_str(&format!("Logs Shown:           {}\n", self.logs.len()));
        output
    }

    /// Export the report to CSV
    pub fn export_csv<W: Write>(&self, exported_by: &str, writer: W) -> FleetResult<()> {
        export::csv::write_report_csv(self, exported_by, writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FilterMode, OfficerFilter};
    use chrono::{Local, NaiveDate, TimeZone, Utc};

    fn log_on(day: (i32, u32, u32), driver: &str, amount: f64, status: LogStatus) -> FuelLog {
        let ts = Local
            .with_ymd_and_hms(day.0, day.1, day.2, 10, 0, 0)
            .unwrap()
            .with_timezone(&Utc);
        FuelLog::new(driver, "Officer Reyes", amount, "Unit 1")
            .with_status(status)
            .with_occurred_at(ts)
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_logs() -> Vec<FuelLog> {
        vec![
            log_on((2025, 9, 17), "Juan Dela Cruz", 10.0, LogStatus::Done),
            log_on((2025, 9, 18), "Pedro Santos", 5.0, LogStatus::Pending),
            log_on((2025, 9, 15), "Maria Reyes", 3.0, LogStatus::Done),
        ]
    }

    #[test]
    fn test_filter_is_idempotent() {
        let logs = sample_logs();
        let filter = LogFilter::new().search("a").date_bounds(
            Some(date(2025, 9, 1)),
            Some(date(2025, 9, 30)),
        );

        let once = filter_logs(&logs, &filter);
        let twice = filter_logs(&once, &filter);
        assert_eq!(once.len(), twice.len());
        for (a, b) in once.iter().zip(twice.iter()) {
            assert_eq!(a.driver, b.driver);
        }
    }

    #[test]
    fn test_neutral_filter_passes_everything_in_order() {
        let logs = sample_logs();
        let filtered = filter_logs(&logs, &LogFilter::new());
        assert_eq!(filtered.len(), logs.len());
        for (a, b) in filtered.iter().zip(logs.iter()) {
            assert_eq!(a.driver, b.driver);
        }
    }

    #[test]
    fn test_single_day_mode() {
        // Start date with no end date means exactly that day.
        let logs = sample_logs();
        let filter = LogFilter::new().date_bounds(Some(date(2025, 9, 17)), None);
        let filtered = filter_logs(&logs, &filter);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].driver, "Juan Dela Cruz");
    }

    #[test]
    fn test_range_mode() {
        let logs = vec![
            log_on((2025, 8, 31), "Out Before", 1.0, LogStatus::Done),
            log_on((2025, 9, 15), "In Range", 1.0, LogStatus::Done),
            log_on((2025, 10, 1), "Out After", 1.0, LogStatus::Done),
        ];
        let filter =
            LogFilter::new().date_bounds(Some(date(2025, 9, 1)), Some(date(2025, 9, 30)));
        let filtered = filter_logs(&logs, &filter);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].driver, "In Range");
    }

    #[test]
    fn test_end_date_only_is_open_ended_backwards() {
        let logs = sample_logs();
        let filter = LogFilter::new().date_bounds(None, Some(date(2025, 9, 17)));
        let filtered = filter_logs(&logs, &filter);
        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn test_unknown_day_passes_date_filter() {
        let logs = vec![FuelLog::new("No Timestamp", "Officer Reyes", 2.0, "Unit 9")];
        let filter = LogFilter::new().date_bounds(Some(date(2025, 9, 17)), None);
        assert_eq!(filter_logs(&logs, &filter).len(), 1);
    }

    #[test]
    fn test_officer_filter_excludes_other_officers() {
        let mut logs = sample_logs();
        logs[1].officer = "Officer Cruz".to_string();
        let filter = LogFilter::new().officer(OfficerFilter::Named("Officer Reyes".into()));
        assert_eq!(filter_logs(&logs, &filter).len(), 2);
    }

    #[test]
    fn test_stats_empty_set_keeps_personnel_count() {
        let stats = compute_stats(&[], 50.0, 7);
        assert_eq!(stats.personnel_count, 7);
        assert_eq!(stats.drivers_fueled, 0);
        assert_eq!(stats.total_expense, 0.0);
    }

    #[test]
    fn test_stats_dedup_and_status() {
        let logs = vec![
            FuelLog::new("A", "O", 10.0, "U").with_status(LogStatus::Done),
            FuelLog::new("A", "O", 5.0, "U").with_status(LogStatus::Done),
            FuelLog::new("B", "O", 3.0, "U").with_status(LogStatus::Pending),
        ];
        let stats = compute_stats(&logs, 2.0, 7);
        assert_eq!(stats.total_expense, 36.0);
        assert_eq!(stats.drivers_fueled, 1);
        assert_eq!(stats.personnel_count, 7);
    }

    #[test]
    fn test_stats_ignores_empty_driver_names() {
        let logs = vec![FuelLog::new("", "O", 10.0, "U").with_status(LogStatus::Done)];
        let stats = compute_stats(&logs, 1.0, 1);
        assert_eq!(stats.drivers_fueled, 0);
    }

    #[test]
    fn test_generate_is_deterministic() {
        let logs = sample_logs();
        let a = FuelReport::generate(&logs, LogFilter::new(), 50.0, 7);
        let b = FuelReport::generate(&logs, LogFilter::new(), 50.0, 7);
        assert_eq!(a.stats, b.stats);
        assert_eq!(a.logs.len(), b.logs.len());
    }

    #[test]
    fn test_rows_shape_and_sequence() {
        let logs = sample_logs();
        let report = FuelReport::generate(&logs, LogFilter::new(), 50.0, 7);
        let rows = report.rows();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0][0], "1");
        assert_eq!(rows[2][0], "3");
        assert_eq!(rows[0][2], "Juan Dela Cruz");
        assert_eq!(rows[0][4], "10.00");
        assert_eq!(rows[0][5], "Unit 1");
        assert!(rows[0][1].contains("September 17, 2025"));
    }

    #[test]
    fn test_today_mode_filters_single_day() {
        let logs = sample_logs();
        let (start, end) = FilterMode::Today.resolve(date(2025, 9, 18));
        let filter = LogFilter::new().date_bounds(start, end);
        let filtered = filter_logs(&logs, &filter);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].driver, "Pedro Santos");
    }

    #[test]
    fn test_format_summary() {
        let report = FuelReport::generate(&sample_logs(), LogFilter::new(), 2.0, 7);
        let summary = report.format_summary("₱");
        assert!(summary.contains("Drivers & Relievers:  7"));
        assert!(summary.contains("Drivers Fueled:       2"));
        assert!(summary.contains("Total Fuel Expense:   ₱36.00"));
    }
}
