//! CLI command for the fuel expense report
//!
//! Loads the snapshot files, builds the filter from the command-line flags,
//! generates the report, and prints or exports it.

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use chrono::Local;
use clap::Args;

use crate::config::Settings;
use crate::display;
use crate::error::{FleetError, FleetResult};
use crate::models::{personnel, price, FilterMode, LogFilter, OfficerFilter};
use crate::parse;
use crate::reports::FuelReport;
use crate::snapshot;

/// Arguments for the fuel report command
#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Path to the fuel log snapshot (JSON array)
    pub logs: PathBuf,

    /// Path to the personnel roster snapshot (JSON array)
    #[arg(long)]
    pub roster: Option<PathBuf>,

    /// Personnel count override (skips the roster file)
    #[arg(long)]
    pub personnel: Option<usize>,

    /// Path to the fuel price quote snapshot (JSON array)
    #[arg(long)]
    pub prices: Option<PathBuf>,

    /// Fuel unit price override (skips the price file)
    #[arg(long)]
    pub price: Option<f64>,

    /// Free-text search across driver, officer, and vehicle
    #[arg(short, long)]
    pub search: Option<String>,

    /// Officer to filter on, or "all"
    #[arg(long, default_value = "all")]
    pub officer: String,

    /// Date-range preset: today, week, month, or custom
    #[arg(short, long, default_value = "today")]
    pub mode: String,

    /// Start date (YYYY-MM-DD); with no end date this means that single day
    #[arg(long)]
    pub start: Option<String>,

    /// End date (YYYY-MM-DD)
    #[arg(long)]
    pub end: Option<String>,

    /// Export the report to a CSV file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Name recorded in the export attribution line
    #[arg(long)]
    pub exported_by: Option<String>,
}

/// Handle the report command
pub fn handle_report_command(settings: &Settings, args: ReportArgs) -> FleetResult<()> {
    let logs = snapshot::load_logs(&args.logs)?;

    let personnel_count = resolve_personnel_count(&args)?;
    let unit_price = resolve_unit_price(&args)?;
    let filter = build_filter(&args)?;

    let report = FuelReport::generate(&logs, filter, unit_price, personnel_count);

    print!("{}", report.format_summary(&settings.currency_symbol));
    println!();
    print!(
        "{}",
        display::format_report_table(&report, &settings.currency_symbol)
    );

    if let Some(output) = &args.output {
        let exported_by = args
            .exported_by
            .clone()
            .or_else(|| {
                (!settings.exported_by.is_empty()).then(|| settings.exported_by.clone())
            })
            .unwrap_or_else(|| "Unknown User".to_string());

        let file = File::create(output)
            .map_err(|e| FleetError::Export(format!("Failed to create {}: {}", output.display(), e)))?;
        report.export_csv(&exported_by, BufWriter::new(file))?;
        println!("Report exported to {}", output.display());
    }

    Ok(())
}

fn resolve_personnel_count(args: &ReportArgs) -> FleetResult<usize> {
    if let Some(count) = args.personnel {
        return Ok(count);
    }
    if let Some(roster_path) = &args.roster {
        let roster = snapshot::load_roster(roster_path)?;
        return Ok(personnel::driver_reliever_count(&roster));
    }
    Ok(0)
}

fn resolve_unit_price(args: &ReportArgs) -> FleetResult<f64> {
    if let Some(price) = args.price {
        return Ok(parse::coerce_amount(price));
    }
    if let Some(prices_path) = &args.prices {
        let quotes = snapshot::load_price_quotes(prices_path)?;
        return Ok(price::latest_quote(&quotes).map_or(0.0, |q| q.price));
    }
    Ok(0.0)
}

fn build_filter(args: &ReportArgs) -> FleetResult<LogFilter> {
    let (start, end) = if args.start.is_some() || args.end.is_some() {
        (
            parse_bound(args.start.as_deref())?,
            parse_bound(args.end.as_deref())?,
        )
    } else {
        let mode: FilterMode = args.mode.parse()?;
        mode.resolve(Local::now().date_naive())
    };

    Ok(LogFilter::new()
        .search(args.search.clone().unwrap_or_default())
        .officer(OfficerFilter::parse(&args.officer))
        .date_bounds(start, end))
}

fn parse_bound(value: Option<&str>) -> FleetResult<Option<chrono::NaiveDate>> {
    match value {
        None => Ok(None),
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => parse::parse_date(s)
            .map(Some)
            .ok_or_else(|| FleetError::validation(format!("Invalid date '{}' (expected YYYY-MM-DD)", s))),
    }
}
