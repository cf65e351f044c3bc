//! CLI commands for fare management
//!
//! Shows the tariff in force, appends new tariff records (with validation
//! and an activity-log entry), and derives discounted rates.

use std::path::PathBuf;

use clap::Subcommand;

use crate::audit::ActivityLogger;
use crate::config::{FleetPaths, Settings};
use crate::display;
use crate::error::{FleetError, FleetResult};
use crate::models::FareTariff;
use crate::services::{
    derive_discounted_rates, latest_tariff, validate_base_fare, validate_discount_percent,
    validate_rate_per_km,
};
use crate::snapshot;

/// Fare management subcommands
#[derive(Subcommand, Debug)]
pub enum FareCommands {
    /// Show the fare settings currently in force
    Show {
        /// Tariff history file (defaults to the managed data directory)
        #[arg(long)]
        file: Option<PathBuf>,
    },

    /// Record new fare settings
    Set {
        /// New base fare (must be positive)
        #[arg(long)]
        base_fare: f64,

        /// New discount percentage (0-100)
        #[arg(long)]
        discount: f64,

        /// Tariff history file (defaults to the managed data directory)
        #[arg(long)]
        file: Option<PathBuf>,

        /// Who performed the change (for the activity log)
        #[arg(long)]
        performed_by: Option<String>,

        /// Role of the actor (e.g. "Admin" or "Super")
        #[arg(long)]
        role: Option<String>,
    },

    /// Derive the discounted price and per-km rate
    Derive {
        /// Regular rate per kilometer (must be positive)
        #[arg(long)]
        rate_per_km: f64,

        /// Base fare override; read from the tariff history when omitted
        #[arg(long)]
        base_fare: Option<f64>,

        /// Discount percentage override; read from the tariff history when omitted
        #[arg(long)]
        discount: Option<f64>,

        /// Tariff history file (defaults to the managed data directory)
        #[arg(long)]
        file: Option<PathBuf>,
    },
}

/// Handle fare commands
pub fn handle_fare_command(
    paths: &FleetPaths,
    settings: &Settings,
    cmd: FareCommands,
) -> FleetResult<()> {
    match cmd {
        FareCommands::Show { file } => handle_show(paths, settings, file),
        FareCommands::Set {
            base_fare,
            discount,
            file,
            performed_by,
            role,
        } => handle_set(paths, settings, base_fare, discount, file, performed_by, role),
        FareCommands::Derive {
            rate_per_km,
            base_fare,
            discount,
            file,
        } => handle_derive(paths, settings, rate_per_km, base_fare, discount, file),
    }
}

fn tariffs_path(paths: &FleetPaths, file: Option<PathBuf>) -> PathBuf {
    file.unwrap_or_else(|| paths.tariffs_file())
}

fn handle_show(paths: &FleetPaths, settings: &Settings, file: Option<PathBuf>) -> FleetResult<()> {
    let tariffs = snapshot::load_tariffs(&tariffs_path(paths, file))?;
    match latest_tariff(&tariffs) {
        Some(tariff) => print!("{}", display::format_tariff(tariff, &settings.currency_symbol)),
        None => println!("No fare settings recorded yet."),
    }
    Ok(())
}

fn handle_set(
    paths: &FleetPaths,
    settings: &Settings,
    base_fare: f64,
    discount: f64,
    file: Option<PathBuf>,
    performed_by: Option<String>,
    role: Option<String>,
) -> FleetResult<()> {
    validate_base_fare(base_fare)?;
    validate_discount_percent(discount)?;

    let path = tariffs_path(paths, file);
    let mut tariffs = snapshot::load_tariffs(&path)?;
    let tariff = FareTariff::new(base_fare, discount);
    tariffs.push(tariff.clone());
    snapshot::save_tariffs(&path, &tariffs)?;

    let actor = performed_by.unwrap_or_else(|| "Unknown User".to_string());
    let logger = ActivityLogger::new(paths.activity_log());
    logger.log_activity(
        format!(
            "Updated base fare to {}{:.2} and discount to {}%",
            settings.currency_symbol, base_fare, discount
        ),
        actor,
        role.as_deref(),
    )?;

    println!("Fare settings updated successfully!");
    print!("{}", display::format_tariff(&tariff, &settings.currency_symbol));
    Ok(())
}

fn handle_derive(
    paths: &FleetPaths,
    settings: &Settings,
    rate_per_km: f64,
    base_fare: Option<f64>,
    discount: Option<f64>,
    file: Option<PathBuf>,
) -> FleetResult<()> {
    let (base_fare, discount) = match (base_fare, discount) {
        (Some(base), Some(pct)) => (base, pct),
        _ => {
            let tariffs = snapshot::load_tariffs(&tariffs_path(paths, file))?;
            let tariff = latest_tariff(&tariffs).ok_or_else(|| {
                FleetError::validation(
                    "No fare settings recorded; supply --base-fare and --discount",
                )
            })?;
            (
                base_fare.unwrap_or(tariff.base_fare),
                discount.unwrap_or(tariff.discount_percent),
            )
        }
    };

    // Validation happens here, before the derivation, which assumes
    // well-formed input.
    validate_base_fare(base_fare)?;
    validate_discount_percent(discount)?;
    validate_rate_per_km(rate_per_km)?;

    let fare = derive_discounted_rates(base_fare, discount, rate_per_km);
    print!("{}", display::format_discounted(&fare, &settings.currency_symbol));
    Ok(())
}
