//! Snapshot file loading
//!
//! The upstream system exports full snapshots as JSON arrays. Each loader
//! reads the whole file, coerces malformed fields per record (see `parse`),
//! and never fails on a single bad field. Missing files are reported as
//! snapshot errors with the path in the message.

use std::fs;
use std::path::Path;

use crate::error::{FleetError, FleetResult};
use crate::models::{FareTariff, FuelLog, FuelPriceQuote, Personnel};

/// Load a fuel log snapshot, sorted newest first
///
/// Logs without a timestamp sort last, matching the upstream ordering.
pub fn load_logs(path: &Path) -> FleetResult<Vec<FuelLog>> {
    let mut logs: Vec<FuelLog> = read_json(path)?;
    logs.sort_by(|a, b| b.occurred_at.cmp(&a.occurred_at));
    Ok(logs)
}

/// Load the personnel roster
pub fn load_roster(path: &Path) -> FleetResult<Vec<Personnel>> {
    read_json(path)
}

/// Load fuel price quotes
pub fn load_price_quotes(path: &Path) -> FleetResult<Vec<FuelPriceQuote>> {
    read_json(path)
}

/// Load the fare tariff history; a missing file is an empty history
pub fn load_tariffs(path: &Path) -> FleetResult<Vec<FareTariff>> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    read_json(path)
}

/// Write the fare tariff history back to disk
pub fn save_tariffs(path: &Path, tariffs: &[FareTariff]) -> FleetResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| FleetError::Io(format!("Failed to create {}: {}", parent.display(), e)))?;
    }
    let json = serde_json::to_string_pretty(tariffs)?;
    fs::write(path, json)
        .map_err(|e| FleetError::Io(format!("Failed to write {}: {}", path.display(), e)))
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> FleetResult<Vec<T>> {
    let contents = fs::read_to_string(path)
        .map_err(|e| FleetError::Snapshot(format!("Failed to read {}: {}", path.display(), e)))?;
    serde_json::from_str(&contents)
        .map_err(|e| FleetError::Snapshot(format!("Malformed snapshot {}: {}", path.display(), e)))
}
