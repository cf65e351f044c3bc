//! Core data models for fleetdesk
//!
//! This module contains the data structures of the fleet back-office domain:
//! fuel logs, fare tariffs, fuel price quotes, the personnel roster, and the
//! filter/statistics types used by the report.

pub mod fare;
pub mod filter;
pub mod fuel_log;
pub mod personnel;
pub mod price;
pub mod stats;

pub use fare::{DiscountedFare, FareTariff};
pub use filter::{FilterMode, LogFilter, OfficerFilter};
pub use fuel_log::{FuelLog, LogStatus};
pub use personnel::Personnel;
pub use price::FuelPriceQuote;
pub use stats::FuelStats;
