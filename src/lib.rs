//! fleetdesk - Terminal-based fleet back-office reporting
//!
//! This library provides the core functionality for fleetdesk, a terminal
//! tool for fleet/ride-service back-office work: fuel expense reporting over
//! exported log snapshots, and fare-rate configuration.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (fuel logs, tariffs, roster, filters)
//! - `parse`: Defensive coercion for loosely-typed snapshot fields
//! - `snapshot`: JSON snapshot file loading
//! - `reports`: Pure report derivation (filtering and statistics)
//! - `services`: Fare validation and discounted-rate derivation
//! - `export`: CSV report export
//! - `display`: Terminal formatting
//! - `audit`: Activity logging for administrative actions
//! - `cli`: Command handlers

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod parse;
pub mod reports;
pub mod services;
pub mod snapshot;

pub use error::{FleetError, FleetResult};
