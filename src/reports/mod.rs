//! Report generation
//!
//! Pure derivations over snapshot data. Each report is recomputed from a
//! full snapshot; nothing here holds state between runs.

pub mod fuel;

pub use fuel::{compute_stats, filter_logs, FuelReport, REPORT_HEADERS};
