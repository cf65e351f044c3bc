//! Summary statistics for the fuel report

use serde::{Deserialize, Serialize};

/// Summary statistics derived from a filtered fuel log set
///
/// `personnel_count` is supplied by the caller from the roster export and is
/// never derived from the filtered logs, so an empty report still shows the
/// fleet's full driver/reliever headcount.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct FuelStats {
    /// Drivers and relievers on the roster
    pub personnel_count: usize,
    /// Distinct drivers with at least one completed fuel-up in the filtered set
    pub drivers_fueled: usize,
    /// Total fuel expense: sum of amount times unit price over the filtered set
    pub total_expense: f64,
}
