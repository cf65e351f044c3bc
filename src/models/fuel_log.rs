//! Fuel log model
//!
//! Represents a single fuel transaction recorded by the upstream system.
//! Field aliases match the names used by the upstream export, and amounts
//! and timestamps are coerced leniently on deserialization: a malformed
//! field degrades to a neutral value, never an error.

use chrono::{DateTime, Local, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use crate::parse;

/// Lifecycle status of a fuel log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogStatus {
    /// Fuel-up recorded but not yet confirmed
    #[default]
    Pending,
    /// Fuel-up confirmed complete
    Done,
}

impl<'de> Deserialize<'de> for LogStatus {
    /// Unknown or missing status tags degrade to `Pending`.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(match s.as_str() {
            "done" => Self::Done,
            _ => Self::Pending,
        })
    }
}

impl fmt::Display for LogStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => write!(f, "Pending"),
            Self::Done => write!(f, "Done"),
        }
    }
}

/// A fuel transaction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FuelLog {
    /// Identifier assigned by the upstream storage layer
    #[serde(default)]
    pub id: String,

    /// When the fuel-up happened; `None` when the export carried no usable
    /// timestamp
    #[serde(
        default,
        alias = "timestamp",
        deserialize_with = "parse::de_flexible_timestamp"
    )]
    pub occurred_at: Option<DateTime<Utc>>,

    /// Driver who fueled up
    #[serde(default, alias = "Driver")]
    pub driver: String,

    /// Officer who recorded the fuel-up
    #[serde(default, alias = "Officer")]
    pub officer: String,

    /// Fuel amount spent (non-negative; unparseable values become 0)
    #[serde(
        default,
        alias = "fuelAmount",
        deserialize_with = "parse::de_flexible_amount"
    )]
    pub amount: f64,

    /// Vehicle unit identifier
    #[serde(default, alias = "Vehicle")]
    pub vehicle: String,

    /// Lifecycle status
    #[serde(default)]
    pub status: LogStatus,
}

impl FuelLog {
    /// Create a new fuel log with the given core fields
    pub fn new(
        driver: impl Into<String>,
        officer: impl Into<String>,
        amount: f64,
        vehicle: impl Into<String>,
    ) -> Self {
        Self {
            id: String::new(),
            occurred_at: None,
            driver: driver.into(),
            officer: officer.into(),
            amount: parse::coerce_amount(amount),
            vehicle: vehicle.into(),
            status: LogStatus::Pending,
        }
    }

    /// Set the status (builder style)
    pub fn with_status(mut self, status: LogStatus) -> Self {
        self.status = status;
        self
    }

    /// Set the timestamp (builder style)
    pub fn with_occurred_at(mut self, occurred_at: DateTime<Utc>) -> Self {
        self.occurred_at = Some(occurred_at);
        self
    }

    /// The local calendar day this log belongs to, if known
    pub fn occurred_day(&self) -> Option<NaiveDate> {
        self.occurred_at
            .map(|ts| ts.with_timezone(&Local).date_naive())
    }

    /// Full timestamp for display and export, e.g. "September 17, 2025, 10:28 AM"
    pub fn formatted_timestamp(&self) -> String {
        match self.occurred_at {
            Some(ts) => ts
                .with_timezone(&Local)
                .format("%B %-d, %Y, %-I:%M %p")
                .to_string(),
            None => "N/A".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_status_display() {
        assert_eq!(LogStatus::Pending.to_string(), "Pending");
        assert_eq!(LogStatus::Done.to_string(), "Done");
    }

    #[test]
    fn test_unknown_status_degrades_to_pending() {
        let status: LogStatus = serde_json::from_str("\"approved\"").unwrap();
        assert_eq!(status, LogStatus::Pending);

        let status: LogStatus = serde_json::from_str("\"done\"").unwrap();
        assert_eq!(status, LogStatus::Done);
    }

    #[test]
    fn test_deserialize_upstream_field_names() {
        let json = r#"{
            "id": "log-1",
            "Driver": "Juan Dela Cruz",
            "Officer": "Officer Reyes",
            "fuelAmount": "42.5",
            "Vehicle": "Unit 7",
            "timestamp": { "seconds": 1758104880, "nanoseconds": 0 },
            "status": "done"
        }"#;

        let log: FuelLog = serde_json::from_str(json).unwrap();
        assert_eq!(log.driver, "Juan Dela Cruz");
        assert_eq!(log.amount, 42.5);
        assert_eq!(log.status, LogStatus::Done);
        assert!(log.occurred_at.is_some());
    }

    #[test]
    fn test_deserialize_sparse_record() {
        let log: FuelLog = serde_json::from_str(r#"{ "Driver": "A" }"#).unwrap();
        assert_eq!(log.driver, "A");
        assert_eq!(log.amount, 0.0);
        assert_eq!(log.status, LogStatus::Pending);
        assert!(log.occurred_at.is_none());
        assert!(log.occurred_day().is_none());
    }

    #[test]
    fn test_negative_amount_coerced_to_zero() {
        let log: FuelLog = serde_json::from_str(r#"{ "fuelAmount": -12.5 }"#).unwrap();
        assert_eq!(log.amount, 0.0);
    }

    #[test]
    fn test_formatted_timestamp() {
        let ts = Local
            .with_ymd_and_hms(2025, 9, 17, 10, 28, 0)
            .unwrap()
            .with_timezone(&Utc);
        let log = FuelLog::new("A", "B", 1.0, "C").with_occurred_at(ts);
        assert_eq!(log.formatted_timestamp(), "September 17, 2025, 10:28 AM");

        let log = FuelLog::new("A", "B", 1.0, "C");
        assert_eq!(log.formatted_timestamp(), "N/A");
    }

    #[test]
    fn test_occurred_day_uses_local_calendar() {
        let ts = Local
            .with_ymd_and_hms(2025, 9, 17, 23, 59, 59)
            .unwrap()
            .with_timezone(&Utc);
        let log = FuelLog::new("A", "B", 1.0, "C").with_occurred_at(ts);
        assert_eq!(
            log.occurred_day(),
            NaiveDate::from_ymd_opt(2025, 9, 17)
        );
    }
}
