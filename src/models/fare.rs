//! Fare tariff model
//!
//! A tariff is an append-only record of the base fare and discount
//! percentage in force from its timestamp onward. The newest record wins.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::parse;

/// A fare tariff record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FareTariff {
    /// Unique identifier
    #[serde(default)]
    pub id: String,

    /// Base fare for a ride (currency units)
    #[serde(
        default,
        alias = "basePrice",
        deserialize_with = "parse::de_flexible_amount"
    )]
    pub base_fare: f64,

    /// Discount percentage applied to discounted passenger classes (0-100)
    #[serde(
        default,
        alias = "discount",
        deserialize_with = "parse::de_flexible_amount"
    )]
    pub discount_percent: f64,

    /// When this tariff was recorded
    #[serde(
        default,
        alias = "timestamp",
        deserialize_with = "parse::de_flexible_timestamp"
    )]
    pub updated_at: Option<DateTime<Utc>>,
}

impl FareTariff {
    /// Create a new tariff record stamped with the current time
    pub fn new(base_fare: f64, discount_percent: f64) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            base_fare,
            discount_percent,
            updated_at: Some(Utc::now()),
        }
    }
}

/// Fare values after the discount percentage has been applied
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiscountedFare {
    /// Discounted base fare, rounded to 2 decimals
    pub price: f64,
    /// Discounted per-kilometer rate, rounded to 2 decimals
    pub rate_per_km: f64,
}
