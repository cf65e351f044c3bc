//! Fuel price quotes
//!
//! The upstream system records fuel prices over time; the report uses the
//! most recently recorded quote as the unit price.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::parse;

/// A fuel price quote
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FuelPriceQuote {
    /// Price per unit of fuel (non-negative; unparseable values become 0)
    #[serde(
        default,
        alias = "Price",
        deserialize_with = "parse::de_flexible_amount"
    )]
    pub price: f64,

    /// When the quote was recorded
    #[serde(
        default,
        alias = "timestamp",
        deserialize_with = "parse::de_flexible_timestamp"
    )]
    pub recorded_at: Option<DateTime<Utc>>,
}

/// The most recently recorded quote, if any
///
/// Quotes without a timestamp sort before any dated quote.
pub fn latest_quote(quotes: &[FuelPriceQuote]) -> Option<&FuelPriceQuote> {
    quotes.iter().max_by_key(|q| q.recorded_at)
}
