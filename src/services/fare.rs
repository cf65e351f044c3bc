//! Fare tariff service
//!
//! Validation of tariff inputs, selection of the tariff in force, and the
//! discounted-rate derivation.
//!
//! Validation and derivation are deliberately separate:
//! `derive_discounted_rates` assumes its inputs were already validated and
//! performs no checks of its own.

use crate::error::{FleetError, FleetResult};
use crate::models::{DiscountedFare, FareTariff};
use crate::parse::round_currency;

/// Validate a base fare: must be a positive finite number
pub fn validate_base_fare(value: f64) -> FleetResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(FleetError::validation(
            "Base fare must be a positive number",
        ))
    }
}

/// Validate a discount percentage: must be between 0 and 100
pub fn validate_discount_percent(value: f64) -> FleetResult<()> {
    if value.is_finite() && (0.0..=100.0).contains(&value) {
        Ok(())
    } else {
        Err(FleetError::validation(
            "Discount percentage must be between 0 and 100",
        ))
    }
}

/// Validate a per-kilometer rate: must be a positive finite number
pub fn validate_rate_per_km(value: f64) -> FleetResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(FleetError::validation(
            "Rate per kilometer must be a positive number",
        ))
    }
}

/// Apply a discount percentage to the base fare and per-km rate
///
/// Both outputs are `value - value * percent / 100`, rounded to 2 decimals.
/// Inputs must already satisfy the validation rules above.
pub fn derive_discounted_rates(
    base_fare: f64,
    discount_percent: f64,
    rate_per_km: f64,
) -> DiscountedFare {
    let apply = |value: f64| round_currency(value - value * discount_percent / 100.0);
    DiscountedFare {
        price: apply(base_fare),
        rate_per_km: apply(rate_per_km),
    }
}

/// The tariff currently in force: the record with the newest timestamp
///
/// Records without a timestamp sort before any dated record.
pub fn latest_tariff(tariffs: &[FareTariff]) -> Option<&FareTariff> {
    tariffs.iter().max_by_key(|t| t.updated_at)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_derive_discounted_rates() {
        let fare = derive_discounted_rates(1000.0, 20.0, 15.0);
        assert_eq!(fare.price, 800.00);
        assert_eq!(fare.rate_per_km, 12.00);
    }

    #[test]
    fn test_derive_zero_discount_is_identity() {
        let fare = derive_discounted_rates(1000.0, 0.0, 15.0);
        assert_eq!(fare.price, 1000.00);
        assert_eq!(fare.rate_per_km, 15.00);
    }

    #[test]
    fn test_derive_full_discount() {
        let fare = derive_discounted_rates(1000.0, 100.0, 15.0);
        assert_eq!(fare.price, 0.0);
        assert_eq!(fare.rate_per_km, 0.0);
    }

    #[test]
    fn test_derive_rounds_to_two_decimals() {
        // 33.33% off 100 = 66.67 after rounding
        let fare = derive_discounted_rates(100.0, 33.33, 10.0);
        assert_eq!(fare.price, 66.67);
        assert_eq!(fare.rate_per_km, 6.67);
    }

    #[test]
    fn test_validate_base_fare() {
        assert!(validate_base_fare(1000.0).is_ok());
        assert!(validate_base_fare(0.0).is_err());
        assert!(validate_base_fare(-5.0).is_err());
        assert!(validate_base_fare(f64::NAN).is_err());
    }

    #[test]
    fn test_validate_discount_percent() {
        assert!(validate_discount_percent(0.0).is_ok());
        assert!(validate_discount_percent(100.0).is_ok());
        assert!(validate_discount_percent(50.0).is_ok());
        assert!(validate_discount_percent(-1.0).is_err());
        assert!(validate_discount_percent(100.1).is_err());
    }

    #[test]
    fn test_latest_tariff() {
        let mut old = FareTariff::new(900.0, 10.0);
        old.updated_at = Utc.timestamp_opt(100, 0).single();
        let mut new = FareTariff::new(1000.0, 20.0);
        new.updated_at = Utc.timestamp_opt(200, 0).single();
        let mut undated = FareTariff::new(800.0, 5.0);
        undated.updated_at = None;

        let tariffs = vec![old, undated, new];
        assert_eq!(latest_tariff(&tariffs).unwrap().base_fare, 1000.0);
    }

    #[test]
    fn test_latest_tariff_empty() {
        assert!(latest_tariff(&[]).is_none());
    }
}
