//! Business logic layer

pub mod fare;

pub use fare::{
    derive_discounted_rates, latest_tariff, validate_base_fare, validate_discount_percent,
    validate_rate_per_km,
};
