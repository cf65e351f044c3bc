//! Fare settings display formatting

use chrono::Local;

use crate::models::{DiscountedFare, FareTariff};

/// Format the current fare settings block
pub fn format_tariff(tariff: &FareTariff, currency_symbol: &str) -> String {
    let updated = match tariff.updated_at {
        Some(ts) => ts
            .with_timezone(&Local)
            .format("%B %-d, %Y")
            .to_string(),
        None => "Not set".to_string(),
    };

    let mut output = String::new();
    output.push_str("Current Fare Settings\n");
    output.push_str(&"-".repeat(40));
    output.push('\n');
    output.push_str(&format!(
        "Base Fare:           {}{:.2}\n",
        currency_symbol, tariff.base_fare
    ));
    output.push_str(&format!(
        "Discount Percentage: {:.1}%\n",
        tariff.discount_percent
    ));
    output.push_str(&format!("Last Updated:        {}\n", updated));
    output
}

/// Format the derived discounted rates
pub fn format_discounted(fare: &DiscountedFare, currency_symbol: &str) -> String {
    format!(
        "Discounted Price:       {sym}{:.2}\nDiscounted Rate per km: {sym}{:.2}\n",
        fare.price,
        fare.rate_per_km,
        sym = currency_symbol
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_tariff() {
        let tariff = FareTariff::new(1000.0, 20.0);
        let output = format_tariff(&tariff, "₱");
        assert!(output.contains("Base Fare:           ₱1000.00"));
        assert!(output.contains("Discount Percentage: 20.0%"));
    }

    #[test]
    fn test_format_tariff_without_timestamp() {
        let mut tariff = FareTariff::new(1000.0, 20.0);
        tariff.updated_at = None;
        assert!(format_tariff(&tariff, "₱").contains("Not set"));
    }

    #[test]
    fn test_format_discounted() {
        let fare = DiscountedFare {
            price: 800.0,
            rate_per_km: 12.0,
        };
        let output = format_discounted(&fare, "₱");
        assert!(output.contains("₱800.00"));
        assert!(output.contains("₱12.00"));
    }
}
