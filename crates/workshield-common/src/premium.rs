//! Premium math
//!
//! The minimum premium is a fixed 2% of the coverage amount, rounded
//! down. Paying more than the minimum is allowed; the excess is retained
//! by the pooled fund, not refunded.

use rust_decimal::Decimal;

use crate::PREMIUM_RATE_PERCENT;

/// Minimum premium for a given coverage amount: floor(coverage * 2 / 100)
pub fn minimum_premium(coverage_amount: Decimal) -> Decimal {
    (coverage_amount * Decimal::from(PREMIUM_RATE_PERCENT) / Decimal::ONE_HUNDRED).floor()
}

/// Whether `paid` satisfies the premium floor for `coverage_amount`
pub fn meets_minimum(coverage_amount: Decimal, paid: Decimal) -> bool {
    paid >= minimum_premium(coverage_amount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_minimum_is_two_percent_floored() {
        assert_eq!(minimum_premium(dec!(1000)), dec!(20));
        assert_eq!(minimum_premium(dec!(999)), dec!(19)); // 19.98 floors to 19
        assert_eq!(minimum_premium(dec!(50)), dec!(1));
        assert_eq!(minimum_premium(dec!(49)), dec!(0)); // 0.98 floors to 0
    }

    #[test]
    fn test_meets_minimum_boundary() {
        assert!(!meets_minimum(dec!(1000), dec!(19)));
        assert!(meets_minimum(dec!(1000), dec!(20)));
        assert!(meets_minimum(dec!(1000), dec!(500))); // overpaying is fine
    }
}
