//! Final-price calculation strategies
//!
//! A two-case pricing policy expressed as a tagged variant instead of
//! trait objects. `Regular` charges the base price as-is; `Discount`
//! applies a percentage reduction. All arithmetic is exact decimal.

use rust_decimal::Decimal;

use super::error::{DomainError, DomainResult};

/// Pricing policy applied to a tariff's base price
#[derive(Debug, Clone, PartialEq)]
pub enum PriceStrategy {
    /// Base price charged unchanged
    Regular,
    /// Base price reduced by `percent` (0 < percent <= 100)
    Discount { percent: Decimal },
}

impl PriceStrategy {
    /// Select the strategy for a discount percentage.
    ///
    /// A zero discount selects `Regular`, anything in (0, 100] selects
    /// `Discount`. Values outside [0, 100] are rejected.
    pub fn for_discount(percent: Decimal) -> DomainResult<Self> {
        if percent < Decimal::ZERO || percent > Decimal::ONE_HUNDRED {
            return Err(DomainError::InvalidDiscount(percent));
        }
        if percent.is_zero() {
            Ok(Self::Regular)
        } else {
            Ok(Self::Discount { percent })
        }
    }

    /// Compute the final charged price for a base price. Pure.
    pub fn calculate(&self, base_price: Decimal) -> Decimal {
        match self {
            Self::Regular => base_price,
            Self::Discount { percent } => {
                base_price * (Decimal::ONE_HUNDRED - percent) / Decimal::ONE_HUNDRED
            }
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regular_is_identity() {
        let price = Decimal::new(12345, 2); // 123.45
        assert_eq!(PriceStrategy::Regular.calculate(price), price);
    }

    #[test]
    fn discount_applies_percentage() {
        let s = PriceStrategy::for_discount(Decimal::from(25)).unwrap();
        // 200.00 at 25% → 150.00
        assert_eq!(s.calculate(Decimal::from(200)), Decimal::from(150));
    }

    #[test]
    fn full_discount_is_free() {
        let s = PriceStrategy::for_discount(Decimal::ONE_HUNDRED).unwrap();
        assert_eq!(s.calculate(Decimal::from(80)), Decimal::ZERO);
    }

    #[test]
    fn zero_discount_selects_regular() {
        let s = PriceStrategy::for_discount(Decimal::ZERO).unwrap();
        assert_eq!(s, PriceStrategy::Regular);
    }

    #[test]
    fn positive_discount_selects_discount() {
        let s = PriceStrategy::for_discount(Decimal::ONE).unwrap();
        assert!(matches!(s, PriceStrategy::Discount { .. }));
    }

    #[test]
    fn negative_discount_is_rejected() {
        let err = PriceStrategy::for_discount(Decimal::from(-1)).unwrap_err();
        assert_eq!(err, DomainError::InvalidDiscount(Decimal::from(-1)));
    }

    #[test]
    fn discount_over_hundred_is_rejected() {
        let err = PriceStrategy::for_discount(Decimal::new(10001, 2)).unwrap_err();
        assert!(matches!(err, DomainError::InvalidDiscount(_)));
    }

    #[test]
    fn fractional_discount_is_exact() {
        // 100.00 at 12.5% → 87.50, no float drift
        let s = PriceStrategy::for_discount(Decimal::new(125, 1)).unwrap();
        assert_eq!(s.calculate(Decimal::from(100)), Decimal::new(875, 1));
    }
}
