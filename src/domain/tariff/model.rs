//! Tariff domain entity

use rust_decimal::Decimal;

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::pricing::PriceStrategy;

/// A named shipping price plan.
///
/// The name and base price are fixed at construction; only the discount
/// can change afterwards, through [`Tariff::set_discount`], which also
/// recomputes the active pricing strategy. Uniqueness of names is the
/// catalog's job, not the entity's.
#[derive(Debug, Clone, PartialEq)]
pub struct Tariff {
    name: String,
    base_price: Decimal,
    discount_percent: Decimal,
    strategy: PriceStrategy,
}

impl Tariff {
    /// Create a tariff with no discount.
    ///
    /// Fails with `EmptyName` when the name is empty or whitespace-only
    /// and with `InvalidPrice` when the base price is not positive.
    pub fn new(name: impl Into<String>, base_price: Decimal) -> DomainResult<Self> {
        Self::with_discount(name, base_price, Decimal::ZERO)
    }

    /// Create a tariff with an initial discount, e.g. when rebuilding
    /// an entity from persisted fields.
    pub fn with_discount(
        name: impl Into<String>,
        base_price: Decimal,
        discount_percent: Decimal,
    ) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::EmptyName);
        }
        if base_price <= Decimal::ZERO {
            return Err(DomainError::InvalidPrice(base_price));
        }
        let strategy = PriceStrategy::for_discount(discount_percent)?;
        Ok(Self {
            name,
            base_price,
            discount_percent,
            strategy,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn base_price(&self) -> Decimal {
        self.base_price
    }

    pub fn discount_percent(&self) -> Decimal {
        self.discount_percent
    }

    /// Final charged price under the active pricing strategy.
    pub fn final_price(&self) -> Decimal {
        self.strategy.calculate(self.base_price)
    }

    /// Update the discount and reselect the pricing strategy.
    ///
    /// Setting the discount back to 0 reverts to the regular strategy.
    /// On a range error the previous discount stays in effect.
    pub fn set_discount(&mut self, percent: Decimal) -> DomainResult<()> {
        self.strategy = PriceStrategy::for_discount(percent)?;
        self.discount_percent = percent;
        Ok(())
    }
}

// ── Tests ──────────────────────────────────────────────────────
