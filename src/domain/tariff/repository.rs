//! Tariff persistence port
//!
//! The storage-facing interface the catalog depends on. Implemented by
//! the SeaORM adapter for SQLite and by an in-memory double for tests.

use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::domain::DomainResult;

/// One persisted tariff row, as stored.
#[derive(Debug, Clone, PartialEq)]
pub struct TariffRow {
    pub name: String,
    pub base_price: Decimal,
    pub discount_percent: Decimal,
}

impl TariffRow {
    /// Final price as derived from the stored fields.
    pub fn final_price(&self) -> Decimal {
        self.base_price * (Decimal::ONE_HUNDRED - self.discount_percent)
            / Decimal::ONE_HUNDRED
    }
}

/// Persistence port for tariff rows.
///
/// Mutation methods return `Ok(false)` when the store rejected the
/// operation (no matching row, or a constraint violation such as a
/// duplicate name) and `Err` for connection or query failures, or for
/// values the store cannot represent at its resolution.
/// The unique index on `name` is the authoritative uniqueness backstop;
/// catalog-level existence checks are advisory.
#[async_trait]
pub trait TariffStore: Send + Sync {
    /// Idempotently ensure the tariff table and its unique name index exist.
    async fn create_schema(&self) -> DomainResult<()>;

    /// Look up a single row by exact, case-sensitive name.
    async fn find_by_name(&self, name: &str) -> DomainResult<Option<TariffRow>>;

    /// Insert a new row with discount 0.
    async fn insert(&self, name: &str, base_price: Decimal) -> DomainResult<bool>;

    /// Persist a new discount for the named row.
    async fn update_discount(&self, name: &str, percent: Decimal) -> DomainResult<bool>;

    /// Every row, ordered by ascending base price; ties keep insertion order.
    async fn list_all(&self) -> DomainResult<Vec<TariffRow>>;

    /// The row with the minimal final price; ties broken by the
    /// lexicographically smallest name. `None` when the table is empty.
    async fn find_min_final_price(&self) -> DomainResult<Option<TariffRow>>;
}
