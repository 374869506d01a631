//! In-memory tariff store for development and testing

use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use dashmap::DashMap;
use rust_decimal::Decimal;

use crate::domain::{DomainResult, TariffRow, TariffStore};

#[derive(Debug, Clone)]
struct StoredTariff {
    base_price: Decimal,
    discount_percent: Decimal,
    /// Insertion sequence; tie-break for equal base prices
    seq: i64,
}

/// Tariff store satisfying the same port as the database adapter,
/// keyed by name.
pub struct InMemoryTariffStore {
    tariffs: DashMap<String, StoredTariff>,
    insert_counter: AtomicI64,
}

impl InMemoryTariffStore {
    pub fn new() -> Self {
        Self {
            tariffs: DashMap::new(),
            insert_counter: AtomicI64::new(1),
        }
    }
}

impl Default for InMemoryTariffStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TariffStore for InMemoryTariffStore {
    async fn create_schema(&self) -> DomainResult<()> {
        Ok(())
    }

    async fn find_by_name(&self, name: &str) -> DomainResult<Option<TariffRow>> {
        Ok(self.tariffs.get(name).map(|t| TariffRow {
            name: name.to_string(),
            base_price: t.base_price,
            discount_percent: t.discount_percent,
        }))
    }

    async fn insert(&self, name: &str, base_price: Decimal) -> DomainResult<bool> {
        if self.tariffs.contains_key(name) {
            return Ok(false);
        }
        let seq = self.insert_counter.fetch_add(1, Ordering::SeqCst);
        self.tariffs.insert(
            name.to_string(),
            StoredTariff {
                base_price,
                discount_percent: Decimal::ZERO,
                seq,
            },
        );
        Ok(true)
    }

    async fn update_discount(&self, name: &str, percent: Decimal) -> DomainResult<bool> {
        match self.tariffs.get_mut(name) {
            Some(mut t) => {
                t.discount_percent = percent;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn list_all(&self) -> DomainResult<Vec<TariffRow>> {
        let mut entries: Vec<(i64, TariffRow)> = self
            .tariffs
            .iter()
            .map(|e| {
                (
                    e.value().seq,
                    TariffRow {
                        name: e.key().clone(),
                        base_price: e.value().base_price,
                        discount_percent: e.value().discount_percent,
                    },
                )
            })
            .collect();
        entries.sort_by(|(seq_a, a), (seq_b, b)| {
            a.base_price.cmp(&b.base_price).then(seq_a.cmp(seq_b))
        });
        Ok(entries.into_iter().map(|(_, row)| row).collect())
    }

    async fn find_min_final_price(&self) -> DomainResult<Option<TariffRow>> {
        let rows = self.list_all().await?;
        Ok(rows.into_iter().min_by(|a, b| {
            a.final_price()
                .cmp(&b.final_price())
                .then_with(|| a.name.cmp(&b.name))
        }))
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn insert_rejects_duplicates() {
        let store = InMemoryTariffStore::new();
        assert!(store.insert("Express", Decimal::from(100)).await.unwrap());
        assert!(!store.insert("Express", Decimal::from(50)).await.unwrap());

        let row = store.find_by_name("Express").await.unwrap().unwrap();
        assert_eq!(row.base_price, Decimal::from(100));
    }

    #[tokio::test]
    async fn update_discount_misses_unknown_name() {
        let store = InMemoryTariffStore::new();
        assert!(!store
            .update_discount("Ghost", Decimal::from(10))
            .await
            .unwrap());
    }

    #[tokio::test]
    async fn list_orders_by_price_then_insertion() {
        let store = InMemoryTariffStore::new();
        store.insert("C", Decimal::from(200)).await.unwrap();
        store.insert("B", Decimal::from(100)).await.unwrap();
        store.insert("A", Decimal::from(100)).await.unwrap();

        let names: Vec<String> = store
            .list_all()
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.name)
            .collect();
        // B and A share a price; B was inserted first
        assert_eq!(names, vec!["B", "A", "C"]);
    }

    #[tokio::test]
    async fn min_final_price_ties_resolve_by_name() {
        let store = InMemoryTariffStore::new();
        store.insert("Zulu", Decimal::from(50)).await.unwrap();
        store.insert("Echo", Decimal::from(100)).await.unwrap();
        store
            .update_discount("Echo", Decimal::from(50))
            .await
            .unwrap();

        let min = store.find_min_final_price().await.unwrap().unwrap();
        assert_eq!(min.name, "Echo");
    }

    #[tokio::test]
    async fn min_final_price_empty_store() {
        let store = InMemoryTariffStore::new();
        assert!(store.find_min_final_price().await.unwrap().is_none());
    }
}
