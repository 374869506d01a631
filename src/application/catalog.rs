//! Catalog service for managing shipping tariffs

use std::sync::Arc;

use log::info;
use rust_decimal::Decimal;

use crate::domain::{DomainError, DomainResult, Tariff, TariffRow, TariffStore};

/// Orchestrates validation, uniqueness and persistence for tariffs.
///
/// Holds no cross-call cache; every operation reflects the current
/// persisted state. Existence checks and the writes that follow them are
/// separate round trips, so under concurrent callers they are advisory
/// only; the store's unique name index is the final arbiter, and its
/// rejection surfaces as [`DomainError::Storage`].
pub struct TariffCatalog {
    store: Arc<dyn TariffStore>,
}

impl TariffCatalog {
    pub fn new(store: Arc<dyn TariffStore>) -> Self {
        Self { store }
    }

    /// Whether a tariff with exactly this name exists in the store.
    pub async fn has_tariff(&self, name: &str) -> DomainResult<bool> {
        Ok(self.store.find_by_name(name).await?.is_some())
    }

    /// Rebuild the tariff entity from its persisted fields.
    pub async fn get_tariff(&self, name: &str) -> DomainResult<Tariff> {
        match self.store.find_by_name(name).await? {
            Some(row) => row_to_tariff(row),
            None => Err(DomainError::NotFound(name.to_string())),
        }
    }

    /// Persist a new tariff. The stored discount starts at 0 regardless
    /// of the entity's current discount.
    pub async fn add_tariff(&self, tariff: &Tariff) -> DomainResult<()> {
        if self.has_tariff(tariff.name()).await? {
            return Err(DomainError::DuplicateName(tariff.name().to_string()));
        }
        if !self.store.insert(tariff.name(), tariff.base_price()).await? {
            return Err(DomainError::Storage(format!(
                "store rejected insert of tariff '{}'",
                tariff.name()
            )));
        }
        info!("Tariff added: {} at {}", tariff.name(), tariff.base_price());
        Ok(())
    }

    /// Persist a new discount for an existing tariff.
    ///
    /// The percentage is range-checked before any store round trip.
    pub async fn set_tariff_discount(&self, name: &str, percent: Decimal) -> DomainResult<()> {
        if percent < Decimal::ZERO || percent > Decimal::ONE_HUNDRED {
            return Err(DomainError::InvalidDiscount(percent));
        }
        if !self.has_tariff(name).await? {
            return Err(DomainError::NotFound(name.to_string()));
        }
        if !self.store.update_discount(name, percent).await? {
            return Err(DomainError::Storage(format!(
                "store rejected discount update for tariff '{}'",
                name
            )));
        }
        info!("Tariff {} discount set to {}%", name, percent);
        Ok(())
    }

    /// Every tariff, ordered by ascending base price (stable ties).
    pub async fn get_all_tariffs(&self) -> DomainResult<Vec<Tariff>> {
        self.store
            .list_all()
            .await?
            .into_iter()
            .map(row_to_tariff)
            .collect()
    }

    /// The tariff with the minimal final price. Equal final prices are
    /// resolved towards the lexicographically smallest name.
    pub async fn find_min_price_tariff(&self) -> DomainResult<Tariff> {
        match self.store.find_min_final_price().await? {
            Some(row) => row_to_tariff(row),
            None => Err(DomainError::EmptyCatalog),
        }
    }
}

fn row_to_tariff(row: TariffRow) -> DomainResult<Tariff> {
    Tariff::with_discount(row.name, row.base_price, row.discount_percent)
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::storage::InMemoryTariffStore;

    fn catalog() -> TariffCatalog {
        TariffCatalog::new(Arc::new(InMemoryTariffStore::new()))
    }

    async fn add(catalog: &TariffCatalog, name: &str, price: i64) {
        let tariff = Tariff::new(name, Decimal::from(price)).unwrap();
        catalog.add_tariff(&tariff).await.unwrap();
    }

    #[tokio::test]
    async fn add_then_get_round_trips() {
        let catalog = catalog();
        add(&catalog, "Express", 100).await;

        let t = catalog.get_tariff("Express").await.unwrap();
        assert_eq!(t.base_price(), Decimal::from(100));
        assert_eq!(t.discount_percent(), Decimal::ZERO);
        assert_eq!(t.final_price(), Decimal::from(100));
    }

    #[tokio::test]
    async fn stored_discount_defaults_to_zero() {
        let catalog = catalog();
        let mut tariff = Tariff::new("Express", Decimal::from(100)).unwrap();
        tariff.set_discount(Decimal::from(40)).unwrap();
        catalog.add_tariff(&tariff).await.unwrap();

        let stored = catalog.get_tariff("Express").await.unwrap();
        assert_eq!(stored.discount_percent(), Decimal::ZERO);
    }

    #[tokio::test]
    async fn duplicate_name_is_rejected_and_state_unchanged() {
        let catalog = catalog();
        add(&catalog, "Express", 100).await;

        let again = Tariff::new("Express", Decimal::from(50)).unwrap();
        let err = catalog.add_tariff(&again).await.unwrap_err();
        assert_eq!(err, DomainError::DuplicateName("Express".to_string()));

        let t = catalog.get_tariff("Express").await.unwrap();
        assert_eq!(t.base_price(), Decimal::from(100));
    }

    #[tokio::test]
    async fn has_tariff_reflects_store() {
        let catalog = catalog();
        assert!(!catalog.has_tariff("Express").await.unwrap());
        add(&catalog, "Express", 100).await;
        assert!(catalog.has_tariff("Express").await.unwrap());
        // Exact, case-sensitive match
        assert!(!catalog.has_tariff("express").await.unwrap());
    }

    #[tokio::test]
    async fn get_missing_tariff_is_not_found() {
        let catalog = catalog();
        let err = catalog.get_tariff("Ghost").await.unwrap_err();
        assert_eq!(err, DomainError::NotFound("Ghost".to_string()));
    }

    #[tokio::test]
    async fn discount_is_persisted() {
        let catalog = catalog();
        add(&catalog, "Standard", 200).await;
        catalog
            .set_tariff_discount("Standard", Decimal::from(25))
            .await
            .unwrap();

        let t = catalog.get_tariff("Standard").await.unwrap();
        assert_eq!(t.discount_percent(), Decimal::from(25));
        assert_eq!(t.final_price(), Decimal::from(150));
    }

    #[tokio::test]
    async fn discount_on_missing_tariff_is_not_found() {
        let catalog = catalog();
        let err = catalog
            .set_tariff_discount("Ghost", Decimal::from(10))
            .await
            .unwrap_err();
        assert_eq!(err, DomainError::NotFound("Ghost".to_string()));
    }

    #[tokio::test]
    async fn discount_range_is_checked_before_lookup() {
        // An out-of-range percent fails even for a missing name, i.e.
        // validation happens before any store round trip.
        let catalog = catalog();
        let err = catalog
            .set_tariff_discount("Ghost", Decimal::from(101))
            .await
            .unwrap_err();
        assert_eq!(err, DomainError::InvalidDiscount(Decimal::from(101)));
    }

    #[tokio::test]
    async fn listing_orders_by_ascending_base_price() {
        let catalog = catalog();
        add(&catalog, "B", 150).await;
        add(&catalog, "A", 100).await;

        let all = catalog.get_all_tariffs().await.unwrap();
        let names: Vec<&str> = all.iter().map(|t| t.name()).collect();
        assert_eq!(names, vec!["A", "B"]);
        assert_eq!(all[0].base_price(), Decimal::from(100));
        assert_eq!(all[1].base_price(), Decimal::from(150));
    }

    #[tokio::test]
    async fn equal_base_prices_keep_insertion_order() {
        let catalog = catalog();
        add(&catalog, "Zebra", 100).await;
        add(&catalog, "Alpha", 100).await;

        let all = catalog.get_all_tariffs().await.unwrap();
        let names: Vec<&str> = all.iter().map(|t| t.name()).collect();
        assert_eq!(names, vec!["Zebra", "Alpha"]);
    }

    #[tokio::test]
    async fn min_price_uses_final_price_not_base_price() {
        let catalog = catalog();
        add(&catalog, "A", 100).await;
        add(&catalog, "B", 150).await;
        catalog
            .set_tariff_discount("B", Decimal::from(50))
            .await
            .unwrap();

        // Final prices: A = 100, B = 75
        let min = catalog.find_min_price_tariff().await.unwrap();
        assert_eq!(min.name(), "B");
        assert_eq!(min.final_price(), Decimal::from(75));
    }

    #[tokio::test]
    async fn min_price_tie_breaks_lexicographically() {
        let catalog = catalog();
        add(&catalog, "Zulu", 100).await;
        add(&catalog, "Echo", 200).await;
        catalog
            .set_tariff_discount("Echo", Decimal::from(50))
            .await
            .unwrap();

        // Both final prices are 100; "Echo" < "Zulu"
        let min = catalog.find_min_price_tariff().await.unwrap();
        assert_eq!(min.name(), "Echo");
    }

    #[tokio::test]
    async fn min_price_on_empty_catalog_fails() {
        let catalog = catalog();
        let err = catalog.find_min_price_tariff().await.unwrap_err();
        assert_eq!(err, DomainError::EmptyCatalog);
    }
}
