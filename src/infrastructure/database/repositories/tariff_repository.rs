//! SeaORM implementation of the TariffStore port

use async_trait::async_trait;
use chrono::Utc;
use log::{debug, info};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, Set, SqlErr, Statement,
};
use sea_orm_migration::MigratorTrait;

use crate::domain::{DomainError, DomainResult, TariffRow, TariffStore};
use crate::infrastructure::database::entities::tariff;
use crate::infrastructure::database::migrator::Migrator;

/// Rows ordered by exact integer final price, name breaking ties.
const MIN_FINAL_PRICE_SQL: &str = "SELECT id, name, base_price_cents, discount_bp, created_at \
     FROM tariffs \
     ORDER BY base_price_cents * (10000 - discount_bp) ASC, name ASC \
     LIMIT 1";

/// Tariff store backed by a relational table.
///
/// The connection handle is passed in by the caller; the store never
/// opens or owns one implicitly.
pub struct SeaOrmTariffStore {
    db: DatabaseConnection,
}

impl SeaOrmTariffStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────
//
// Storage resolution is one cent for prices and 0.01 percentage points
// for discounts. Finer values are rejected before the write rather than
// quantized: a sub-cent price would otherwise persist as 0 cents and no
// longer satisfy the entity's positive-price check on read-back.

fn db_err(e: DbErr) -> DomainError {
    DomainError::Storage(e.to_string())
}

fn cents_to_price(cents: i64) -> Decimal {
    Decimal::new(cents, 2)
}

fn bp_to_percent(bp: i32) -> Decimal {
    Decimal::new(bp as i64, 2)
}

fn price_to_cents(price: Decimal) -> DomainResult<i64> {
    let cents = price * Decimal::ONE_HUNDRED;
    if cents != cents.trunc() {
        return Err(DomainError::Storage(format!(
            "price {} is finer than the one-cent storage resolution",
            price
        )));
    }
    cents
        .to_i64()
        .ok_or_else(|| DomainError::Storage(format!("price out of storage range: {}", price)))
}

fn percent_to_bp(percent: Decimal) -> DomainResult<i32> {
    let bp = percent * Decimal::ONE_HUNDRED;
    if bp != bp.trunc() {
        return Err(DomainError::Storage(format!(
            "discount {} is finer than the 0.01 percentage point storage resolution",
            percent
        )));
    }
    bp.to_i32()
        .ok_or_else(|| DomainError::Storage(format!("discount out of storage range: {}", percent)))
}

fn entity_to_row(t: tariff::Model) -> TariffRow {
    TariffRow {
        name: t.name,
        base_price: cents_to_price(t.base_price_cents),
        discount_percent: bp_to_percent(t.discount_bp),
    }
}

#[async_trait]
impl TariffStore for SeaOrmTariffStore {
    async fn create_schema(&self) -> DomainResult<()> {
        Migrator::up(&self.db, None).await.map_err(db_err)?;
        info!("Tariff schema is up to date");
        Ok(())
    }

    async fn find_by_name(&self, name: &str) -> DomainResult<Option<TariffRow>> {
        let model = tariff::Entity::find()
            .filter(tariff::Column::Name.eq(name))
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(entity_to_row))
    }

    async fn insert(&self, name: &str, base_price: Decimal) -> DomainResult<bool> {
        let model = tariff::ActiveModel {
            name: Set(name.to_string()),
            base_price_cents: Set(price_to_cents(base_price)?),
            discount_bp: Set(0),
            created_at: Set(Utc::now()),
            ..Default::default()
        };
        match model.insert(&self.db).await {
            Ok(saved) => {
                debug!("Tariff row inserted: {} ({})", saved.name, saved.id);
                Ok(true)
            }
            // The unique name index rejected the row
            Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                debug!("Tariff insert rejected by unique index: {}", name);
                Ok(false)
            }
            Err(e) => Err(db_err(e)),
        }
    }

    async fn update_discount(&self, name: &str, percent: Decimal) -> DomainResult<bool> {
        let result = tariff::Entity::update_many()
            .col_expr(
                tariff::Column::DiscountBp,
                Expr::value(percent_to_bp(percent)?),
            )
            .filter(tariff::Column::Name.eq(name))
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        Ok(result.rows_affected > 0)
    }

    async fn list_all(&self) -> DomainResult<Vec<TariffRow>> {
        let models = tariff::Entity::find()
            .order_by_asc(tariff::Column::BasePriceCents)
            .order_by_asc(tariff::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(entity_to_row).collect())
    }

    async fn find_min_final_price(&self) -> DomainResult<Option<TariffRow>> {
        let model = tariff::Entity::find()
            .from_raw_sql(Statement::from_string(
                self.db.get_database_backend(),
                MIN_FINAL_PRICE_SQL,
            ))
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(entity_to_row))
    }
}

// ── Tests ──────────────────────────────────────────────────────
