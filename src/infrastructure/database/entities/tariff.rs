//! Tariff entity
//!
//! Money is stored in fixed point: prices as integer minor units (cents)
//! and discounts as basis points (percent x 100), so ordering by final
//! price stays exact integer arithmetic.

use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Tariff row - one priced shipping plan
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "tariffs")]
pub struct Model {
    /// Unique tariff ID; also the tie-break for equal base prices
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Tariff name, unique across the catalog (case-sensitive)
    pub name: String,

    /// Base price in minor currency units (cents)
    pub base_price_cents: i64,

    /// Discount in basis points, 0..=10000
    pub discount_bp: i32,

    /// When the tariff was created (informational only)
    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
