//! Tariff aggregate
//!
//! Contains the Tariff entity and the persistence port it is stored through.

pub mod model;
pub mod repository;

pub use model::Tariff;
pub use repository::{TariffRow, TariffStore};
