//! SeaORM-backed implementations of the domain persistence ports

pub mod tariff_repository;

pub use tariff_repository::SeaOrmTariffStore;
