//! # Shipping Tariff Catalog
//!
//! A small catalog of shipping tariffs: create named tariffs with a base
//! price, apply percentage discounts, list tariffs, and find the cheapest
//! final price.
//!
//! ## Architecture
//!
//! The project follows Clean Architecture principles:
//!
//! - **domain**: Tariff entity, pricing strategies, errors, and the
//!   `TariffStore` persistence port
//! - **application**: the `TariffCatalog` service orchestrating
//!   validation, uniqueness and persistence
//! - **infrastructure**: SeaORM/SQLite store adapter, migrations, and an
//!   in-memory store for development and tests
//!
//! Binaries consume the catalog one-to-one per operation: `tariff-catalog`
//! is an interactive menu, `tariff-cli` (workspace member) a scriptable
//! command-line front end.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use application::TariffCatalog;
pub use config::{default_config_path, AppConfig};
pub use domain::{DomainError, DomainResult, PriceStrategy, Tariff, TariffRow, TariffStore};

// Re-export database types for easy access
pub use infrastructure::{init_database, DatabaseConfig, InMemoryTariffStore, SeaOrmTariffStore};
