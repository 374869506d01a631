pub mod entities;
pub mod migrator;
pub mod repositories;

pub use repositories::SeaOrmTariffStore;

use sea_orm::{Database, DatabaseConnection};
use tracing::info;

/// Database configuration
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Database URL (e.g., "sqlite://./tariffs.db?mode=rwc")
    pub url: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite://./tariffs.db?mode=rwc".to_string(),
        }
    }
}

/// Initialize database connection.
///
/// The caller owns the returned handle and passes it to the stores;
/// domain objects never hold a connection of their own.
pub async fn init_database(config: &DatabaseConfig) -> Result<DatabaseConnection, sea_orm::DbErr> {
    info!("Connecting to database: {}", config.url);
    let db = Database::connect(&config.url).await?;
    info!("Database connected successfully");
    Ok(db)
}
