pub mod error;
pub mod pricing;
pub mod tariff;

// Re-export commonly used types
pub use error::{DomainError, DomainResult};
pub use pricing::PriceStrategy;
pub use tariff::{Tariff, TariffRow, TariffStore};
