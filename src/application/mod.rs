pub mod catalog;

pub use catalog::TariffCatalog;
