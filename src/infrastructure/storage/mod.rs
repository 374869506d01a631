//! Alternative TariffStore implementations

pub mod memory;

pub use memory::InMemoryTariffStore;
