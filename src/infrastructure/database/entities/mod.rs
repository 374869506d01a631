//! Database entities

pub mod tariff;
