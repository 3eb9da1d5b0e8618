//! Infrastructure layer for bhada-meter
//!
//! File loaders for tariff catalogs (TOML) and trip batches (CSV),
//! plus file-backed implementations of the domain repository traits.

pub mod persistence;
pub mod tariff_loader;
pub mod trip_csv;
