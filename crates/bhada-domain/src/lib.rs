//! Domain layer for bhada-meter: tariff models, the fare engine, and
//! repository traits for catalog data.

pub mod model;
pub mod repository;
pub mod service;
