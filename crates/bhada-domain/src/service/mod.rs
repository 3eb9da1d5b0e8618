//! Domain services

pub mod fare_engine;

pub use fare_engine::{calculate_fare, GST_RATE};
