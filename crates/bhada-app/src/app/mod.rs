//! Application use cases

pub mod estimate_service;
pub mod estimate_worker;

pub use estimate_service::EstimateService;
pub use estimate_worker::{EstimateRequest, EstimateResponse, EstimateWorkerPool};
