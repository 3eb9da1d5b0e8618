//! Estimate service - core use case for fare estimation
//!
//! Binds the resolved rate and permit catalogs to the fare engine for
//! the duration of a run.

use bhada_domain::model::{FareBreakdown, PermitTable, RateCatalog, TripParams, VehicleClass};
use bhada_domain::service::calculate_fare;
use bhada_types::Result;

use crate::config::Config;
use crate::repository::resolve_catalogs;

/// Fare estimation against a fixed pair of catalogs
#[derive(Debug, Clone)]
pub struct EstimateService {
    rates: RateCatalog,
    permits: PermitTable,
}

impl EstimateService {
    pub fn new(rates: RateCatalog, permits: PermitTable) -> Self {
        Self { rates, permits }
    }

    /// Build the service from the configured tariff source
    pub fn from_config(config: &Config) -> Result<Self> {
        let (rates, permits) = resolve_catalogs(config)?;
        Ok(Self::new(rates, permits))
    }

    /// Price one trip
    pub fn estimate(&self, params: &TripParams) -> FareBreakdown {
        calculate_fare(params, &self.rates, &self.permits)
    }

    /// Vehicle classes available in this run's catalog
    pub fn vehicle_classes(&self) -> &[VehicleClass] {
        self.rates.classes()
    }

    pub fn rates(&self) -> &RateCatalog {
        &self.rates
    }

    pub fn permits(&self) -> &PermitTable {
        &self.permits
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{PERMIT_FEES, RATE_CARD};
    use bhada_domain::model::TripMode;

    fn service() -> EstimateService {
        EstimateService::new(RATE_CARD.clone(), PERMIT_FEES.clone())
    }

    #[test]
    fn test_estimate_uses_catalogs() {
        let params = TripParams::new("sedan", 1000.0, 1150.0, TripMode::Drop);
        let result = service().estimate(&params);
        assert!((result.distance_charge - 2400.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_unknown_vehicle_degrades() {
        let params = TripParams::new("rickshaw", 0.0, 50.0, TripMode::Drop);
        let result = service().estimate(&params);
        assert!(result.is_unpriced());
    }
}
