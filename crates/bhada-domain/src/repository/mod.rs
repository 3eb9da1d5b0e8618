//! Repository trait definitions for catalog data

use bhada_types::Error;

use crate::model::{BodyType, VehicleClass};

/// Repository for vehicle-class tariff entries
pub trait RateCardRepository {
    /// Load all vehicle classes
    fn find_all(&self) -> Result<Vec<VehicleClass>, Error>;

    /// Find a vehicle class by catalog id
    fn find_by_id(&self, id: &str) -> Result<Option<VehicleClass>, Error>;
}

/// Repository for interstate permit fees
pub trait PermitFeeRepository {
    /// Tabulated state codes
    fn states(&self) -> Result<Vec<String>, Error>;

    /// Permit fee for a destination state and body type, with the
    /// van-class and hardcoded fallbacks applied
    fn fee_for(&self, state: &str, body: BodyType) -> Result<f64, Error>;
}
