//! Tariff catalog loader from TOML configuration
//!
//! Operators who negotiate their own rate cards drop a tariff file next
//! to the config; its vehicle table and permit fees replace the
//! built-in defaults wholesale.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use bhada_domain::model::{BodyType, PermitTable, RateCatalog, VehicleClass};
use bhada_types::{ConfigError, Error, Result};

/// Container for parsing a tariff TOML file
#[derive(Debug, Deserialize)]
struct TariffConfig {
    vehicles: Vec<VehicleClass>,
    /// state code -> body type -> flat fee
    #[serde(default)]
    permits: HashMap<String, HashMap<String, f64>>,
}

/// Rate and permit catalogs loaded from TOML
#[derive(Debug)]
pub struct TariffLoader {
    catalog: RateCatalog,
    permits: PermitTable,
}

impl TariffLoader {
    /// Load tariff data from a TOML file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            Error::Config(ConfigError::ParseError(format!(
                "Failed to read tariff file: {}",
                e
            )))
        })?;

        Self::load_from_str(&content)
    }

    /// Load tariff data from a TOML string
    pub fn load_from_str(toml_content: &str) -> Result<Self> {
        let config: TariffConfig = toml::from_str(toml_content).map_err(|e| {
            Error::Config(ConfigError::ParseError(format!(
                "Failed to parse tariff TOML: {}",
                e
            )))
        })?;

        let mut permits = PermitTable::new();
        for (state, fees) in &config.permits {
            for (body, fee) in fees {
                let body: BodyType = body.parse().map_err(|e: String| {
                    Error::Config(ConfigError::ParseError(format!(
                        "Invalid permit entry for state {}: {}",
                        state, e
                    )))
                })?;
                permits.insert(state, body, *fee);
            }
        }

        Ok(Self {
            catalog: RateCatalog::new(config.vehicles),
            permits,
        })
    }

    pub fn rate_catalog(&self) -> &RateCatalog {
        &self.catalog
    }

    pub fn permit_table(&self) -> &PermitTable {
        &self.permits
    }

    /// Look up a vehicle class by catalog id
    pub fn get_vehicle(&self, id: &str) -> Option<&VehicleClass> {
        self.catalog.vehicle(id)
    }

    pub fn vehicle_count(&self) -> usize {
        self.catalog.count()
    }

    /// Consume the loader, yielding both catalogs
    pub fn into_catalogs(self) -> (RateCatalog, PermitTable) {
        (self.catalog, self.permits)
    }
}
