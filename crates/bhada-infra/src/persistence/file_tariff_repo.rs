//! File-based implementation of the tariff repository traits

use std::path::PathBuf;

use bhada_domain::model::{BodyType, VehicleClass};
use bhada_domain::repository::{PermitFeeRepository, RateCardRepository};
use bhada_types::Error;

use crate::tariff_loader::TariffLoader;

/// Tariff repository backed by a TOML file
pub struct FileTariffRepository {
    toml_path: PathBuf,
    loader: TariffLoader,
}

impl FileTariffRepository {
    /// Create a new repository from a TOML file path
    pub fn new(toml_path: PathBuf) -> Result<Self, Error> {
        let loader = TariffLoader::load_from_file(&toml_path)?;
        Ok(Self { toml_path, loader })
    }

    /// Get the TOML path
    pub fn toml_path(&self) -> &PathBuf {
        &self.toml_path
    }

    /// Reload data from TOML
    pub fn reload(&mut self) -> Result<(), Error> {
        self.loader = TariffLoader::load_from_file(&self.toml_path)?;
        Ok(())
    }

    /// Access the loaded tariff data
    pub fn loader(&self) -> &TariffLoader {
        &self.loader
    }
}

impl RateCardRepository for FileTariffRepository {
    fn find_all(&self) -> Result<Vec<VehicleClass>, Error> {
        Ok(self.loader.rate_catalog().classes().to_vec())
    }

    fn find_by_id(&self, id: &str) -> Result<Option<VehicleClass>, Error> {
        Ok(self.loader.get_vehicle(id).cloned())
    }
}

impl PermitFeeRepository for FileTariffRepository {
    fn states(&self) -> Result<Vec<String>, Error> {
        Ok(self.loader.permit_table().states())
    }

    fn fee_for(&self, state: &str, body: BodyType) -> Result<f64, Error> {
        Ok(self.loader.permit_table().fee(state, body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const TEST_TOML: &str = r#"
[[vehicles]]
id = "sedan"
name = "Sedan"
body = "sedan"
seats = 4
drop_rate = 16.0
round_rate = 13.0
min_km = 250.0
driver_allowance = 300.0
night_charge = 300.0

[permits.kerala]
sedan = 1200.0
"#;

    fn write_tariff() -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(TEST_TOML.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_find_by_id() {
        let file = write_tariff();
        let repo = FileTariffRepository::new(file.path().to_path_buf()).unwrap();
        let sedan = repo.find_by_id("sedan").unwrap().unwrap();
        assert!((sedan.drop_rate - 16.0).abs() < f64::EPSILON);
        assert!(repo.find_by_id("bus").unwrap().is_none());
    }

    #[test]
    fn test_permit_lookup() {
        let file = write_tariff();
        let repo = FileTariffRepository::new(file.path().to_path_buf()).unwrap();
        assert_eq!(repo.states().unwrap(), vec!["kerala".to_string()]);
        assert!((repo.fee_for("kerala", BodyType::Sedan).unwrap() - 1200.0).abs() < f64::EPSILON);
    }
}
