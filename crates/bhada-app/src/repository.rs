//! Catalog resolution for the configured tariff source

use bhada_domain::model::{PermitTable, RateCatalog};
use bhada_infra::persistence::FileTariffRepository;
use bhada_infra::tariff_loader::TariffLoader;
use bhada_types::Result;

use crate::config::Config;
use crate::constants::{PERMIT_FEES, RATE_CARD};

/// Resolve the rate and permit catalogs for this run
///
/// A configured tariff file replaces the built-in catalogs wholesale;
/// otherwise the built-ins are used.
pub fn resolve_catalogs(config: &Config) -> Result<(RateCatalog, PermitTable)> {
    match &config.tariff_file {
        Some(path) => Ok(TariffLoader::load_from_file(path)?.into_catalogs()),
        None => Ok((RATE_CARD.clone(), PERMIT_FEES.clone())),
    }
}

/// Open the configured tariff file as a repository, if one is set
pub fn open_tariff_repo(config: &Config) -> Result<Option<FileTariffRepository>> {
    match &config.tariff_file {
        Some(path) => Ok(Some(FileTariffRepository::new(path.clone())?)),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_uses_builtin_catalogs() {
        let config = Config::default();
        let (rates, permits) = resolve_catalogs(&config).unwrap();
        assert_eq!(rates.count(), RATE_CARD.count());
        assert_eq!(permits.count(), PERMIT_FEES.count());
        assert!(open_tariff_repo(&config).unwrap().is_none());
    }

    #[test]
    fn test_missing_tariff_file_is_error() {
        let config = Config {
            tariff_file: Some("/nonexistent/tariff.toml".into()),
            ..Config::default()
        };
        assert!(resolve_catalogs(&config).is_err());
        assert!(open_tariff_repo(&config).is_err());
    }
}
