//! Built-in rate card for common Indian taxi classes
//!
//! Rates are rupees per km. Heavy classes (tempo and up) carry a fixed
//! minimum local package for short one-way hires.

use std::sync::LazyLock;

use bhada_domain::model::{BodyType, RateCatalog, VehicleClass};

/// Standard rate card
pub static RATE_CARD: LazyLock<RateCatalog> = LazyLock::new(|| {
    RateCatalog::new(vec![
        VehicleClass {
            id: "hatchback".to_string(),
            name: "Hatchback".to_string(),
            body: BodyType::Hatchback,
            seats: 4,
            drop_rate: 15.0,
            round_rate: 12.0,
            min_km: 250.0,
            driver_allowance: 300.0,
            night_charge: 250.0,
            min_local_package: None,
        },
        VehicleClass {
            id: "sedan".to_string(),
            name: "Sedan".to_string(),
            body: BodyType::Sedan,
            seats: 4,
            drop_rate: 16.0,
            round_rate: 13.0,
            min_km: 250.0,
            driver_allowance: 300.0,
            night_charge: 300.0,
            min_local_package: None,
        },
        VehicleClass {
            id: "suv".to_string(),
            name: "SUV".to_string(),
            body: BodyType::Suv,
            seats: 7,
            drop_rate: 19.0,
            round_rate: 18.0,
            min_km: 300.0,
            driver_allowance: 400.0,
            night_charge: 400.0,
            min_local_package: None,
        },
        VehicleClass {
            id: "tempo".to_string(),
            name: "Tempo Traveller".to_string(),
            body: BodyType::Van,
            seats: 12,
            drop_rate: 28.0,
            round_rate: 25.0,
            min_km: 300.0,
            driver_allowance: 500.0,
            night_charge: 500.0,
            min_local_package: Some(3500.0),
        },
        VehicleClass {
            id: "minibus".to_string(),
            name: "Mini Bus".to_string(),
            body: BodyType::Van,
            seats: 21,
            drop_rate: 38.0,
            round_rate: 35.0,
            min_km: 300.0,
            driver_allowance: 600.0,
            night_charge: 600.0,
            min_local_package: Some(5500.0),
        },
        VehicleClass {
            id: "bus".to_string(),
            name: "Bus".to_string(),
            body: BodyType::Van,
            seats: 35,
            drop_rate: 55.0,
            round_rate: 50.0,
            min_km: 300.0,
            driver_allowance: 700.0,
            night_charge: 700.0,
            min_local_package: Some(8000.0),
        },
    ])
});

/// Get a built-in vehicle class by catalog id
pub fn get_vehicle_class(id: &str) -> Option<&'static VehicleClass> {
    RATE_CARD.vehicle(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_lookup() {
        assert!(get_vehicle_class("sedan").is_some());
        assert!(get_vehicle_class("SUV").is_some());
        assert!(get_vehicle_class("rickshaw").is_none());
    }

    #[test]
    fn test_heavy_classes_have_packages() {
        for id in ["tempo", "minibus", "bus"] {
            assert!(get_vehicle_class(id).unwrap().is_heavy(), "{}", id);
        }
        for id in ["hatchback", "sedan", "suv"] {
            assert!(!get_vehicle_class(id).unwrap().is_heavy(), "{}", id);
        }
    }

    #[test]
    fn test_round_rate_below_drop_rate() {
        for class in RATE_CARD.classes() {
            assert!(class.round_rate < class.drop_rate, "{}", class.id);
        }
    }
}
