//! Vehicle class and rate catalog type definitions

use serde::{Deserialize, Serialize};

/// Vehicle body type, also the permit-table key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BodyType {
    Hatchback,
    Sedan,
    Suv,
    Van,
}

impl BodyType {
    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            BodyType::Hatchback => "hatchback",
            BodyType::Sedan => "sedan",
            BodyType::Suv => "suv",
            BodyType::Van => "van",
        }
    }
}

impl std::fmt::Display for BodyType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for BodyType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hatchback" => Ok(BodyType::Hatchback),
            "sedan" => Ok(BodyType::Sedan),
            "suv" => Ok(BodyType::Suv),
            "van" => Ok(BodyType::Van),
            other => Err(format!("unknown body type: {}", other)),
        }
    }
}

/// Tariff entry for a vehicle class
///
/// Rates are rupees per km; `min_km` is the minimum billable distance
/// per day on outstation trips. Heavy classes (tempo, minibus, bus)
/// carry a fixed minimum local-package price instead of pure per-km
/// pricing for short one-way hires.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VehicleClass {
    /// Catalog id (e.g., "sedan", "tempo")
    pub id: String,
    /// Display name (e.g., "Tempo Traveller")
    pub name: String,
    pub body: BodyType,
    pub seats: u32,
    /// One-way drop rate (rupees/km)
    pub drop_rate: f64,
    /// Round-trip rate (rupees/km)
    pub round_rate: f64,
    /// Minimum billable km per day
    pub min_km: f64,
    /// Driver allowance per day (batta)
    pub driver_allowance: f64,
    /// Default night-driving surcharge
    pub night_charge: f64,
    /// Fixed minimum local-package price (heavy vehicles only)
    #[serde(default)]
    pub min_local_package: Option<f64>,
}

impl VehicleClass {
    /// Heavy classes are those priced with a fixed local package
    pub fn is_heavy(&self) -> bool {
        self.min_local_package.is_some()
    }
}

/// Immutable lookup table of vehicle classes
#[derive(Debug, Clone, Default)]
pub struct RateCatalog {
    classes: Vec<VehicleClass>,
}

impl RateCatalog {
    pub fn new(classes: Vec<VehicleClass>) -> Self {
        Self { classes }
    }

    /// Look up a vehicle class by catalog id
    ///
    /// Returns `None` for an unknown id; the engine treats that as
    /// "no vehicle resolved" and degrades to an all-zero breakdown.
    pub fn vehicle(&self, id: &str) -> Option<&VehicleClass> {
        let wanted = id.trim();
        self.classes
            .iter()
            .find(|c| c.id.eq_ignore_ascii_case(wanted))
    }

    /// All classes, in catalog order
    pub fn classes(&self) -> &[VehicleClass] {
        &self.classes
    }

    pub fn count(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}
