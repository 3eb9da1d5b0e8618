//! Itemized fare breakdown returned by the engine

use serde::{Deserialize, Serialize};

use crate::model::trip::TripModeKind;

/// Machine-readable advisory attached to a breakdown
///
/// Display prose belongs to the output boundary, not here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Advisory {
    #[default]
    None,
    /// Short heavy-vehicle hire billed at the fixed local package
    MinimumPackageApplied,
    /// Long one-way drop billed as a round trip
    RoundTripOverride,
}

/// Itemized pricing result
///
/// Currency fields are whole rupees except `driver_allowance` (kept as
/// computed) and `rate_used` (kept as a decimal).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FareBreakdown {
    /// Mode the trip was actually billed under
    pub mode: TripModeKind,
    /// Odometer delta, clamped at zero
    pub raw_km: f64,
    /// Billed distance after floors and buffers
    pub effective_km: f64,
    /// Per-km rate applied
    pub rate_used: f64,
    pub distance_charge: f64,
    pub driver_allowance: f64,
    pub night_allowance: f64,
    pub night_stay: f64,
    pub waiting_charge: f64,
    pub hill_charge: f64,
    pub pet_charge: f64,
    pub taxable_subtotal: f64,
    /// Tolls, parking, and permits; never taxed
    pub exempt_subtotal: f64,
    pub pre_tax: f64,
    pub gst: f64,
    pub total: f64,
    pub advisory: Advisory,
}

impl FareBreakdown {
    /// Degraded result for an unresolvable vehicle id
    pub fn zeroed(mode: TripModeKind) -> Self {
        Self {
            mode,
            raw_km: 0.0,
            effective_km: 0.0,
            rate_used: 0.0,
            distance_charge: 0.0,
            driver_allowance: 0.0,
            night_allowance: 0.0,
            night_stay: 0.0,
            waiting_charge: 0.0,
            hill_charge: 0.0,
            pet_charge: 0.0,
            taxable_subtotal: 0.0,
            exempt_subtotal: 0.0,
            pre_tax: 0.0,
            gst: 0.0,
            total: 0.0,
            advisory: Advisory::None,
        }
    }

    /// True when the engine could not price the trip (unknown vehicle)
    ///
    /// The engine never errors; callers check this instead.
    pub fn is_unpriced(&self) -> bool {
        self.distance_charge == 0.0 && self.rate_used == 0.0
    }
}
