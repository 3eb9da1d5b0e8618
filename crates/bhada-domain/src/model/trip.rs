//! Trip parameter types for fare calculation

use serde::{Deserialize, Serialize};

/// Driver-allowance multiplier selection
///
/// `Auto` bills one allowance per day and doubles it for long round
/// trips; the manual settings force single or double per day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AllowanceMultiplier {
    #[default]
    Auto,
    Single,
    Double,
}

/// Knobs for hourly / local package hires
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HourlyParams {
    /// Fixed package price; when set, extra hours and km bill on top
    #[serde(default)]
    pub package_price: Option<f64>,

    /// Rate per hour when billing without a package
    #[serde(default)]
    pub hourly_rate: Option<f64>,

    /// Actual hire duration
    #[serde(default)]
    pub duration_hours: f64,

    /// Hours covered by the package (default 8)
    #[serde(default)]
    pub included_hours: Option<f64>,

    /// Km covered by the package (default 80)
    #[serde(default)]
    pub included_km: Option<f64>,

    /// Rate for hours beyond the included window
    #[serde(default)]
    pub extra_hour_rate: Option<f64>,
}

/// Free-text charge line for custom billing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineItem {
    pub label: String,
    pub amount: f64,
}

/// Trip mode, carrying the mode-specific knobs
///
/// Keeping the per-mode fields inside the variant makes combinations
/// like a package price on a drop trip unrepresentable.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TripMode {
    /// One-way point-to-point hire
    Drop,
    /// Multi-day round trip with a per-day minimum distance floor
    #[serde(rename = "round")]
    OutstationRound,
    /// Hourly / local package hire
    Hourly(HourlyParams),
    /// Fixed quoted package
    Fixed { package_price: f64 },
    /// Free-form line items
    Custom { items: Vec<LineItem> },
}

impl TripMode {
    pub fn kind(&self) -> TripModeKind {
        match self {
            TripMode::Drop => TripModeKind::Drop,
            TripMode::OutstationRound => TripModeKind::OutstationRound,
            TripMode::Hourly(_) => TripModeKind::Hourly,
            TripMode::Fixed { .. } => TripModeKind::Fixed,
            TripMode::Custom { .. } => TripModeKind::Custom,
        }
    }
}

/// Payload-free mode tag, echoed in the breakdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TripModeKind {
    Drop,
    #[serde(rename = "round")]
    OutstationRound,
    Hourly,
    Fixed,
    Custom,
}

impl TripModeKind {
    pub fn label(&self) -> &'static str {
        match self {
            TripModeKind::Drop => "drop",
            TripModeKind::OutstationRound => "round",
            TripModeKind::Hourly => "hourly",
            TripModeKind::Fixed => "fixed",
            TripModeKind::Custom => "custom",
        }
    }
}

impl std::fmt::Display for TripModeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Input record for one fare calculation
///
/// Only the odometer pair, vehicle id, and mode are required; the rest
/// default to off/zero. The engine clamps a negative odometer delta to
/// zero and otherwise lets malformed values flow through the
/// arithmetic unchecked; callers validate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripParams {
    pub vehicle_id: String,
    pub start_km: f64,
    pub end_km: f64,
    pub mode: TripMode,

    /// Explicit per-km rate; 0 selects the catalog rate
    #[serde(default)]
    pub rate_per_km: f64,

    /// Trip length in days
    #[serde(default = "default_days")]
    pub days: u32,

    #[serde(default)]
    pub toll: f64,

    #[serde(default)]
    pub parking: f64,

    /// Manually entered permit amount
    #[serde(default)]
    pub permit_manual: f64,

    #[serde(default)]
    pub gst: bool,

    #[serde(default)]
    pub waiting_hours: f64,

    #[serde(default)]
    pub hill_station: bool,

    #[serde(default)]
    pub pet_friendly: bool,

    /// Manual night-allowance amount; 0 defers to the class default
    /// when `night_drive` is set
    #[serde(default)]
    pub night_allowance: f64,

    /// Night-halt passthrough amount
    #[serde(default)]
    pub night_stay: f64,

    #[serde(default)]
    pub night_drive: bool,

    /// Adds shed-to-pickup dead mileage on round trips
    #[serde(default)]
    pub garage_buffer: bool,

    #[serde(default)]
    pub allowance_multiplier: AllowanceMultiplier,

    /// Destination state code for an interstate permit
    #[serde(default)]
    pub interstate_state: Option<String>,
}

fn default_days() -> u32 {
    1
}

impl TripParams {
    /// Parameters with everything optional switched off
    pub fn new(vehicle_id: impl Into<String>, start_km: f64, end_km: f64, mode: TripMode) -> Self {
        Self {
            vehicle_id: vehicle_id.into(),
            start_km,
            end_km,
            mode,
            rate_per_km: 0.0,
            days: 1,
            toll: 0.0,
            parking: 0.0,
            permit_manual: 0.0,
            gst: false,
            waiting_hours: 0.0,
            hill_station: false,
            pet_friendly: false,
            night_allowance: 0.0,
            night_stay: 0.0,
            night_drive: false,
            garage_buffer: false,
            allowance_multiplier: AllowanceMultiplier::Auto,
            interstate_state: None,
        }
    }
}
