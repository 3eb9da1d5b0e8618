//! Domain model types

pub mod breakdown;
pub mod permit;
pub mod trip;
pub mod vehicle_class;

pub use breakdown::{Advisory, FareBreakdown};
pub use permit::{PermitTable, FALLBACK_PERMIT_FEE};
pub use trip::{
    AllowanceMultiplier, HourlyParams, LineItem, TripMode, TripModeKind, TripParams,
};
pub use vehicle_class::{BodyType, RateCatalog, VehicleClass};
