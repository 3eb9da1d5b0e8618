//! Built-in tariff catalogs

pub mod permit_fees;
pub mod rate_card;

pub use permit_fees::{permit_fee, PERMIT_FEES};
pub use rate_card::{get_vehicle_class, RATE_CARD};
