//! Built-in interstate permit fees
//!
//! Flat fees for a multi-day permit window, keyed by destination state
//! and vehicle body type. States without an entry fall back to the
//! hardcoded default inside the table lookup.

use std::sync::LazyLock;

use bhada_domain::model::{BodyType, PermitTable};

/// Standard permit fee table
pub static PERMIT_FEES: LazyLock<PermitTable> = LazyLock::new(|| {
    let mut table = PermitTable::new();

    let fees: &[(&str, [f64; 4])] = &[
        // state, [hatchback, sedan, suv, van]
        ("karnataka", [800.0, 1000.0, 1250.0, 2500.0]),
        ("tamilnadu", [700.0, 900.0, 1200.0, 2400.0]),
        ("kerala", [900.0, 1200.0, 1500.0, 3000.0]),
        ("andhra", [800.0, 1000.0, 1300.0, 2600.0]),
        ("telangana", [800.0, 1000.0, 1300.0, 2600.0]),
        ("maharashtra", [1000.0, 1300.0, 1600.0, 3200.0]),
        ("goa", [900.0, 1100.0, 1400.0, 2800.0]),
        ("puducherry", [500.0, 600.0, 800.0, 1500.0]),
    ];

    for (state, [hatchback, sedan, suv, van]) in fees {
        table.insert(state, BodyType::Hatchback, *hatchback);
        table.insert(state, BodyType::Sedan, *sedan);
        table.insert(state, BodyType::Suv, *suv);
        table.insert(state, BodyType::Van, *van);
    }

    table
});

/// Built-in permit fee for a destination state and body type
pub fn permit_fee(state: &str, body: BodyType) -> f64 {
    PERMIT_FEES.fee(state, body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bhada_domain::model::FALLBACK_PERMIT_FEE;

    #[test]
    fn test_karnataka_suv_fee() {
        assert!((permit_fee("karnataka", BodyType::Suv) - 1250.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_untabulated_state_falls_back() {
        assert!((permit_fee("sikkim", BodyType::Sedan) - FALLBACK_PERMIT_FEE).abs() < f64::EPSILON);
    }

    #[test]
    fn test_all_states_cover_every_body_type() {
        for state in PERMIT_FEES.states() {
            let fees = PERMIT_FEES.state_fees(&state).unwrap();
            assert_eq!(fees.len(), 4, "{}", state);
        }
    }
}
