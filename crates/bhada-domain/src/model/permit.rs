//! Interstate permit fee table

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::model::vehicle_class::BodyType;

/// Applied when a state has no entry for the vehicle body type and no
/// van-class fallback either
pub const FALLBACK_PERMIT_FEE: f64 = 2000.0;

/// Flat interstate permit fees keyed by (state, body type)
///
/// Fees cover a multi-day permit window. Lookup falls back to the
/// state's van-class fee, then to [`FALLBACK_PERMIT_FEE`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PermitTable {
    states: HashMap<String, HashMap<BodyType, f64>>,
}

impl PermitTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, state: &str, body: BodyType, fee: f64) {
        self.states
            .entry(normalize_state(state))
            .or_default()
            .insert(body, fee);
    }

    /// Permit fee for a destination state and vehicle body type
    pub fn fee(&self, state: &str, body: BodyType) -> f64 {
        match self.states.get(&normalize_state(state)) {
            Some(fees) => fees
                .get(&body)
                .or_else(|| fees.get(&BodyType::Van))
                .copied()
                .unwrap_or(FALLBACK_PERMIT_FEE),
            None => FALLBACK_PERMIT_FEE,
        }
    }

    /// Tabulated state codes, sorted
    pub fn states(&self) -> Vec<String> {
        let mut states: Vec<String> = self.states.keys().cloned().collect();
        states.sort();
        states
    }

    /// Fees tabulated for one state
    pub fn state_fees(&self, state: &str) -> Option<&HashMap<BodyType, f64>> {
        self.states.get(&normalize_state(state))
    }

    pub fn count(&self) -> usize {
        self.states.len()
    }
}

fn normalize_state(state: &str) -> String {
    state.trim().to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> PermitTable {
        let mut table = PermitTable::new();
        table.insert("karnataka", BodyType::Suv, 1250.0);
        table.insert("karnataka", BodyType::Van, 2500.0);
        table.insert("goa", BodyType::Van, 3000.0);
        table
    }

    #[test]
    fn test_exact_lookup() {
        let table = sample_table();
        assert!((table.fee("karnataka", BodyType::Suv) - 1250.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_van_fallback() {
        let table = sample_table();
        assert!((table.fee("goa", BodyType::Sedan) - 3000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_unknown_state_uses_default() {
        let table = sample_table();
        assert!((table.fee("sikkim", BodyType::Suv) - FALLBACK_PERMIT_FEE).abs() < f64::EPSILON);
    }

    #[test]
    fn test_state_key_is_normalized() {
        let table = sample_table();
        assert!((table.fee(" Karnataka ", BodyType::Suv) - 1250.0).abs() < f64::EPSILON);
    }
}
