//! Fare regression scenarios against the built-in catalogs
//!
//! These pin the tariff behavior operators rely on day to day; any
//! change to the rate card or engine that moves these numbers needs a
//! deliberate decision.

use bhada_app::app::EstimateService;
use bhada_app::constants::{PERMIT_FEES, RATE_CARD};
use bhada_domain::model::{Advisory, TripMode, TripModeKind, TripParams};
use bhada_domain::service::GST_RATE;

fn service() -> EstimateService {
    EstimateService::new(RATE_CARD.clone(), PERMIT_FEES.clone())
}

fn drop_trip(vehicle: &str, km: f64) -> TripParams {
    TripParams::new(vehicle, 10_000.0, 10_000.0 + km, TripMode::Drop)
}

fn round_trip(vehicle: &str, km: f64, days: u32) -> TripParams {
    TripParams {
        days,
        ..TripParams::new(vehicle, 10_000.0, 10_000.0 + km, TripMode::OutstationRound)
    }
}

#[test]
fn hatchback_local_drop() {
    // 25 km drop at the default rate: 250 base + 15 km x 15 = 475, no batta
    let result = service().estimate(&drop_trip("hatchback", 25.0));
    assert!((result.distance_charge - 475.0).abs() < f64::EPSILON);
    assert!((result.driver_allowance - 0.0).abs() < f64::EPSILON);
}

#[test]
fn sedan_outstation_drop() {
    // 150 km drop: 150 x 16 = 2400 with a single day's batta
    let result = service().estimate(&drop_trip("sedan", 150.0));
    assert!((result.distance_charge - 2400.0).abs() < f64::EPSILON);
    assert!((result.driver_allowance - 300.0).abs() < f64::EPSILON);
}

#[test]
fn suv_long_round_trip_doubles_batta() {
    // 500 km in one day: 500 x 18 = 9000; average beats 400 km/day
    let result = service().estimate(&round_trip("suv", 500.0, 1));
    assert!((result.distance_charge - 9000.0).abs() < f64::EPSILON);
    assert!((result.driver_allowance - 800.0).abs() < f64::EPSILON);
}

#[test]
fn suv_short_round_trip_hits_floor() {
    // 200 km raises to the 300 km per-day minimum
    let result = service().estimate(&round_trip("suv", 200.0, 1));
    assert!((result.effective_km - 300.0).abs() < f64::EPSILON);
    assert!((result.distance_charge - 5400.0).abs() < f64::EPSILON);
    assert!((result.driver_allowance - 400.0).abs() < f64::EPSILON);
}

#[test]
fn tempo_long_drop_billed_as_round_trip() {
    // 100 km one-way doubles to 200, floored at 300, at the round rate
    let result = service().estimate(&drop_trip("tempo", 100.0));
    assert!((result.effective_km - 300.0).abs() < f64::EPSILON);
    assert!((result.distance_charge - 7500.0).abs() < f64::EPSILON);
    assert_eq!(result.advisory, Advisory::RoundTripOverride);
}

#[test]
fn tempo_short_drop_bills_minimum_package() {
    let result = service().estimate(&drop_trip("tempo", 40.0));
    assert!((result.distance_charge - 3500.0).abs() < f64::EPSILON);
    assert_eq!(result.advisory, Advisory::MinimumPackageApplied);
}

#[test]
fn karnataka_permit_lands_in_exempt_bucket() {
    let params = TripParams {
        interstate_state: Some("karnataka".to_string()),
        ..round_trip("suv", 500.0, 1)
    };
    let result = service().estimate(&params);
    assert!((result.exempt_subtotal - 1250.0).abs() < f64::EPSILON);
    // the permit never changes the taxable side
    assert!((result.taxable_subtotal - 9800.0).abs() < f64::EPSILON);
}

#[test]
fn unknown_vehicle_zeroes_every_field() {
    let result = service().estimate(&drop_trip("autorickshaw", 120.0));
    assert!(result.is_unpriced());
    assert_eq!(result.mode, TripModeKind::Drop);
    for value in [
        result.total,
        result.gst,
        result.pre_tax,
        result.raw_km,
        result.effective_km,
        result.rate_used,
        result.distance_charge,
        result.driver_allowance,
        result.taxable_subtotal,
        result.exempt_subtotal,
    ] {
        assert!((value - 0.0).abs() < f64::EPSILON);
    }
}

#[test]
fn grand_total_matches_gst_identity() {
    let params = TripParams {
        gst: true,
        toll: 375.0,
        waiting_hours: 2.0,
        ..round_trip("sedan", 420.0, 2)
    };
    let result = service().estimate(&params);
    let expected = (result.taxable_subtotal * (1.0 + GST_RATE) + result.exempt_subtotal).round();
    assert!((result.total - expected).abs() <= 1.0);
}

#[test]
fn effective_distance_never_below_raw_for_round_trips() {
    for km in [50.0, 250.0, 300.0, 450.0, 800.0] {
        let result = service().estimate(&round_trip("sedan", km, 1));
        assert!(result.effective_km >= result.raw_km);
        assert!((result.effective_km - 250.0_f64.max(km)).abs() < f64::EPSILON);
    }
}
