//! Fare calculation engine
//!
//! Prices a single trip against the rate and permit catalogs. Pure and
//! deterministic: no clock, no I/O, no shared state, safe to call from
//! any number of threads. The only degraded path is an unknown vehicle
//! id, which returns an all-zero breakdown instead of an error.

use crate::model::{
    Advisory, AllowanceMultiplier, BodyType, FareBreakdown, PermitTable, RateCatalog, TripMode,
    TripModeKind, TripParams,
};

/// GST applied to the taxable subtotal when enabled
pub const GST_RATE: f64 = 0.05;

/// Dead mileage added for the shed-to-pickup leg on round trips
const GARAGE_BUFFER_KM: f64 = 20.0;

/// One-way drops up to this distance bill at the local tier
const LOCAL_DROP_LIMIT_KM: f64 = 30.0;

/// Km covered by the local-drop base fee
const LOCAL_BASE_KM: f64 = 10.0;

const LOCAL_BASE_FEE_LARGE: f64 = 350.0;
const LOCAL_BASE_FEE_SMALL: f64 = 250.0;

/// Minimum billed distance for an outstation one-way drop
const DROP_FLOOR_KM: f64 = 130.0;

/// Heavy-vehicle drops up to this distance bill at the fixed package
const HEAVY_LOCAL_LIMIT_KM: f64 = 50.0;

/// Average daily km beyond which a round trip earns double allowance
const DOUBLE_ALLOWANCE_AVG_KM: f64 = 400.0;

/// Seat count above which large-vehicle surcharge tiers apply
const LARGE_VEHICLE_SEATS: u32 = 7;

const WAITING_RATE_SMALL: f64 = 100.0;
const WAITING_RATE_LARGE: f64 = 300.0;

const HILL_CHARGE_LARGE: f64 = 1500.0;
const HILL_CHARGE_SUV: f64 = 500.0;
const HILL_CHARGE_DEFAULT: f64 = 300.0;

const PET_CHARGE: f64 = 500.0;

const HOURLY_RATE_SUV: f64 = 450.0;
const HOURLY_RATE_DEFAULT: f64 = 350.0;
const EXTRA_HOUR_RATE_DEFAULT: f64 = 250.0;
const INCLUDED_HOURS_DEFAULT: f64 = 8.0;
const INCLUDED_KM_DEFAULT: f64 = 80.0;

/// Calculate the itemized fare for one trip
///
/// An unknown `vehicle_id` short-circuits to `FareBreakdown::zeroed`;
/// this function never panics and never returns an error.
pub fn calculate_fare(
    params: &TripParams,
    rates: &RateCatalog,
    permits: &PermitTable,
) -> FareBreakdown {
    let Some(vehicle) = rates.vehicle(&params.vehicle_id) else {
        return FareBreakdown::zeroed(params.mode.kind());
    };

    let raw_km = (params.end_km - params.start_km).max(0.0);
    let days = f64::from(params.days);

    // A hill-station drop runs the descent too: bill it as an implicit
    // round trip from here on.
    let mut mode = params.mode.kind();
    let mut effective_km = raw_km;
    if params.hill_station && mode == TripModeKind::Drop {
        effective_km = raw_km * 2.0;
        mode = TripModeKind::OutstationRound;
    }
    if params.garage_buffer && mode == TripModeKind::OutstationRound {
        effective_km += GARAGE_BUFFER_KM;
    }

    let mut rate_used = if params.rate_per_km > 0.0 {
        params.rate_per_km
    } else if mode == TripModeKind::OutstationRound {
        vehicle.round_rate
    } else {
        vehicle.drop_rate
    };

    let mut advisory = Advisory::None;
    let distance_charge;

    match &params.mode {
        TripMode::Drop if mode == TripModeKind::OutstationRound => {
            // hill-forced round trip
            effective_km = (vehicle.min_km * days).max(effective_km);
            distance_charge = effective_km * rate_used;
        }
        TripMode::Drop => {
            if let Some(package) = vehicle.min_local_package {
                if raw_km <= HEAVY_LOCAL_LIMIT_KM {
                    // short heavy hire: the fixed package wins outright
                    distance_charge = package;
                    advisory = Advisory::MinimumPackageApplied;
                } else {
                    effective_km = vehicle.min_km.max(raw_km * 2.0);
                    rate_used = if params.rate_per_km > 0.0 {
                        params.rate_per_km
                    } else {
                        vehicle.round_rate
                    };
                    distance_charge = effective_km * rate_used;
                    advisory = Advisory::RoundTripOverride;
                }
            } else if raw_km <= LOCAL_DROP_LIMIT_KM {
                let base_fee = match vehicle.body {
                    BodyType::Suv | BodyType::Van => LOCAL_BASE_FEE_LARGE,
                    _ => LOCAL_BASE_FEE_SMALL,
                };
                distance_charge = base_fee + (raw_km - LOCAL_BASE_KM).max(0.0) * rate_used;
            } else {
                effective_km = DROP_FLOOR_KM.max(effective_km);
                distance_charge = effective_km * rate_used;
            }
        }
        TripMode::OutstationRound => {
            effective_km = (vehicle.min_km * days).max(effective_km);
            distance_charge = effective_km * rate_used;
        }
        TripMode::Hourly(hourly) => {
            if let Some(package) = hourly.package_price {
                let included_hours = hourly.included_hours.unwrap_or(INCLUDED_HOURS_DEFAULT);
                let included_km = hourly.included_km.unwrap_or(INCLUDED_KM_DEFAULT);
                let extra_hour_rate = hourly
                    .extra_hour_rate
                    .or(hourly.hourly_rate)
                    .unwrap_or(EXTRA_HOUR_RATE_DEFAULT);
                let mut charge =
                    package + (hourly.duration_hours - included_hours).max(0.0) * extra_hour_rate;
                if rate_used > 0.0 {
                    charge += (raw_km - included_km).max(0.0) * rate_used;
                }
                distance_charge = charge;
            } else {
                let hourly_rate = hourly.hourly_rate.unwrap_or(if vehicle.body == BodyType::Suv {
                    HOURLY_RATE_SUV
                } else {
                    HOURLY_RATE_DEFAULT
                });
                let floor = hourly_tier_minimum(hourly.duration_hours, vehicle.body);
                distance_charge = (hourly.duration_hours * hourly_rate).max(floor);
            }
        }
        TripMode::Fixed { package_price } => {
            distance_charge = *package_price;
        }
        TripMode::Custom { items } => {
            distance_charge = items.iter().map(|item| item.amount).sum();
        }
    }

    // Driver allowance: outstation round trips always, drops only past
    // the local tier. Auto mode doubles past the average-km threshold
    // on round trips, never on drops.
    let allowance_applies = mode == TripModeKind::OutstationRound
        || (mode == TripModeKind::Drop && raw_km > LOCAL_DROP_LIMIT_KM);
    let driver_allowance = if allowance_applies {
        let multiplier = match params.allowance_multiplier {
            AllowanceMultiplier::Auto => {
                if mode == TripModeKind::OutstationRound
                    && effective_km / days > DOUBLE_ALLOWANCE_AVG_KM
                {
                    days * 2.0
                } else {
                    days
                }
            }
            AllowanceMultiplier::Single => days,
            AllowanceMultiplier::Double => days * 2.0,
        };
        vehicle.driver_allowance * multiplier
    } else {
        0.0
    };

    let night_allowance = if params.night_allowance > 0.0 {
        params.night_allowance
    } else if params.night_drive {
        vehicle.night_charge
    } else {
        0.0
    };

    let waiting_rate = if vehicle.seats <= LARGE_VEHICLE_SEATS {
        WAITING_RATE_SMALL
    } else {
        WAITING_RATE_LARGE
    };
    let waiting_charge = params.waiting_hours * waiting_rate;

    let hill_charge = if params.hill_station {
        if vehicle.seats > LARGE_VEHICLE_SEATS {
            HILL_CHARGE_LARGE
        } else if vehicle.body == BodyType::Suv {
            HILL_CHARGE_SUV
        } else {
            HILL_CHARGE_DEFAULT
        }
    } else {
        0.0
    };

    let pet_charge = if params.pet_friendly { PET_CHARGE } else { 0.0 };

    let auto_permit = params
        .interstate_state
        .as_deref()
        .map(|state| permits.fee(state, vehicle.body))
        .unwrap_or(0.0);

    let taxable_subtotal = distance_charge
        + driver_allowance
        + params.night_stay
        + night_allowance
        + waiting_charge
        + hill_charge
        + pet_charge;
    let exempt_subtotal = params.toll + params.parking + params.permit_manual + auto_permit;
    let gst = if params.gst {
        taxable_subtotal * GST_RATE
    } else {
        0.0
    };
    let total = (taxable_subtotal + gst + exempt_subtotal).round();

    FareBreakdown {
        mode,
        raw_km,
        effective_km,
        rate_used,
        distance_charge: distance_charge.round(),
        driver_allowance,
        night_allowance: night_allowance.round(),
        night_stay: params.night_stay.round(),
        waiting_charge: waiting_charge.round(),
        hill_charge,
        pet_charge,
        taxable_subtotal: taxable_subtotal.round(),
        exempt_subtotal: exempt_subtotal.round(),
        pre_tax: (taxable_subtotal + exempt_subtotal).round(),
        gst: gst.round(),
        total,
        advisory,
    }
}

fn hourly_tier_minimum(duration_hours: f64, body: BodyType) -> f64 {
    let suv = body == BodyType::Suv;
    if duration_hours <= 5.0 {
        if suv {
            2200.0
        } else {
            1800.0
        }
    } else if duration_hours <= 10.0 {
        if suv {
            4000.0
        } else {
            3200.0
        }
    } else {
        0.0
    }
}
