//! Output formatting module

use serde::Serialize;

use bhada_domain::model::{Advisory, BodyType, FareBreakdown, PermitTable, VehicleClass};
use bhada_types::{OutputFormat, Result};

/// Display prose for an advisory reason code
pub fn advisory_text(advisory: Advisory) -> Option<&'static str> {
    match advisory {
        Advisory::None => None,
        Advisory::MinimumPackageApplied => Some("Minimum package applied"),
        Advisory::RoundTripOverride => Some("One-way drop billed as round trip"),
    }
}

pub fn output_breakdown(output_format: OutputFormat, result: &FareBreakdown) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(result)?;
        println!("{}", content);
        return Ok(());
    }

    println!("\nFare Estimate");
    println!("=============");
    println!("Mode:            {}", result.mode);
    println!(
        "Distance:        {:.1} km (billed {:.1} km)",
        result.raw_km, result.effective_km
    );
    println!("Rate:            {:.2} /km", result.rate_used);
    println!("Distance charge: {:.0}", result.distance_charge);

    if result.driver_allowance > 0.0 {
        println!("Driver batta:    {:.0}", result.driver_allowance);
    }
    if result.night_allowance > 0.0 {
        println!("Night allowance: {:.0}", result.night_allowance);
    }
    if result.night_stay > 0.0 {
        println!("Night stay:      {:.0}", result.night_stay);
    }
    if result.waiting_charge > 0.0 {
        println!("Waiting:         {:.0}", result.waiting_charge);
    }
    if result.hill_charge > 0.0 {
        println!("Hill charge:     {:.0}", result.hill_charge);
    }
    if result.pet_charge > 0.0 {
        println!("Pet charge:      {:.0}", result.pet_charge);
    }

    println!("-----------------------");
    println!("Taxable:         {:.0}", result.taxable_subtotal);
    if result.gst > 0.0 {
        println!("GST:             {:.0}", result.gst);
    }
    if result.exempt_subtotal > 0.0 {
        println!("Tolls & permits: {:.0}", result.exempt_subtotal);
    }
    println!("Total:           {:.0}", result.total);

    if let Some(note) = advisory_text(result.advisory) {
        println!("\nNote: {}", note);
    }

    Ok(())
}

pub fn output_vehicles(output_format: OutputFormat, classes: &[VehicleClass]) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(classes)?;
        println!("{}", content);
        return Ok(());
    }

    println!(
        "{:<10} {:<16} {:<10} {:>5} {:>6} {:>6} {:>7} {:>6} {:>6} {:>8}",
        "ID", "Name", "Body", "Seats", "Drop", "Round", "Min km", "Batta", "Night", "Package"
    );
    println!("{}", "-".repeat(90));
    for class in classes {
        let package = class
            .min_local_package
            .map(|p| format!("{:.0}", p))
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:<10} {:<16} {:<10} {:>5} {:>6.0} {:>6.0} {:>7.0} {:>6.0} {:>6.0} {:>8}",
            class.id,
            class.name,
            class.body.label(),
            class.seats,
            class.drop_rate,
            class.round_rate,
            class.min_km,
            class.driver_allowance,
            class.night_charge,
            package
        );
    }

    Ok(())
}

/// Per-state permit fees, resolved per body type
#[derive(Debug, Serialize)]
struct PermitRow {
    state: String,
    hatchback: f64,
    sedan: f64,
    suv: f64,
    van: f64,
}

impl PermitRow {
    fn resolve(permits: &PermitTable, state: &str) -> Self {
        Self {
            state: state.to_string(),
            hatchback: permits.fee(state, BodyType::Hatchback),
            sedan: permits.fee(state, BodyType::Sedan),
            suv: permits.fee(state, BodyType::Suv),
            van: permits.fee(state, BodyType::Van),
        }
    }
}

pub fn output_permits(
    output_format: OutputFormat,
    permits: &PermitTable,
    state: Option<&str>,
) -> Result<()> {
    let rows: Vec<PermitRow> = match state {
        Some(state) => vec![PermitRow::resolve(permits, state)],
        None => permits
            .states()
            .iter()
            .map(|s| PermitRow::resolve(permits, s))
            .collect(),
    };

    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(&rows)?;
        println!("{}", content);
        return Ok(());
    }

    println!(
        "{:<14} {:>9} {:>9} {:>9} {:>9}",
        "State", "Hatchback", "Sedan", "SUV", "Van"
    );
    println!("{}", "-".repeat(56));
    for row in rows {
        println!(
            "{:<14} {:>9.0} {:>9.0} {:>9.0} {:>9.0}",
            row.state, row.hatchback, row.sedan, row.suv, row.van
        );
    }

    Ok(())
}
