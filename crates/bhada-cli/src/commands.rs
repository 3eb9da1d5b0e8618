//! Command handlers

use std::collections::HashMap;
use std::path::PathBuf;

use indicatif::ProgressBar;
use serde::Serialize;

use bhada_app::app::{EstimateRequest, EstimateService, EstimateWorkerPool};
use bhada_app::config::Config;
use bhada_domain::model::{
    AllowanceMultiplier, FareBreakdown, HourlyParams, LineItem, TripMode, TripModeKind, TripParams,
};
use bhada_infra::trip_csv::load_trips_from_csv;
use bhada_types::{Error, OutputFormat, Result};

use crate::cli::{Cli, Commands, ModeArg, MultiplierArg};
use crate::output::{output_breakdown, output_permits, output_vehicles};

impl From<MultiplierArg> for AllowanceMultiplier {
    fn from(arg: MultiplierArg) -> Self {
        match arg {
            MultiplierArg::Auto => AllowanceMultiplier::Auto,
            MultiplierArg::Single => AllowanceMultiplier::Single,
            MultiplierArg::Double => AllowanceMultiplier::Double,
        }
    }
}

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    let mut config = Config::load()?;

    // A --tariff flag overrides the configured catalogs for this run
    if let Some(ref tariff) = cli.tariff {
        config.tariff_file = Some(tariff.clone());
    }
    let output_format = cli.format.unwrap_or(config.output_format);

    match cli.command {
        Commands::Estimate {
            vehicle,
            from_km,
            to_km,
            mode,
            days,
            rate,
            toll,
            parking,
            permit,
            gst,
            waiting_hours,
            hill,
            pet,
            night_drive,
            night_allowance,
            night_stay,
            garage_buffer,
            multiplier,
            state,
            package_price,
            duration_hours,
            hourly_rate,
            included_hours,
            included_km,
            extra_hour_rate,
            items,
        } => {
            let mode = match mode {
                ModeArg::Drop => TripMode::Drop,
                ModeArg::Round => TripMode::OutstationRound,
                ModeArg::Hourly => TripMode::Hourly(HourlyParams {
                    package_price,
                    hourly_rate,
                    duration_hours,
                    included_hours,
                    included_km,
                    extra_hour_rate,
                }),
                ModeArg::Fixed => TripMode::Fixed {
                    package_price: package_price.unwrap_or(0.0),
                },
                ModeArg::Custom => TripMode::Custom {
                    items: items
                        .iter()
                        .map(|item| parse_line_item(item))
                        .collect::<Result<Vec<_>>>()?,
                },
            };

            let params = TripParams {
                rate_per_km: rate,
                days,
                toll,
                parking,
                permit_manual: permit,
                gst: gst.unwrap_or(config.gst_default),
                waiting_hours,
                hill_station: hill,
                pet_friendly: pet,
                night_allowance,
                night_stay,
                night_drive,
                garage_buffer,
                allowance_multiplier: multiplier.into(),
                interstate_state: state,
                ..TripParams::new(vehicle, from_km, to_km, mode)
            };

            cmd_estimate(&config, output_format, &params)
        }

        Commands::Vehicles => cmd_vehicles(&config, output_format),

        Commands::Permits { state } => cmd_permits(&config, output_format, state.as_deref()),

        Commands::Batch {
            trips,
            output,
            jobs,
        } => {
            // Use CLI jobs if specified, otherwise default 4. 0 = auto CPU count.
            let job_count = match jobs {
                Some(0) => num_cpus::get(),
                Some(n) => n,
                None => 4,
            };
            cmd_batch(&config, output_format, trips, output, job_count)
        }

        Commands::Config {
            show,
            set_format,
            set_gst,
            set_tariff,
            clear_tariff,
        } => cmd_config(config, show, set_format, set_gst, set_tariff, clear_tariff),
    }
}

fn parse_line_item(item: &str) -> Result<LineItem> {
    let (label, amount) = item
        .split_once('=')
        .ok_or_else(|| Error::InvalidArgument(format!("expected label=amount, got: {}", item)))?;
    let amount: f64 = amount
        .trim()
        .parse()
        .map_err(|_| Error::InvalidArgument(format!("invalid amount in item: {}", item)))?;
    Ok(LineItem {
        label: label.trim().to_string(),
        amount,
    })
}

fn cmd_estimate(config: &Config, output_format: OutputFormat, params: &TripParams) -> Result<()> {
    let service = EstimateService::from_config(config)?;
    let breakdown = service.estimate(params);

    // The engine degrades to zeros instead of erroring; surface that
    if breakdown.is_unpriced() {
        eprintln!(
            "Warning: vehicle class '{}' not found in the rate card",
            params.vehicle_id
        );
    }

    output_breakdown(output_format, &breakdown)
}

fn cmd_vehicles(config: &Config, output_format: OutputFormat) -> Result<()> {
    let service = EstimateService::from_config(config)?;
    output_vehicles(output_format, service.vehicle_classes())
}

fn cmd_permits(config: &Config, output_format: OutputFormat, state: Option<&str>) -> Result<()> {
    let service = EstimateService::from_config(config)?;
    output_permits(output_format, service.permits(), state)
}

/// One row of a batch run
#[derive(Debug, Serialize)]
struct BatchEntry {
    id: String,
    vehicle: String,
    mode: TripModeKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    breakdown: Option<FareBreakdown>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[derive(Debug, Serialize)]
struct BatchResults {
    generated_at: String,
    total: usize,
    failed: usize,
    results: Vec<BatchEntry>,
}

fn cmd_batch(
    config: &Config,
    output_format: OutputFormat,
    trips_path: PathBuf,
    output: Option<PathBuf>,
    jobs: usize,
) -> Result<()> {
    let trips = load_trips_from_csv(&trips_path)?;
    if trips.is_empty() {
        println!("No trips found in {}", trips_path.display());
        return Ok(());
    }

    let service = EstimateService::from_config(config)?;
    let pool = EstimateWorkerPool::spawn(service, jobs);

    let total = trips.len();
    let row_info: Vec<(String, TripModeKind)> = trips
        .iter()
        .map(|t| (t.vehicle_id.clone(), t.mode.kind()))
        .collect();

    let mut index_by_id = HashMap::new();
    for (index, params) in trips.into_iter().enumerate() {
        let request = EstimateRequest::new(params);
        index_by_id.insert(request.id.clone(), index);
        pool.submit(request);
    }

    let bar = ProgressBar::new(total as u64);
    let mut entries: Vec<Option<BatchEntry>> = (0..total).map(|_| None).collect();
    for _ in 0..total {
        let Some(response) = pool.recv() else { break };
        bar.inc(1);
        if let Some(&index) = index_by_id.get(&response.id) {
            let (vehicle, mode) = row_info[index].clone();
            entries[index] = Some(match response.result {
                Ok(breakdown) => BatchEntry {
                    id: response.id,
                    vehicle,
                    mode,
                    breakdown: Some(breakdown),
                    error: None,
                },
                Err(error) => BatchEntry {
                    id: response.id,
                    vehicle,
                    mode,
                    breakdown: None,
                    error: Some(error),
                },
            });
        }
    }
    pool.shutdown();
    bar.finish_and_clear();

    let results: Vec<BatchEntry> = entries.into_iter().flatten().collect();
    let failed = results.iter().filter(|e| e.error.is_some()).count();
    let batch = BatchResults {
        generated_at: chrono::Utc::now().to_rfc3339(),
        total: results.len(),
        failed,
        results,
    };

    match output {
        Some(path) => {
            std::fs::write(&path, serde_json::to_string_pretty(&batch)?)?;
            println!("Wrote {} results to {}", batch.total, path.display());
        }
        None if output_format == OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&batch)?);
        }
        None => {
            println!("\nBatch Results");
            println!("=============");
            for entry in &batch.results {
                match (&entry.breakdown, &entry.error) {
                    (Some(b), _) => println!(
                        "{:<10} {:<7} total {:>8.0}  ({:.1} km billed)",
                        entry.vehicle,
                        entry.mode.label(),
                        b.total,
                        b.effective_km
                    ),
                    (None, Some(e)) => {
                        println!("{:<10} {:<7} error: {}", entry.vehicle, entry.mode.label(), e)
                    }
                    (None, None) => {}
                }
            }
            println!();
            println!("Trips:  {}", batch.total);
            println!("Failed: {}", batch.failed);
        }
    }

    Ok(())
}

fn cmd_config(
    mut config: Config,
    show: bool,
    set_format: Option<OutputFormat>,
    set_gst: Option<bool>,
    set_tariff: Option<PathBuf>,
    clear_tariff: bool,
) -> Result<()> {
    let mut changed = false;

    if let Some(format) = set_format {
        config.output_format = format;
        changed = true;
    }
    if let Some(gst) = set_gst {
        config.gst_default = gst;
        changed = true;
    }
    if let Some(tariff) = set_tariff {
        config.tariff_file = Some(tariff);
        changed = true;
    }
    if clear_tariff {
        config.tariff_file = None;
        changed = true;
    }

    if changed {
        config.save()?;
        println!("Configuration saved");
    }
    if show || !changed {
        println!("{}", config);
    }

    Ok(())
}
