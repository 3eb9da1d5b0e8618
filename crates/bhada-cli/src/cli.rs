//! CLI definition using clap

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use bhada_types::OutputFormat;

#[derive(Parser)]
#[command(name = "bhada-meter")]
#[command(author = "ravi")]
#[command(version)]
#[command(about = "Taxi fare estimation for independent cab operators")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Tariff TOML replacing the configured catalogs for this run
    #[arg(long, global = true)]
    pub tariff: Option<PathBuf>,
}

/// Trip mode selection
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ModeArg {
    /// One-way point-to-point hire
    Drop,
    /// Outstation round trip
    Round,
    /// Hourly / local package hire
    Hourly,
    /// Fixed quoted package
    Fixed,
    /// Free-form line items
    Custom,
}

/// Driver-allowance multiplier selection
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum MultiplierArg {
    Auto,
    Single,
    Double,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Estimate the fare for a single trip
    Estimate {
        /// Vehicle class id (see `vehicles`)
        vehicle: String,

        /// Odometer reading at pickup (km)
        #[arg(long)]
        from_km: f64,

        /// Odometer reading at dropoff (km)
        #[arg(long)]
        to_km: f64,

        /// Trip mode
        #[arg(long, short = 'm', value_enum, default_value = "drop")]
        mode: ModeArg,

        /// Trip length in days
        #[arg(long, short = 'd', default_value_t = 1)]
        days: u32,

        /// Per-km rate override; 0 uses the catalog rate
        #[arg(long, default_value_t = 0.0)]
        rate: f64,

        /// Toll amount (tax exempt)
        #[arg(long, default_value_t = 0.0)]
        toll: f64,

        /// Parking amount (tax exempt)
        #[arg(long, default_value_t = 0.0)]
        parking: f64,

        /// Manually entered permit amount (tax exempt)
        #[arg(long, default_value_t = 0.0)]
        permit: f64,

        /// Apply GST. Uses config value if not specified.
        #[arg(long)]
        gst: Option<bool>,

        /// Waiting time in hours
        #[arg(long, default_value_t = 0.0)]
        waiting_hours: f64,

        /// Hill-station trip
        #[arg(long)]
        hill: bool,

        /// Pet on board
        #[arg(long)]
        pet: bool,

        /// Night driving involved
        #[arg(long)]
        night_drive: bool,

        /// Manual night-allowance amount; 0 uses the class default
        #[arg(long, default_value_t = 0.0)]
        night_allowance: f64,

        /// Night-halt charge
        #[arg(long, default_value_t = 0.0)]
        night_stay: f64,

        /// Add shed-to-pickup dead mileage on round trips
        #[arg(long)]
        garage_buffer: bool,

        /// Driver-allowance multiplier
        #[arg(long, value_enum, default_value = "auto")]
        multiplier: MultiplierArg,

        /// Destination state code for an interstate permit
        #[arg(long)]
        state: Option<String>,

        /// Package price (hourly and fixed modes)
        #[arg(long)]
        package_price: Option<f64>,

        /// Hire duration in hours (hourly mode)
        #[arg(long, default_value_t = 0.0)]
        duration_hours: f64,

        /// Hourly rate (hourly mode)
        #[arg(long)]
        hourly_rate: Option<f64>,

        /// Hours included in the package (hourly mode)
        #[arg(long)]
        included_hours: Option<f64>,

        /// Km included in the package (hourly mode)
        #[arg(long)]
        included_km: Option<f64>,

        /// Rate for hours beyond the package (hourly mode)
        #[arg(long)]
        extra_hour_rate: Option<f64>,

        /// Custom line item as label=amount (repeatable, custom mode)
        #[arg(long = "item")]
        items: Vec<String>,
    },

    /// List vehicle classes in the active rate card
    Vehicles,

    /// Show interstate permit fees
    Permits {
        /// State code; lists all tabulated states if omitted
        state: Option<String>,
    },

    /// Estimate a CSV of trips across worker threads
    Batch {
        /// Path to the trips CSV
        trips: PathBuf,

        /// Output file for JSON results (stdout if omitted)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// Number of worker threads. 0 = auto (CPU count). Uses 4 if not specified.
        #[arg(long, short = 'j')]
        jobs: Option<usize>,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set default output format
        #[arg(long)]
        set_format: Option<OutputFormat>,

        /// Set whether GST applies by default
        #[arg(long)]
        set_gst: Option<bool>,

        /// Set a tariff TOML replacing the built-in catalogs
        #[arg(long)]
        set_tariff: Option<PathBuf>,

        /// Clear the tariff override
        #[arg(long)]
        clear_tariff: bool,
    },
}
