//! CSV loader for trip batches
//!
//! Each row describes one trip for batch estimation. Columns are
//! header-addressed; everything beyond vehicle, mode, and the odometer
//! pair is optional.

use std::fs::File;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use bhada_domain::model::{HourlyParams, TripMode, TripParams};

#[derive(Error, Debug)]
pub enum TripCsvError {
    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse CSV: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Invalid trip mode in row {row}: {value}")]
    InvalidMode { row: usize, value: String },
}

impl From<TripCsvError> for bhada_types::Error {
    fn from(err: TripCsvError) -> Self {
        bhada_types::Error::CsvLoader(err.to_string())
    }
}

/// Raw CSV row before mode resolution
///
/// Expected header:
/// vehicle,mode,start_km,end_km[,days,rate,toll,parking,permit,gst,
/// waiting_hours,hill,pet,night_drive,garage_buffer,state,
/// package_price,duration_hours,hourly_rate]
#[derive(Debug, Deserialize)]
struct TripRow {
    vehicle: String,
    mode: String,
    start_km: f64,
    end_km: f64,
    #[serde(default)]
    days: Option<u32>,
    #[serde(default)]
    rate: Option<f64>,
    #[serde(default)]
    toll: Option<f64>,
    #[serde(default)]
    parking: Option<f64>,
    #[serde(default)]
    permit: Option<f64>,
    #[serde(default)]
    gst: Option<bool>,
    #[serde(default)]
    waiting_hours: Option<f64>,
    #[serde(default)]
    hill: Option<bool>,
    #[serde(default)]
    pet: Option<bool>,
    #[serde(default)]
    night_drive: Option<bool>,
    #[serde(default)]
    garage_buffer: Option<bool>,
    #[serde(default)]
    state: Option<String>,
    #[serde(default)]
    package_price: Option<f64>,
    #[serde(default)]
    duration_hours: Option<f64>,
    #[serde(default)]
    hourly_rate: Option<f64>,
}

/// Load trip parameters from a CSV file
pub fn load_trips_from_csv(path: &Path) -> Result<Vec<TripParams>, TripCsvError> {
    let file = File::open(path)?;
    load_trips_from_reader(file)
}

/// Load trip parameters from any CSV reader
pub fn load_trips_from_reader<R: std::io::Read>(
    reader: R,
) -> Result<Vec<TripParams>, TripCsvError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut trips = Vec::new();
    for (index, record) in csv_reader.deserialize().enumerate() {
        let row: TripRow = record?;
        trips.push(row_to_params(row, index + 2)?);
    }
    Ok(trips)
}

fn row_to_params(row: TripRow, row_number: usize) -> Result<TripParams, TripCsvError> {
    let mode = match row.mode.trim().to_ascii_lowercase().as_str() {
        "drop" => TripMode::Drop,
        "round" | "outstation" => TripMode::OutstationRound,
        "hourly" | "local" => TripMode::Hourly(HourlyParams {
            package_price: row.package_price,
            hourly_rate: row.hourly_rate,
            duration_hours: row.duration_hours.unwrap_or(0.0),
            ..HourlyParams::default()
        }),
        "fixed" | "package" => TripMode::Fixed {
            package_price: row.package_price.unwrap_or(0.0),
        },
        other => {
            return Err(TripCsvError::InvalidMode {
                row: row_number,
                value: other.to_string(),
            })
        }
    };

    Ok(TripParams {
        rate_per_km: row.rate.unwrap_or(0.0),
        days: row.days.unwrap_or(1),
        toll: row.toll.unwrap_or(0.0),
        parking: row.parking.unwrap_or(0.0),
        permit_manual: row.permit.unwrap_or(0.0),
        gst: row.gst.unwrap_or(false),
        waiting_hours: row.waiting_hours.unwrap_or(0.0),
        hill_station: row.hill.unwrap_or(false),
        pet_friendly: row.pet.unwrap_or(false),
        night_drive: row.night_drive.unwrap_or(false),
        garage_buffer: row.garage_buffer.unwrap_or(false),
        interstate_state: row.state.filter(|s| !s.is_empty()),
        ..TripParams::new(row.vehicle, row.start_km, row.end_km, mode)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use bhada_domain::model::TripModeKind;
    use std::io::Write;

    const TEST_CSV: &str = "\
vehicle,mode,start_km,end_km,days,rate,toll,gst,state
sedan,drop,1000,1150,,,,,
suv,round,2000,2500,1,,400,true,karnataka
tempo,drop,0,100,,,,,
";

    #[test]
    fn test_load_rows() {
        let trips = load_trips_from_reader(TEST_CSV.as_bytes()).unwrap();
        assert_eq!(trips.len(), 3);

        assert_eq!(trips[0].vehicle_id, "sedan");
        assert_eq!(trips[0].mode.kind(), TripModeKind::Drop);
        assert_eq!(trips[0].days, 1);
        assert!(!trips[0].gst);

        assert_eq!(trips[1].mode.kind(), TripModeKind::OutstationRound);
        assert!(trips[1].gst);
        assert!((trips[1].toll - 400.0).abs() < f64::EPSILON);
        assert_eq!(trips[1].interstate_state.as_deref(), Some("karnataka"));
    }

    #[test]
    fn test_hourly_row_carries_package() {
        let csv = "\
vehicle,mode,start_km,end_km,package_price,duration_hours
sedan,hourly,0,60,2500,6
";
        let trips = load_trips_from_reader(csv.as_bytes()).unwrap();
        match &trips[0].mode {
            TripMode::Hourly(h) => {
                assert_eq!(h.package_price, Some(2500.0));
                assert!((h.duration_hours - 6.0).abs() < f64::EPSILON);
            }
            other => panic!("expected hourly mode, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_mode_reports_row() {
        let csv = "\
vehicle,mode,start_km,end_km
sedan,teleport,0,10
";
        let err = load_trips_from_reader(csv.as_bytes()).unwrap_err();
        match err {
            TripCsvError::InvalidMode { row, value } => {
                assert_eq!(row, 2);
                assert_eq!(value, "teleport");
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(TEST_CSV.as_bytes()).unwrap();
        let trips = load_trips_from_csv(file.path()).unwrap();
        assert_eq!(trips.len(), 3);
    }
}
