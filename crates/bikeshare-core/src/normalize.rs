//! Time normalization: raw CSV rows into typed trip records.
//!
//! Parsing fails the whole load on the first bad value; there is no partial
//! or best-effort normalization, so a `Dataset` always holds fully typed
//! records with their derived time fields already cached.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};
use tracing::debug;

use bikeshare_model::{BikeshareError, Dataset, RawTrip, Result, Schema, TripRecord};

/// Timestamp format used by all three published datasets.
const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
/// Some exports carry date-only timestamps; midnight is assumed.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses every raw row into a `TripRecord`, deriving month, weekday, and
/// hour from the start timestamp.
pub fn normalize(raw: Vec<RawTrip>, schema: Schema) -> Result<Dataset> {
    let mut records = Vec::with_capacity(raw.len());
    for trip in raw {
        records.push(normalize_trip(trip)?);
    }
    debug!(records = records.len(), "normalized trip records");
    Ok(Dataset::new(records, schema))
}

fn normalize_trip(trip: RawTrip) -> Result<TripRecord> {
    let start_time = parse_timestamp(&trip.start_time).ok_or_else(|| {
        BikeshareError::MalformedTimestamp {
            record: trip.record,
            value: trip.start_time.clone(),
        }
    })?;
    let end_time = match trip.end_time.as_deref() {
        Some(value) => Some(parse_timestamp(value).ok_or_else(|| {
            BikeshareError::MalformedTimestamp {
                record: trip.record,
                value: value.to_string(),
            }
        })?),
        None => None,
    };
    let duration_seconds =
        trip.duration
            .parse::<f64>()
            .map_err(|_| BikeshareError::InvalidDuration {
                record: trip.record,
                value: trip.duration.clone(),
            })?;
    let birth_year = match trip.birth_year.as_deref() {
        Some(value) => Some(parse_birth_year(value).ok_or_else(|| {
            BikeshareError::InvalidBirthYear {
                record: trip.record,
                value: value.to_string(),
            }
        })?),
        None => None,
    };
    Ok(TripRecord {
        record: trip.record,
        month: start_time.month(),
        weekday: start_time.weekday().num_days_from_monday(),
        hour: start_time.hour(),
        start_time,
        end_time,
        duration_seconds,
        start_station: trip.start_station,
        end_station: trip.end_station,
        user_type: trip.user_type,
        gender: trip.gender,
        birth_year,
    })
}

fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, DATETIME_FORMAT)
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(value, DATE_FORMAT)
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}

/// The datasets store birth years as floats ("1992.0"); a whole-numbered
/// float is accepted, anything fractional or non-numeric is rejected.
fn parse_birth_year(value: &str) -> Option<i32> {
    if let Ok(year) = value.parse::<i32>() {
        return Some(year);
    }
    let year = value.parse::<f64>().ok()?;
    if year.is_finite() && year.fract() == 0.0 {
        Some(year as i32)
    } else {
        None
    }
}
