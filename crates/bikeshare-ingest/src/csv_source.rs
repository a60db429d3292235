use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use tracing::{debug, info};

use bikeshare_model::{BikeshareError, City, RawTrip, Result, Schema};

/// Canonical column names as they appear in the published datasets.
const START_TIME: &str = "Start Time";
const END_TIME: &str = "End Time";
const TRIP_DURATION: &str = "Trip Duration";
const START_STATION: &str = "Start Station";
const END_STATION: &str = "End Station";
const USER_TYPE: &str = "User Type";
const GENDER: &str = "Gender";
const BIRTH_YEAR: &str = "Birth Year";

/// Raw rows read from one city dataset, with the columns it actually carried.
#[derive(Debug, Clone)]
pub struct LoadedTrips {
    pub trips: Vec<RawTrip>,
    pub schema: Schema,
}

/// Loads the raw trip rows for `city` from `data_dir`.
///
/// Any storage failure (missing file, unreadable row) maps to
/// `DataUnavailable` naming the city; nothing is skipped silently.
pub fn load_trips(data_dir: &Path, city: City) -> Result<LoadedTrips> {
    let path = data_dir.join(city.data_file());
    debug!(city = %city, path = %path.display(), "loading trip records");
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .from_path(&path)
        .map_err(|error| data_unavailable(city, &error.to_string()))?;
    let headers: Vec<String> = reader
        .headers()
        .map_err(|error| data_unavailable(city, &error.to_string()))?
        .iter()
        .map(normalize_header)
        .collect();
    let columns = Columns::resolve(&headers, city)?;
    let mut trips = Vec::new();
    for (index, row) in reader.records().enumerate() {
        let row = row.map_err(|error| data_unavailable(city, &error.to_string()))?;
        trips.push(columns.raw_trip(index as u64 + 1, &row));
    }
    info!(city = %city, records = trips.len(), "loaded trip records");
    Ok(LoadedTrips {
        trips,
        schema: columns.schema(),
    })
}

fn data_unavailable(city: City, reason: &str) -> BikeshareError {
    BikeshareError::DataUnavailable {
        city: city.label().to_string(),
        reason: reason.to_string(),
    }
}

/// Strips surrounding whitespace and a UTF-8 BOM from a header cell.
fn normalize_header(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').trim().to_string()
}

/// Resolved column indexes for one dataset.
///
/// The datasets carry a leading unnamed index column; resolution works by
/// header name, so it is ignored without special handling.
#[derive(Debug, Clone, Copy)]
struct Columns {
    start_time: usize,
    end_time: Option<usize>,
    duration: usize,
    start_station: usize,
    end_station: usize,
    user_type: usize,
    gender: Option<usize>,
    birth_year: Option<usize>,
}

impl Columns {
    fn resolve(headers: &[String], city: City) -> Result<Self> {
        let required = |name: &str| {
            find_column(headers, name).ok_or_else(|| {
                data_unavailable(city, &format!("missing required column {name:?}"))
            })
        };
        Ok(Self {
            start_time: required(START_TIME)?,
            end_time: find_column(headers, END_TIME),
            duration: required(TRIP_DURATION)?,
            start_station: required(START_STATION)?,
            end_station: required(END_STATION)?,
            user_type: required(USER_TYPE)?,
            gender: find_column(headers, GENDER),
            birth_year: find_column(headers, BIRTH_YEAR),
        })
    }

    fn schema(&self) -> Schema {
        Schema {
            has_end_time: self.end_time.is_some(),
            has_gender: self.gender.is_some(),
            has_birth_year: self.birth_year.is_some(),
        }
    }

    fn raw_trip(&self, record: u64, row: &StringRecord) -> RawTrip {
        RawTrip {
            record,
            start_time: cell(row, self.start_time),
            end_time: self.end_time.and_then(|index| optional_cell(row, index)),
            duration: cell(row, self.duration),
            start_station: cell(row, self.start_station),
            end_station: cell(row, self.end_station),
            user_type: cell(row, self.user_type),
            gender: self.gender.and_then(|index| optional_cell(row, index)),
            birth_year: self.birth_year.and_then(|index| optional_cell(row, index)),
        }
    }
}

fn find_column(headers: &[String], name: &str) -> Option<usize> {
    headers.iter().position(|header| header.eq_ignore_ascii_case(name))
}

fn cell(row: &StringRecord, index: usize) -> String {
    row.get(index).unwrap_or_default().trim().to_string()
}

/// An empty cell in an optional column means the value was not collected.
fn optional_cell(row: &StringRecord, index: usize) -> Option<String> {
    let value = row.get(index)?.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
