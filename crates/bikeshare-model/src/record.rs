use chrono::NaiveDateTime;
use serde::Serialize;

/// One CSV row as read from a city dataset, every field still text.
///
/// `record` is the 1-based data-row number in the source file, carried all the
/// way through normalization so errors can name the offending row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawTrip {
    pub record: u64,
    pub start_time: String,
    pub end_time: Option<String>,
    pub duration: String,
    pub start_station: String,
    pub end_station: String,
    pub user_type: String,
    pub gender: Option<String>,
    pub birth_year: Option<String>,
}

/// Which optional columns the source dataset carries.
///
/// Washington's dataset has no `Gender` or `Birth Year` column; the
/// demographics report omits those sections rather than treating the absence
/// as an error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Schema {
    pub has_end_time: bool,
    pub has_gender: bool,
    pub has_birth_year: bool,
}

/// One fully normalized bikeshare trip.
///
/// `month`, `weekday`, and `hour` are derived from `start_time` once during
/// normalization and cached here; aggregators never recompute them.
#[derive(Debug, Clone, PartialEq)]
pub struct TripRecord {
    pub record: u64,
    pub start_time: NaiveDateTime,
    pub end_time: Option<NaiveDateTime>,
    pub duration_seconds: f64,
    pub start_station: String,
    pub end_station: String,
    pub user_type: String,
    pub gender: Option<String>,
    pub birth_year: Option<i32>,
    /// Calendar month of `start_time` (January = 1).
    pub month: u32,
    /// Weekday of `start_time` (Monday = 0).
    pub weekday: u32,
    /// Hour of `start_time` (0-23).
    pub hour: u32,
}

/// An ordered, immutable collection of normalized trips sharing one schema.
///
/// Filtering produces a new `Dataset`; the source is never mutated and record
/// order is preserved.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    records: Vec<TripRecord>,
    schema: Schema,
}

impl Dataset {
    pub fn new(records: Vec<TripRecord>, schema: Schema) -> Self {
        Self { records, schema }
    }

    pub fn records(&self) -> &[TripRecord] {
        &self.records
    }

    pub fn schema(&self) -> Schema {
        self.schema
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
