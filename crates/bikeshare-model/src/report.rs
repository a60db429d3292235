//! Per-aggregator statistics reports.
//!
//! Reports are plain values recreated on every run; rendering them into
//! report lines is the CLI's concern.

use serde::Serialize;

/// Most frequent travel times over the filtered dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TravelTimeStats {
    /// Most frequent calendar month (January = 1) and its occurrence count.
    pub month: u32,
    pub month_count: usize,
    /// Most frequent weekday (Monday = 0) and its occurrence count.
    pub weekday: u32,
    pub weekday_count: usize,
    /// Most frequent start hour (0-23) and its occurrence count.
    pub hour: u32,
    pub hour_count: usize,
}

/// Most popular stations and directed station pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StationStats {
    pub start_station: String,
    pub start_count: usize,
    pub end_station: String,
    pub end_count: usize,
    /// Most frequent trip, kept directional: A to B and B to A are distinct.
    pub trip_start: String,
    pub trip_end: String,
    pub trip_count: usize,
}

/// Trip-duration aggregates, all in raw seconds.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DurationStats {
    pub total_seconds: f64,
    pub mean_seconds: f64,
    pub min_seconds: f64,
    pub max_seconds: f64,
}

/// Counts per gender value, plus how many rows left the cell blank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenderBreakdown {
    pub counts: Vec<(String, usize)>,
    pub unspecified: usize,
}

/// Birth-year aggregates over the rows that carry a year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BirthYearStats {
    pub earliest: i32,
    pub most_recent: i32,
    pub most_common: i32,
    pub most_common_count: usize,
}

/// User-demographics report. `genders` and `birth_years` are `None` when the
/// source schema lacks the corresponding column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DemographicStats {
    pub user_types: Vec<(String, usize)>,
    pub genders: Option<GenderBreakdown>,
    pub birth_years: Option<BirthYearStats>,
}
