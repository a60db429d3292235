use std::path::PathBuf;
use std::time::Duration;

use bikeshare_model::{
    City, DemographicStats, DurationStats, FilterSpec, Result, StationStats, TravelTimeStats,
};

/// One analysis session's configuration, fully validated before the pipeline
/// runs. Timings reporting is explicit configuration, never global state.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub data_dir: PathBuf,
    pub city: City,
    pub filter: FilterSpec,
    pub timings: bool,
}

/// Elapsed time per pipeline stage, reported when timings are enabled.
#[derive(Debug, Clone, Copy, Default)]
pub struct StageTimings {
    pub load: Duration,
    pub normalize: Duration,
    pub filter: Duration,
    pub aggregate: Duration,
}

/// Everything one session produced.
///
/// The four aggregator results are independent: an `EmptyDataset` failure in
/// one section is carried here as that section's error and never suppresses
/// the others.
#[derive(Debug)]
pub struct SessionReport {
    pub city: City,
    pub filter: FilterSpec,
    /// Records loaded from the source before filtering.
    pub loaded: usize,
    /// Records remaining after filtering.
    pub matched: usize,
    pub travel: Result<TravelTimeStats>,
    pub stations: Result<StationStats>,
    pub durations: Result<DurationStats>,
    pub demographics: Result<DemographicStats>,
    pub timings: Option<StageTimings>,
}
