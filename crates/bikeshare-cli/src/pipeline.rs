//! One analysis session, stage by stage.
//!
//! 1. **Load**: read raw rows for the chosen city
//! 2. **Normalize**: parse timestamps, cache month/weekday/hour
//! 3. **Filter**: apply the month/day predicates
//! 4. **Aggregate**: run the four independent aggregators
//!
//! Load and normalize errors abort the session with no partial report.
//! Aggregator errors are captured per section in the returned report.

use std::time::Instant;

use tracing::{debug, info, info_span};

use bikeshare_core::{
    apply_filters, demographic_stats, duration_stats, normalize, station_stats, travel_time_stats,
};
use bikeshare_ingest::load_trips;
use bikeshare_model::Result;

use crate::types::{SessionConfig, SessionReport, StageTimings};

/// Runs the full pipeline for one validated session configuration.
pub fn run_session(config: &SessionConfig) -> Result<SessionReport> {
    let span = info_span!("session", city = %config.city, filter = %config.filter);
    let _guard = span.enter();
    let mut timings = StageTimings::default();

    let started = Instant::now();
    let loaded = load_trips(&config.data_dir, config.city)?;
    timings.load = started.elapsed();

    let started = Instant::now();
    let dataset = normalize(loaded.trips, loaded.schema)?;
    timings.normalize = started.elapsed();

    let started = Instant::now();
    let view = apply_filters(&dataset, &config.filter);
    timings.filter = started.elapsed();
    info!(
        loaded = dataset.len(),
        matched = view.len(),
        "dataset ready"
    );

    let started = Instant::now();
    let travel = travel_time_stats(&view);
    let stations = station_stats(&view);
    let durations = duration_stats(&view);
    let demographics = demographic_stats(&view);
    timings.aggregate = started.elapsed();
    debug!(
        load = ?timings.load,
        normalize = ?timings.normalize,
        filter = ?timings.filter,
        aggregate = ?timings.aggregate,
        "session complete"
    );

    Ok(SessionReport {
        city: config.city,
        filter: config.filter,
        loaded: dataset.len(),
        matched: view.len(),
        travel,
        stations,
        durations,
        demographics,
        timings: config.timings.then_some(timings),
    })
}
