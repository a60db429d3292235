use bikeshare_model::{BikeshareError, Dataset, DurationStats, Result};

/// Sum, mean, minimum, and maximum of trip durations in seconds.
///
/// A negative or non-finite duration is a data-integrity violation and fails
/// the aggregation, naming the source record that carried it.
pub fn duration_stats(dataset: &Dataset) -> Result<DurationStats> {
    let records = dataset.records();
    if records.is_empty() {
        return Err(BikeshareError::EmptyDataset {
            statistic: "trip duration",
        });
    }
    let mut total = 0.0f64;
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for record in records {
        let seconds = record.duration_seconds;
        if !seconds.is_finite() || seconds < 0.0 {
            return Err(BikeshareError::InvalidDuration {
                record: record.record,
                value: seconds.to_string(),
            });
        }
        total += seconds;
        min = min.min(seconds);
        max = max.max(seconds);
    }
    Ok(DurationStats {
        total_seconds: total,
        mean_seconds: total / records.len() as f64,
        min_seconds: min,
        max_seconds: max,
    })
}
