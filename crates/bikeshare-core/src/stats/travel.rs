use bikeshare_model::{BikeshareError, Dataset, Result, TravelTimeStats};

use super::mode::mode_with_count;

const STATISTIC: &str = "most frequent travel times";

/// Most frequent month, weekday, and start hour over the filtered dataset.
///
/// Pure over an immutable dataset; running it twice yields identical results.
pub fn travel_time_stats(dataset: &Dataset) -> Result<TravelTimeStats> {
    let records = dataset.records();
    let empty = || BikeshareError::EmptyDataset {
        statistic: STATISTIC,
    };
    let (month, month_count) =
        mode_with_count(records.iter().map(|r| r.month)).ok_or_else(empty)?;
    let (weekday, weekday_count) =
        mode_with_count(records.iter().map(|r| r.weekday)).ok_or_else(empty)?;
    let (hour, hour_count) = mode_with_count(records.iter().map(|r| r.hour)).ok_or_else(empty)?;
    Ok(TravelTimeStats {
        month,
        month_count,
        weekday,
        weekday_count,
        hour,
        hour_count,
    })
}
