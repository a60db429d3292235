use bikeshare_model::{BikeshareError, Dataset, Result, StationStats};

use super::mode::mode_with_count;

const STATISTIC: &str = "most popular stations";

/// Most frequent start station, end station, and directed station pair.
///
/// Trips keep their direction: A to B and B to A count separately.
pub fn station_stats(dataset: &Dataset) -> Result<StationStats> {
    let records = dataset.records();
    let empty = || BikeshareError::EmptyDataset {
        statistic: STATISTIC,
    };
    let (start_station, start_count) =
        mode_with_count(records.iter().map(|r| r.start_station.as_str())).ok_or_else(empty)?;
    let (end_station, end_count) =
        mode_with_count(records.iter().map(|r| r.end_station.as_str())).ok_or_else(empty)?;
    let ((trip_start, trip_end), trip_count) = mode_with_count(
        records
            .iter()
            .map(|r| (r.start_station.as_str(), r.end_station.as_str())),
    )
    .ok_or_else(empty)?;
    Ok(StationStats {
        start_station: start_station.to_string(),
        start_count,
        end_station: end_station.to_string(),
        end_count,
        trip_start: trip_start.to_string(),
        trip_end: trip_end.to_string(),
        trip_count,
    })
}
