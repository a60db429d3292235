//! The four aggregators: independent pure functions over a filtered dataset.
//!
//! Each returns `EmptyDataset` on zero records; callers capture those
//! per-aggregator so one empty section never suppresses the others.

mod demographics;
mod duration;
mod mode;
mod station;
mod travel;

pub use demographics::demographic_stats;
pub use duration::duration_stats;
pub use mode::{mode_with_count, value_counts};
pub use station::station_stats;
pub use travel::travel_time_stats;
