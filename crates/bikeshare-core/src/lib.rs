//! Analysis core: time normalization, filtering, aggregation, and duration
//! formatting over bikeshare trip records.

pub mod filter;
pub mod format;
pub mod normalize;
pub mod stats;

pub use filter::apply_filters;
pub use format::format_duration;
pub use normalize::normalize;
pub use stats::{demographic_stats, duration_stats, station_stats, travel_time_stats};
