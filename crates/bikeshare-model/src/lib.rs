//! Data model for the bikeshare trip analyzer.

pub mod city;
pub mod error;
pub mod filter;
pub mod record;
pub mod report;

pub use city::City;
pub use error::{BikeshareError, Result};
pub use filter::{DAY_NAMES, DayFilter, FilterSpec, MONTH_NAMES, MonthFilter, day_name, month_name};
pub use record::{Dataset, RawTrip, Schema, TripRecord};
pub use report::{
    BirthYearStats, DemographicStats, DurationStats, GenderBreakdown, StationStats,
    TravelTimeStats,
};
