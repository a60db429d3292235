//! Record source: maps a city to its CSV dataset and reads the raw rows.

mod csv_source;

pub use csv_source::{LoadedTrips, load_trips};
