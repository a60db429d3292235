use thiserror::Error;

/// Error taxonomy for the analysis pipeline.
///
/// Every variant carries enough context to identify the offending input:
/// the city name, the 1-based source record number, or the raw value.
#[derive(Debug, Error)]
pub enum BikeshareError {
    #[error("unknown city {0:?} (expected chicago, new york city, or washington)")]
    UnknownCity(String),
    #[error("data for {city} unavailable: {reason}")]
    DataUnavailable { city: String, reason: String },
    #[error("record {record}: malformed timestamp {value:?}")]
    MalformedTimestamp { record: u64, value: String },
    #[error("record {record}: invalid trip duration {value:?}")]
    InvalidDuration { record: u64, value: String },
    #[error("record {record}: invalid birth year {value:?}")]
    InvalidBirthYear { record: u64, value: String },
    #[error("no records match the current filter; {statistic} undefined")]
    EmptyDataset { statistic: &'static str },
    #[error("invalid input {value:?}: expected {expected}")]
    InvalidInput { value: String, expected: &'static str },
}

pub type Result<T> = std::result::Result<T, BikeshareError>;
