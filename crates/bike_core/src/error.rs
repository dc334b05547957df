//! Error types for station construction, sampling, and scenario runs.
//!
//! Ordinary unavailability (no bike, no dock, reservation ceiling reached) is
//! never an error; station operations report it as `false`.

use thiserror::Error;

/// Errors raised at the station boundary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StationError {
    /// A bike label outside `SBIKE` / `EBIKE`.
    #[error("unknown bike type: {0:?}")]
    UnknownBikeType(String),

    /// Initial inventory does not fit in the docks.
    #[error("{bikes} bikes do not fit in {docks} docks")]
    OverCapacity { docks: u32, bikes: u32 },
}

/// Errors from the sampling helpers.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SamplingError {
    #[error("invalid normal distribution (mean {mean}, std {std})")]
    InvalidNormal { mean: f64, std: f64 },

    #[error("empty sampling range {min}..{max}")]
    EmptyRange { min: u64, max: u64 },
}

/// Errors from building or running a scenario.
#[derive(Error, Debug)]
pub enum ScenarioError {
    #[error("scenario has no stations")]
    NoStations,

    #[error("station {index}: {source}")]
    Station {
        index: usize,
        #[source]
        source: StationError,
    },

    #[error("{name} must be within [0, 1], got {value}")]
    Probability { name: &'static str, value: f64 },

    #[error("ride length floor must be at least 1 step, got {0}")]
    RideLength(i64),

    #[error(transparent)]
    Sampling(#[from] SamplingError),

    #[error("failed to read scenario config: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid scenario config: {0}")]
    Json(#[from] serde_json::Error),
}
