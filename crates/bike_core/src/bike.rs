//! Bike kinds handled by a docking station.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::StationError;

/// The two kinds of bike a dock can hold.
///
/// Parsing from the external labels (`"SBIKE"`, `"EBIKE"`) is the only place an
/// invalid kind can show up; everything past that boundary works with this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum BikeType {
    #[serde(rename = "SBIKE")]
    Standard,
    #[serde(rename = "EBIKE")]
    Ebike,
}

impl BikeType {
    pub const ALL: [BikeType; 2] = [BikeType::Standard, BikeType::Ebike];

    /// External label used in logs and exported files.
    pub fn label(self) -> &'static str {
        match self {
            BikeType::Standard => "SBIKE",
            BikeType::Ebike => "EBIKE",
        }
    }
}

impl fmt::Display for BikeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for BikeType {
    type Err = StationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SBIKE" => Ok(BikeType::Standard),
            "EBIKE" => Ok(BikeType::Ebike),
            other => Err(StationError::UnknownBikeType(other.to_string())),
        }
    }
}
