//! Completed trips between two stations.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a station within a scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StationId(pub usize);

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<usize> for StationId {
    fn from(index: usize) -> Self {
        StationId(index)
    }
}

/// One trip. Holds station identifiers only, never station state, and does
/// not validate its fields (zero or negative lengths and round trips are kept
/// as given).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ride {
    pub start: StationId,
    pub destination: StationId,
    pub start_time: f64,
    pub length: f64,
}

impl Ride {
    pub fn new(
        start: impl Into<StationId>,
        destination: impl Into<StationId>,
        start_time: f64,
        length: f64,
    ) -> Self {
        Self {
            start: start.into(),
            destination: destination.into(),
            start_time,
            length,
        }
    }

    pub fn end_time(&self) -> f64 {
        self.start_time + self.length
    }
}

impl fmt::Display for Ride {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ride from {} to {}; time ({}, {})",
            self.start,
            self.destination,
            self.start_time,
            self.end_time()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn end_time_adds_length() {
        let ride = Ride::new(1, 4, 10.0, 25.5);
        assert_eq!(ride.end_time(), 35.5);
    }

    #[test]
    fn display_renders_endpoints_and_window() {
        let ride = Ride::new(3, 7, 12.0, 30.0);
        assert_eq!(ride.to_string(), "Ride from 3 to 7; time (12, 42)");
    }

    #[test]
    fn accepts_unvalidated_input() {
        let ride = Ride::new(2, 2, 5.0, -1.0);
        assert_eq!(ride.start, ride.destination);
        assert_eq!(ride.end_time(), 4.0);
    }

    #[test]
    fn station_id_serializes_as_number() {
        let ride = Ride::new(0, 1, 0.0, 3.0);
        let json = serde_json::to_string(&ride).unwrap();
        assert_eq!(
            json,
            r#"{"start":0,"destination":1,"start_time":0.0,"length":3.0}"#
        );
    }
}
