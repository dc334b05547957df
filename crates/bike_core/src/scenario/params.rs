use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{SamplingError, ScenarioError};

/// Default number of stations in a generated scenario.
const DEFAULT_STATION_COUNT: usize = 5;

/// Default run length: one step per simulated minute over eight hours.
const DEFAULT_DURATION_STEPS: u64 = 8 * 60;

/// Initial inventory of one station.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StationConfig {
    pub num_docks: u32,
    pub num_sbikes: u32,
    pub num_ebikes: u32,
    pub res_limit: u32,
}

impl Default for StationConfig {
    fn default() -> Self {
        Self {
            num_docks: 20,
            num_sbikes: 8,
            num_ebikes: 4,
            res_limit: 2,
        }
    }
}

/// Ride requests per station per step, drawn from a normal distribution and
/// floored at zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemandConfig {
    pub mean: f64,
    pub std: f64,
    /// Probability (0.0–1.0) that a request asks for an ebike.
    pub ebike_share: f64,
    /// Probability (0.0–1.0) that a rider places a reservation before checking out.
    pub reserve_probability: f64,
    /// Whether a standard request may be served with an ebike.
    pub allow_ebike_substitution: bool,
}

impl Default for DemandConfig {
    fn default() -> Self {
        Self {
            mean: 0.6,
            std: 0.8,
            ebike_share: 0.3,
            reserve_probability: 0.1,
            allow_ebike_substitution: true,
        }
    }
}

/// Ride duration in steps, drawn from a normal distribution and floored at `min_steps`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RideLengthConfig {
    pub mean: f64,
    pub std: f64,
    pub min_steps: i64,
}

impl Default for RideLengthConfig {
    fn default() -> Self {
        Self {
            mean: 15.0,
            std: 8.0,
            min_steps: 1,
        }
    }
}

/// Parameters for building and running a scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioParams {
    pub stations: Vec<StationConfig>,
    pub duration_steps: u64,
    pub demand: DemandConfig,
    pub ride_length: RideLengthConfig,
    /// Record a kiosk transfer for every successful return.
    pub kiosk_uplink: bool,
    pub seed: Option<u64>,
}

impl Default for ScenarioParams {
    fn default() -> Self {
        Self {
            stations: vec![StationConfig::default(); DEFAULT_STATION_COUNT],
            duration_steps: DEFAULT_DURATION_STEPS,
            demand: DemandConfig::default(),
            ride_length: RideLengthConfig::default(),
            kiosk_uplink: false,
            seed: None,
        }
    }
}

impl ScenarioParams {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_duration_steps(mut self, steps: u64) -> Self {
        self.duration_steps = steps;
        self
    }

    pub fn with_stations(mut self, stations: Vec<StationConfig>) -> Self {
        self.stations = stations;
        self
    }

    /// Use `count` copies of `station`.
    pub fn with_uniform_stations(mut self, count: usize, station: StationConfig) -> Self {
        self.stations = vec![station; count];
        self
    }

    pub fn with_demand(mut self, demand: DemandConfig) -> Self {
        self.demand = demand;
        self
    }

    pub fn with_ride_length(mut self, ride_length: RideLengthConfig) -> Self {
        self.ride_length = ride_length;
        self
    }

    pub fn with_kiosk_uplink(mut self, enabled: bool) -> Self {
        self.kiosk_uplink = enabled;
        self
    }

    pub fn from_json_str(json: &str) -> Result<Self, ScenarioError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_path(path: impl AsRef<Path>) -> Result<Self, ScenarioError> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Check the parameters without building anything.
    pub fn validate(&self) -> Result<(), ScenarioError> {
        if self.stations.is_empty() {
            return Err(ScenarioError::NoStations);
        }
        for (name, value) in [
            ("ebike_share", self.demand.ebike_share),
            ("reserve_probability", self.demand.reserve_probability),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ScenarioError::Probability { name, value });
            }
        }
        for (mean, std) in [
            (self.demand.mean, self.demand.std),
            (self.ride_length.mean, self.ride_length.std),
        ] {
            if !mean.is_finite() || !std.is_finite() || std < 0.0 {
                return Err(SamplingError::InvalidNormal { mean, std }.into());
            }
        }
        // A ride must end after the step it started in.
        if self.ride_length.min_steps < 1 {
            return Err(ScenarioError::RideLength(self.ride_length.min_steps));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(ScenarioParams::default().validate().is_ok());
    }

    #[test]
    fn rejects_empty_station_list() {
        let params = ScenarioParams::default().with_stations(vec![]);
        assert!(matches!(params.validate(), Err(ScenarioError::NoStations)));
    }

    #[test]
    fn rejects_out_of_range_probability() {
        let params = ScenarioParams::default().with_demand(DemandConfig {
            ebike_share: 1.5,
            ..Default::default()
        });
        assert!(matches!(
            params.validate(),
            Err(ScenarioError::Probability {
                name: "ebike_share",
                ..
            })
        ));
    }

    #[test]
    fn rejects_negative_std() {
        let params = ScenarioParams::default().with_ride_length(RideLengthConfig {
            std: -1.0,
            ..Default::default()
        });
        assert!(matches!(
            params.validate(),
            Err(ScenarioError::Sampling(SamplingError::InvalidNormal { .. }))
        ));
    }

    #[test]
    fn rejects_ride_length_floor_below_one_step() {
        for min_steps in [0, -3] {
            let params = ScenarioParams::default().with_ride_length(RideLengthConfig {
                min_steps,
                ..Default::default()
            });
            assert!(matches!(
                params.validate(),
                Err(ScenarioError::RideLength(floor)) if floor == min_steps
            ));
        }
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let params = ScenarioParams::from_json_str(
            r#"{
                "stations": [{"num_docks": 4, "num_sbikes": 1, "num_ebikes": 1, "res_limit": 1}],
                "demand": {"mean": 2.0},
                "seed": 11
            }"#,
        )
        .unwrap();
        assert_eq!(params.stations.len(), 1);
        assert_eq!(params.demand.mean, 2.0);
        assert_eq!(params.demand.std, DemandConfig::default().std);
        assert_eq!(params.duration_steps, DEFAULT_DURATION_STEPS);
        assert_eq!(params.seed, Some(11));
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(matches!(
            ScenarioParams::from_json_str("{\"stations\": 3}"),
            Err(ScenarioError::Json(_))
        ));
    }
}
