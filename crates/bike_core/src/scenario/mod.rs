//! Scenario setup: station inventories and demand parameters for a run.
//!
//! Parameters can be built in code through the `with_*` helpers or loaded from
//! a JSON file.

mod build;
mod params;

pub use build::{build_stations, choose_bike_type, random_destination};
pub use params::{DemandConfig, RideLengthConfig, ScenarioParams, StationConfig};
