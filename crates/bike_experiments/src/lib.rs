//! Parallel experimentation framework for bike-share station parameter sweeps.
//!
//! This crate runs many station scenarios in parallel with varying
//! reservation ceilings, fleet sizes, ebike mixes and demand levels, reduces
//! each run to a flat metrics record, and exports the results for analysis.
//!
//! # Quick Start
//!
//! ```no_run
//! use bike_experiments::{find_best_result_index, run_parallel_experiments, ParameterSpace};
//!
//! // Define parameter space (grid search)
//! let space = ParameterSpace::grid()
//!     .res_limit(vec![0, 1, 2, 4])
//!     .fleet_per_station(vec![8, 12])
//!     .ebike_substitution(vec![false, true]);
//!
//! // Generate parameter sets
//! let parameter_sets = space.generate();
//!
//! // Run experiments in parallel
//! let results = run_parallel_experiments(parameter_sets, None)?;
//!
//! // Highest service rate wins
//! let best_idx = find_best_result_index(&results);
//! # Ok::<(), bike_experiments::runner::ExperimentError>(())
//! ```
//!
//! # Architecture
//!
//! - [`parameters`]: Parameter variation framework (grid search, random sampling)
//! - [`runner`]: Parallel simulation execution using rayon
//! - [`metrics`]: Metrics extraction from finished scenarios
//! - [`export`]: Result export to CSV/JSON and ranking

pub mod export;
pub mod metrics;
pub mod parameter_spaces;
pub mod parameters;
pub mod runner;

pub use export::{
    export_rides_to_csv, export_to_csv, export_to_json, find_best_parameters,
    find_best_result_index,
};
pub use metrics::SimulationResult;
pub use parameters::{ParameterSet, ParameterSpace};
pub use runner::{run_parallel_experiments, ExperimentError};
