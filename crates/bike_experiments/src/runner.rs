//! Parallel simulation execution using rayon.
//!
//! This module provides functions to run single simulations and execute
//! multiple simulations in parallel for parameter sweeps.

use bike_core::ride::Ride;
use bike_core::runner::run_scenario;
use bike_core::ScenarioError;
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info};
use rayon::prelude::*;
use thiserror::Error;

use crate::metrics::{extract_metrics, SimulationResult};
use crate::parameters::ParameterSet;

#[derive(Debug, Error)]
pub enum ExperimentError {
    #[error("experiment {experiment_id} run {run_id} failed: {source}")]
    Run {
        experiment_id: String,
        run_id: usize,
        #[source]
        source: ScenarioError,
    },
    #[error("failed to build thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

#[derive(Debug, Clone)]
pub struct SimulationArtifacts {
    pub metrics: SimulationResult,
    /// Completed rides in the order they docked.
    pub rides: Vec<Ride>,
}

/// Runs one parameter set to completion and returns metrics plus the ride log.
pub fn run_single_simulation_with_artifacts(
    param_set: &ParameterSet,
) -> Result<SimulationArtifacts, ExperimentError> {
    let outcome = run_scenario(param_set.scenario_params()).map_err(|source| ExperimentError::Run {
        experiment_id: param_set.experiment_id.clone(),
        run_id: param_set.run_id,
        source,
    })?;
    let metrics = extract_metrics(&outcome);
    debug!(
        "{} run {}: service rate {:.3}, {} deferred returns",
        param_set.experiment_id, param_set.run_id, metrics.service_rate, metrics.deferred_returns
    );
    Ok(SimulationArtifacts {
        metrics,
        rides: outcome.telemetry.completed_rides,
    })
}

/// Run a single simulation with the given parameter set.
pub fn run_single_simulation(param_set: &ParameterSet) -> Result<SimulationResult, ExperimentError> {
    run_single_simulation_with_artifacts(param_set).map(|artifacts| artifacts.metrics)
}

/// Run multiple simulations in parallel.
///
/// Uses rayon to execute simulations concurrently across available CPU cores.
/// Each simulation runs independently with no shared state.
///
/// # Arguments
///
/// * `parameter_sets` - Vector of parameter sets to run
/// * `num_threads` - Optional number of threads to use. If None, uses rayon's default.
///
/// # Returns
///
/// Results in the same order as input parameter sets, or the first failure.
pub fn run_parallel_experiments(
    parameter_sets: Vec<ParameterSet>,
    num_threads: Option<usize>,
) -> Result<Vec<SimulationResult>, ExperimentError> {
    run_parallel_experiments_with_progress(parameter_sets, num_threads, true)
}

/// Run multiple simulations in parallel with optional progress bar.
pub fn run_parallel_experiments_with_progress(
    parameter_sets: Vec<ParameterSet>,
    num_threads: Option<usize>,
    show_progress: bool,
) -> Result<Vec<SimulationResult>, ExperimentError> {
    let total = parameter_sets.len();
    info!("running {total} simulations");
    let pb = if show_progress && total > 0 {
        let bar = ProgressBar::new(total as u64);
        let style = ProgressStyle::default_bar()
            .template(
                "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})",
            )
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-");
        bar.set_style(style);
        Some(bar)
    } else {
        None
    };

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(threads) = num_threads {
        builder = builder.num_threads(threads);
    }
    let pool = builder.build()?;

    let results = pool.install(|| {
        parameter_sets
            .par_iter()
            .map(|param_set| {
                let result = run_single_simulation(param_set);
                if let Some(progress_bar) = &pb {
                    progress_bar.inc(1);
                }
                result
            })
            .collect::<Result<Vec<_>, _>>()
    });

    if let Some(progress_bar) = &pb {
        progress_bar.finish_with_message("Completed");
    }
    if results.is_ok() {
        info!("finished {total} simulations");
    }

    results
}
