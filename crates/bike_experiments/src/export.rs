//! Result export and analysis utilities.
//!
//! This module provides functions to export experiment results to CSV and JSON,
//! dump the ride log of a run, and find the parameter combination with the
//! best service rate.

use std::path::Path;

use bike_core::ride::Ride;

use crate::metrics::SimulationResult;
use crate::parameters::ParameterSet;

#[path = "export/csv.rs"]
mod csv;
#[path = "export/json.rs"]
mod json;
#[path = "export/ranking.rs"]
mod ranking;
#[path = "export/writer_utils.rs"]
mod writer_utils;

/// Export simulation results to JSON format.
///
/// Creates a JSON file with an array of all results (serialized as JSON objects).
///
/// # Errors
///
/// Returns an error if file creation or JSON serialization fails.
pub fn export_to_json(
    results: &[SimulationResult],
    path: impl AsRef<Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let file = writer_utils::create_output_file(path)?;
    json::export_to_json_impl(results, file)
}

/// Export simulation results with parameters to CSV format.
///
/// Creates a CSV file with columns for all swept parameters and all metrics.
/// Parameters and results are paired by index (results[i] corresponds to parameter_sets[i]).
///
/// # Errors
///
/// Returns an error if file creation or CSV writing fails, or if results and
/// parameter_sets lengths don't match.
pub fn export_to_csv(
    results: &[SimulationResult],
    parameter_sets: &[ParameterSet],
    path: impl AsRef<Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    writer_utils::ensure_not_empty(results)?;
    let file = writer_utils::create_output_file(path)?;
    csv::export_to_csv_impl(results, parameter_sets, file)
}

/// Export a ride log to CSV, one row per completed ride.
pub fn export_rides_to_csv(
    rides: &[Ride],
    path: impl AsRef<Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let file = writer_utils::create_output_file(path)?;
    csv::export_rides_to_csv_impl(rides, file)
}

/// Find the parameter set whose run served the largest share of requests.
///
/// Returns `None` if inputs are empty or mismatched.
pub fn find_best_parameters<'a>(
    results: &'a [SimulationResult],
    parameter_sets: &'a [ParameterSet],
) -> Option<&'a ParameterSet> {
    ranking::find_best_parameters_impl(results, parameter_sets)
}

/// Index of the result with the highest service rate; ties go to fewer
/// deferred returns, then to the earlier index.
pub fn find_best_result_index(results: &[SimulationResult]) -> Option<usize> {
    ranking::find_best_index_by_service(results)
}
