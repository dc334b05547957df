//! Example: Parameter sweep over station reservation and fleet settings.
//!
//! This example demonstrates how to:
//! 1. Select a pre-defined parameter space
//! 2. Run multiple simulations in parallel
//! 3. Find the configuration with the best service rate
//! 4. Export results to CSV/JSON
//!
//! Pass a preset name (comprehensive, reservation, fleet, ebike, minimal) as
//! the first argument; defaults to reservation. Set `RUST_LOG=info` for
//! progress logging.

use bike_experiments::parameter_spaces;
use bike_experiments::{
    export_rides_to_csv, export_to_csv, export_to_json, find_best_parameters,
    find_best_result_index, run_parallel_experiments,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let preset = std::env::args().nth(1).unwrap_or_else(|| "reservation".to_string());
    let space = match preset.as_str() {
        "comprehensive" => parameter_spaces::comprehensive_space(),
        "reservation" => parameter_spaces::reservation_focused_space(),
        "fleet" => parameter_spaces::fleet_sizing_space(),
        "ebike" => parameter_spaces::ebike_mix_space(),
        "minimal" => parameter_spaces::minimal_space(),
        other => return Err(format!("unknown parameter space: {other}").into()),
    };

    let parameter_sets = space.generate();
    println!("Generated {} parameter sets ({preset})", parameter_sets.len());

    let results = run_parallel_experiments(parameter_sets.clone(), None)?;
    println!("Completed {} simulations", results.len());

    let Some(best_idx) = find_best_result_index(&results) else {
        println!("No results to analyze");
        return Ok(());
    };

    println!("\n=== Best Configuration ===");
    let best = &results[best_idx];
    println!("Service rate: {:.2}%", best.service_rate * 100.0);
    println!("Substitution rate: {:.2}%", best.substitution_rate * 100.0);
    println!(
        "Reservations granted: {}/{}",
        best.reservations_granted, best.reservation_attempts
    );
    println!("Deferred returns: {}", best.deferred_returns);
    println!("Avg ride length: {:.1} steps", best.avg_ride_length);

    if let Some(best_params) = find_best_parameters(&results, &parameter_sets) {
        println!("\n=== Best Parameters ===");
        if let Some(res_limit) = best_params.res_limit() {
            println!("Reservation limit: {res_limit}");
        }
        if let Some(fleet) = best_params.fleet_per_station() {
            println!("Bikes per station: {fleet}");
        }
        let demand = &best_params.params.demand;
        println!("Ebike share: {:.2}", demand.ebike_share);
        println!("Demand mean: {:.2}", demand.mean);
        println!("Ebike substitution: {}", demand.allow_ebike_substitution);

        let artifacts = bike_experiments::runner::run_single_simulation_with_artifacts(best_params)?;
        export_rides_to_csv(&artifacts.rides, "best_run_rides.csv")?;
        println!("Exported best run rides to best_run_rides.csv");
    }

    export_to_csv(&results, &parameter_sets, "experiment_results.csv")?;
    export_to_json(&results, "experiment_results.json")?;
    println!("\nExported to experiment_results.csv and experiment_results.json");

    Ok(())
}
