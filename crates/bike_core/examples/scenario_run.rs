//! Run the default five-station scenario and print completed rides.
//!
//! Run with: cargo run -p bike_core --example scenario_run
//! Pass a JSON scenario file as the first argument to override the defaults.

use bike_core::runner::run_scenario;
use bike_core::scenario::ScenarioParams;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    const SEED: u64 = 123;
    const SAMPLE: usize = 20;

    let params = match std::env::args().nth(1) {
        Some(path) => ScenarioParams::from_json_path(path)?,
        None => ScenarioParams::default()
            .with_seed(SEED)
            .with_kiosk_uplink(true),
    };
    let station_count = params.stations.len();
    let outcome = run_scenario(params)?;
    let telemetry = &outcome.telemetry;

    println!("--- Scenario run ({} stations, {} steps) ---", station_count, outcome.steps);
    println!("Requests:          {}", telemetry.requests);
    println!(
        "Check-outs:        {} ({:.1}% served, {} substitutions)",
        telemetry.checkouts,
        telemetry.service_rate() * 100.0,
        telemetry.substitutions
    );
    println!(
        "Reservations:      {}/{} granted",
        telemetry.reservations_granted, telemetry.reservation_attempts
    );
    println!(
        "Returns:           {} ({} deferred attempts)",
        telemetry.returns, telemetry.deferred_returns
    );
    println!("Rides in progress: {}", telemetry.rides_in_progress);
    if !telemetry.kiosk_transfers.is_empty() {
        println!(
            "Kiosk uplink:      {} transfers, {} MB",
            telemetry.kiosk_transfers.len(),
            telemetry.kiosk_payload_mb()
        );
    }

    println!("\nFinal stations:");
    for (index, counts) in outcome.final_counts.iter().enumerate() {
        println!(
            "  {index}: {}/{} docks used, reserved {}+{}",
            counts.num_sbikes + counts.num_ebikes,
            counts.num_docks,
            counts.n_sreserved,
            counts.n_ereserved
        );
    }

    let completed = telemetry.completed_rides.len();
    if completed > 0 {
        println!("\nSample completed rides (first {SAMPLE}):");
        for ride in telemetry.completed_rides.iter().take(SAMPLE) {
            println!("  {ride}");
        }
        if completed > SAMPLE {
            println!("  ... and {} more", completed - SAMPLE);
        }
    } else {
        println!("\nNo rides completed.");
    }
    Ok(())
}
