mod support;

use std::io::Write;

use bike_core::bike::BikeType;
use bike_core::runner::{run_scenario, ScenarioRunner};
use bike_core::scenario::{DemandConfig, RideLengthConfig, ScenarioParams, StationConfig};
use bike_core::ScenarioError;

fn busy_params(seed: u64) -> ScenarioParams {
    ScenarioParams::default()
        .with_uniform_stations(
            4,
            StationConfig {
                num_docks: 5,
                num_sbikes: 2,
                num_ebikes: 2,
                res_limit: 2,
            },
        )
        .with_demand(DemandConfig {
            mean: 1.5,
            std: 1.0,
            ebike_share: 0.4,
            reserve_probability: 0.3,
            allow_ebike_substitution: true,
        })
        .with_ride_length(RideLengthConfig {
            mean: 6.0,
            std: 3.0,
            min_steps: 1,
        })
        .with_duration_steps(200)
        .with_seed(seed)
}

#[test]
fn same_seed_reproduces_outcome() {
    let first = run_scenario(busy_params(3)).unwrap();
    let second = run_scenario(busy_params(3)).unwrap();

    assert_eq!(first.final_counts, second.final_counts);
    assert_eq!(first.telemetry.requests, second.telemetry.requests);
    assert_eq!(first.telemetry.checkouts, second.telemetry.checkouts);
    assert_eq!(
        first.telemetry.completed_rides,
        second.telemetry.completed_rides
    );
}

#[test]
fn station_invariants_hold_every_step() {
    let mut runner = ScenarioRunner::new(busy_params(21)).unwrap();
    while runner.step().unwrap() {
        for station in runner.stations() {
            assert!(
                station.counts().is_consistent(),
                "step {}: {station}",
                runner.current_step()
            );
        }
    }
}

#[test]
fn busy_run_exercises_every_outcome() {
    let outcome = run_scenario(busy_params(5)).unwrap();
    let telemetry = &outcome.telemetry;

    assert!(telemetry.requests > 0);
    assert!(telemetry.checkouts > 0);
    assert!(telemetry.rejections > 0);
    assert!(telemetry.reservation_attempts > 0);
    assert!(telemetry.reservations_granted <= telemetry.reservation_attempts);
    assert_eq!(
        telemetry.requests,
        telemetry.checkouts + telemetry.rejections
    );
    assert_eq!(
        telemetry.returns as usize,
        telemetry.completed_rides.len()
    );
}

#[test]
fn reservations_are_never_released() {
    let outcome = run_scenario(busy_params(8)).unwrap();
    let reserved: u64 = outcome
        .final_counts
        .iter()
        .map(|c| u64::from(c.n_sreserved + c.n_ereserved))
        .sum();
    assert_eq!(reserved, outcome.telemetry.reservations_granted);
}

#[test]
fn no_substitution_when_disabled() {
    let mut params = busy_params(13);
    params.demand.allow_ebike_substitution = false;
    let outcome = run_scenario(params).unwrap();
    assert_eq!(outcome.telemetry.substitutions, 0);
}

#[test]
fn kiosk_uplink_does_not_change_station_outcomes() {
    let plain = run_scenario(busy_params(34)).unwrap();
    let with_kiosk = run_scenario(busy_params(34).with_kiosk_uplink(true)).unwrap();

    assert_eq!(plain.final_counts, with_kiosk.final_counts);
    assert_eq!(plain.telemetry.returns, with_kiosk.telemetry.returns);
    assert!(plain.telemetry.kiosk_transfers.is_empty());
    assert_eq!(
        with_kiosk.telemetry.kiosk_transfers.len() as u64,
        with_kiosk.telemetry.returns
    );
    assert!(with_kiosk
        .telemetry
        .kiosk_transfers
        .iter()
        .all(|t| t.transfer_secs > 0.0 && BikeType::ALL.contains(&t.bike_type)));
}

#[test]
fn full_destinations_defer_returns() {
    // The second station has no docks at all, so every ride sent there waits
    // until the run ends.
    let params = ScenarioParams::default()
        .with_stations(vec![
            StationConfig {
                num_docks: 2,
                num_sbikes: 2,
                num_ebikes: 0,
                res_limit: 0,
            },
            StationConfig {
                num_docks: 0,
                num_sbikes: 0,
                num_ebikes: 0,
                res_limit: 0,
            },
        ])
        .with_demand(DemandConfig {
            mean: 1.0,
            std: 0.0,
            ebike_share: 0.0,
            reserve_probability: 0.0,
            allow_ebike_substitution: false,
        })
        .with_ride_length(RideLengthConfig {
            mean: 1.0,
            std: 0.0,
            min_steps: 1,
        })
        .with_duration_steps(40)
        .with_seed(1);

    let outcome = run_scenario(params).unwrap();
    let telemetry = &outcome.telemetry;
    assert!(telemetry.deferred_returns > 0);
    assert!(telemetry.rides_in_progress > 0);
    assert_eq!(outcome.final_counts[1].num_sbikes, 0);
    assert_eq!(outcome.fleet().docked() + telemetry.rides_in_progress, 2);
}

#[test]
fn loads_params_from_json_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"stations": [{{"num_docks": 3, "num_sbikes": 1, "num_ebikes": 1, "res_limit": 0}}],
            "duration_steps": 10, "seed": 4}}"#
    )
    .unwrap();

    let params = ScenarioParams::from_json_path(file.path()).unwrap();
    assert_eq!(params.duration_steps, 10);
    let outcome = run_scenario(params).unwrap();
    assert_eq!(outcome.steps, 10);
}

#[test]
fn overfull_station_config_is_rejected() {
    let params = ScenarioParams::default().with_stations(vec![StationConfig {
        num_docks: 2,
        num_sbikes: 2,
        num_ebikes: 1,
        res_limit: 0,
    }]);
    assert!(matches!(
        ScenarioRunner::new(params),
        Err(ScenarioError::Station { index: 0, .. })
    ));
}

#[test]
fn missing_config_file_is_io_error() {
    assert!(matches!(
        ScenarioParams::from_json_path("/nonexistent/bike-scenario.json"),
        Err(ScenarioError::Io(_))
    ));
}
