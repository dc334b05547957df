//! Metrics extraction from simulation results.
//!
//! This module reduces a finished scenario to one flat record: request
//! outcomes, reservation behavior, docking pressure and ride-length statistics.

use bike_core::runner::ScenarioOutcome;
use serde::Serialize;

/// Aggregated metrics from a single simulation run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationResult {
    pub stations: usize,
    /// Docks summed over all stations.
    pub total_docks: u64,
    /// Bikes docked when the run ended.
    pub docked_bikes: u64,
    /// Total ride requests sampled.
    pub requests: u64,
    /// Requests that left with a bike.
    pub checkouts: u64,
    /// Requests turned away at an empty station.
    pub rejections: u64,
    /// Standard requests served with an ebike.
    pub substitutions: u64,
    /// Checkouts / requests.
    pub service_rate: f64,
    /// Substitutions / checkouts.
    pub substitution_rate: f64,
    pub reservation_attempts: u64,
    pub reservations_granted: u64,
    pub reservation_grant_rate: f64,
    /// Reservations still held at the end of the run.
    pub reservations_outstanding: u64,
    pub returns: u64,
    /// Docking attempts that found a full station.
    pub deferred_returns: u64,
    pub rides_in_progress: u64,
    pub completed_rides: usize,
    /// Ride length statistics in steps.
    pub avg_ride_length: f64,
    pub median_ride_length: f64,
    pub p90_ride_length: f64,
    /// Total kiosk payload pushed while docking (0 without the uplink).
    pub kiosk_payload_mb: u64,
}

impl SimulationResult {
    /// Average, median and p90 of `values`; all zero when empty.
    fn calculate_stats(values: &[f64]) -> (f64, f64, f64) {
        if values.is_empty() {
            return (0.0, 0.0, 0.0);
        }

        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);

        let avg = sorted.iter().sum::<f64>() / sorted.len() as f64;
        let mid = sorted.len() / 2;
        let median = if sorted.len() % 2 == 0 {
            (sorted[mid - 1] + sorted[mid]) / 2.0
        } else {
            sorted[mid]
        };
        let p90_idx = ((sorted.len() - 1) as f64 * 0.9) as usize;
        let p90 = sorted[p90_idx.min(sorted.len() - 1)];

        (avg, median, p90)
    }
}

/// Extract metrics from a finished scenario.
pub fn extract_metrics(outcome: &ScenarioOutcome) -> SimulationResult {
    let telemetry = &outcome.telemetry;
    let fleet = outcome.fleet();
    let lengths: Vec<f64> = telemetry
        .completed_rides
        .iter()
        .map(|ride| ride.length)
        .collect();
    let (avg_ride_length, median_ride_length, p90_ride_length) =
        SimulationResult::calculate_stats(&lengths);

    SimulationResult {
        stations: outcome.final_counts.len(),
        total_docks: fleet.docks,
        docked_bikes: fleet.docked(),
        requests: telemetry.requests,
        checkouts: telemetry.checkouts,
        rejections: telemetry.rejections,
        substitutions: telemetry.substitutions,
        service_rate: telemetry.service_rate(),
        substitution_rate: telemetry.substitution_rate(),
        reservation_attempts: telemetry.reservation_attempts,
        reservations_granted: telemetry.reservations_granted,
        reservation_grant_rate: telemetry.reservation_grant_rate(),
        reservations_outstanding: fleet.sreserved + fleet.ereserved,
        returns: telemetry.returns,
        deferred_returns: telemetry.deferred_returns,
        rides_in_progress: telemetry.rides_in_progress,
        completed_rides: telemetry.completed_rides.len(),
        avg_ride_length,
        median_ride_length,
        p90_ride_length,
        kiosk_payload_mb: telemetry.kiosk_payload_mb(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bike_core::ride::Ride;
    use bike_core::station::StationCounts;
    use bike_core::telemetry::ScenarioTelemetry;

    #[test]
    fn stats_of_empty_slice_are_zero() {
        assert_eq!(SimulationResult::calculate_stats(&[]), (0.0, 0.0, 0.0));
    }

    #[test]
    fn stats_even_and_odd() {
        let (avg, median, p90) = SimulationResult::calculate_stats(&[4.0, 1.0, 3.0, 2.0]);
        assert_eq!(avg, 2.5);
        assert_eq!(median, 2.5);
        assert_eq!(p90, 3.0);

        let (_, median, p90) = SimulationResult::calculate_stats(&[5.0, 1.0, 3.0]);
        assert_eq!(median, 3.0);
        assert_eq!(p90, 3.0);
    }

    #[test]
    fn extract_from_outcome() {
        let outcome = ScenarioOutcome {
            telemetry: ScenarioTelemetry {
                requests: 10,
                checkouts: 8,
                rejections: 2,
                substitutions: 2,
                reservation_attempts: 4,
                reservations_granted: 1,
                returns: 6,
                rides_in_progress: 2,
                completed_rides: vec![
                    Ride::new(0, 1, 0.0, 10.0),
                    Ride::new(1, 0, 3.0, 20.0),
                ],
                ..Default::default()
            },
            final_counts: vec![
                StationCounts {
                    num_docks: 10,
                    num_sbikes: 3,
                    num_ebikes: 1,
                    res_limit: 2,
                    n_sreserved: 1,
                    n_ereserved: 0,
                },
                StationCounts {
                    num_docks: 5,
                    num_sbikes: 2,
                    ..Default::default()
                },
            ],
            steps: 30,
        };

        let result = extract_metrics(&outcome);
        assert_eq!(result.stations, 2);
        assert_eq!(result.total_docks, 15);
        assert_eq!(result.docked_bikes, 6);
        assert_eq!(result.service_rate, 0.8);
        assert_eq!(result.substitution_rate, 0.25);
        assert_eq!(result.reservation_grant_rate, 0.25);
        assert_eq!(result.reservations_outstanding, 1);
        assert_eq!(result.completed_rides, 2);
        assert_eq!(result.avg_ride_length, 15.0);
        assert_eq!(result.median_ride_length, 15.0);
        assert_eq!(result.p90_ride_length, 10.0);
        assert_eq!(result.kiosk_payload_mb, 0);
    }
}
