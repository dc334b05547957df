use bike_core::ride::Ride;
use serde::Serialize;

use crate::metrics::SimulationResult;
use crate::parameters::ParameterSet;

pub(crate) fn export_to_csv_impl(
    results: &[SimulationResult],
    parameter_sets: &[ParameterSet],
    file: std::fs::File,
) -> Result<(), Box<dyn std::error::Error>> {
    if results.len() != parameter_sets.len() {
        return Err(format!(
            "Results length ({}) doesn't match parameter_sets length ({})",
            results.len(),
            parameter_sets.len()
        )
        .into());
    }

    let mut wtr = csv::Writer::from_writer(file);

    wtr.write_record([
        "experiment_id",
        "run_id",
        "seed",
        "res_limit",
        "fleet_per_station",
        "ebike_share",
        "demand_mean",
        "demand_std",
        "reserve_probability",
        "allow_ebike_substitution",
        "duration_steps",
        "kiosk_uplink",
        "stations",
        "total_docks",
        "docked_bikes",
        "requests",
        "checkouts",
        "rejections",
        "substitutions",
        "service_rate",
        "substitution_rate",
        "reservation_attempts",
        "reservations_granted",
        "reservation_grant_rate",
        "reservations_outstanding",
        "returns",
        "deferred_returns",
        "rides_in_progress",
        "completed_rides",
        "avg_ride_length",
        "median_ride_length",
        "p90_ride_length",
        "kiosk_payload_mb",
    ])?;

    for (result, param_set) in results.iter().zip(parameter_sets.iter()) {
        let params = &param_set.params;
        let demand = &params.demand;

        wtr.write_record([
            &param_set.experiment_id,
            &param_set.run_id.to_string(),
            &param_set.seed.to_string(),
            &param_set
                .res_limit()
                .map(|r| r.to_string())
                .unwrap_or_default(),
            &param_set
                .fleet_per_station()
                .map(|f| f.to_string())
                .unwrap_or_default(),
            &demand.ebike_share.to_string(),
            &demand.mean.to_string(),
            &demand.std.to_string(),
            &demand.reserve_probability.to_string(),
            &demand.allow_ebike_substitution.to_string(),
            &params.duration_steps.to_string(),
            &params.kiosk_uplink.to_string(),
            &result.stations.to_string(),
            &result.total_docks.to_string(),
            &result.docked_bikes.to_string(),
            &result.requests.to_string(),
            &result.checkouts.to_string(),
            &result.rejections.to_string(),
            &result.substitutions.to_string(),
            &result.service_rate.to_string(),
            &result.substitution_rate.to_string(),
            &result.reservation_attempts.to_string(),
            &result.reservations_granted.to_string(),
            &result.reservation_grant_rate.to_string(),
            &result.reservations_outstanding.to_string(),
            &result.returns.to_string(),
            &result.deferred_returns.to_string(),
            &result.rides_in_progress.to_string(),
            &result.completed_rides.to_string(),
            &result.avg_ride_length.to_string(),
            &result.median_ride_length.to_string(),
            &result.p90_ride_length.to_string(),
            &result.kiosk_payload_mb.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

#[derive(Serialize)]
struct RideRow {
    start: usize,
    destination: usize,
    start_time: f64,
    length: f64,
    end_time: f64,
}

impl From<&Ride> for RideRow {
    fn from(ride: &Ride) -> Self {
        Self {
            start: ride.start.0,
            destination: ride.destination.0,
            start_time: ride.start_time,
            length: ride.length,
            end_time: ride.end_time(),
        }
    }
}

pub(crate) fn export_rides_to_csv_impl(
    rides: &[Ride],
    file: std::fs::File,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut wtr = csv::Writer::from_writer(file);
    for ride in rides {
        wtr.serialize(RideRow::from(ride))?;
    }
    wtr.flush()?;
    Ok(())
}
