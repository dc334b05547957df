//! Scenario runner: advances the clock one step at a time and drives station
//! operations.
//!
//! Each step first docks every ride that ends at or before the step, then
//! samples new ride requests at every station. A rider who finds the
//! destination full waits and retries on the next step; no rerouting happens.

use std::collections::HashMap;

use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::bike::BikeType;
use crate::clock::{Event, EventKind, SimulationClock};
use crate::distributions::sample_norm_int;
use crate::error::ScenarioError;
use crate::kiosk::KioskUplink;
use crate::ride::{Ride, StationId};
use crate::scenario::{build_stations, choose_bike_type, random_destination, ScenarioParams};
use crate::station::{Station, StationCounts};
use crate::telemetry::{FleetCounts, ScenarioTelemetry};

/// Offset applied to the scenario seed for the kiosk RNG, so enabling the
/// uplink leaves the demand stream untouched.
const KIOSK_SEED_OFFSET: u64 = 0x6b69_6f73_6b;

/// Result of a finished run.
#[derive(Debug, Clone)]
pub struct ScenarioOutcome {
    pub telemetry: ScenarioTelemetry,
    pub final_counts: Vec<StationCounts>,
    pub steps: u64,
}

impl ScenarioOutcome {
    pub fn fleet(&self) -> FleetCounts {
        self.final_counts.iter().collect()
    }
}

/// Step-by-step driver over a fixed set of stations.
#[derive(Debug)]
pub struct ScenarioRunner {
    params: ScenarioParams,
    stations: Vec<Station>,
    clock: SimulationClock,
    rng: StdRng,
    kiosk: Option<KioskUplink<StdRng>>,
    in_flight: HashMap<u64, Ride>,
    next_rider: u64,
    step: u64,
    telemetry: ScenarioTelemetry,
}

impl ScenarioRunner {
    pub fn new(params: ScenarioParams) -> Result<Self, ScenarioError> {
        let stations = build_stations(&params)?;
        let seed = params.seed.unwrap_or(0);
        let kiosk = params
            .kiosk_uplink
            .then(|| KioskUplink::new(StdRng::seed_from_u64(seed.wrapping_add(KIOSK_SEED_OFFSET))));
        Ok(Self {
            params,
            stations,
            clock: SimulationClock::default(),
            rng: StdRng::seed_from_u64(seed),
            kiosk,
            in_flight: HashMap::new(),
            next_rider: 0,
            step: 0,
            telemetry: ScenarioTelemetry::default(),
        })
    }

    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    pub fn telemetry(&self) -> &ScenarioTelemetry {
        &self.telemetry
    }

    pub fn current_step(&self) -> u64 {
        self.step
    }

    /// Riders currently travelling (including those waiting for a free dock).
    pub fn riders_in_flight(&self) -> usize {
        self.clock.len()
    }

    pub fn is_finished(&self) -> bool {
        self.step >= self.params.duration_steps
    }

    /// Run one step. Returns `false` once the configured duration is reached.
    pub fn step(&mut self) -> Result<bool, ScenarioError> {
        if self.is_finished() {
            return Ok(false);
        }
        let now = self.step;
        self.clock.advance_to(now);
        self.dock_arrivals(now);
        self.sample_requests(now)?;
        self.step += 1;
        Ok(true)
    }

    /// Run the remaining steps and collect the outcome.
    pub fn run(mut self) -> Result<ScenarioOutcome, ScenarioError> {
        info!(
            "running scenario: {} stations, {} steps, seed {:?}",
            self.stations.len(),
            self.params.duration_steps,
            self.params.seed
        );
        while self.step()? {}
        Ok(self.finish())
    }

    /// Stop here and collect the outcome; riders still travelling are counted
    /// as in progress.
    pub fn finish(mut self) -> ScenarioOutcome {
        self.telemetry.rides_in_progress = self.clock.len() as u64;
        if let Some(kiosk) = self.kiosk.as_mut() {
            self.telemetry.kiosk_transfers = kiosk.take_transfers();
        }
        let telemetry = self.telemetry;
        info!(
            "scenario finished after {} steps: {} requests, {} check-outs, {} rejections, {} rides completed",
            self.step,
            telemetry.requests,
            telemetry.checkouts,
            telemetry.rejections,
            telemetry.completed_rides.len()
        );
        ScenarioOutcome {
            telemetry,
            final_counts: self.stations.iter().map(Station::counts).collect(),
            steps: self.step,
        }
    }

    fn dock_arrivals(&mut self, now: u64) {
        while let Some(event) = self.clock.pop_due(now) {
            let EventKind::RideEnds {
                rider,
                destination,
                bike_type,
            } = event.kind;
            let station = &mut self.stations[destination.0];
            let docked = match self.kiosk.as_mut() {
                Some(kiosk) => station.return_bike_with(bike_type, kiosk),
                None => station.return_bike(bike_type),
            };

            if docked {
                self.telemetry.returns += 1;
                if let Some(ride) = self.in_flight.remove(&rider) {
                    self.telemetry.completed_rides.push(ride);
                }
            } else {
                self.telemetry.deferred_returns += 1;
                debug!(
                    "step {now}: station {destination} full, rider {rider} waits with {bike_type}"
                );
                self.clock.schedule(Event {
                    timestamp: now + 1,
                    kind: event.kind,
                });
            }
        }
    }

    fn sample_requests(&mut self, now: u64) -> Result<(), ScenarioError> {
        let demand = self.params.demand;
        for index in 0..self.stations.len() {
            let requests = sample_norm_int(&mut self.rng, demand.mean, demand.std, Some(0))?;
            for _ in 0..requests {
                self.handle_request(StationId(index), now)?;
            }
        }
        Ok(())
    }

    fn handle_request(&mut self, start: StationId, now: u64) -> Result<(), ScenarioError> {
        let demand = self.params.demand;
        self.telemetry.requests += 1;
        let requested = choose_bike_type(&mut self.rng, demand.ebike_share);
        let station = &mut self.stations[start.0];

        if self.rng.gen_bool(demand.reserve_probability) {
            self.telemetry.reservation_attempts += 1;
            if station.reserve_bike(requested) {
                self.telemetry.reservations_granted += 1;
            }
        }

        let Some(taken) = station.take_bike(requested, demand.allow_ebike_substitution) else {
            self.telemetry.rejections += 1;
            return Ok(());
        };
        self.telemetry.checkouts += 1;
        if taken != requested {
            self.telemetry.substitutions += 1;
        }

        let destination = random_destination(&mut self.rng, self.stations.len());
        let length = self.sample_ride_length()?;
        self.dispatch(start, destination, taken, now, length);
        Ok(())
    }

    fn sample_ride_length(&mut self) -> Result<u64, ScenarioError> {
        let config = self.params.ride_length;
        let steps = sample_norm_int(&mut self.rng, config.mean, config.std, Some(config.min_steps))?;
        Ok(steps.max(0) as u64)
    }

    fn dispatch(
        &mut self,
        start: StationId,
        destination: StationId,
        bike_type: BikeType,
        now: u64,
        length: u64,
    ) {
        let rider = self.next_rider;
        self.next_rider += 1;
        self.in_flight
            .insert(rider, Ride::new(start, destination, now as f64, length as f64));
        self.clock.schedule(Event {
            timestamp: now + length,
            kind: EventKind::RideEnds {
                rider,
                destination,
                bike_type,
            },
        });
    }
}

/// Build and run a scenario to completion.
pub fn run_scenario(params: ScenarioParams) -> Result<ScenarioOutcome, ScenarioError> {
    ScenarioRunner::new(params)?.run()
}
