//! Telemetry / KPIs: counts station outcomes and records completed rides.

use serde::Serialize;

use crate::kiosk::KioskTransfer;
use crate::ride::Ride;
use crate::station::StationCounts;

/// Per-run counters collected by the scenario runner.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ScenarioTelemetry {
    /// Ride requests sampled across all stations.
    pub requests: u64,
    /// Requests that left with a bike.
    pub checkouts: u64,
    /// Check-outs where a standard request was served with an ebike.
    pub substitutions: u64,
    /// Requests turned away because no bike was available.
    pub rejections: u64,
    pub reservation_attempts: u64,
    pub reservations_granted: u64,
    /// Successful dockings.
    pub returns: u64,
    /// Docking attempts that found the destination full and were retried later.
    pub deferred_returns: u64,
    /// Riders still travelling when the run ended.
    pub rides_in_progress: u64,
    pub completed_rides: Vec<Ride>,
    pub kiosk_transfers: Vec<KioskTransfer>,
}

impl ScenarioTelemetry {
    /// Fraction of requests that were served; 0 when there were no requests.
    pub fn service_rate(&self) -> f64 {
        ratio(self.checkouts, self.requests)
    }

    pub fn substitution_rate(&self) -> f64 {
        ratio(self.substitutions, self.checkouts)
    }

    pub fn reservation_grant_rate(&self) -> f64 {
        ratio(self.reservations_granted, self.reservation_attempts)
    }

    /// Mean length of completed rides in steps; 0 when none completed.
    pub fn mean_ride_length(&self) -> f64 {
        if self.completed_rides.is_empty() {
            return 0.0;
        }
        let total: f64 = self.completed_rides.iter().map(|ride| ride.length).sum();
        total / self.completed_rides.len() as f64
    }

    pub fn kiosk_payload_mb(&self) -> u64 {
        self.kiosk_transfers.iter().map(|t| t.payload_mb).sum()
    }
}

fn ratio(numerator: u64, denominator: u64) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

/// Aggregated station inventory at a point in time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FleetCounts {
    pub docks: u64,
    pub sbikes: u64,
    pub ebikes: u64,
    pub sreserved: u64,
    pub ereserved: u64,
}

impl FleetCounts {
    pub fn add_station(&mut self, counts: &StationCounts) {
        self.docks += u64::from(counts.num_docks);
        self.sbikes += u64::from(counts.num_sbikes);
        self.ebikes += u64::from(counts.num_ebikes);
        self.sreserved += u64::from(counts.n_sreserved);
        self.ereserved += u64::from(counts.n_ereserved);
    }

    pub fn docked(&self) -> u64 {
        self.sbikes + self.ebikes
    }
}

impl<'a> FromIterator<&'a StationCounts> for FleetCounts {
    fn from_iter<I: IntoIterator<Item = &'a StationCounts>>(iter: I) -> Self {
        let mut fleet = FleetCounts::default();
        for counts in iter {
            fleet.add_station(counts);
        }
        fleet
    }
}
