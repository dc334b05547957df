//! Parameter variation framework for exploring station configurations.
//!
//! This module provides tools for defining parameter spaces and generating
//! parameter sets for parallel experimentation. Supports grid search and
//! random sampling strategies.

use bike_core::scenario::{ScenarioParams, StationConfig};

mod combinations;
mod sampling;

use combinations::{ParameterCombination, ParameterVariations};

/// Multiplier used to spread per-experiment seeds.
const SEED_STRIDE: u64 = 0x9e37_79b9;

/// A single parameter configuration for a simulation run.
///
/// Wraps `ScenarioParams` with additional experiment metadata for tracking
/// and reproducibility.
#[derive(Debug, Clone)]
pub struct ParameterSet {
    /// Base scenario parameters.
    pub params: ScenarioParams,
    /// Experiment ID shared by every run of the same parameter combination.
    pub experiment_id: String,
    /// Run ID within the experiment (for multiple runs with same params).
    pub run_id: usize,
    /// Seed used for this run (ensures reproducibility).
    pub seed: u64,
}

impl ParameterSet {
    pub fn new(params: ScenarioParams, experiment_id: String, run_id: usize, seed: u64) -> Self {
        Self {
            params,
            experiment_id,
            run_id,
            seed,
        }
    }

    /// Get the scenario params with seed applied.
    pub fn scenario_params(&self) -> ScenarioParams {
        self.params.clone().with_seed(self.seed)
    }

    /// Reservation ceiling of the first station (all stations share it in generated sets).
    pub fn res_limit(&self) -> Option<u32> {
        self.params.stations.first().map(|s| s.res_limit)
    }

    /// Docked bikes per station at the start (first station).
    pub fn fleet_per_station(&self) -> Option<u32> {
        self.params
            .stations
            .first()
            .map(|s| s.num_sbikes + s.num_ebikes)
    }
}

/// Defines a parameter space for exploration.
///
/// Every dimension left empty takes its value from the base parameters.
#[derive(Debug, Clone)]
pub struct ParameterSpace {
    base: ScenarioParams,
    res_limits: Vec<u32>,
    /// Bikes per station at the start of a run; split between kinds by `ebike_share`.
    fleet_per_station: Vec<u32>,
    ebike_shares: Vec<f64>,
    demand_means: Vec<f64>,
    reserve_probabilities: Vec<f64>,
    ebike_substitution: Vec<bool>,
    runs_per_point: usize,
}

impl Default for ParameterSpace {
    fn default() -> Self {
        Self::new()
    }
}

impl ParameterSpace {
    /// Create a new parameter space with default base parameters.
    pub fn new() -> Self {
        Self {
            base: ScenarioParams::default(),
            res_limits: vec![],
            fleet_per_station: vec![],
            ebike_shares: vec![],
            demand_means: vec![],
            reserve_probabilities: vec![],
            ebike_substitution: vec![],
            runs_per_point: 1,
        }
    }

    /// Create a new parameter space for grid search.
    pub fn grid() -> Self {
        Self::new()
    }

    pub fn res_limit(mut self, limits: Vec<u32>) -> Self {
        self.res_limits = limits;
        self
    }

    pub fn fleet_per_station(mut self, fleets: Vec<u32>) -> Self {
        self.fleet_per_station = fleets;
        self
    }

    pub fn ebike_share(mut self, shares: Vec<f64>) -> Self {
        self.ebike_shares = shares;
        self
    }

    pub fn demand_mean(mut self, means: Vec<f64>) -> Self {
        self.demand_means = means;
        self
    }

    pub fn reserve_probability(mut self, probabilities: Vec<f64>) -> Self {
        self.reserve_probabilities = probabilities;
        self
    }

    pub fn ebike_substitution(mut self, enabled: Vec<bool>) -> Self {
        self.ebike_substitution = enabled;
        self
    }

    /// Number of differently-seeded runs per parameter combination.
    pub fn runs_per_point(mut self, runs: usize) -> Self {
        self.runs_per_point = runs.max(1);
        self
    }

    /// Set base parameters (used as defaults).
    pub fn with_base(mut self, base: ScenarioParams) -> Self {
        self.base = base;
        self
    }

    /// Generate all parameter sets using grid search (Cartesian product).
    pub fn generate(&self) -> Vec<ParameterSet> {
        let variations = ParameterVariations::from_space(self);
        variations
            .combinations()
            .into_iter()
            .enumerate()
            .flat_map(|(experiment_index, combo)| {
                let params = self.apply(&combo);
                (0..self.runs_per_point).map(move |run_id| {
                    let seed = (experiment_index as u64)
                        .wrapping_mul(SEED_STRIDE)
                        .wrapping_add(run_id as u64);
                    ParameterSet::new(
                        params.clone(),
                        format!("exp_{experiment_index}"),
                        run_id,
                        seed,
                    )
                })
            })
            .collect()
    }

    /// Build scenario params for one combination.
    fn apply(&self, combo: &ParameterCombination) -> ScenarioParams {
        let mut params = self.base.clone();
        params.stations = params
            .stations
            .iter()
            .map(|station| {
                let mut station = *station;
                station.res_limit = combo.res_limit;
                if let Some(fleet) = combo.fleet_per_station {
                    resize_fleet(&mut station, fleet, combo.ebike_share);
                }
                station
            })
            .collect();
        params.demand.mean = combo.demand_mean;
        params.demand.ebike_share = combo.ebike_share;
        params.demand.reserve_probability = combo.reserve_probability;
        params.demand.allow_ebike_substitution = combo.allow_ebike_substitution;
        params
    }
}

/// Restock `station` with `fleet` bikes, `ebike_share` of them ebikes, growing
/// the dock count if the fleet would not fit.
fn resize_fleet(station: &mut StationConfig, fleet: u32, ebike_share: f64) {
    let ebikes = ((fleet as f64 * ebike_share) + 0.5) as u32;
    station.num_ebikes = ebikes.min(fleet);
    station.num_sbikes = fleet - station.num_ebikes;
    station.num_docks = station.num_docks.max(fleet);
}
