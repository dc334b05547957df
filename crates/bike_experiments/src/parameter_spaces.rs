//! Pre-defined parameter space configurations for experimentation.
//!
//! This module provides ready-to-use parameter space definitions that can be
//! easily selected for different types of experiments.

use crate::ParameterSpace;

pub fn comprehensive_space() -> ParameterSpace {
    ParameterSpace::grid()
        .res_limit(vec![0, 1, 2, 4, 8])
        .fleet_per_station(vec![6, 10, 14, 18])
        .ebike_share(vec![0.0, 0.2, 0.4])
        .demand_mean(vec![0.3, 0.6, 1.0])
        .reserve_probability(vec![0.0, 0.1, 0.3])
        .ebike_substitution(vec![false, true])
        .runs_per_point(3)
}

/// How the reservation ceiling trades off against walk-up service.
pub fn reservation_focused_space() -> ParameterSpace {
    ParameterSpace::grid()
        .res_limit(vec![0, 1, 2, 3, 4, 6, 8])
        .reserve_probability(vec![0.05, 0.1, 0.2, 0.4])
        .runs_per_point(5)
}

pub fn fleet_sizing_space() -> ParameterSpace {
    ParameterSpace::grid()
        .fleet_per_station(vec![4, 8, 12, 16, 20])
        .demand_mean(vec![0.3, 0.6, 0.9, 1.2])
        .runs_per_point(3)
}

/// Ebike mix with and without serving standard requests from ebikes.
pub fn ebike_mix_space() -> ParameterSpace {
    ParameterSpace::grid()
        .ebike_share(vec![0.1, 0.25, 0.5, 0.75])
        .ebike_substitution(vec![false, true])
        .runs_per_point(5)
}

pub fn minimal_space() -> ParameterSpace {
    ParameterSpace::grid()
        .res_limit(vec![0, 2])
        .ebike_substitution(vec![false, true])
}
