use super::ParameterSpace;

/// Represents a single parameter combination.
#[derive(Debug, Clone, PartialEq)]
pub(super) struct ParameterCombination {
    pub(super) res_limit: u32,
    /// `None` keeps the base station inventories.
    pub(super) fleet_per_station: Option<u32>,
    pub(super) ebike_share: f64,
    pub(super) demand_mean: f64,
    pub(super) reserve_probability: f64,
    pub(super) allow_ebike_substitution: bool,
}

/// Holds all parameter variations to explore, with base values filled in for
/// empty dimensions.
pub(super) struct ParameterVariations {
    pub(super) res_limits: Vec<u32>,
    pub(super) fleet_per_station: Vec<Option<u32>>,
    pub(super) ebike_shares: Vec<f64>,
    pub(super) demand_means: Vec<f64>,
    pub(super) reserve_probabilities: Vec<f64>,
    pub(super) ebike_substitution: Vec<bool>,
}

fn or_base<T: Clone>(values: &[T], base: T) -> Vec<T> {
    if values.is_empty() {
        vec![base]
    } else {
        values.to_vec()
    }
}

impl ParameterVariations {
    pub(super) fn from_space(space: &ParameterSpace) -> Self {
        let base = &space.base;
        let base_res_limit = base.stations.first().map(|s| s.res_limit).unwrap_or(0);
        Self {
            res_limits: or_base(&space.res_limits, base_res_limit),
            fleet_per_station: if space.fleet_per_station.is_empty() {
                vec![None]
            } else {
                space.fleet_per_station.iter().copied().map(Some).collect()
            },
            ebike_shares: or_base(&space.ebike_shares, base.demand.ebike_share),
            demand_means: or_base(&space.demand_means, base.demand.mean),
            reserve_probabilities: or_base(
                &space.reserve_probabilities,
                base.demand.reserve_probability,
            ),
            ebike_substitution: or_base(
                &space.ebike_substitution,
                base.demand.allow_ebike_substitution,
            ),
        }
    }

    /// Number of combinations in the Cartesian product.
    pub(super) fn len(&self) -> usize {
        self.res_limits.len()
            * self.fleet_per_station.len()
            * self.ebike_shares.len()
            * self.demand_means.len()
            * self.reserve_probabilities.len()
            * self.ebike_substitution.len()
    }

    /// Generate all combinations using Cartesian product.
    pub(super) fn combinations(&self) -> Vec<ParameterCombination> {
        let mut combos = Vec::with_capacity(self.len());
        for &res_limit in &self.res_limits {
            for &fleet_per_station in &self.fleet_per_station {
                for &ebike_share in &self.ebike_shares {
                    for &demand_mean in &self.demand_means {
                        for &reserve_probability in &self.reserve_probabilities {
                            for &allow_ebike_substitution in &self.ebike_substitution {
                                combos.push(ParameterCombination {
                                    res_limit,
                                    fleet_per_station,
                                    ebike_share,
                                    demand_mean,
                                    reserve_probability,
                                    allow_ebike_substitution,
                                });
                            }
                        }
                    }
                }
            }
        }
        combos
    }
}
