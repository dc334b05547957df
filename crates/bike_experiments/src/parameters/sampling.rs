use rand::rngs::StdRng;
use rand::seq::index;
use rand::SeedableRng;

use super::combinations::ParameterVariations;
use super::{ParameterSet, ParameterSpace, SEED_STRIDE};

impl ParameterSpace {
    /// Generate random parameter sets (Monte Carlo sampling).
    ///
    /// Samples `count` distinct combinations from the defined space. When the
    /// space holds fewer than `count` combinations, every combination is
    /// returned once, in random order.
    pub fn sample_random(&self, count: usize, seed: u64) -> Vec<ParameterSet> {
        let combinations = ParameterVariations::from_space(self).combinations();
        let target = count.min(combinations.len());
        let mut rng = StdRng::seed_from_u64(seed);

        index::sample(&mut rng, combinations.len(), target)
            .into_iter()
            .enumerate()
            .map(|(sample_index, combo_index)| {
                let seed_value = seed
                    .wrapping_add(sample_index as u64)
                    .wrapping_mul(SEED_STRIDE);
                ParameterSet::new(
                    self.apply(&combinations[combo_index]),
                    format!("random_{sample_index}"),
                    0,
                    seed_value,
                )
            })
            .collect()
    }
}
