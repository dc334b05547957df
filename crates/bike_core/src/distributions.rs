//! Random sampling helpers used to generate demand.
//!
//! All helpers take the RNG as an argument so a seeded generator reproduces
//! the same sequence.

use std::ops::Range;

use rand::Rng;
use rand_distr::{Distribution, Normal};

use crate::error::SamplingError;

/// Default payload range in MB, `[45, 128_000)`.
pub const DEFAULT_PAYLOAD_MB: Range<u64> = 45..128_000;

/// Draw from `Normal(mean, std)` and round to the nearest integer.
///
/// Rounding adds 0.5 and truncates toward zero. When `floor` is given the
/// result is raised to at least `floor`; there is no upper bound.
pub fn sample_norm_int<R: Rng + ?Sized>(
    rng: &mut R,
    mean: f64,
    std: f64,
    floor: Option<i64>,
) -> Result<i64, SamplingError> {
    if !mean.is_finite() {
        return Err(SamplingError::InvalidNormal { mean, std });
    }
    let normal = Normal::new(mean, std).map_err(|_| SamplingError::InvalidNormal { mean, std })?;
    // `as` saturates at the i64 bounds.
    let value = (normal.sample(rng) + 0.5) as i64;
    Ok(match floor {
        Some(floor) => value.max(floor),
        None => value,
    })
}

/// Uniform payload size sampler over `[min_mb, max_mb)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PayloadSizeSampler {
    min_mb: u64,
    max_mb: u64,
}

impl Default for PayloadSizeSampler {
    fn default() -> Self {
        Self {
            min_mb: DEFAULT_PAYLOAD_MB.start,
            max_mb: DEFAULT_PAYLOAD_MB.end,
        }
    }
}

impl PayloadSizeSampler {
    pub fn new(min_mb: u64, max_mb: u64) -> Result<Self, SamplingError> {
        if min_mb >= max_mb {
            return Err(SamplingError::EmptyRange {
                min: min_mb,
                max: max_mb,
            });
        }
        Ok(Self { min_mb, max_mb })
    }

    pub fn range(&self) -> Range<u64> {
        self.min_mb..self.max_mb
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> u64 {
        rng.gen_range(self.min_mb..self.max_mb)
    }
}

/// Sample a payload size in MB from [`DEFAULT_PAYLOAD_MB`].
pub fn sample_payload_size_mb<R: Rng + ?Sized>(rng: &mut R) -> u64 {
    PayloadSizeSampler::default().sample(rng)
}
