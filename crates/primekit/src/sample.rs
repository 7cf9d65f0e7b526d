//! Reproducible random composite streams for stress tests and benches.
//!
//! Purpose
//! - Provide composite values with a known factorization so the engine's
//!   strategies can be checked against ground truth at volume.
//! - Every sample carries a replay token; `regenerate` rebuilds the exact
//!   sample from the token without replaying the stream.

use std::fmt;
use std::sync::Arc;

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

use crate::factor::PrimeFactor;
use crate::oracle::PrimeOracle;

/// Error type for sample-stream construction.
#[derive(Debug)]
pub enum SampleError {
    InvalidParams { reason: String },
}

impl SampleError {
    fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidParams {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for SampleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParams { reason } => write!(f, "invalid sample params: {reason}"),
        }
    }
}

impl std::error::Error for SampleError {}

/// Parameters for the composite sampler.
#[derive(Clone, Copy, Debug)]
pub struct CompositeParams {
    /// Prime factors per value (with multiplicity), inclusive bounds.
    pub factors_min: usize,
    pub factors_max: usize,
    /// Primes are drawn from ranks `0..prime_rank_bound`.
    pub prime_rank_bound: u64,
    /// Products stay at or below this cap; a draw that would pass it stops
    /// multiplying early (the factor-count range is best effort).
    pub value_cap: i64,
}

impl Default for CompositeParams {
    fn default() -> Self {
        Self {
            factors_min: 2,
            factors_max: 6,
            prime_rank_bound: 300,
            value_cap: i64::MAX,
        }
    }
}

impl CompositeParams {
    fn validate(&self) -> Result<(), SampleError> {
        if self.factors_min < 1 {
            return Err(SampleError::invalid("need at least one factor"));
        }
        if self.factors_min > self.factors_max {
            return Err(SampleError::invalid("factors_min <= factors_max required"));
        }
        if self.prime_rank_bound == 0 {
            return Err(SampleError::invalid("need at least one prime rank"));
        }
        if self.value_cap < 4 {
            return Err(SampleError::invalid("value_cap must admit a composite"));
        }
        Ok(())
    }
}

/// Replay token storing the seed that regenerates the same sample.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SeedReplay {
    pub seed: u64,
}

/// A composite value with its ground-truth factorization and replay token.
#[derive(Clone, Debug)]
pub struct CompositeSample {
    pub value: i64,
    pub factors: Vec<PrimeFactor>,
    pub replay: SeedReplay,
}

/// Stream of random composites over a shared prime oracle.
pub struct CompositeGenerator {
    params: CompositeParams,
    oracle: Arc<PrimeOracle>,
    master_rng: StdRng,
}

impl CompositeGenerator {
    pub fn new(
        params: CompositeParams,
        seed: u64,
        oracle: Arc<PrimeOracle>,
    ) -> Result<Self, SampleError> {
        params.validate()?;
        Ok(Self {
            params,
            oracle,
            master_rng: StdRng::seed_from_u64(seed),
        })
    }

    pub fn params(&self) -> &CompositeParams {
        &self.params
    }

    /// Draw the next sample from the stream.
    pub fn generate_next(&mut self) -> CompositeSample {
        let seed = self.master_rng.next_u64();
        self.sample_from_seed(seed)
    }

    /// Rebuild the sample a token came from.
    pub fn regenerate(&self, replay: &SeedReplay) -> CompositeSample {
        self.sample_from_seed(replay.seed)
    }

    fn sample_from_seed(&self, seed: u64) -> CompositeSample {
        let mut rng = StdRng::seed_from_u64(seed);
        let count = rng.gen_range(self.params.factors_min..=self.params.factors_max);
        let mut value: i64 = 1;
        let mut drawn: Vec<u64> = Vec::with_capacity(count);
        for _ in 0..count {
            let rank = rng.gen_range(0..self.params.prime_rank_bound);
            let prime = self.oracle.prime_at(rank);
            match value.checked_mul(prime as i64) {
                Some(next) if next <= self.params.value_cap => {
                    value = next;
                    drawn.push(prime);
                }
                // Cap reached: keep what we have rather than discard the draw.
                _ => break,
            }
        }
        if drawn.is_empty() {
            // Every draw bust the cap; the smallest semiprime always fits.
            value = 4;
            drawn = vec![2, 2];
        }
        drawn.sort_unstable();
        let mut factors: Vec<PrimeFactor> = Vec::new();
        for prime in drawn {
            match factors.last_mut() {
                Some(last) if last.base == prime as i64 => last.exponent += 1,
                _ => factors.push(PrimeFactor {
                    base: prime as i64,
                    exponent: 1,
                }),
            }
        }
        CompositeSample {
            value,
            factors,
            replay: SeedReplay { seed },
        }
    }
}
