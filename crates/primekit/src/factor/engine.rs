//! Factorization strategies over a shared prime oracle.

use std::sync::Arc;

use crate::arith::isqrt;
use crate::error::DomainError;
use crate::oracle::{is_prime, PrimeOracle};

use super::rho::{find_factor, OFFSET_BUDGET};
use super::types::{Factorization, PrimeFactor};

/// Trial division in the blended strategy stops after this many primes; any
/// remainder is handed to the Rho fallback.
const BLEND_PRIME_CAP: u64 = 99;

/// Decomposes positive integers into canonical prime-power factorizations.
pub struct FactorEngine {
    oracle: Arc<PrimeOracle>,
}

impl FactorEngine {
    pub fn new(oracle: Arc<PrimeOracle>) -> Self {
        Self { oracle }
    }

    pub fn oracle(&self) -> &PrimeOracle {
        &self.oracle
    }

    /// Exhaustive trial division by successive primes.
    ///
    /// Cost scales with the magnitude of the smallest prime factors;
    /// acceptable for values with no large prime factor.
    pub fn factorize(&self, value: i64) -> Result<Factorization, DomainError> {
        let remaining = ensure_factorable(value)?;
        let (factors, _) = self.trial_division(remaining, None);
        Ok(Factorization::new(factors))
    }

    /// Trial division capped at the first 99 primes, then Pollard's Rho on
    /// whatever remains.
    ///
    /// Bounds the worst-case trial-division cost while keeping common
    /// small-factor cases cheap.
    pub fn factorize_blended(&self, value: i64) -> Result<Factorization, DomainError> {
        let remaining = ensure_factorable(value)?;
        let (mut factors, remaining) = self.trial_division(remaining, Some(BLEND_PRIME_CAP));
        if remaining != 1 {
            factors.extend(self.rho_factors(remaining));
        }
        Ok(Factorization::new(factors))
    }

    /// Pollard's Rho from the start, without the small-prime pass.
    pub fn factorize_rho(&self, value: i64) -> Result<Factorization, DomainError> {
        let remaining = ensure_factorable(value)?;
        Ok(Factorization::new(self.rho_factors(remaining)))
    }

    /// d(n) of `value`, via the blended strategy.
    pub fn divisor_count_of(&self, value: i64) -> Result<u32, DomainError> {
        Ok(self.factorize_blended(value)?.divisor_count())
    }

    /// Divide out primes in rank order until the remainder is 1, the current
    /// prime passes the remainder's square root (the remainder is then a
    /// final prime factor), or the optional rank cap is hit.
    ///
    /// Returns the factors found and the unfactored remainder (1 when done).
    fn trial_division(&self, mut remaining: u64, cap: Option<u64>) -> (Vec<PrimeFactor>, u64) {
        let mut factors = Vec::new();
        let mut rank = 0u64;
        while remaining != 1 {
            if cap.is_some_and(|cap| rank >= cap) {
                break;
            }
            let prime = self.oracle.prime_at(rank);
            let mut exponent = 0u32;
            while remaining % prime == 0 {
                remaining /= prime;
                exponent += 1;
            }
            if exponent != 0 {
                factors.push(PrimeFactor {
                    base: prime as i64,
                    exponent,
                });
            } else if prime > isqrt(remaining) {
                // No divisor at or below the square root: remainder is prime.
                factors.push(PrimeFactor {
                    base: remaining as i64,
                    exponent: 1,
                });
                remaining = 1;
                break;
            }
            rank += 1;
        }
        (factors, remaining)
    }

    /// Rho-driven factorization of `remaining >= 2`.
    ///
    /// Walks the bounded offset budget; each discovered factor is refined to
    /// a prime, divided out with its full exponent, and the remainder is
    /// short-circuited as soon as it turns prime (Rho spins needlessly on
    /// primes). Exhausting the budget on a composite remainder falls back to
    /// exhaustive trial division.
    fn rho_factors(&self, mut remaining: u64) -> Vec<PrimeFactor> {
        let mut factors = Vec::new();
        if is_prime(remaining as i64) {
            factors.push(PrimeFactor {
                base: remaining as i64,
                exponent: 1,
            });
            return factors;
        }
        for offset in OFFSET_BUDGET {
            if remaining == 1 {
                break;
            }
            let Some(found) = find_factor(remaining, offset) else {
                continue;
            };
            let prime = self.refine_to_prime(found, offset);
            let mut exponent = 1u32;
            remaining /= prime;
            while remaining % prime == 0 {
                exponent += 1;
                remaining /= prime;
            }
            factors.push(PrimeFactor {
                base: prime as i64,
                exponent,
            });
            if remaining != 1 && is_prime(remaining as i64) {
                factors.push(PrimeFactor {
                    base: remaining as i64,
                    exponent: 1,
                });
                remaining = 1;
            }
        }
        if remaining != 1 {
            let (rest, _) = self.trial_division(remaining, None);
            factors.extend(rest);
        }
        factors
    }

    /// Reduce a non-trivial factor to one of its prime divisors.
    ///
    /// Iterative rather than recursive: each round replaces the candidate
    /// with a proper divisor of it, either by another Rho walk or, when the
    /// walk fails, by splitting off the smallest prime divisor directly.
    fn refine_to_prime(&self, mut factor: u64, offset: u64) -> u64 {
        while !is_prime(factor as i64) {
            if let Some(smaller) = find_factor(factor, offset) {
                factor = smaller;
            } else {
                let mut rank = 0u64;
                loop {
                    let prime = self.oracle.prime_at(rank);
                    if factor % prime == 0 {
                        factor /= prime;
                        break;
                    }
                    rank += 1;
                }
            }
        }
        factor
    }
}

/// Prime factorization is only applicable to integers greater than one.
fn ensure_factorable(value: i64) -> Result<u64, DomainError> {
    if value < 2 {
        return Err(DomainError::new(format!(
            "prime factorization is only applicable to integers greater than one, got {value}"
        )));
    }
    Ok(value as u64)
}
