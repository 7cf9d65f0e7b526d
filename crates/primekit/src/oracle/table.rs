//! Append-only prime table with lazy trial-division growth.

use std::sync::{PoisonError, RwLock};

use crate::arith::isqrt;
use crate::error::DomainError;

/// Incrementally discovers and caches ascending prime numbers.
///
/// The table is strictly increasing and append-only: extending it never
/// invalidates previously returned values. Share one oracle per process
/// (behind an `Arc`) to keep the compute-once-reuse-forever behavior.
///
/// This oracle is not meant to discover large primes; use [`is_prime`] for
/// arbitrary values in the 64-bit range.
///
/// [`is_prime`]: super::is_prime
pub struct PrimeOracle {
    table: RwLock<Vec<u64>>,
}

impl PrimeOracle {
    pub fn new() -> Self {
        Self {
            table: RwLock::new(vec![2, 3, 5, 7, 11, 13]),
        }
    }

    /// The prime at zero-based `rank`, extending the table if necessary.
    ///
    /// Never fails for representable ranks; extension cost grows with `rank`
    /// because each new prime is vetted by trial division against all known
    /// primes up to its square root.
    pub fn prime_at(&self, rank: u64) -> u64 {
        let rank = rank as usize;
        {
            let table = self.table.read().unwrap_or_else(PoisonError::into_inner);
            if rank < table.len() {
                return table[rank];
            }
        }
        let mut table = self.table.write().unwrap_or_else(PoisonError::into_inner);
        while table.len() <= rank {
            let next = Self::next_prime(&table);
            table.push(next);
        }
        table[rank]
    }

    /// Count of primes discovered so far.
    pub fn discovered(&self) -> usize {
        self.table
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Given the table of primes found so far, find the next prime above it.
    fn next_prime(table: &[u64]) -> u64 {
        // Skip by two: candidates above the seeded table are never even.
        let mut candidate = table[table.len() - 1] + 2;
        while !Self::passes_trial_division(candidate, table) {
            candidate += 2;
        }
        candidate
    }

    /// Trial division of an odd candidate by the known primes.
    ///
    /// A composite must have a prime factor at or below its square root, and
    /// the table always covers that range for the next odd candidate.
    fn passes_trial_division(candidate: u64, table: &[u64]) -> bool {
        let max_test = isqrt(candidate);
        // Start at rank 1: odd candidates never have 2 as a factor.
        for &prime in &table[1..] {
            if prime > max_test {
                break;
            }
            if candidate % prime == 0 {
                return false;
            }
        }
        true
    }

    /// The largest prime factor of `value`.
    ///
    /// Divides out primes in ascending order, stopping once the remaining
    /// quotient drops below the square of the next candidate prime (the
    /// quotient is then itself prime).
    pub fn largest_prime_factor(&self, value: i64) -> Result<i64, DomainError> {
        if value < 2 {
            return Err(DomainError::new(format!(
                "no prime factor exists for {value}: input must be at least 2"
            )));
        }
        let mut quotient = value as u64;
        let mut rank = 0u64;
        let mut largest = 0u64;
        while quotient > 1 {
            let prime = self.prime_at(rank);
            if quotient % prime == 0 {
                largest = prime;
                while quotient % prime == 0 {
                    quotient /= prime;
                }
            }
            if prime > isqrt(quotient) {
                // No divisor up to the square root: the quotient is prime.
                if quotient > 1 {
                    largest = quotient;
                }
                break;
            }
            rank += 1;
        }
        Ok(largest as i64)
    }

    /// The smallest number that every integer in `1..=limit` divides.
    ///
    /// For each prime ≤ `limit`, takes the highest power of it not exceeding
    /// `limit`; the product of those prime powers is the answer. Primes above
    /// √limit never form other quotients below the limit, so they enter at
    /// power one.
    pub fn smallest_common_multiple_up_to(&self, limit: i64) -> Result<i64, DomainError> {
        if limit < 1 {
            return Err(DomainError::new(format!(
                "smallest common multiple is defined for limits of at least 1, got {limit}"
            )));
        }
        let limit = limit as u64;
        let mut multiple: u64 = 1;
        let mut rank = 0u64;
        loop {
            let prime = self.prime_at(rank);
            if prime > limit {
                break;
            }
            let mut power = prime;
            while let Some(next) = power.checked_mul(prime) {
                if next > limit {
                    break;
                }
                power = next;
            }
            multiple = multiple
                .checked_mul(power)
                .filter(|&m| m <= i64::MAX as u64)
                .ok_or_else(|| {
                    DomainError::new(format!(
                        "smallest common multiple up to {limit} exceeds the 64-bit range"
                    ))
                })?;
            rank += 1;
        }
        Ok(multiple as i64)
    }
}

impl Default for PrimeOracle {
    fn default() -> Self {
        Self::new()
    }
}
