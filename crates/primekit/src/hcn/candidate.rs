//! Exponent-vector candidates and their derived value/divisor count.

use crate::oracle::PrimeOracle;

/// A number in prime-exponent form: `exponents[i]` applies to the prime of
/// rank `i`, so `value = ∏ prime(i) ^ exponents[i]` and the divisor count is
/// `∏ (exponents[i] + 1)`.
///
/// Exponent vectors are kept non-increasing (the necessary form for a
/// smallest-value representative of a divisor count); the root entry `[0]`
/// represents the number one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HighComposite {
    pub value: i64,
    pub divisor_count: u32,
    pub exponents: Vec<u32>,
}

impl HighComposite {
    /// Evaluate an exponent vector; `None` when the value escapes the 64-bit
    /// range, which excludes the candidate rather than failing the search.
    pub(crate) fn from_exponents(exponents: Vec<u32>, oracle: &PrimeOracle) -> Option<Self> {
        let mut value: i64 = 1;
        let mut divisor_count: u32 = 1;
        for (rank, &exponent) in exponents.iter().enumerate() {
            let prime = oracle.prime_at(rank as u64) as i64;
            value = value.checked_mul(prime.checked_pow(exponent)?)?;
            divisor_count = divisor_count.checked_mul(exponent + 1)?;
        }
        Some(Self {
            value,
            divisor_count,
            exponents,
        })
    }

    /// Right child: one more prime factor, at exponent one.
    pub(crate) fn right_child(&self, oracle: &PrimeOracle) -> Option<Self> {
        let mut exponents = self.exponents.clone();
        exponents.push(1);
        Self::from_exponents(exponents, oracle)
    }

    /// Left child: the last exponent incremented, rejected when it would
    /// break the non-increasing invariant.
    pub(crate) fn left_child(&self, oracle: &PrimeOracle) -> Option<Self> {
        let mut exponents = self.exponents.clone();
        let last = exponents.len() - 1;
        exponents[last] += 1;
        if last > 0 && exponents[last - 1] < exponents[last] {
            return None;
        }
        Self::from_exponents(exponents, oracle)
    }
}
