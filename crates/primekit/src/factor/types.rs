//! Data model for factorization results.

/// A prime-power factor: `base ^ exponent` with `exponent >= 1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PrimeFactor {
    pub base: i64,
    pub exponent: u32,
}

/// A canonical factorization: strictly ascending prime bases, no duplicate
/// bases, product reconstructing the original value.
///
/// Only the engine constructs these, which is what keeps the invariants
/// (and the unchecked arithmetic in [`value`](Self::value)) sound.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Factorization {
    factors: Vec<PrimeFactor>,
}

impl Factorization {
    pub(crate) fn new(mut factors: Vec<PrimeFactor>) -> Self {
        factors.sort_by_key(|factor| factor.base);
        Self { factors }
    }

    pub fn factors(&self) -> &[PrimeFactor] {
        &self.factors
    }

    /// The `(base, exponent)` pairs in ascending base order.
    pub fn into_pairs(self) -> Vec<(i64, u32)> {
        self.factors
            .into_iter()
            .map(|factor| (factor.base, factor.exponent))
            .collect()
    }

    /// Reconstructs the factorized value.
    pub fn value(&self) -> i64 {
        self.factors
            .iter()
            .fold(1i64, |product, factor| {
                product * factor.base.pow(factor.exponent)
            })
    }

    /// d(n): the count of divisors is the product of all exponents each
    /// increased by one.
    pub fn divisor_count(&self) -> u32 {
        self.factors
            .iter()
            .fold(1u32, |count, factor| count * (factor.exponent + 1))
    }
}
