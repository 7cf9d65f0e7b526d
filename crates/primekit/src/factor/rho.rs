//! Pollard's Rho cycle search for a non-trivial factor.

use crate::arith::gcd_u64;

/// Offsets tried for the pseudo-random walk, in order. Exhausting the budget
/// on a composite remainder is recovered by trial division upstream.
pub(crate) const OFFSET_BUDGET: std::ops::Range<u64> = 1..20;

/// Next element of the walk `x <- (x^2 + offset) mod modulus`.
#[inline]
fn next_in_walk(x: u64, offset: u64, modulus: u64) -> u64 {
    ((x as u128 * x as u128 + offset as u128) % modulus as u128) as u64
}

/// Floyd cycle detection over the walk at two speeds; the first non-trivial
/// GCD between the streams is a candidate factor.
///
/// Returns `None` when the cycle closes on `value` itself (the walk found no
/// proper divisor for this offset). `value` must be composite and odd-capable
/// of factoring; primes make the search spin to the trivial answer.
pub(crate) fn find_factor(value: u64, offset: u64) -> Option<u64> {
    let mut tortoise: u64 = 2;
    let mut hare: u64 = 2;
    loop {
        tortoise = next_in_walk(tortoise, offset, value);
        hare = next_in_walk(next_in_walk(hare, offset, value), offset, value);
        let candidate = gcd_u64(tortoise.abs_diff(hare), value);
        if candidate != 1 {
            // gcd hit the full value: cycle exhausted without a proper factor.
            return (candidate != value).then_some(candidate);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_a_proper_factor_of_semiprimes() {
        for &(value, p, q) in &[(91u64, 7u64, 13u64), (8_051, 83, 97), (10_403, 101, 103)] {
            let mut found = None;
            for offset in OFFSET_BUDGET {
                if let Some(factor) = find_factor(value, offset) {
                    found = Some(factor);
                    break;
                }
            }
            let factor = found.expect("some offset must find a factor");
            assert!(factor == p || factor == q, "bad factor {factor} of {value}");
        }
    }

    #[test]
    fn walk_stays_in_range_near_u64_boundary() {
        // One step with the largest representable inputs must not wrap.
        let modulus = u64::MAX;
        let x = modulus - 1;
        let stepped = next_in_walk(x, 19, modulus);
        assert!(stepped < modulus);
    }
}
