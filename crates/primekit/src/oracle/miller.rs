//! Deterministic Miller–Rabin primality test for 64-bit values.

use crate::arith::pow_mod;

/// Witness sets by magnitude threshold, per the published deterministic
/// bounds. Every bracket is exact for values below its threshold; the last
/// set (first twelve primes) covers the whole unsigned 64-bit range.
const WITNESS_LADDER: [(u64, &[u64]); 4] = [
    (2_047, &[2]),
    (1_373_653, &[2, 3]),
    (9_080_191, &[31, 73]),
    (4_759_123_141, &[2, 7, 61]),
];

const WITNESSES_FULL_RANGE: &[u64] = &[2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37];

/// Determines whether `value` is prime, without consulting the prime table.
///
/// Valid for the entire 64-bit signed range; negative values, zero and one
/// are never prime.
pub fn is_prime(value: i64) -> bool {
    // Obvious non-primes below 2 or even; special case 2 itself.
    if value <= 2 || value % 2 == 0 {
        return value == 2;
    }
    // Remaining odd values up to 7 are all prime.
    if value <= 7 {
        return true;
    }
    if value % 3 == 0 {
        return false;
    }

    let value = value as u64;
    // Decompose value - 1 (even, as value is odd) into 2^twos * factor.
    let mut factor = value >> 1;
    let mut twos = 1u32;
    while factor & 1 == 0 {
        factor >>= 1;
        twos += 1;
    }

    let witnesses = WITNESS_LADDER
        .iter()
        .find(|&&(threshold, _)| value < threshold)
        .map(|&(_, witnesses)| witnesses)
        .unwrap_or(WITNESSES_FULL_RANGE);

    witnesses
        .iter()
        .all(|&witness| witness_passes(value, twos, factor, witness))
}

/// One Miller–Rabin round: false proves `value` composite, true means the
/// witness found no contradiction.
fn witness_passes(value: u64, twos: u32, factor: u64, witness: u64) -> bool {
    // Iteration zero is witness^factor mod value.
    let mut power = pow_mod(witness, factor, value);
    if power == 1 || power == value - 1 {
        return true;
    }
    // Square up to twos - 1 more times; reaching value - 1 on any step means
    // the witness cannot prove compositeness.
    for _ in 0..twos - 1 {
        power = ((power as u128 * power as u128) % value as u128) as u64;
        if power == 1 {
            return false;
        }
        if power == value - 1 {
            return true;
        }
    }
    false
}
