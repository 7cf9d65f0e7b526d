//! Shared integer helpers: integral square root, binary GCD, and modular
//! exponentiation with 128-bit intermediates.

use crate::error::DomainError;

/// Integral part of the square root of `value`.
///
/// Frequently used as the upper search limit for primes and divisors: a
/// composite number always has a prime factor at or below its square root.
#[inline]
pub fn isqrt(value: u64) -> u64 {
    if value == 0 {
        return 0;
    }
    // f64 sqrt is exact up to 2^53; correct the last ulp by hand above that.
    let mut root = (value as f64).sqrt() as u64;
    while root.checked_mul(root).map_or(true, |sq| sq > value) {
        root -= 1;
    }
    while (root + 1).checked_mul(root + 1).map_or(false, |sq| sq <= value) {
        root += 1;
    }
    root
}

/// Greatest common divisor of two non-negative integers.
///
/// Negative operands are outside the domain and rejected.
pub fn gcd(left: i64, right: i64) -> Result<i64, DomainError> {
    if left < 0 || right < 0 {
        return Err(DomainError::new(format!(
            "gcd requires non-negative operands, got ({left}, {right})"
        )));
    }
    Ok(gcd_u64(left as u64, right as u64) as i64)
}

/// Binary (Stein) GCD.
pub(crate) fn gcd_u64(mut left: u64, mut right: u64) -> u64 {
    if left == right {
        return left;
    }
    // Special-case zeroes to ensure loop termination going forward.
    if left == 0 {
        return right;
    }
    if right == 0 {
        return left;
    }
    // Common factors of two, re-applied to the odd GCD at the end.
    let shift = (left | right).trailing_zeros();
    left >>= left.trailing_zeros();
    loop {
        // left is odd here; strip factors of two from right so both are odd.
        right >>= right.trailing_zeros();
        if left > right {
            std::mem::swap(&mut left, &mut right);
        }
        // The difference of two odd values is even; left stays odd.
        right -= left;
        if right == 0 {
            break;
        }
    }
    left << shift
}

/// `base ^ exponent mod modulus` by square-and-multiply.
///
/// Intermediates are widened to 128 bits so the squaring step cannot wrap for
/// any 64-bit modulus.
pub fn pow_mod(base: u64, exponent: u64, modulus: u64) -> u64 {
    if modulus == 1 {
        return 0;
    }
    if exponent == 0 {
        return 1;
    }
    let modulus = modulus as u128;
    // Decompose the exponent into powers of two: each 1 bit contributes one
    // multiplication by the running square.
    let mut square = base as u128 % modulus;
    let mut exponent = exponent;
    let mut result: u128 = 1;
    loop {
        if exponent & 1 == 1 {
            result = result * square % modulus;
            if exponent == 1 {
                break;
            }
        }
        exponent >>= 1;
        square = square * square % modulus;
    }
    result as u64
}
