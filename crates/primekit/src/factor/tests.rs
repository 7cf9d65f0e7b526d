use std::sync::Arc;

use proptest::prelude::*;

use super::*;
use crate::oracle::{is_prime, PrimeOracle};

fn engine() -> FactorEngine {
    FactorEngine::new(Arc::new(PrimeOracle::new()))
}

fn pairs(factorization: Factorization) -> Vec<(i64, u32)> {
    factorization.into_pairs()
}

#[test]
fn exhaustive_small_values() {
    let engine = engine();
    assert_eq!(pairs(engine.factorize(2).unwrap()), vec![(2, 1)]);
    assert_eq!(pairs(engine.factorize(3).unwrap()), vec![(3, 1)]);
    assert_eq!(pairs(engine.factorize(4).unwrap()), vec![(2, 2)]);
    assert_eq!(pairs(engine.factorize(12).unwrap()), vec![(2, 2), (3, 1)]);
    assert_eq!(pairs(engine.factorize(864).unwrap()), vec![(2, 5), (3, 3)]);
    assert_eq!(
        pairs(engine.factorize(900).unwrap()),
        vec![(2, 2), (3, 2), (5, 2)]
    );
}

#[test]
fn inputs_below_two_are_rejected_by_every_strategy() {
    let engine = engine();
    for value in [-5, 0, 1] {
        assert!(engine.factorize(value).is_err());
        assert!(engine.factorize_blended(value).is_err());
        assert!(engine.factorize_rho(value).is_err());
    }
}

#[test]
fn rho_handles_primes_composites_and_trial_fallback() {
    let engine = engine();
    // Primes short-circuit before any walk.
    assert_eq!(pairs(engine.factorize_rho(2).unwrap()), vec![(2, 1)]);
    assert_eq!(pairs(engine.factorize_rho(5).unwrap()), vec![(5, 1)]);
    // Small powers of two defeat every offset; the trial fallback covers them.
    assert_eq!(pairs(engine.factorize_rho(4).unwrap()), vec![(2, 2)]);
    assert_eq!(pairs(engine.factorize_rho(6).unwrap()), vec![(2, 1), (3, 1)]);
    assert_eq!(pairs(engine.factorize_rho(864).unwrap()), vec![(2, 5), (3, 3)]);
    assert_eq!(
        pairs(engine.factorize_rho(900).unwrap()),
        vec![(2, 2), (3, 2), (5, 2)]
    );
}

#[test]
fn blended_and_rho_agree_on_larger_fixtures() {
    let engine = engine();
    let fixtures: [(i64, &[(i64, u32)]); 4] = [
        (8_780_191, &[(7, 1), (41, 1), (30_593, 1)]),
        (
            720_720,
            &[(2, 4), (3, 2), (5, 1), (7, 1), (11, 1), (13, 1)],
        ),
        (
            2_147_483_670,
            &[(2, 1), (3, 1), (5, 1), (89, 1), (191, 1), (4_211, 1)],
        ),
        (2_147_483_671, &[(1_409, 1), (1_524_119, 1)]),
    ];
    for (value, expected) in fixtures {
        assert_eq!(
            pairs(engine.factorize_blended(value).unwrap()),
            expected,
            "blended disagrees for {value}"
        );
        assert_eq!(
            pairs(engine.factorize_rho(value).unwrap()),
            expected,
            "rho disagrees for {value}"
        );
    }
}

#[test]
fn blended_survives_a_large_prime_residue() {
    let engine = engine();
    // 600851475143 = 71 * 839 * 1471 * 6857; the last two factors sit past
    // the 99-prime trial cap.
    assert_eq!(
        pairs(engine.factorize_blended(600_851_475_143).unwrap()),
        vec![(71, 1), (839, 1), (1_471, 1), (6_857, 1)]
    );
    // Mersenne prime residue: nothing for trial division to find.
    assert_eq!(
        pairs(engine.factorize_blended(2_147_483_647).unwrap()),
        vec![(2_147_483_647, 1)]
    );
}

#[test]
fn divisor_count_via_factorization() {
    let engine = engine();
    assert_eq!(engine.divisor_count_of(2).unwrap(), 2);
    assert_eq!(engine.divisor_count_of(36).unwrap(), 9);
    assert_eq!(engine.divisor_count_of(900).unwrap(), 27);
    assert_eq!(engine.divisor_count_of(720_720).unwrap(), 240);
}

#[test]
fn factorization_value_and_divisor_count_roundtrip() {
    let engine = engine();
    for value in [2i64, 4, 97, 360, 5_040, 720_720, 2_147_483_670] {
        let factorization = engine.factorize_blended(value).unwrap();
        assert_eq!(factorization.value(), value);
        assert!(factorization.divisor_count() >= 2);
    }
}

proptest! {
    // The canonical output contract: ascending prime bases, exponents >= 1,
    // product reconstructing the input — for every strategy.
    #[test]
    fn strategies_agree_and_reconstruct(value in 2i64..5_000_000) {
        let engine = engine();
        let exhaustive = engine.factorize(value).unwrap();
        let blended = engine.factorize_blended(value).unwrap();
        let rho = engine.factorize_rho(value).unwrap();

        prop_assert_eq!(exhaustive.value(), value);
        for factor in exhaustive.factors() {
            prop_assert!(is_prime(factor.base), "{} is not prime", factor.base);
            prop_assert!(factor.exponent >= 1);
        }
        for window in exhaustive.factors().windows(2) {
            prop_assert!(window[0].base < window[1].base);
        }
        prop_assert_eq!(&blended, &exhaustive);
        prop_assert_eq!(&rho, &exhaustive);
    }
}
