//! Integer factorization: trial division blended with Pollard's Rho.
//!
//! Purpose
//! - Decompose a positive integer into canonical prime-power factors:
//!   ascending bases, exponents ≥ 1, product reconstructing the input.
//! - Three strategies, selectable by caller need: exhaustive trial division,
//!   a blended variant capped at the first 99 primes with a Rho fallback,
//!   and a Rho-first variant for values with large prime factors.
//!
//! Why this design
//! - Trial division is cheap while small factors exist; capping it bounds
//!   the worst case, and the Rho fallback handles the large-factor residue.
//! - Rho sub-searches are pure functions over their inputs; concurrent
//!   factorization requests share nothing but the prime table reads.

mod engine;
mod rho;
mod types;

pub use engine::FactorEngine;
pub use types::{Factorization, PrimeFactor};

#[cfg(test)]
mod tests;
