//! Curated API surface for callers that want one import line.
//!
//! Prefer these re-exports for clarity and consistency across binaries and
//! benches; the modules themselves stay the source of truth.

// Shared arithmetic
pub use crate::arith::{gcd, isqrt, pow_mod};
// Error surfaced to callers
pub use crate::error::DomainError;
// Prime oracle
pub use crate::oracle::{is_prime, PrimeOracle};
// Factorization
pub use crate::factor::{FactorEngine, Factorization, PrimeFactor};
// Highly composite numbers
pub use crate::hcn::{HcnTable, HighComposite};
// Reproducible composite streams
pub use crate::sample::{
    CompositeGenerator, CompositeParams, CompositeSample, SampleError, SeedReplay,
};
