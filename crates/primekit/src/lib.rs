//! Number-theoretic engine: incremental prime discovery, hybrid integer
//! factorization, and highly-composite-number search.
//!
//! Components, leaves first:
//! - `oracle`: append-only prime table plus a deterministic primality predicate.
//! - `factor`: trial-division and Pollard-Rho factorization strategies.
//! - `hcn`: branch-and-bound enumeration of highly composite numbers.
//!
//! All values are bounded by the 64-bit signed range; arbitrary precision and
//! cryptographic-strength primality are explicitly out of scope.

pub mod api;
pub mod arith;
pub mod error;
pub mod factor;
pub mod hcn;
pub mod oracle;
pub mod sample;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::arith::{gcd, isqrt, pow_mod};
    pub use crate::error::DomainError;
    pub use crate::factor::{FactorEngine, Factorization, PrimeFactor};
    pub use crate::hcn::{HcnTable, HighComposite};
    pub use crate::oracle::{is_prime, PrimeOracle};
}
