//! Highly composite numbers (anti-primes): integers with more divisors than
//! any smaller positive integer, enumerated in ascending order.
//!
//! Purpose
//! - `HcnTable` confirms HCNs on demand, growing generation by generation
//!   over a conceptual binary tree of exponent vectors; only the current
//!   leaves and a staged pool are kept, never the tree itself.
//!
//! Why this design
//! - A minimal-value number for its divisor count factors over the smallest
//!   primes with non-increasing exponents, so candidates are exactly those
//!   vectors; children either append a new prime at exponent one or bump the
//!   last exponent.
//! - Once every un-generated candidate is provably larger than a staged
//!   record-holder, that candidate is confirmed — the branch-and-bound
//!   argument that keeps the search ahead of the table it emits.

mod candidate;
mod search;

pub use candidate::HighComposite;
pub use search::HcnTable;
