//! Generation loop: generate children, stage, prune, confirm.

use std::sync::{Arc, PoisonError, RwLock};

use crate::oracle::PrimeOracle;

use super::candidate::HighComposite;

/// Confirmed HCNs plus the working sets of the search, grown on demand.
///
/// The confirmed table is append-only and strictly increasing in both value
/// and divisor count. Share one table per process (behind an `Arc`) to keep
/// the compute-once-reuse-forever behavior.
pub struct HcnTable {
    oracle: Arc<PrimeOracle>,
    state: RwLock<SearchState>,
}

struct SearchState {
    confirmed: Vec<HighComposite>,
    /// Current generation of tree leaves, kept instead of the tree.
    leaves: Vec<HighComposite>,
    /// Generated but not yet proven to be the next confirmed HCN.
    staged: Vec<HighComposite>,
}

impl HcnTable {
    pub fn new(oracle: Arc<PrimeOracle>) -> Self {
        // The number one is a confirmed HCN (one divisor); the tree is
        // seeded with the single-prime vector, both as leaf and staged.
        let root = HighComposite {
            value: 1,
            divisor_count: 1,
            exponents: vec![0],
        };
        let seed = HighComposite {
            value: 2,
            divisor_count: 2,
            exponents: vec![1],
        };
        Self {
            oracle,
            state: RwLock::new(SearchState {
                confirmed: vec![root],
                leaves: vec![seed.clone()],
                staged: vec![seed],
            }),
        }
    }

    /// The HCN at zero-based `rank`, running the search further if the rank
    /// is not yet confirmed.
    ///
    /// Ranks beyond the 64-bit table (the last representable HCN sits at
    /// rank 163) are not answerable; callers are expected to stay below.
    pub fn at(&self, rank: usize) -> HighComposite {
        {
            let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
            if rank < state.confirmed.len() {
                return state.confirmed[rank].clone();
            }
        }
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        while state.confirmed.len() <= rank {
            Self::run_generation(&self.oracle, &mut state);
        }
        state.confirmed[rank].clone()
    }

    /// Count of HCNs confirmed so far.
    pub fn confirmed(&self) -> usize {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .confirmed
            .len()
    }

    /// One generation: expand every leaf, stage the children, then walk the
    /// staged pool once to prune dominated candidates and confirm those no
    /// future candidate can undercut.
    fn run_generation(oracle: &PrimeOracle, state: &mut SearchState) {
        let mut next_leaves = Vec::with_capacity(state.leaves.len() * 2);
        for leaf in &state.leaves {
            // Children that overflow the 64-bit range are excluded here.
            if let Some(right) = leaf.right_child(oracle) {
                next_leaves.push(right);
            }
            if let Some(left) = leaf.left_child(oracle) {
                next_leaves.push(left);
            }
        }
        state.staged.extend(next_leaves.iter().cloned());
        next_leaves.sort_by_key(|candidate| candidate.value);
        state.staged.sort_by_key(|candidate| candidate.value);

        // Everything generated from here on has value above the smallest new
        // leaf, so staged candidates at or below it cannot be undercut.
        let horizon = next_leaves
            .first()
            .map_or(i64::MAX, |candidate| candidate.value);

        // Walking in ascending value order, a candidate must beat the best
        // divisor count seen so far (confirmed or passed over) to ever
        // become a record; the rest are dropped for good.
        let mut best_divisor_count = state
            .confirmed
            .last()
            .map_or(0, |confirmed| confirmed.divisor_count);
        let mut still_staged = Vec::with_capacity(state.staged.len());
        for candidate in state.staged.drain(..) {
            if candidate.divisor_count <= best_divisor_count {
                continue;
            }
            best_divisor_count = candidate.divisor_count;
            if candidate.value <= horizon {
                state.confirmed.push(candidate);
            } else {
                still_staged.push(candidate);
            }
        }
        state.staged = still_staged;
        state.leaves = next_leaves;
    }
}
