//! Optimal (Belady) Replacement Policy.
//!
//! This policy evicts the resident page whose next use lies furthest in the
//! future, which provably minimizes the fault count. It is the only policy
//! that needs the full trace and the current logical time, so it serves as
//! the offline lower bound the online policies are measured against, not as
//! something deployable.
//!
//! The policy keeps no persistent auxiliary state: residency membership is
//! already tracked by the engine, and the victim scan recomputes future
//! distances from the trace on every full miss.
//!
//! # Performance
//!
//! - **Time Complexity:**
//!   - `select_victim()`: O(F × T) where F is the frame count and T the
//!     remaining trace length (a forward scan per resident page)
//!   - all notifications: O(1)
//! - **Space Complexity:** O(1)

use super::ReplacementPolicy;
use crate::common::PageId;
use crate::residency::ResidencySet;
use crate::trace::ReferenceTrace;

/// Optimal policy state (none beyond the engine's residency tracking).
#[derive(Debug, Default)]
pub struct OptimalPolicy;

impl OptimalPolicy {
    /// Creates a new Optimal policy instance.
    pub fn new() -> Self {
        Self
    }
}

impl ReplacementPolicy for OptimalPolicy {
    /// No recency bookkeeping; the future is recomputed at each miss.
    fn on_hit(&mut self, _page: PageId, _time: usize) {}

    /// No arrival bookkeeping.
    fn on_insert(&mut self, _page: PageId, _time: usize) {}

    /// No state to discard.
    fn on_evict(&mut self, _page: PageId) {}

    /// Scans the remaining trace and returns the resident page whose next
    /// use is furthest away (trace length standing in for "never again").
    ///
    /// Ties among maximally-distant pages go to the lowest page id, a
    /// deterministic rule in place of incidental enumeration order.
    fn select_victim(
        &mut self,
        residents: &ResidencySet,
        trace: &ReferenceTrace,
        time: usize,
    ) -> Option<PageId> {
        let mut victim: Option<(PageId, usize)> = None;
        for page in residents.iter() {
            let distance = trace.next_use(page, time);
            let better = match victim {
                None => true,
                Some((best_page, best_distance)) => {
                    distance > best_distance || (distance == best_distance && page < best_page)
                }
            };
            if better {
                victim = Some((page, distance));
            }
        }
        victim.map(|(page, _)| page)
    }
}
