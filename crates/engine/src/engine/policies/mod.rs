//! Page Replacement Policies.
//!
//! Implements the algorithms for selecting victim pages when a reference
//! misses and every frame is occupied.
//!
//! # Policies
//!
//! - `Fifo`: First-In, First-Out.
//! - `Lru`: Least Recently Used.
//! - `Optimal`: Belady's offline lookahead (fault-count lower bound).
//! - `Clock`: Second-chance approximation of LRU.
//!
//! Policies are pure decision logic: they never touch the residency set and
//! cannot fail once configuration is valid. The engine notifies them of
//! every reference outcome and asks for a victim only when the set is full.

/// Clock (second-chance) replacement policy.
pub mod clock;

/// First-In, First-Out replacement policy.
pub mod fifo;

/// Least Recently Used replacement policy.
pub mod lru;

/// Optimal (Belady) replacement policy.
pub mod optimal;

pub use clock::ClockPolicy;
pub use fifo::FifoPolicy;
pub use lru::LruPolicy;
pub use optimal::OptimalPolicy;

use std::fmt;

use crate::common::PageId;
use crate::residency::ResidencySet;
use crate::trace::ReferenceTrace;

/// Trait for page replacement policies.
///
/// Defines the interface for maintaining per-policy bookkeeping and
/// selecting victim pages. The engine calls exactly one of `on_hit` or
/// `on_insert` per reference, and brackets each eviction with
/// `select_victim` then `on_evict`.
pub trait ReplacementPolicy: fmt::Debug {
    /// Updates the policy state when a resident page is referenced.
    ///
    /// # Arguments
    ///
    /// * `page` - The page that hit.
    /// * `time` - Logical time of the reference (trace index).
    fn on_hit(&mut self, page: PageId, time: usize);

    /// Updates the policy state after a missed page is made resident.
    ///
    /// # Arguments
    ///
    /// * `page` - The page just inserted.
    /// * `time` - Logical time of the reference (trace index).
    fn on_insert(&mut self, page: PageId, time: usize);

    /// Updates the policy state after a victim leaves residency.
    fn on_evict(&mut self, page: PageId);

    /// Selects a resident page to evict.
    ///
    /// Called only when the residency set is full. Returns `None` only if
    /// the policy holds no candidate, which a correctly-driven engine never
    /// observes.
    ///
    /// # Arguments
    ///
    /// * `residents` - The current residency set.
    /// * `trace` - The full reference trace (used by Optimal's lookahead).
    /// * `time` - Logical time of the missing reference.
    fn select_victim(
        &mut self,
        residents: &ResidencySet,
        trace: &ReferenceTrace,
        time: usize,
    ) -> Option<PageId>;
}
