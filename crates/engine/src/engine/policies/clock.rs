//! Clock (Second-Chance) Replacement Policy.
//!
//! This policy approximates LRU with one use bit per frame slot and a
//! rotating hand. A hit sets the page's use bit; the victim sweep clears
//! set bits as it passes and stops at the first clear one, giving every
//! recently-used page one more rotation of grace.
//!
//! The sweep always terminates within one full rotation: each step clears a
//! bit, and a complete rotation leaves every bit clear, so a clear bit is
//! found on or before the hand returns to its start.
//!
//! # Performance
//!
//! - **Time Complexity:**
//!   - `on_hit()`: O(F) (slot scan for the page)
//!   - `select_victim()`: O(F) worst case (at most F bit-clears/advances)
//! - **Space Complexity:** O(F)
//! - **Best Case:** LRU-like workloads, at a fraction of LRU's bookkeeping
//! - **Worst Case:** All bits set at every miss (degenerates to FIFO order)

use super::ReplacementPolicy;
use crate::common::PageId;
use crate::residency::ResidencySet;
use crate::trace::ReferenceTrace;

/// Clock policy state.
#[derive(Debug)]
pub struct ClockPolicy {
    /// Circular slot array; `None` only before the set first fills.
    slots: Vec<Option<PageId>>,
    /// One use bit per slot: "referenced since the hand last passed".
    use_bits: Vec<bool>,
    /// Rotating hand index, wraps modulo the frame count.
    hand: usize,
    /// Slot vacated by the last `select_victim`, awaiting the new page.
    pending: Option<usize>,
}

impl ClockPolicy {
    /// Creates a new Clock policy instance.
    ///
    /// # Arguments
    ///
    /// * `capacity` - The frame count (slot and bit array size).
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: vec![None; capacity],
            use_bits: vec![false; capacity],
            hand: 0,
            pending: None,
        }
    }

    fn slot_of(&self, page: PageId) -> Option<usize> {
        self.slots.iter().position(|&slot| slot == Some(page))
    }
}

impl ReplacementPolicy for ClockPolicy {
    /// Sets the use bit of the hit page's slot; the hand does not move.
    fn on_hit(&mut self, page: PageId, _time: usize) {
        if let Some(index) = self.slot_of(page) {
            self.use_bits[index] = true;
        }
    }

    /// Installs the page in the slot vacated by the last eviction, or the
    /// first free slot while the set is still filling. The slot's use bit
    /// is set and the hand advances past it.
    fn on_insert(&mut self, page: PageId, _time: usize) {
        let slot = self
            .pending
            .take()
            .or_else(|| self.slots.iter().position(Option::is_none));
        if let Some(index) = slot {
            self.slots[index] = Some(page);
            self.use_bits[index] = true;
            self.hand = (index + 1) % self.slots.len();
        }
    }

    /// Clears the vacated slot so `on_insert` finds it pending.
    fn on_evict(&mut self, page: PageId) {
        if let Some(index) = self.pending {
            if self.slots[index] == Some(page) {
                self.slots[index] = None;
            }
        }
    }

    /// Sweeps from the hand, clearing set bits, and returns the page at the
    /// first slot whose bit is clear.
    fn select_victim(
        &mut self,
        _residents: &ResidencySet,
        _trace: &ReferenceTrace,
        _time: usize,
    ) -> Option<PageId> {
        // Bounded by one rotation plus the stopping step.
        for _ in 0..=self.slots.len() {
            if self.use_bits[self.hand] {
                self.use_bits[self.hand] = false;
                self.hand = (self.hand + 1) % self.slots.len();
            } else {
                break;
            }
        }
        let victim = self.slots[self.hand];
        if victim.is_some() {
            self.pending = Some(self.hand);
        }
        victim
    }
}
