//! First-In, First-Out (FIFO) Replacement Policy.
//!
//! This policy evicts the resident page with the oldest arrival, regardless
//! of how recently it was referenced. Hits never reorder the queue, which is
//! the defining property distinguishing FIFO from LRU.
//!
//! # Performance
//!
//! - **Time Complexity:**
//!   - `on_insert()`: O(1)
//!   - `select_victim()`: O(1)
//! - **Space Complexity:** O(F) where F is the frame count
//! - **Best Case:** Streaming references where all pages have equal importance
//! - **Worst Case:** Hot pages that arrived early (evicted despite frequent hits);
//!   also subject to Belady's anomaly (more frames can mean more faults)

use std::collections::VecDeque;

use super::ReplacementPolicy;
use crate::common::PageId;
use crate::residency::ResidencySet;
use crate::trace::ReferenceTrace;

/// FIFO policy state.
#[derive(Debug)]
pub struct FifoPolicy {
    /// Resident pages in arrival order; front is the oldest.
    queue: VecDeque<PageId>,
}

impl FifoPolicy {
    /// Creates a new FIFO policy instance.
    ///
    /// # Arguments
    ///
    /// * `capacity` - The frame count (queue never grows past it).
    pub fn new(capacity: usize) -> Self {
        Self {
            queue: VecDeque::with_capacity(capacity),
        }
    }
}

impl ReplacementPolicy for FifoPolicy {
    /// Hits do not reorder the arrival queue.
    fn on_hit(&mut self, _page: PageId, _time: usize) {}

    /// Appends the page at the queue tail (newest arrival).
    fn on_insert(&mut self, page: PageId, _time: usize) {
        self.queue.push_back(page);
    }

    /// The victim was popped by `select_victim`; nothing left to do.
    fn on_evict(&mut self, _page: PageId) {}

    /// Pops and returns the queue head (oldest arrival).
    fn select_victim(
        &mut self,
        _residents: &ResidencySet,
        _trace: &ReferenceTrace,
        _time: usize,
    ) -> Option<PageId> {
        self.queue.pop_front()
    }
}
