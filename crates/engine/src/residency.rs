//! Bounded residency tracking.
//!
//! This module implements the membership side of the simulator: which pages
//! currently occupy a frame. Lookup is bucketed by `page mod bucket_count`
//! for O(1)-amortized membership tests, with one bucket per frame. The
//! bucket structure is an implementation detail of membership: policies
//! never see it, and no policy decision depends on bucket order.
//!
//! Capacity discipline belongs to the engine: `insert` requires a free
//! frame, and the engine evicts before inserting when the set is full.

use crate::common::PageId;

/// The set of pages currently resident in a frame.
///
/// Holds at most `capacity` pages at any time. Frames are not individually
/// addressed; only aggregate occupancy matters.
#[derive(Debug, Clone)]
pub struct ResidencySet {
    buckets: Vec<Vec<PageId>>,
    capacity: usize,
    len: usize,
}

impl ResidencySet {
    /// Creates an empty residency set for `capacity` frames.
    ///
    /// Bucket count equals the frame count, matching the classic
    /// `page mod frames` residency table. `capacity` must be non-zero;
    /// the engine validates configuration before construction.
    pub fn new(capacity: usize) -> Self {
        Self {
            buckets: vec![Vec::new(); capacity.max(1)],
            capacity,
            len: 0,
        }
    }

    #[inline]
    fn bucket(&self, page: PageId) -> usize {
        (page.val() % self.buckets.len() as u64) as usize
    }

    /// Returns `true` if `page` currently occupies a frame.
    pub fn contains(&self, page: PageId) -> bool {
        self.buckets[self.bucket(page)].contains(&page)
    }

    /// Inserts `page` into a free frame.
    ///
    /// Requires `len() < capacity()`; the caller must evict first when the
    /// set is full. Inserting an already-resident page is a no-op.
    pub fn insert(&mut self, page: PageId) {
        debug_assert!(self.len < self.capacity, "insert into full residency set");
        let bucket = self.bucket(page);
        if self.buckets[bucket].contains(&page) {
            return;
        }
        self.buckets[bucket].push(page);
        self.len += 1;
    }

    /// Removes `page` from residency; a no-op if the page is absent.
    ///
    /// Returns `true` if the page was resident.
    pub fn remove(&mut self, page: PageId) -> bool {
        let bucket = self.bucket(page);
        if let Some(pos) = self.buckets[bucket].iter().position(|&p| p == page) {
            let _ = self.buckets[bucket].swap_remove(pos);
            self.len -= 1;
            return true;
        }
        false
    }

    /// Returns the number of resident pages.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no page is resident.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the frame count this set is bounded by.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns `true` if every frame is occupied.
    pub fn is_full(&self) -> bool {
        self.len == self.capacity
    }

    /// Iterates the resident pages in unspecified order.
    ///
    /// Callers needing a deterministic order (the Optimal tie-break) must
    /// impose their own; bucket order is incidental.
    pub fn iter(&self) -> impl Iterator<Item = PageId> + '_ {
        self.buckets.iter().flatten().copied()
    }
}
