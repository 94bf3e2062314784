//! # LRU Policy Tests
//!
//! The recency law: a hit protects a page, and the victim is the page
//! least recently touched by hit or insert.

use pretty_assertions::assert_eq;

use pagesim_core::common::PageId;
use pagesim_core::{Algorithm, ReferenceTrace};

use crate::common::{belady_trace, faults, victims};

#[test]
fn test_hit_protects_a_page_from_eviction() {
    // The hit on 1 makes 2 the least recently used, so 2 goes rather than
    // the first arrival.
    let trace = ReferenceTrace::from(vec![1, 2, 3, 1, 4]);
    assert_eq!(victims(Algorithm::Lru, 3, &trace), vec![PageId::new(2)]);
}

#[test]
fn test_victim_is_least_recently_touched() {
    let trace = ReferenceTrace::from(vec![1, 2, 1, 3]);
    assert_eq!(victims(Algorithm::Lru, 2, &trace), vec![PageId::new(2)]);
}

#[test]
fn test_insert_counts_as_a_touch() {
    // With no hits at all, LRU degenerates to arrival order.
    let trace = ReferenceTrace::from(vec![1, 2, 3, 4, 5]);
    assert_eq!(
        victims(Algorithm::Lru, 3, &trace),
        vec![PageId::new(1), PageId::new(2)]
    );
}

#[test]
fn test_repeated_hits_keep_page_most_recent() {
    let trace = ReferenceTrace::from(vec![1, 2, 3, 1, 1, 1, 4, 5]);
    assert_eq!(
        victims(Algorithm::Lru, 3, &trace),
        vec![PageId::new(2), PageId::new(3)]
    );
}

#[test]
fn test_belady_trace_faults_ten_times() {
    // LRU does worse than FIFO here; the Belady sequence punishes recency.
    assert_eq!(faults(Algorithm::Lru, 3, &belady_trace()), 10);
}
