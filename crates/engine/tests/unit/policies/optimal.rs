//! # Optimal Policy Tests
//!
//! The lookahead law: the victim's next use is furthest in the future, with
//! never-used-again pages furthest of all, and ties going to the lowest
//! page id.

use pretty_assertions::assert_eq;

use pagesim_core::common::PageId;
use pagesim_core::{Algorithm, ReferenceTrace};

use crate::common::{belady_trace, faults, victims};

#[test]
fn test_victim_has_the_most_distant_next_use() {
    // At the miss on 4: next uses are 1 -> t4, 2 -> t5, 3 -> never.
    let trace = ReferenceTrace::from(vec![1, 2, 3, 4, 1, 2]);
    assert_eq!(victims(Algorithm::Opt, 3, &trace), vec![PageId::new(3)]);
}

#[test]
fn test_page_never_used_again_goes_first() {
    // 1 arrived last but never recurs; 2 and 3 both do. The trace length
    // stands in for infinity, so 1 goes.
    let trace = ReferenceTrace::from(vec![2, 3, 1, 4, 3, 2]);
    assert_eq!(victims(Algorithm::Opt, 3, &trace), vec![PageId::new(1)]);
}

#[test]
fn test_tie_break_is_lowest_page_id() {
    // None of 1, 2, 3 is ever referenced again: all distances are equal,
    // so the lowest page id is evicted.
    let trace = ReferenceTrace::from(vec![1, 2, 3, 4]);
    assert_eq!(victims(Algorithm::Opt, 3, &trace), vec![PageId::new(1)]);
}

#[test]
fn test_belady_trace_faults_seven_times() {
    assert_eq!(faults(Algorithm::Opt, 3, &belady_trace()), 7);
}

#[test]
fn test_optimal_lower_bound_on_belady_trace() {
    let trace = belady_trace();
    let optimal = faults(Algorithm::Opt, 3, &trace);
    for algorithm in [Algorithm::Fifo, Algorithm::Lru, Algorithm::Clock] {
        assert!(optimal <= faults(algorithm, 3, &trace));
    }
}
