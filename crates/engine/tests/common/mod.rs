//! Shared helpers for the simulator test suite.

use pagesim_core::common::PageId;
use pagesim_core::engine::{AccessEvent, AccessOutcome, simulate};
use pagesim_core::{Algorithm, ReferenceTrace, SimConfig};

/// The textbook Belady sequence: FIFO 9, LRU 10, OPT 7 faults at 3 frames.
pub fn belady_trace() -> ReferenceTrace {
    ReferenceTrace::from(vec![1, 2, 3, 4, 1, 2, 5, 1, 2, 3, 4, 5])
}

/// Runs `algorithm` over `trace` with fresh state and returns the fault count.
pub fn faults(algorithm: Algorithm, frames: usize, trace: &ReferenceTrace) -> u64 {
    let config = SimConfig::new(frames, algorithm);
    let engine = simulate(trace, &config).expect("valid config");
    engine.stats().faults
}

/// Runs `algorithm` with event recording and returns the access stream.
pub fn events(algorithm: Algorithm, frames: usize, trace: &ReferenceTrace) -> Vec<AccessEvent> {
    let mut config = SimConfig::new(frames, algorithm);
    config.record_events = true;
    let engine = simulate(trace, &config).expect("valid config");
    engine.events().to_vec()
}

/// Runs `algorithm` and returns the eviction victims in order.
pub fn victims(algorithm: Algorithm, frames: usize, trace: &ReferenceTrace) -> Vec<PageId> {
    events(algorithm, frames, trace)
        .into_iter()
        .filter_map(|event| match event.outcome {
            AccessOutcome::Miss { victim } => victim,
            AccessOutcome::Hit => None,
        })
        .collect()
}
