//! Virtual-memory page-replacement simulator library.
//!
//! This crate replays a trace of page references against a fixed number of
//! physical frames and counts page faults under a selectable replacement
//! policy. It provides:
//! 1. **Trace:** An ordered, read-only reference sequence loaded in full before the run.
//! 2. **Residency:** A bounded membership set over the pages currently holding a frame.
//! 3. **Policies:** FIFO, LRU, Optimal (offline lookahead), and Clock (second-chance).
//! 4. **Engine:** The single-pass orchestrator that drives a trace through one policy.
//! 5. **Reporting:** Fault statistics and an optional per-reference event stream.
//!
//! The simulation is a deterministic, single-threaded batch computation:
//! one pass, no I/O inside the loop, no shared state between runs.

/// Common types (page identifiers, error definitions).
pub mod common;
/// Simulator configuration (frame count, algorithm selection, defaults).
pub mod config;
/// Replacement engine and the policy implementations it drives.
pub mod engine;
/// Bounded residency tracking for pages occupying frames.
pub mod residency;
/// Simulation statistics collection and reporting.
pub mod stats;
/// Reference trace loading and lookahead queries.
pub mod trace;

/// Opaque page identifier; equality and ordering only.
pub use crate::common::PageId;
/// Library error type; every variant is a configuration error.
pub use crate::common::SimError;
/// Replacement algorithm selector; parsed from config or CLI names.
pub use crate::config::Algorithm;
/// Engine parameters; validate before building an engine.
pub use crate::config::SimConfig;
/// Single-run orchestrator; use [`engine::simulate`] for fresh-state runs.
pub use crate::engine::ReplacementEngine;
/// Per-run counters and the banner report.
pub use crate::stats::SimStats;
/// The reference sequence; index is logical time.
pub use crate::trace::ReferenceTrace;
