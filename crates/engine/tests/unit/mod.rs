//! Unit tests for the simulator components.

/// Configuration parsing and validation tests.
pub mod config;


/// Per-policy eviction law tests.
pub mod policies;



/// Statistics counter and rate tests.
pub mod stats;
