//! # Statistics Tests
//!
//! Counter accounting and the derived rates.

use pagesim_core::engine::simulate;
use pagesim_core::{Algorithm, ReferenceTrace, SimConfig, SimStats};

#[test]
fn test_default_stats_are_zeroed() {
    let stats = SimStats::default();
    assert_eq!(stats.references, 0);
    assert_eq!(stats.hits, 0);
    assert_eq!(stats.faults, 0);
    assert_eq!(stats.evictions, 0);
}

#[test]
fn test_rates_are_zero_for_an_empty_run() {
    let stats = SimStats::default();
    assert_eq!(stats.fault_rate(), 0.0);
    assert_eq!(stats.hit_rate(), 0.0);
}

#[test]
fn test_rates_partition_the_references() {
    let trace = ReferenceTrace::from(vec![1, 2, 1, 2, 3, 1]);
    let config = SimConfig::new(3, Algorithm::Lru);
    let engine = simulate(&trace, &config).expect("valid config");
    let stats = engine.stats();

    assert_eq!(stats.references, 6);
    assert_eq!(stats.faults, 3);
    assert_eq!(stats.hits, 3);
    assert!((stats.fault_rate() - 0.5).abs() < f64::EPSILON);
    assert!((stats.fault_rate() + stats.hit_rate() - 1.0).abs() < f64::EPSILON);
}

#[test]
fn test_evictions_lag_faults_by_the_fill() {
    // The first `frames` faults occupy free frames; only later faults evict.
    let trace = ReferenceTrace::from(vec![1, 2, 3, 4, 5]);
    let config = SimConfig::new(3, Algorithm::Fifo);
    let engine = simulate(&trace, &config).expect("valid config");
    let stats = engine.stats();

    assert_eq!(stats.faults, 5);
    assert_eq!(stats.evictions, 2);
}

#[test]
fn test_stats_serialize_without_host_clock() {
    let stats = SimStats::default();
    let json = serde_json::to_value(&stats).expect("serializable");
    assert!(json.get("faults").is_some());
    assert!(json.get("start_time").is_none());
}
