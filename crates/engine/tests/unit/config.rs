//! # Configuration Tests
//!
//! Algorithm name parsing, serde deserialization, and validation.

use std::str::FromStr;

use pagesim_core::{Algorithm, SimConfig, SimError};

#[test]
fn test_algorithm_from_canonical_names() {
    assert_eq!(Algorithm::from_str("FIFO").unwrap(), Algorithm::Fifo);
    assert_eq!(Algorithm::from_str("LRU").unwrap(), Algorithm::Lru);
    assert_eq!(Algorithm::from_str("OPT").unwrap(), Algorithm::Opt);
    assert_eq!(Algorithm::from_str("CLOCK").unwrap(), Algorithm::Clock);
}

#[test]
fn test_algorithm_from_capitalized_aliases() {
    assert_eq!(Algorithm::from_str("Fifo").unwrap(), Algorithm::Fifo);
    assert_eq!(Algorithm::from_str("Lru").unwrap(), Algorithm::Lru);
    assert_eq!(Algorithm::from_str("Optimal").unwrap(), Algorithm::Opt);
    assert_eq!(Algorithm::from_str("Clock").unwrap(), Algorithm::Clock);
}

#[test]
fn test_unknown_algorithm_is_user_error() {
    let err = Algorithm::from_str("MRU").unwrap_err();
    match err {
        SimError::UnknownAlgorithm(name) => assert_eq!(name, "MRU"),
        other => panic!("expected UnknownAlgorithm, got {other:?}"),
    }
}

#[test]
fn test_unknown_algorithm_message_lists_valid_names() {
    let message = Algorithm::from_str("lfu").unwrap_err().to_string();
    for name in ["FIFO", "LRU", "OPT", "CLOCK"] {
        assert!(message.contains(name), "message misses {name}: {message}");
    }
}

#[test]
fn test_algorithm_display_roundtrips_canonical_name() {
    for algorithm in Algorithm::ALL {
        assert_eq!(
            Algorithm::from_str(&algorithm.to_string()).unwrap(),
            algorithm
        );
    }
}

#[test]
fn test_config_deserializes_from_json() {
    let config: SimConfig =
        serde_json::from_str(r#"{"frames": 4, "algorithm": "CLOCK", "record_events": true}"#)
            .expect("valid config");
    assert_eq!(config.frames, 4);
    assert_eq!(config.algorithm, Algorithm::Clock);
    assert!(config.record_events);
}

#[test]
fn test_config_deserializes_algorithm_alias() {
    let config: SimConfig =
        serde_json::from_str(r#"{"frames": 2, "algorithm": "Optimal"}"#).expect("valid config");
    assert_eq!(config.algorithm, Algorithm::Opt);
}

#[test]
fn test_config_fields_default_when_omitted() {
    let config: SimConfig = serde_json::from_str("{}").expect("valid config");
    assert_eq!(config.frames, 3);
    assert_eq!(config.algorithm, Algorithm::Fifo);
    assert!(!config.record_events);
}

#[test]
fn test_validate_accepts_positive_frame_count() {
    assert!(SimConfig::new(1, Algorithm::Fifo).validate().is_ok());
}

#[test]
fn test_validate_rejects_zero_frames() {
    let err = SimConfig::new(0, Algorithm::Lru).validate().unwrap_err();
    assert!(matches!(err, SimError::InvalidFrameCount));
}
