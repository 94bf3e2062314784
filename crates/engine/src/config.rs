//! Configuration system for the page-replacement simulator.
//!
//! This module defines the structures and enums used to parameterize a run.
//! It provides:
//! 1. **Defaults:** Baseline constants used when a field is not supplied.
//! 2. **Structures:** The engine configuration (frame count, algorithm, event recording).
//! 3. **Enums:** The closed set of replacement algorithms, resolved once at
//!    engine construction.
//!
//! Configuration is supplied by the CLI flags or deserialized from JSON;
//! use `SimConfig::default()` for a baseline. `validate()` must pass before
//! an engine is built.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::common::SimError;

/// Default configuration constants for the simulator.
mod defaults {
    /// Default number of physical frames.
    ///
    /// Three frames is the textbook working size: small enough that every
    /// policy is forced to evict on common teaching traces.
    pub const FRAMES: usize = 3;
}

/// Page-replacement algorithm selection.
///
/// Specifies the algorithm used to select which resident page to evict when
/// a reference misses and every frame is occupied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Algorithm {
    /// First-In, First-Out replacement.
    ///
    /// Evicts the resident page with the oldest arrival; hits never
    /// reorder the queue.
    #[default]
    #[serde(alias = "Fifo")]
    Fifo,
    /// Least Recently Used replacement.
    ///
    /// Evicts the resident page whose last touch (hit or insert) is
    /// furthest in the past.
    #[serde(alias = "Lru")]
    Lru,
    /// Optimal (Belady) replacement with offline lookahead.
    ///
    /// Evicts the resident page whose next use lies furthest in the future.
    /// Requires the full trace; it is the fault-count lower bound and
    /// exists as a baseline, not as something deployable.
    #[serde(alias = "Optimal")]
    Opt,
    /// Clock (second-chance) replacement.
    ///
    /// Approximates LRU with one use bit per frame and a rotating hand.
    #[serde(alias = "Clock")]
    Clock,
}

impl Algorithm {
    /// All algorithms, in the order the `compare` surface reports them.
    pub const ALL: [Self; 4] = [Self::Fifo, Self::Lru, Self::Opt, Self::Clock];

    /// Returns the canonical configuration name for the algorithm.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Fifo => "FIFO",
            Self::Lru => "LRU",
            Self::Opt => "OPT",
            Self::Clock => "CLOCK",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = SimError;

    /// Parses a configuration name into an algorithm.
    ///
    /// Accepts the canonical UPPERCASE names and their capitalized aliases
    /// (`Fifo`, `Lru`, `Optimal`, `Clock`). Anything else is a user error,
    /// reported as [`SimError::UnknownAlgorithm`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "FIFO" | "Fifo" => Ok(Self::Fifo),
            "LRU" | "Lru" => Ok(Self::Lru),
            "OPT" | "Optimal" => Ok(Self::Opt),
            "CLOCK" | "Clock" => Ok(Self::Clock),
            other => Err(SimError::UnknownAlgorithm(other.to_string())),
        }
    }
}

/// Engine configuration for a single simulation run.
///
/// # Examples
///
/// Deserializing from JSON:
///
/// ```
/// use pagesim_core::config::{Algorithm, SimConfig};
///
/// let config: SimConfig = serde_json::from_str(r#"{"frames": 4, "algorithm": "LRU"}"#).unwrap();
/// assert_eq!(config.frames, 4);
/// assert_eq!(config.algorithm, Algorithm::Lru);
/// assert!(!config.record_events);
/// ```
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct SimConfig {
    /// Number of physical frames (residency capacity). Must be non-zero.
    #[serde(default = "SimConfig::default_frames")]
    pub frames: usize,

    /// Replacement algorithm driving victim selection.
    #[serde(default)]
    pub algorithm: Algorithm,

    /// When set, the engine records a per-reference [`AccessEvent`] stream
    /// alongside the counters.
    ///
    /// [`AccessEvent`]: crate::engine::AccessEvent
    #[serde(default)]
    pub record_events: bool,
}

impl SimConfig {
    fn default_frames() -> usize {
        defaults::FRAMES
    }

    /// Creates a configuration for the given frame count and algorithm,
    /// without event recording.
    pub fn new(frames: usize, algorithm: Algorithm) -> Self {
        Self {
            frames,
            algorithm,
            record_events: false,
        }
    }

    /// Checks the configuration for values the engine refuses to run with.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidFrameCount`] if `frames` is zero.
    pub fn validate(&self) -> Result<(), SimError> {
        if self.frames == 0 {
            return Err(SimError::InvalidFrameCount);
        }
        Ok(())
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self::new(defaults::FRAMES, Algorithm::default())
    }
}
