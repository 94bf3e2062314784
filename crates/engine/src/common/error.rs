//! Error definitions for the page-replacement simulator.
//!
//! Every variant here is a configuration error: it is detected before the
//! simulation starts, and a run that begins cannot fail. The replacement
//! algorithms are pure decision logic over already-validated state.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors reported before a simulation run starts.
///
/// A caller that sees `Ok` from configuration validation and trace loading
/// is guaranteed a complete, deterministic run: no variant of this type is
/// produced inside the simulation loop.
#[derive(Debug, Error)]
pub enum SimError {
    /// The configured frame count was zero.
    ///
    /// A 0-capacity residency set can never satisfy a miss's insert step,
    /// so this is rejected up front rather than attempted.
    #[error("frame count must be greater than zero")]
    InvalidFrameCount,

    /// The configured algorithm name is not one of the recognized set.
    ///
    /// This is a user error, not a crash; the message lists the valid names.
    #[error("unknown replacement algorithm `{0}` (expected FIFO, LRU, OPT, or CLOCK)")]
    UnknownAlgorithm(String),

    /// The reference trace could not be read from disk.
    #[error("could not read reference trace `{path}`: {source}")]
    TraceRead {
        /// Path that failed to open or read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A trace token did not parse as a non-negative integer.
    ///
    /// Page identifiers are opaque and unranged, but the trace format is
    /// whitespace-separated non-negative integers; anything else is
    /// rejected before the run. `position` is the 0-based token index.
    #[error("malformed trace entry `{token}` at position {position}")]
    MalformedEntry {
        /// The offending token, verbatim.
        token: String,
        /// 0-based index of the token within the trace.
        position: usize,
    },
}
