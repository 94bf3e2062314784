//! Replacement Engine.
//!
//! This module implements the single-pass orchestrator that drives a
//! reference trace through a replacement policy. The engine exclusively
//! owns the residency set, the fault counter, and the active policy's
//! auxiliary state for the duration of one run; it is the only reader and
//! writer of that state, and a fresh engine is built per run so no state
//! ever leaks between policies or runs.
//!
//! Per reference at logical time `t`:
//! 1. Resident? Notify the policy of the hit and move on; no fault.
//! 2. Miss: count the fault. If every frame is occupied, ask the policy
//!    for a victim, evict it, and notify the policy.
//! 3. Insert the referenced page and notify the policy.

/// Page replacement policy implementations (FIFO, LRU, Optimal, Clock).
pub mod policies;

use serde::Serialize;
use tracing::{debug, trace};

use self::policies::{ClockPolicy, FifoPolicy, LruPolicy, OptimalPolicy, ReplacementPolicy};
use crate::common::{PageId, SimError};
use crate::config::{Algorithm, SimConfig};
use crate::residency::ResidencySet;
use crate::stats::SimStats;
use crate::trace::ReferenceTrace;

/// Outcome of a single reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum AccessOutcome {
    /// The page was already resident.
    Hit,
    /// The page was not resident; `victim` is the page evicted to make
    /// room, or `None` while frames were still free.
    Miss {
        /// Evicted page, if the set was full.
        victim: Option<PageId>,
    },
}

/// One entry of the diagnostic access stream.
///
/// Recorded only when [`SimConfig::record_events`] is set; the scalar fault
/// count is the output contract, this stream is for diagnostics and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AccessEvent {
    /// Logical time of the reference (trace index).
    pub time: usize,
    /// The referenced page.
    pub page: PageId,
    /// Hit, or miss with the eviction that paid for it.
    pub outcome: AccessOutcome,
}

/// Single-run replacement engine.
///
/// Owns the residency set, the statistics, and the boxed policy resolved
/// once at construction from the configured algorithm. One engine serves
/// exactly one run; build a fresh one per run (or use [`simulate`], which
/// does) so policy state never bleeds across runs.
#[derive(Debug)]
pub struct ReplacementEngine {
    residents: ResidencySet,
    policy: Box<dyn ReplacementPolicy>,
    stats: SimStats,
    record_events: bool,
    events: Vec<AccessEvent>,
}

impl ReplacementEngine {
    /// Creates an engine for the given configuration.
    ///
    /// The algorithm is resolved to its policy implementation here, once;
    /// the run loop only sees the [`ReplacementPolicy`] interface.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidFrameCount`] if the configuration names
    /// zero frames.
    pub fn new(config: &SimConfig) -> Result<Self, SimError> {
        config.validate()?;

        let policy: Box<dyn ReplacementPolicy> = match config.algorithm {
            Algorithm::Fifo => Box::new(FifoPolicy::new(config.frames)),
            Algorithm::Lru => Box::new(LruPolicy::new(config.frames)),
            Algorithm::Opt => Box::new(OptimalPolicy::new()),
            Algorithm::Clock => Box::new(ClockPolicy::new(config.frames)),
        };

        Ok(Self {
            residents: ResidencySet::new(config.frames),
            policy,
            stats: SimStats::default(),
            record_events: config.record_events,
            events: Vec::new(),
        })
    }

    /// Replays the trace through the policy and returns the fault count.
    ///
    /// A single deterministic forward pass with no rollback or retry.
    /// Malformed-looking page ids are not a concern here: identifiers are
    /// opaque, and the trace loader already rejected non-integers.
    pub fn run(&mut self, trace: &ReferenceTrace) -> u64 {
        if self.record_events {
            self.events.reserve(trace.len());
        }

        for (time, page) in trace.iter().enumerate() {
            self.stats.references += 1;

            if self.residents.contains(page) {
                self.policy.on_hit(page, time);
                self.stats.hits += 1;
                trace!(time, page = %page, "hit");
                self.push_event(time, page, AccessOutcome::Hit);
                continue;
            }

            self.stats.faults += 1;

            let mut victim = None;
            if self.residents.is_full() {
                match self.policy.select_victim(&self.residents, trace, time) {
                    Some(evicted) => {
                        let _ = self.residents.remove(evicted);
                        self.policy.on_evict(evicted);
                        self.stats.evictions += 1;
                        victim = Some(evicted);
                    }
                    // A full set always has a candidate; nothing to evict
                    // can only mean the policy fell out of sync.
                    None => debug_assert!(false, "full residency set but no victim"),
                }
            }

            self.residents.insert(page);
            self.policy.on_insert(page, time);
            debug!(time, page = %page, victim = ?victim, "fault");
            self.push_event(time, page, AccessOutcome::Miss { victim });

            debug_assert!(self.residents.len() <= self.residents.capacity());
        }

        self.stats.faults
    }

    fn push_event(&mut self, time: usize, page: PageId, outcome: AccessOutcome) {
        if self.record_events {
            self.events.push(AccessEvent {
                time,
                page,
                outcome,
            });
        }
    }

    /// Returns the statistics accumulated so far.
    pub fn stats(&self) -> &SimStats {
        &self.stats
    }

    /// Returns the recorded access stream (empty unless
    /// [`SimConfig::record_events`] was set).
    pub fn events(&self) -> &[AccessEvent] {
        &self.events
    }

    /// Returns the number of pages currently resident.
    pub fn resident_pages(&self) -> usize {
        self.residents.len()
    }
}

/// Runs one simulation with freshly initialized state and returns the
/// finished engine for inspection.
///
/// Each call constructs a new engine, residency set, and policy, so
/// back-to-back comparisons of different algorithms on the same trace see
/// no state from one another.
///
/// # Errors
///
/// Returns [`SimError::InvalidFrameCount`] if the configuration names zero
/// frames.
pub fn simulate(trace: &ReferenceTrace, config: &SimConfig) -> Result<ReplacementEngine, SimError> {
    let mut engine = ReplacementEngine::new(config)?;
    let _ = engine.run(trace);
    Ok(engine)
}
