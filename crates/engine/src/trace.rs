//! Reference trace loading and lookahead queries.
//!
//! This module owns the input side of the simulator. It performs:
//! 1. **Loading:** Reads a whitespace-separated sequence of page numbers in
//!    full before the simulation starts, from a string, a reader, or a path.
//! 2. **Logical time:** Exposes the trace as an indexed, immutable sequence;
//!    the index of a reference is its logical time.
//! 3. **Lookahead:** Answers "when is this page next used?" for the Optimal
//!    policy's offline scan.
//!
//! Nothing here is read during the simulation loop; a loaded trace is
//! immutable for the duration of a run.

use std::fs;
use std::io::{self, BufRead};
use std::path::Path;

use crate::common::{PageId, SimError};

/// An ordered, read-only sequence of page references.
///
/// Consumed left to right exactly once per run; the index into the sequence
/// is the run's logical time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceTrace {
    pages: Vec<PageId>,
}

impl ReferenceTrace {
    /// Creates a trace from an in-memory page sequence.
    pub fn new(pages: Vec<PageId>) -> Self {
        Self { pages }
    }

    /// Parses a trace from whitespace/line-separated non-negative integers.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::MalformedEntry`] for the first token that does
    /// not parse as a `u64`. Page values themselves are unranged: any
    /// integer that parses is accepted as-is.
    pub fn parse(text: &str) -> Result<Self, SimError> {
        let mut pages = Vec::new();
        for (position, token) in text.split_whitespace().enumerate() {
            let page = token.parse::<u64>().map_err(|_| SimError::MalformedEntry {
                token: token.to_string(),
                position,
            })?;
            pages.push(PageId::new(page));
        }
        Ok(Self { pages })
    }

    /// Reads and parses a trace from a buffered reader.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::TraceRead`] if reading fails (the path is
    /// reported as `<reader>`), or [`SimError::MalformedEntry`] for a
    /// non-integer token.
    pub fn from_reader<R: BufRead>(mut reader: R) -> Result<Self, SimError> {
        let mut text = String::new();
        reader
            .read_to_string(&mut text)
            .map_err(|source| SimError::TraceRead {
                path: "<reader>".into(),
                source,
            })?;
        Self::parse(&text)
    }

    /// Reads and parses a trace file.
    ///
    /// The whole file is loaded before the simulation starts, so no I/O
    /// happens inside the hot loop.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::TraceRead`] if the file cannot be read, or
    /// [`SimError::MalformedEntry`] for a non-integer token.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, SimError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| SimError::TraceRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text)
    }

    /// Returns the number of references in the trace.
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Returns `true` if the trace contains no references.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Returns the reference at logical time `time`, if any.
    pub fn get(&self, time: usize) -> Option<PageId> {
        self.pages.get(time).copied()
    }

    /// Iterates the references in logical-time order.
    pub fn iter(&self) -> impl Iterator<Item = PageId> + '_ {
        self.pages.iter().copied()
    }

    /// Returns the trace as a slice in logical-time order.
    pub fn as_slice(&self) -> &[PageId] {
        &self.pages
    }

    /// Returns the logical time of the next use of `page` strictly after
    /// `time`, or the trace length if the page never recurs.
    ///
    /// The trace length acts as the +infinity distance: it compares greater
    /// than every real future index, which is exactly what the Optimal
    /// policy's victim scan needs.
    pub fn next_use(&self, page: PageId, time: usize) -> usize {
        self.pages
            .iter()
            .enumerate()
            .skip(time + 1)
            .find(|&(_, &p)| p == page)
            .map_or(self.pages.len(), |(index, _)| index)
    }
}

impl From<Vec<u64>> for ReferenceTrace {
    fn from(pages: Vec<u64>) -> Self {
        Self::new(pages.into_iter().map(PageId::new).collect())
    }
}

impl<'a> IntoIterator for &'a ReferenceTrace {
    type Item = PageId;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, PageId>>;

    fn into_iter(self) -> Self::IntoIter {
        self.pages.iter().copied()
    }
}

/// Loads a trace from standard input.
///
/// Convenience for piping a trace into the CLI (`pagesim run -f -`).
///
/// # Errors
///
/// Same failure modes as [`ReferenceTrace::from_reader`].
pub fn from_stdin() -> Result<ReferenceTrace, SimError> {
    ReferenceTrace::from_reader(io::stdin().lock())
}
