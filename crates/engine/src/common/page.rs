//! Page identifier type.
//!
//! This module defines a strong type for page numbers to prevent accidental
//! mixing with trace indices (logical time), which are plain `usize` values.
//! A page identifier is opaque: it carries no semantic meaning beyond
//! equality and ordering. In particular there is no declared range; any
//! value that appears in a trace is a valid page.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An opaque page identifier from a reference trace.
///
/// Pages are compared only for equality (residency membership) and order
/// (the Optimal policy's deterministic tie-break). No arithmetic is defined.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageId(pub u64);

impl PageId {
    /// Creates a new page identifier from a raw 64-bit value.
    ///
    /// # Arguments
    ///
    /// * `page` - The raw page number.
    ///
    /// # Returns
    ///
    /// A new `PageId` instance wrapping the provided number.
    #[inline(always)]
    pub fn new(page: u64) -> Self {
        Self(page)
    }

    /// Returns the raw 64-bit page number.
    #[inline(always)]
    pub fn val(&self) -> u64 {
        self.0
    }
}

impl From<u64> for PageId {
    fn from(page: u64) -> Self {
        Self(page)
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
