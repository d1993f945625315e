//! Blank node labels and their allocator.
//!
//! Blank nodes carry a store-local label. Anonymous individuals coming from
//! outside keep whatever label they were given; nodes minted by the writer
//! come from a [`BlankAllocator`].

use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

/// Label of a blank (anonymous) node.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlankId(String);

impl BlankId {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BlankId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "_:{}", self.0)
    }
}

/// Thread-safe blank label allocator.
///
/// Produces `{prefix}{n}` labels with monotonically increasing `n`.
/// Safe to share across threads.
#[derive(Debug)]
pub struct BlankAllocator {
    prefix: String,
    next: AtomicU64,
}

impl BlankAllocator {
    /// Create an allocator whose labels start with `prefix`.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: AtomicU64::new(0),
        }
    }

    /// Allocate the next label.
    pub fn next_id(&self) -> BlankId {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        BlankId(format!("{}{n}", self.prefix))
    }
}

impl Default for BlankAllocator {
    fn default() -> Self {
        Self::new("g")
    }
}
