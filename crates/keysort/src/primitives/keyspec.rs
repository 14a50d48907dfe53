//! Key specification for multi-key record comparison.
//!
//! ## Purpose
//!
//! This module maintains the sort keys configured on a comparator. Dotted
//! paths such as `"user.name.first"` are decomposed into one key set per
//! recursion depth, and all paths contribute to the same shared sets.
//!
//! ## Design notes
//!
//! * **Per-depth sets**: Depth `0` holds the first segment of every path,
//!   depth `1` the second segments, and so on. A record comparison at depth
//!   `d` consults exactly the set for depth `d`.
//! * **Insertion order**: Within a depth, keys keep the order in which they
//!   were first added; that order is the tie-breaking order.
//! * **Deduplication**: Re-adding a segment already present at a depth is a
//!   no-op, so repeated paths cannot inflate the key sets.
//! * **Verbatim segments**: Segments are recorded exactly as written,
//!   including empty ones; malformed paths are rejected later by validation
//!   rather than silently repaired here.
//!
//! ## Key concepts
//!
//! ### Shared depth sets
//!
//! Adding `"a.x"` and `"b.y"` yields depth set `{a, b}` at depth 0 and
//! `{x, y}` at depth 1. The depth-1 set applies inside whichever sub-record
//! a comparison descends into; keys are not scoped per branch.
//!
//! ## Invariants
//!
//! * The key sets grow monotonically; nothing is ever removed.
//! * Within a depth, keys are unique and ordered by first insertion.
//!
//! ## Non-goals
//!
//! * This module does not validate segments (see the engine validator).
//! * This module does not compare values.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::string::String;
#[cfg(feature = "std")]
use std::vec::Vec;

// ============================================================================
// Key Specification
// ============================================================================

/// Ordered sort keys, grouped by recursion depth.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeySpec {
    /// One key set per depth; `levels[d]` lists the keys for depth `d`.
    levels: Vec<Vec<String>>,
}

impl KeySpec {
    /// Create an empty key specification.
    pub const fn new() -> Self {
        Self { levels: Vec::new() }
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Decompose a dotted path and register each segment at its depth.
    ///
    /// Duplicate segments are ignored; new segments append after the keys
    /// already present at that depth.
    pub fn add_path(&mut self, path: &str) {
        for (depth, segment) in path.split('.').enumerate() {
            if depth == self.levels.len() {
                self.levels.push(Vec::new());
            }
            let names = &mut self.levels[depth];
            if !names.iter().any(|existing| existing == segment) {
                names.push(String::from(segment));
            }
        }
    }

    // ========================================================================
    // Inspection
    // ========================================================================

    /// Get the keys configured for a depth, in tie-breaking order.
    #[inline]
    pub fn keys_at(&self, depth: usize) -> Option<&[String]> {
        self.levels.get(depth).map(Vec::as_slice)
    }

    /// Number of depths that have at least one key registered.
    #[inline]
    pub fn depth_count(&self) -> usize {
        self.levels.len()
    }

    /// Whether no keys have been registered at any depth.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.levels.iter().all(|names| names.is_empty())
    }

    /// All key sets, indexed by depth.
    #[inline]
    pub fn levels(&self) -> &[Vec<String>] {
        &self.levels
    }
}
