//! Sort direction for comparator configuration.
//!
//! ## Purpose
//!
//! This module defines the direction in which comparison outcomes are
//! resolved: ascending (the default) or descending.
//!
//! ## Design notes
//!
//! * **Leaf application**: The engine applies direction where primitive values
//!   meet, so a multi-key record comparison reverses every key consistently.
//! * **Reversal**: Descending order is ascending order with the outcome
//!   reversed, which keeps the comparison logic itself direction-agnostic.
//!
//! ## Invariants
//!
//! * `Ordering::Equal` is unchanged by either direction.
//! * Applying a direction twice restores the original outcome.
//!
//! ## Non-goals
//!
//! * This module does not decide which values are compared or in what order.

// External dependencies
use core::cmp::Ordering;

// ============================================================================
// Sort Direction
// ============================================================================

/// Direction in which comparison outcomes are resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    /// Smallest values first. This is the default.
    #[default]
    Ascending,

    /// Largest values first.
    Descending,
}

impl SortDirection {
    // ========================================================================
    // Metadata Methods
    // ========================================================================

    /// Get the name of the direction.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "Ascending",
            SortDirection::Descending => "Descending",
        }
    }

    // ========================================================================
    // Application
    // ========================================================================

    /// Apply the direction to a raw ascending comparison outcome.
    #[inline]
    pub fn apply(&self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}
