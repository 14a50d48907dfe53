//! Error types for comparator construction and comparison.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur while building a
//! comparator or while comparing values: malformed key paths, missing sort
//! keys, absent record fields, and unsupported value pairings.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors carry the field name, value kinds, and recursion
//!   depth involved, so a failure inside nested records is diagnosable.
//! * **Deferred**: Key configuration problems are reported from `build()`;
//!   data-dependent problems surface when values are actually compared.
//! * **No-std**: Supports `no_std` environments by using `alloc` for the
//!   field names carried in errors.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error`
//!   (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Configuration errors**: Empty key segments caught at build time.
//! 2. **Comparison errors**: Missing keys, missing fields, and unsupported
//!    kind pairings caught at comparison time.
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for diagnosis.
//! * `depth` is `0` for top-level values and increases by one per nested
//!   record.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation or comparison logic itself.
//! * This module does not provide error recovery or fallback strategies.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// Internal dependencies
use crate::primitives::value::ValueKind;

// ============================================================================
// Error Type
// ============================================================================

/// Error type for comparator construction and comparison.
#[derive(Debug, Clone, PartialEq)]
pub enum SortError {
    /// Two records were compared at a depth with no sort keys configured.
    NoKeysConfigured {
        /// Recursion depth at which keys were required.
        depth: usize,
    },

    /// A configured sort key was absent from at least one record.
    MissingField {
        /// Name of the missing field.
        field: String,
        /// Recursion depth of the records that were probed.
        depth: usize,
    },

    /// The pair of values has no defined ordering.
    UnsupportedType {
        /// Kind of the left-hand value.
        lhs: ValueKind,
        /// Kind of the right-hand value.
        rhs: ValueKind,
        /// Recursion depth at which the pair met.
        depth: usize,
    },

    /// A key path contained an empty segment (for example `"a..b"`).
    EmptyKeySegment {
        /// Depth of the empty segment within the path.
        depth: usize,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for SortError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::NoKeysConfigured { depth } => {
                write!(f, "No sort keys configured at depth {depth}")
            }
            Self::MissingField { field, depth } => {
                write!(f, "Missing field '{field}' at depth {depth}")
            }
            Self::UnsupportedType { lhs, rhs, depth } => {
                write!(
                    f,
                    "Unsupported comparison between {} and {} at depth {depth}",
                    lhs.name(),
                    rhs.name()
                )
            }
            Self::EmptyKeySegment { depth } => {
                write!(
                    f,
                    "Empty key segment at depth {depth} (key paths must not contain empty segments)"
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for SortError {}
