//! Recursive comparison of dynamic values.
//!
//! ## Purpose
//!
//! This module implements the comparison procedure at the heart of the crate:
//! a three-way comparison over dynamic values that handles strings, nested
//! records, and numbers, driven by the configured direction and key sets.
//!
//! ## Design notes
//!
//! * **Kind dispatch**: The pair of value kinds selects the procedure; any
//!   pairing outside string/string, record/record, and number/number is an
//!   error rather than an arbitrary ordering.
//! * **Presence before order**: A record comparison resolves every configured
//!   key on both sides before the first sub-comparison runs, so a missing
//!   field is reported even when an earlier key would have decided.
//! * **Leaf direction**: Direction is applied where strings or numbers meet.
//!   Record comparisons pass outcomes through unchanged, which reverses every
//!   key of a multi-key sort consistently.
//! * **Depth tracking**: Each descent into record fields increases the depth
//!   by one; the key set for that depth governs the nested comparison.
//!
//! ## Key concepts
//!
//! ### Comparison procedure
//!
//! 1. **Strings**: ASCII-case-insensitive lexicographic comparison.
//! 2. **Records**: Compare field-by-field in key order; the first key whose
//!    values do not tie decides the outcome.
//! 3. **Numbers**: Numeric comparison; NaN pairs tie.
//!
//! ## Invariants
//!
//! * Comparison never mutates the values or the key specification.
//! * Swapping the operands either swaps the outcome or produces the
//!   mirrored error.
//! * Ties are exact: only `Ordering::Equal` advances to the next key.
//!
//! ## Non-goals
//!
//! * This module does not sort slices (see the API layer).
//! * This module does not validate key paths (see the validator).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::collections::BTreeMap;
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::collections::BTreeMap;
#[cfg(feature = "std")]
use std::string::String;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::cmp::Ordering;
use num_traits::Float;

// Internal dependencies
use crate::primitives::direction::SortDirection;
use crate::primitives::errors::SortError;
use crate::primitives::keyspec::KeySpec;
use crate::primitives::value::Value;

// ============================================================================
// String Comparison
// ============================================================================

/// Compare two strings lexicographically, folding ASCII case.
///
/// Non-ASCII characters compare by code point; only ASCII letters are folded.
#[inline]
pub fn compare_case_insensitive(a: &str, b: &str) -> Ordering {
    let lhs = a.chars().map(|c| c.to_ascii_lowercase());
    let rhs = b.chars().map(|c| c.to_ascii_lowercase());
    lhs.cmp(rhs)
}

// ============================================================================
// Value Comparer
// ============================================================================

/// Recursive three-way comparison over dynamic values.
///
/// Borrows the configured direction and key sets; the same comparer can be
/// reused across any number of comparisons.
pub struct ValueComparer<'a> {
    /// Direction applied at string and number leaves.
    direction: SortDirection,

    /// Per-depth key sets consulted for record comparisons.
    keys: &'a KeySpec,
}

impl<'a> ValueComparer<'a> {
    /// Create a comparer over the given direction and key sets.
    pub fn new(direction: SortDirection, keys: &'a KeySpec) -> Self {
        Self { direction, keys }
    }

    // ========================================================================
    // Comparison
    // ========================================================================

    /// Compare two top-level values.
    pub fn compare<T: Float>(&self, a: &Value<T>, b: &Value<T>) -> Result<Ordering, SortError> {
        self.compare_at(a, b, 0)
    }

    /// Compare two values at the given recursion depth.
    pub fn compare_at<T: Float>(
        &self,
        a: &Value<T>,
        b: &Value<T>,
        depth: usize,
    ) -> Result<Ordering, SortError> {
        match (a, b) {
            (Value::Str(lhs), Value::Str(rhs)) => {
                Ok(self.direction.apply(compare_case_insensitive(lhs, rhs)))
            }
            (Value::Record(lhs), Value::Record(rhs)) => self.compare_records(lhs, rhs, depth),
            (Value::Number(lhs), Value::Number(rhs)) => {
                // NaN pairs tie instead of poisoning the ordering
                let ordering = lhs.partial_cmp(rhs).unwrap_or(Ordering::Equal);
                Ok(self.direction.apply(ordering))
            }
            _ => Err(SortError::UnsupportedType {
                lhs: a.kind(),
                rhs: b.kind(),
                depth,
            }),
        }
    }

    /// Compare two records using the key set configured for `depth`.
    fn compare_records<T: Float>(
        &self,
        lhs: &BTreeMap<String, Value<T>>,
        rhs: &BTreeMap<String, Value<T>>,
        depth: usize,
    ) -> Result<Ordering, SortError> {
        let names = match self.keys.keys_at(depth) {
            Some(names) if !names.is_empty() => names,
            _ => return Err(SortError::NoKeysConfigured { depth }),
        };

        // Resolve every configured key on both sides up front, so a missing
        // field is reported even when an earlier key would decide.
        let mut pairs = Vec::with_capacity(names.len());
        for name in names {
            match (lhs.get(name), rhs.get(name)) {
                (Some(left), Some(right)) => pairs.push((left, right)),
                _ => {
                    return Err(SortError::MissingField {
                        field: name.clone(),
                        depth,
                    });
                }
            }
        }

        // First key whose values do not tie exactly decides the outcome.
        for (left, right) in pairs {
            let ordering = self.compare_at(left, right, depth + 1)?;
            if ordering != Ordering::Equal {
                return Ok(ordering);
            }
        }

        Ok(Ordering::Equal)
    }
}
