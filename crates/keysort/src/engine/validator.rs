//! Validation for comparator configuration.
//!
//! ## Purpose
//!
//! This module provides the static checks run when a comparator is built.
//! It rejects key specifications that can never resolve against any record,
//! such as paths with empty segments.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first violation encountered.
//! * **Build-time only**: Checks here depend on configuration alone; checks
//!   that depend on the data being compared live in the comparison engine.
//!
//! ## Invariants
//!
//! * Validation is deterministic and side-effect free.
//! * A key specification that passes validation contains no empty segments.
//!
//! ## Non-goals
//!
//! * This module does not require keys to be present; comparing records
//!   without configured keys is reported at comparison time.
//! * This module does not compare values or inspect data.

// Internal dependencies
use crate::primitives::errors::SortError;
use crate::primitives::keyspec::KeySpec;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for comparator configuration.
///
/// Provides static methods returning `Result<(), SortError>` that fail fast
/// upon identifying the first violation.
pub struct Validator;

impl Validator {
    /// Validate the registered key sets.
    ///
    /// Empty segments arise from paths such as `""`, `"a..b"`, or `".a"`,
    /// and are rejected with the depth at which the empty segment sits.
    pub fn validate_keys(keys: &KeySpec) -> Result<(), SortError> {
        for (depth, names) in keys.levels().iter().enumerate() {
            if names.iter().any(|name| name.is_empty()) {
                return Err(SortError::EmptyKeySegment { depth });
            }
        }
        Ok(())
    }
}
