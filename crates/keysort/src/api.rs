//! High-level API for building comparators.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point for the crate.
//! It implements a fluent builder for configuring a sort direction and key
//! paths, and the comparator produced from that configuration.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all settings.
//! * **Validated**: Key paths are validated when `.build()` is called.
//! * **Snapshot**: `build()` captures the configuration at that moment; the
//!   builder remains usable and later changes affect later builds only.
//! * **Type-Safe**: Comparison methods are generic over `Float` types for
//!   flexible precision.
//!
//! ## Key concepts
//!
//! * **Configuration Flow**: Builder pattern ending in `.build()`.
//! * **Options bundle**: [`SortOptions`] seeds a builder from optional values
//!   in one step.
//! * **Fallible comparison**: Comparators return `Result`, and sorting
//!   surfaces the first comparison error instead of panicking.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`ComparatorBuilder`] via `ComparatorBuilder::new()` or
//!    `ComparatorBuilder::with_options()`.
//! 2. Chain configuration methods (`.direction()`, `.key()`, `.keys()`).
//! 3. Call `.build()` to validate and obtain a [`Comparator`].

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::string::String;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::cmp::Ordering;
use num_traits::Float;

// Internal dependencies
use crate::engine::compare::ValueComparer;
use crate::engine::validator::Validator;

// Publicly re-exported types
pub use crate::primitives::direction::SortDirection;
pub use crate::primitives::errors::SortError;
pub use crate::primitives::keyspec::KeySpec;
pub use crate::primitives::value::{Value, ValueKind};

// ============================================================================
// Sort Options
// ============================================================================

/// Optional configuration bundle for seeding a [`ComparatorBuilder`].
///
/// Fields left as `None` keep the builder defaults.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SortOptions {
    /// Sort direction; defaults to ascending when absent.
    pub direction: Option<SortDirection>,

    /// Dotted key paths to register, in order.
    pub keys: Option<Vec<String>>,
}

// ============================================================================
// Comparator Builder
// ============================================================================

/// Fluent builder for configuring a [`Comparator`].
#[derive(Debug, Clone)]
pub struct ComparatorBuilder {
    /// Direction applied to every comparison outcome.
    pub direction: SortDirection,

    /// Sort keys registered so far, grouped by depth.
    pub keys: KeySpec,
}

impl Default for ComparatorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ComparatorBuilder {
    /// Create a new builder with default settings (ascending, no keys).
    pub fn new() -> Self {
        Self {
            direction: SortDirection::default(),
            keys: KeySpec::new(),
        }
    }

    /// Create a builder seeded from an options bundle.
    ///
    /// Absent fields keep the defaults; key paths are registered in the
    /// order given.
    pub fn with_options(options: SortOptions) -> Self {
        let mut builder = Self::new();
        if let Some(direction) = options.direction {
            builder.direction = direction;
        }
        if let Some(paths) = options.keys {
            for path in &paths {
                builder.keys.add_path(path);
            }
        }
        builder
    }

    // ========================================================================
    // Setters
    // ========================================================================

    /// Set the sort direction. Repeated calls replace the previous value.
    pub fn direction(mut self, direction: SortDirection) -> Self {
        self.direction = direction;
        self
    }

    /// Register a dotted key path (for example `"user.name"`).
    ///
    /// Each segment joins the key set for its depth; segments already
    /// present are ignored.
    pub fn key(mut self, path: &str) -> Self {
        self.keys.add_path(path);
        self
    }

    /// Register several key paths, in order.
    pub fn keys<I, S>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for path in paths {
            self.keys.add_path(path.as_ref());
        }
        self
    }

    // ========================================================================
    // Build Method
    // ========================================================================

    /// Validate the configuration and produce a [`Comparator`].
    ///
    /// The comparator captures a snapshot of the current configuration; the
    /// builder remains usable, and paths added afterwards only affect
    /// comparators built afterwards.
    pub fn build(&self) -> Result<Comparator, SortError> {
        Validator::validate_keys(&self.keys)?;

        Ok(Comparator {
            direction: self.direction,
            keys: self.keys.clone(),
        })
    }
}

// ============================================================================
// Comparator
// ============================================================================

/// Configured three-way comparator over dynamic values.
#[derive(Debug, Clone)]
pub struct Comparator {
    direction: SortDirection,
    keys: KeySpec,
}

impl Comparator {
    /// Compare two values under this configuration.
    ///
    /// Strings compare case-insensitively, records compare by the configured
    /// keys with multi-key tie-breaking, and numbers compare numerically.
    /// Any other pairing reports [`SortError::UnsupportedType`].
    pub fn compare<T: Float>(&self, a: &Value<T>, b: &Value<T>) -> Result<Ordering, SortError> {
        ValueComparer::new(self.direction, &self.keys).compare(a, b)
    }

    /// Sort a slice in place under this configuration.
    ///
    /// The sort is stable. If any comparison fails, the first error is
    /// returned, remaining comparisons are treated as ties, and the slice is
    /// left in a valid but unspecified order.
    pub fn sort<T: Float>(&self, values: &mut [Value<T>]) -> Result<(), SortError> {
        let comparer = ValueComparer::new(self.direction, &self.keys);
        let mut first_error: Option<SortError> = None;

        values.sort_by(|a, b| match comparer.compare(a, b) {
            Ok(ordering) => ordering,
            Err(err) => {
                if first_error.is_none() {
                    first_error = Some(err);
                }
                Ordering::Equal
            }
        });

        match first_error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    // ========================================================================
    // Inspection
    // ========================================================================

    /// The direction this comparator was built with.
    pub fn direction(&self) -> SortDirection {
        self.direction
    }

    /// The key sets this comparator was built with.
    pub fn keys(&self) -> &KeySpec {
        &self.keys
    }
}
