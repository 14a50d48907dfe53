//! Dynamic values compared by the sorting engine.
//!
//! ## Purpose
//!
//! This module defines the dynamic value model: a tagged representation of
//! strings, numbers, records, and the auxiliary shapes (null, booleans,
//! arrays) that can appear inside loosely structured data.
//!
//! ## Design notes
//!
//! * **Tagged**: Every value carries an explicit [`ValueKind`] tag, so the
//!   engine dispatches on kind instead of probing representations.
//! * **Generic**: Numeric leaves are generic over `Float` for flexible
//!   precision (`f32`/`f64`).
//! * **Ordered fields**: Records store fields in a `BTreeMap`; field order in
//!   the data never influences comparison order, which comes from the
//!   configured keys alone.
//! * **No-std**: Uses `alloc` collections so the model works without the
//!   standard library.
//!
//! ## Key concepts
//!
//! * **Comparable kinds**: Strings, numbers, and records participate in
//!   comparisons. Null, booleans, and arrays are representable but reported
//!   as unsupported when they meet a comparison.
//! * **Field access**: `field()` resolves a name on records and returns
//!   `None` for every other kind.
//!
//! ## Invariants
//!
//! * `kind()` is total: every variant maps to exactly one [`ValueKind`].
//! * Record field names are unique within a record.
//!
//! ## Non-goals
//!
//! * This module does not compare values (see the engine layer).
//! * This module does not parse or serialize values.

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
use num_traits::Float;

// ============================================================================
// Value Kind
// ============================================================================

/// Tag identifying the shape of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// Absent or explicitly null data.
    Null,

    /// Boolean flag.
    Bool,

    /// Floating-point number.
    Number,

    /// UTF-8 string.
    Str,

    /// Ordered list of values.
    Array,

    /// Named fields mapping to values.
    Record,
}

impl ValueKind {
    /// Get the name of the kind.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            ValueKind::Null => "Null",
            ValueKind::Bool => "Bool",
            ValueKind::Number => "Number",
            ValueKind::Str => "Str",
            ValueKind::Array => "Array",
            ValueKind::Record => "Record",
        }
    }
}

// ============================================================================
// Value
// ============================================================================

/// A dynamic value: string, number, record, or one of the auxiliary shapes.
#[derive(Debug, Clone, PartialEq)]
pub enum Value<T = f64> {
    /// Absent or explicitly null data.
    Null,

    /// Boolean flag.
    Bool(bool),

    /// Floating-point number.
    Number(T),

    /// UTF-8 string.
    Str(String),

    /// Ordered list of values.
    Array(Vec<Value<T>>),

    /// Named fields mapping to values.
    Record(BTreeMap<String, Value<T>>),
}

impl<T: Float> Value<T> {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// Create a numeric value.
    #[inline]
    pub fn number(value: T) -> Self {
        Value::Number(value)
    }

    /// Create an array value from an iterator of elements.
    pub fn array<I>(items: I) -> Self
    where
        I: IntoIterator<Item = Value<T>>,
    {
        Value::Array(items.into_iter().collect())
    }

    /// Create a record value from an iterator of `(name, value)` pairs.
    ///
    /// Later entries overwrite earlier ones with the same name.
    pub fn record<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Value<T>)>,
    {
        Value::Record(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    // ========================================================================
    // Inspection
    // ========================================================================

    /// Get the kind tag of this value.
    #[inline]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Bool,
            Value::Number(_) => ValueKind::Number,
            Value::Str(_) => ValueKind::Str,
            Value::Array(_) => ValueKind::Array,
            Value::Record(_) => ValueKind::Record,
        }
    }

    /// Look up a field by name. Returns `None` for non-record values and for
    /// records without the field.
    #[inline]
    pub fn field(&self, name: &str) -> Option<&Value<T>> {
        match self {
            Value::Record(fields) => fields.get(name),
            _ => None,
        }
    }
}

// ============================================================================
// Conversions
// ============================================================================

impl<T> From<&str> for Value<T> {
    fn from(value: &str) -> Self {
        Value::Str(String::from(value))
    }
}

impl<T> From<String> for Value<T> {
    fn from(value: String) -> Self {
        Value::Str(value)
    }
}

impl<T> From<bool> for Value<T> {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}
