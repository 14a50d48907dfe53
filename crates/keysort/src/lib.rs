//! # keysort — Configurable multi-key comparators for Rust
//!
//! A small library for building three-way comparators over dynamic values:
//! strings, numbers, and nested records addressed by dotted key paths such
//! as `"user.name.first"`.
//!
//! ## What is keysort?
//!
//! Loosely structured data (decoded configuration, API payloads, document
//! rows) rarely comes with a natural ordering. This crate builds one from
//! configuration: pick a direction, name the fields that matter, and get a
//! comparator that sorts records by those fields with multi-key
//! tie-breaking, compares strings case-insensitively, and reports malformed
//! data as errors instead of panicking mid-sort.
//!
//! ## Quick Start
//!
//! ### Typical Use
//!
//! ```rust
//! use keysort::prelude::*;
//!
//! let mut people = vec![
//!     Value::record([("name", Value::from("Charlie")), ("age", Value::number(35.0))]),
//!     Value::record([("name", Value::from("alice")), ("age", Value::number(30.0))]),
//!     Value::record([("name", Value::from("Bob")), ("age", Value::number(25.0))]),
//! ];
//!
//! // Build the comparator
//! let comparator = ComparatorBuilder::new()
//!     .key("name")        // Sort by the "name" field
//!     .build()?;
//!
//! // Sort the records in place
//! comparator.sort(&mut people)?;
//!
//! assert_eq!(people[0].field("name"), Some(&Value::from("alice")));
//! assert_eq!(people[1].field("name"), Some(&Value::from("Bob")));
//! assert_eq!(people[2].field("name"), Some(&Value::from("Charlie")));
//! # Result::<(), SortError>::Ok(())
//! ```
//!
//! ### Full Features
//!
//! ```rust
//! use keysort::prelude::*;
//!
//! let mut releases = vec![
//!     Value::record([
//!         ("name", Value::from("one-four")),
//!         ("version", Value::record([
//!             ("major", Value::number(1.0)),
//!             ("minor", Value::number(4.0)),
//!         ])),
//!     ]),
//!     Value::record([
//!         ("name", Value::from("two-zero")),
//!         ("version", Value::record([
//!             ("major", Value::number(2.0)),
//!             ("minor", Value::number(0.0)),
//!         ])),
//!     ]),
//!     Value::record([
//!         ("name", Value::from("one-ten")),
//!         ("version", Value::record([
//!             ("major", Value::number(1.0)),
//!             ("minor", Value::number(10.0)),
//!         ])),
//!     ]),
//! ];
//!
//! // Newest release first: nested keys with multi-key tie-breaking
//! let comparator = ComparatorBuilder::new()
//!     .direction(Descending)                      // Largest first
//!     .keys(["version.major", "version.minor"])   // Tie-break major by minor
//!     .build()?;
//!
//! comparator.sort(&mut releases)?;
//!
//! assert_eq!(releases[0].field("name"), Some(&Value::from("two-zero")));
//! assert_eq!(releases[1].field("name"), Some(&Value::from("one-ten")));
//! assert_eq!(releases[2].field("name"), Some(&Value::from("one-four")));
//! # Result::<(), SortError>::Ok(())
//! ```
//!
//! ### Result and Error Handling
//!
//! Comparison is fallible: mixed kinds, missing fields, and missing key
//! configuration are reported as [`SortError`](prelude::SortError) values.
//!
//! ```rust
//! use keysort::prelude::*;
//!
//! let comparator = ComparatorBuilder::new().key("id").build()?;
//!
//! let text = Value::<f64>::from("alpha");
//! let number = Value::number(4.0);
//!
//! match comparator.compare(&text, &number) {
//!     Ok(ordering) => println!("ordered: {ordering:?}"),
//!     Err(e) => println!("cannot compare: {e}"),
//! }
//!
//! // Sorting surfaces the first comparison error
//! let mut mixed = vec![Value::number(2.0), Value::from("alpha")];
//! let result = comparator.sort(&mut mixed);
//! assert!(result.is_err());
//! # Result::<(), SortError>::Ok(())
//! ```
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! The crate supports `no_std` environments. Disable default features to
//! remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! keysort = { version = "0.1", default-features = false }
//! ```
//!
//! **Minimal example:**
//!
//! ```rust
//! # #[cfg(feature = "std")] {
//! use keysort::prelude::*;
//!
//! fn order_readings() -> Result<(), SortError> {
//!     // Small readings with f32 to reduce memory footprint
//!     let mut readings = vec![
//!         Value::record([("sensor", Value::from("b")), ("celsius", Value::number(21.5_f32))]),
//!         Value::record([("sensor", Value::from("a")), ("celsius", Value::number(19.0_f32))]),
//!     ];
//!
//!     let comparator = ComparatorBuilder::new().key("sensor").build()?;
//!     comparator.sort(&mut readings)?;
//!
//!     Ok(())
//! }
//! # order_readings().unwrap();
//! # }
//! ```
//!
//! ## License
//!
//! See the repository for license information and contribution guidelines.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Layer 1: Primitives - data structures and basic utilities.
mod primitives;

// Layer 2: Engine - comparison logic and configuration validation.
mod engine;

// High-level fluent API for building comparators.
mod api;

// Standard keysort prelude.
pub mod prelude {
    pub use crate::api::{
        Comparator, ComparatorBuilder, KeySpec,
        SortDirection::{self, Ascending, Descending},
        SortError, SortOptions, Value, ValueKind,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
