//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the primitive abstractions and data structures used
//! throughout the crate. It has no dependencies on higher layers.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: API
//!   ↓
//! Layer 2: Engine
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Sort direction.
pub mod direction;

/// Shared error types.
pub mod errors;

/// Key specification for multi-key comparison.
pub mod keyspec;

/// Dynamic value model.
pub mod value;
