//! Layer 2: Engine
//!
//! # Purpose
//!
//! This layer implements the comparison procedure and the configuration
//! checks behind the public API. It depends only on the primitives layer.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: API
//!   ↓
//! Layer 2: Engine ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Recursive value comparison.
pub mod compare;

/// Configuration validation.
pub mod validator;
