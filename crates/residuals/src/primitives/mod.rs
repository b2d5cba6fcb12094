//! Layer 1: Primitives
//!
//! # Purpose
//!
//! Error types, input validation and the input abstraction shared by the
//! numeric routines. It has zero internal dependencies within the crate.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: API
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Shared error types.
pub mod errors;

/// Shape validation.
pub mod validator;

/// Input containers.
pub mod input;
