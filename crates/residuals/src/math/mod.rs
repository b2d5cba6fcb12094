//! Layer 2: Math
//!
//! # Purpose
//!
//! Pure numeric routines over slices:
//! - Arithmetic mean with an explicit empty-input policy
//! - Squared residuals (explicit loop and vectorized form)
//!
//! # Architecture
//!
//! ```text
//! Layer 3: API
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Arithmetic mean.
pub mod mean;

/// Squared residuals.
pub mod residuals;
