//! Error types for numeric vector operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur when computing a
//! mean or squared residuals over numeric vectors.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include relevant values (e.g., both input lengths).
//! * **No-std**: Supports `no_std` environments by using `alloc` for dynamic messages.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for diagnosis.
//! * Error messages are consistent in tone and formatting.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for numeric vector operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResidualsError {
    /// Input vector is empty and the active policy does not allow it.
    EmptyInput,

    /// `x` and `y` must have the same number of elements.
    MismatchedInputs {
        /// Number of elements in the `x` vector.
        x_len: usize,
        /// Number of elements in the `y` vector.
        y_len: usize,
    },

    /// Generic invalid input error with a descriptive message.
    InvalidInput(String),
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for ResidualsError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::EmptyInput => write!(f, "Input array is empty"),
            Self::MismatchedInputs { x_len, y_len } => {
                write!(f, "Length mismatch: x has {x_len} points, y has {y_len}")
            }
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for ResidualsError {}
