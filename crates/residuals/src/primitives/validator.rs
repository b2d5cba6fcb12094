//! Input validation for numeric vector operations.
//!
//! ## Purpose
//!
//! Checks the shape requirements of the inputs before any arithmetic runs.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Shape only**: Values are never inspected; NaN and infinities are
//!   propagated by the arithmetic under IEEE-754 rules.
//!
//! ## Non-goals
//!
//! * This module does not transform or filter input data.

// Internal dependencies
use crate::primitives::errors::ResidualsError;

/// Validation utility for numeric vector inputs.
pub struct Validator;

impl Validator {
    /// Reject an empty vector.
    pub fn validate_non_empty<T>(x: &[T]) -> Result<(), ResidualsError> {
        if x.is_empty() {
            return Err(ResidualsError::EmptyInput);
        }
        Ok(())
    }

    /// Require `x` and `y` to have the same length.
    pub fn validate_lengths<T>(x: &[T], y: &[T]) -> Result<(), ResidualsError> {
        if x.len() != y.len() {
            return Err(ResidualsError::MismatchedInputs {
                x_len: x.len(),
                y_len: y.len(),
            });
        }
        Ok(())
    }
}
