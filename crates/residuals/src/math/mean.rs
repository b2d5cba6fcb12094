//! Arithmetic mean of a numeric vector.
//!
//! The sum is accumulated left to right in a single pass and divided by the
//! element count. Non-finite values are not rejected; they flow through the
//! arithmetic under IEEE-754 rules.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::ResidualsError;
use crate::primitives::validator::Validator;

/// Policy applied when `mean` receives an empty vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptyInputPolicy {
    /// Fail with `ResidualsError::EmptyInput`.
    #[default]
    Reject,

    /// Return NaN, the result of dividing an empty sum by zero.
    ReturnNan,
}

impl EmptyInputPolicy {
    // Compute the arithmetic mean of `x` under this policy.
    pub fn mean<T: Float>(&self, x: &[T]) -> Result<T, ResidualsError> {
        if x.is_empty() && *self == Self::ReturnNan {
            return Ok(T::nan());
        }
        Validator::validate_non_empty(x)?;

        let mut sum = T::zero();
        for &val in x {
            sum = sum + val;
        }

        // Only reachable for Float types that cannot represent the length.
        let n = T::from(x.len()).ok_or_else(|| {
            ResidualsError::InvalidInput("vector length is not representable".into())
        })?;

        Ok(sum / n)
    }
}
