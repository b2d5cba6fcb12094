//! Element-wise squared residuals.
//!
//! Two renditions of the same contract, `r[i] = (x[i] - y[i])^2`:
//!
//! * [`squared_residuals_loop`] walks the indices explicitly.
//! * [`squared_residuals_vectorized`] expresses the computation as whole-vector
//!   operations (difference, then square) over iterator adaptors.
//!
//! Both square with a single multiplication so their outputs agree bit for
//! bit. Lengths are checked before any element is read.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::ResidualsError;
use crate::primitives::validator::Validator;

/// Squared residuals computed with an explicit index loop.
#[allow(clippy::needless_range_loop)]
pub fn squared_residuals_loop<T: Float>(x: &[T], y: &[T]) -> Result<Vec<T>, ResidualsError> {
    Validator::validate_lengths(x, y)?;

    let n = x.len();
    let mut residuals = Vec::with_capacity(n);
    for i in 0..n {
        let d = x[i] - y[i];
        residuals.push(d * d);
    }

    Ok(residuals)
}

/// Squared residuals computed as a whole-vector expression.
pub fn squared_residuals_vectorized<T: Float>(
    x: &[T],
    y: &[T],
) -> Result<Vec<T>, ResidualsError> {
    Validator::validate_lengths(x, y)?;

    Ok(x.iter()
        .zip(y)
        .map(|(&xi, &yi)| xi - yi)
        .map(|d| d * d)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loop_and_vectorized_share_bits() {
        let x = [1.5f64, -2.25, 1e300, f64::NAN, 0.1];
        let y = [0.5f64, 3.75, -1e300, 1.0, 0.2];

        let a = squared_residuals_loop(&x, &y).unwrap();
        let b = squared_residuals_vectorized(&x, &y).unwrap();

        let a_bits: Vec<u64> = a.iter().map(|v| v.to_bits()).collect();
        let b_bits: Vec<u64> = b.iter().map(|v| v.to_bits()).collect();
        assert_eq!(a_bits, b_bits);
    }

    #[test]
    fn shorter_y_is_rejected_before_reading() {
        let err = squared_residuals_loop(&[1.0f64, 2.0, 3.0], &[1.0]).unwrap_err();
        assert_eq!(
            err,
            ResidualsError::MismatchedInputs { x_len: 3, y_len: 1 }
        );
    }
}
