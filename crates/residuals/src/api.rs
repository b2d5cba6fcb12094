//! High-level API for numeric vector utilities.
//!
//! ## Purpose
//!
//! The public entry points of the crate. Each function borrows its inputs
//! through [`VectorInput`], so slices, arrays, `Vec`s and (with the `ndarray`
//! feature) `Array1` views are all accepted without copying.
//!
//! ## Invariants
//!
//! * Inputs are never modified; outputs are freshly allocated.
//! * `squared_residuals` and `squared_residuals_vectorized` return identical
//!   values for identical inputs.
//!
//! ## Non-goals
//!
//! * No rejection of NaN or infinite values; they propagate.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::residuals::{squared_residuals_loop, squared_residuals_vectorized as vectorized};
use crate::primitives::input::VectorInput;

// Publicly re-exported types
pub use crate::math::mean::EmptyInputPolicy;
pub use crate::primitives::errors::ResidualsError;

/// Arithmetic mean of `x`, failing on empty input.
///
/// Equivalent to [`mean_with`] with [`EmptyInputPolicy::Reject`].
pub fn mean<T, X>(x: &X) -> Result<T, ResidualsError>
where
    T: Float,
    X: VectorInput<T> + ?Sized,
{
    mean_with(x, EmptyInputPolicy::default())
}

/// Arithmetic mean of `x` with an explicit policy for empty input.
pub fn mean_with<T, X>(x: &X, policy: EmptyInputPolicy) -> Result<T, ResidualsError>
where
    T: Float,
    X: VectorInput<T> + ?Sized,
{
    policy.mean(x.as_vector_slice()?)
}

/// Squared residuals `(x[i] - y[i])^2`, computed with an explicit loop.
///
/// Returns [`ResidualsError::MismatchedInputs`] when the lengths differ.
pub fn squared_residuals<T, X, Y>(x: &X, y: &Y) -> Result<Vec<T>, ResidualsError>
where
    T: Float,
    X: VectorInput<T> + ?Sized,
    Y: VectorInput<T> + ?Sized,
{
    squared_residuals_loop(x.as_vector_slice()?, y.as_vector_slice()?)
}

/// Squared residuals expressed as whole-vector operations.
///
/// Same contract and same output as [`squared_residuals`].
pub fn squared_residuals_vectorized<T, X, Y>(x: &X, y: &Y) -> Result<Vec<T>, ResidualsError>
where
    T: Float,
    X: VectorInput<T> + ?Sized,
    Y: VectorInput<T> + ?Sized,
{
    vectorized(x.as_vector_slice()?, y.as_vector_slice()?)
}
