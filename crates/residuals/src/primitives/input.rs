//! Input abstractions for numeric vectors.
//!
//! ## Purpose
//!
//! This module lets every operation accept slices, vectors and (with the
//! `ndarray` feature) one-dimensional ndarray arrays through one interface.
//!
//! ## Design notes
//!
//! * **Zero-copy**: Provides direct slice access to the underlying buffer.
//! * **Fail-fast validation**: Non-contiguous ndarray views are rejected.
//!
//! ## Invariants
//!
//! * Returned slices represent all elements of the input container, in order.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(all(feature = "ndarray", not(feature = "std")))]
use alloc::string::ToString;

// External dependencies
use num_traits::Float;

#[cfg(feature = "ndarray")]
use ndarray::{ArrayBase, Data, Ix1};

// Internal dependencies
use crate::primitives::errors::ResidualsError;

/// Trait for types that can be read as a numeric vector.
pub trait VectorInput<T: Float> {
    /// Convert the input to a contiguous slice.
    fn as_vector_slice(&self) -> Result<&[T], ResidualsError>;
}

impl<T: Float> VectorInput<T> for [T] {
    fn as_vector_slice(&self) -> Result<&[T], ResidualsError> {
        Ok(self)
    }
}

impl<T: Float, const N: usize> VectorInput<T> for [T; N] {
    fn as_vector_slice(&self) -> Result<&[T], ResidualsError> {
        Ok(self.as_slice())
    }
}

impl<T: Float> VectorInput<T> for Vec<T> {
    fn as_vector_slice(&self) -> Result<&[T], ResidualsError> {
        Ok(self.as_slice())
    }
}

#[cfg(feature = "ndarray")]
impl<T: Float, S> VectorInput<T> for ArrayBase<S, Ix1>
where
    S: Data<Elem = T>,
{
    fn as_vector_slice(&self) -> Result<&[T], ResidualsError> {
        self.as_slice().ok_or_else(|| {
            ResidualsError::InvalidInput("ndarray input must be contiguous in memory".to_string())
        })
    }
}
