#![cfg(feature = "dev")]
//! Tests for input containers and validation.
//!
//! ## Test Organization
//!
//! 1. **Containers** - Slices, arrays and vectors
//! 2. **Validator** - Shape checks
//! 3. **ndarray** - Contiguous and strided views (requires the `ndarray` feature)

use residuals::internals::primitives::errors::ResidualsError;
use residuals::internals::primitives::input::VectorInput;
use residuals::internals::primitives::validator::Validator;

// ============================================================================
// Container Tests
// ============================================================================

/// Slices, arrays and vectors expose the same elements.
#[test]
fn test_containers_expose_same_slice() {
    let v = vec![1.0f64, 2.0, 3.0];
    let a = [1.0f64, 2.0, 3.0];

    assert_eq!(v.as_vector_slice().unwrap(), &[1.0, 2.0, 3.0]);
    assert_eq!(a.as_vector_slice().unwrap(), &[1.0, 2.0, 3.0]);
    assert_eq!(v[..].as_vector_slice().unwrap(), &[1.0, 2.0, 3.0]);
}

// ============================================================================
// Validator Tests
// ============================================================================

/// Empty vectors fail the non-empty check.
#[test]
fn test_validator_non_empty() {
    let empty: [f64; 0] = [];
    assert_eq!(
        Validator::validate_non_empty(&empty),
        Err(ResidualsError::EmptyInput)
    );
    assert!(Validator::validate_non_empty(&[0.0f64]).is_ok());
}

/// Length check reports both lengths.
#[test]
fn test_validator_lengths() {
    assert!(Validator::validate_lengths(&[1.0f64, 2.0], &[3.0, 4.0]).is_ok());
    assert_eq!(
        Validator::validate_lengths(&[1.0f64, 2.0], &[3.0]),
        Err(ResidualsError::MismatchedInputs { x_len: 2, y_len: 1 })
    );
}

/// Error display strings.
#[test]
fn test_error_display() {
    assert_eq!(ResidualsError::EmptyInput.to_string(), "Input array is empty");
    assert_eq!(
        ResidualsError::InvalidInput("bad".to_string()).to_string(),
        "Invalid input: bad"
    );
}

// ============================================================================
// ndarray Tests
// ============================================================================

#[cfg(feature = "ndarray")]
mod ndarray_inputs {
    use ndarray::{Array1, s};

    use residuals::internals::api::{mean, squared_residuals};
    use residuals::internals::primitives::errors::ResidualsError;

    /// Contiguous arrays are accepted without copying.
    #[test]
    fn test_ndarray_contiguous() {
        let x = Array1::from_vec(vec![1.0f64, 2.0, 3.0, 4.0]);
        let y = Array1::from_vec(vec![1.0f64, 2.0, 3.0, 6.0]);

        assert_eq!(mean(&x).unwrap(), 2.5);
        assert_eq!(squared_residuals(&x, &y).unwrap(), vec![0.0, 0.0, 0.0, 4.0]);
    }

    /// Strided views are rejected.
    #[test]
    fn test_ndarray_strided_view_rejected() {
        let x = Array1::from_vec(vec![1.0f64, 2.0, 3.0, 4.0]);
        let view = x.slice(s![..;2]);

        match mean(&view) {
            Err(ResidualsError::InvalidInput(msg)) => assert!(msg.contains("contiguous")),
            other => panic!("expected InvalidInput, got {other:?}"),
        }
    }
}
