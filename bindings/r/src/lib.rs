//! R bindings for residuals.
//!
//! Provides R access to the residuals Rust library via extendr.
//!
//! @srrstats G1.0 Documentation of core R-to-Rust interface.
//! @srrstats G1.1 Implementation of thin R wrapper for numeric vector utilities.

use extendr_api::prelude::*;

use residuals::prelude::{
    EmptyInputPolicy, mean_with, squared_residuals, squared_residuals_vectorized,
};

// ============================================================================
// Helper Functions
// ============================================================================

/// Parse empty-input policy from string
fn parse_empty_input_policy(name: &str) -> Result<EmptyInputPolicy> {
    match name.to_lowercase().as_str() {
        "error" | "stop" | "reject" => Ok(EmptyInputPolicy::Reject),
        "nan" | "na" | "return_nan" => Ok(EmptyInputPolicy::ReturnNan),
        _ => Err(Error::Other(format!(
            "Unknown empty input policy: {}. Valid options: error, nan",
            name
        ))),
    }
}

// ============================================================================
// Exported Functions
// ============================================================================

/// Arithmetic mean of a numeric vector.
/// @param x Numeric vector.
/// @param empty Behavior for an empty vector: "error" (default) or "nan".
/// @export
#[extendr]
fn mean_c(x: &[f64], #[default = "\"error\""] empty: &str) -> Result<f64> {
    let policy = parse_empty_input_policy(empty)?;
    mean_with(x, policy).map_err(|e| Error::Other(e.to_string()))
}

/// Squared residuals computed with an explicit loop.
/// @param x Numeric vector.
/// @param y Numeric vector of the same length as `x`.
/// @export
#[extendr]
fn res_c(x: &[f64], y: &[f64]) -> Result<Vec<f64>> {
    squared_residuals(x, y).map_err(|e| Error::Other(e.to_string()))
}

/// Squared residuals computed with whole-vector operations.
/// @param x Numeric vector.
/// @param y Numeric vector of the same length as `x`.
/// @export
#[extendr]
fn res_sugar(x: &[f64], y: &[f64]) -> Result<Vec<f64>> {
    squared_residuals_vectorized(x, y).map_err(|e| Error::Other(e.to_string()))
}

// ============================================================================
// Module Registration
// ============================================================================

extendr_module! {
    mod rresiduals;
    fn mean_c;
    fn res_c;
    fn res_sugar;
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_input_policy_aliases() {
        assert_eq!(
            parse_empty_input_policy("NaN").unwrap(),
            EmptyInputPolicy::ReturnNan
        );
        assert_eq!(
            parse_empty_input_policy("STOP").unwrap(),
            EmptyInputPolicy::Reject
        );
        assert_eq!(
            parse_empty_input_policy("error").unwrap(),
            EmptyInputPolicy::Reject
        );
        assert_eq!(
            parse_empty_input_policy("na").unwrap(),
            EmptyInputPolicy::ReturnNan
        );
    }

    #[test]
    fn test_parse_empty_input_policy_unknown() {
        match parse_empty_input_policy("bogus") {
            Err(Error::Other(msg)) => {
                assert!(msg.contains("bogus"));
                assert!(msg.contains("Valid options"));
            }
            other => panic!("expected Error::Other, got {other:?}"),
        }
    }
}
