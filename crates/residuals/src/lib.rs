//! # residuals — mean and squared residuals over numeric vectors
//!
//! Small, stateless numeric routines meant to be called from a statistical
//! environment (R) through a foreign-function bridge, and usable directly
//! from Rust.
//!
//! ## Quick Start
//!
//! ```rust
//! use residuals::prelude::*;
//!
//! let x = vec![1.0, 2.0, 3.0, 4.0];
//! let y = vec![1.0, 2.0, 4.0, 2.0];
//!
//! assert_eq!(mean(&x)?, 2.5);
//! assert_eq!(squared_residuals(&x, &y)?, vec![0.0, 0.0, 1.0, 4.0]);
//! # Result::<(), ResidualsError>::Ok(())
//! ```
//!
//! ## Result and Error Handling
//!
//! - **`EmptyInput`**: `mean` of an empty vector under the default policy.
//! - **`MismatchedInputs`**: `x` and `y` lengths differ.
//!
//! The legacy floating-point behavior for empty input is available on request:
//!
//! ```rust
//! use residuals::prelude::*;
//!
//! let empty: Vec<f64> = Vec::new();
//! assert_eq!(mean(&empty), Err(ResidualsError::EmptyInput));
//! assert!(mean_with(&empty, ReturnNan)?.is_nan());
//! # Result::<(), ResidualsError>::Ok(())
//! ```
//!
//! ## Vectorized form
//!
//! `squared_residuals_vectorized` computes the same values as
//! `squared_residuals` using whole-vector operations instead of an index
//! loop. The two always agree bit for bit.
//!
//! ## Minimal Usage (no_std)
//!
//! ```toml
//! [dependencies]
//! residuals = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Layer 1: Primitives - errors, validation and input containers.
mod primitives;

// Layer 2: Math - pure numeric routines.
mod math;

// Public function-level API.
mod api;

// Standard prelude.
pub mod prelude {
    pub use crate::api::{
        EmptyInputPolicy,
        EmptyInputPolicy::{Reject, ReturnNan},
        ResidualsError, mean, mean_with, squared_residuals, squared_residuals_vectorized,
    };
    pub use crate::primitives::input::VectorInput;
}

// Internal modules for development and testing.
//
// Only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
