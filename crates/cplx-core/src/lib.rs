//! `cplx-core` — Complex-number value type.
//!
//! Provides [`Complex`], an immutable rectangular complex number with polar
//! accessors, closed arithmetic, exact integer powers and n-th roots, plus
//! the component trait hierarchy it is generic over.
//!
//! # Design
//!
//! - **Values, not objects** — every operation takes `self` by value and
//!   returns a fresh [`Complex`]; derived quantities are recomputed on each
//!   call.
//! - Generic over the component type via the [`Scalar`] / [`Float`] /
//!   [`Real`] trait hierarchy (`f32`, `f64`).
//! - Arithmetic follows IEEE-754 and never fails; the only errors are
//!   precondition violations reported through [`CoreError`].
//! - Optional `serde` support behind the `serde` feature.

pub mod complex;
pub mod dtype;
pub mod error;

// Re-export key types at crate root for convenience.
pub use complex::{Complex, ComplexInput};
pub use dtype::{Float, Real, Scalar};
pub use error::{CoreError, Result};

/// Items intended for glob-import: `use cplx_core::prelude::*;`
pub mod prelude {
    pub use crate::complex::{Complex, ComplexInput};
    pub use crate::dtype::{Float, Real, Scalar};
    pub use crate::error::{CoreError, Result};
}
