//! # cplx
//!
//! Complex numbers for Rust with exact repeated-multiplication powers,
//! principal square roots and n-th roots.
//!
//! One `use cplx::prelude::*;` gives you [`Complex`](prelude::Complex), its
//! construction shapes and the error type.
//!
//! ## Feature Flags
//!
//! | Feature | Enables |
//! |---------|---------|
//! | `core` *(default)* | The complex value type and its operations |
//! | `serde` | `Serialize`/`Deserialize` for `Complex` and `ComplexInput` |
//!
//! ```
//! use cplx::prelude::*;
//!
//! let z = Complex::new(2.0_f64, 2.0);
//! assert_eq!(z.pow(2).to_string(), "8i");
//! ```

#[cfg(feature = "core")]
pub use cplx_core as core;

/// Glob-import convenience: `use cplx::prelude::*;`
#[cfg(feature = "core")]
pub mod prelude {
    pub use cplx_core::prelude::*;
}
