use thiserror::Error;

/// All errors returned by `cplx-core`.
///
/// Arithmetic never fails: division by a zero-magnitude value and `NaN`
/// components propagate through IEEE-754 semantics. Errors are reserved for
/// precondition violations on the caller's arguments.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// The operation is not supported for the given input.
    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: &'static str },

    /// A decoded record matched none of the recognised complex-number
    /// shapes (`{re, im}`, `{abs, arg}`, `{r, phi}`).
    #[error("unrecognised complex-number shape: {reason}")]
    UnrecognisedShape { reason: &'static str },
}

/// Convenience alias used throughout `cplx-core`.
pub type Result<T> = std::result::Result<T, CoreError>;
