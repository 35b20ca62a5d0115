//! Error types for minimization.

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, QmError>;

/// Errors reported by [`Qm`][crate::qm::Qm].
///
/// Input validation errors are returned before any term is built.
/// [`QmError::UnsatisfiableCover`] is never expected for valid inputs and indicates a bug.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum QmError {
    #[error("at least one variable is required")]
    NoVariables,

    #[error("{count} variables given, at most {max} are supported")]
    TooManyVariables { count: usize, max: usize },

    #[error("value {value} does not fit in {width} bits")]
    ValueOutOfRange { value: u32, width: usize },

    #[error("no subset of the remaining prime implicants covers the residual values")]
    UnsatisfiableCover,

    #[error("cover search over {size} candidate implicants is not supported")]
    CoverTooLarge { size: usize },
}
