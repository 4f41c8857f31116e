use thiserror::Error;

/// Errors returned when a function receives an argument it can't work with.
///
/// Degenerate geometry (parallel rays, zero-length vectors, empty intersections...) is never
/// reported through this type: those cases are regular results of the collision routines.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MathError {
    /// An argument was out of its accepted range, or had the wrong length.
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument {
        /// Name of the offending argument.
        name: &'static str,
        /// Human readable explanation of the constraint that was violated.
        reason: String,
    },
}

impl MathError {
    pub(crate) fn invalid_argument(name: &'static str, reason: impl Into<String>) -> MathError {
        MathError::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }

    /// Error for a slice that does not hold exactly `expected` elements.
    pub(crate) fn wrong_length(name: &'static str, expected: usize, found: usize) -> MathError {
        MathError::invalid_argument(
            name,
            format!("expected exactly {} elements, found {}", expected, found),
        )
    }

    /// Error for an index outside `[0, len)`.
    pub(crate) fn index_out_of_range(index: usize, len: usize) -> MathError {
        MathError::invalid_argument(
            "index",
            format!("index {} is out of range [0, {}]", index, len - 1),
        )
    }
}
