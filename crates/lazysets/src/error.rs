//! Error type shared by every set operation.
//!
//! Policy
//! - Failures are immediate and local: a violated precondition never yields a
//!   partial result and is never coerced into something "close enough".
//! - Degenerate-but-valid geometry (zero cross products, empty constraint
//!   lists) is handled by explicit branches and is not an error.

use thiserror::Error;

/// Errors surfaced by set queries, constructors, and geometric operators.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SetError {
    /// Two operands (or an operand and a direction) disagree in dimension.
    #[error("{context} must match, but they are {left} and {right}")]
    DimensionMismatch {
        context: &'static str,
        left: usize,
        right: usize,
    },
    /// An argument without a finite half-space representation was given where one is required.
    #[error(
        "the {argument} argument must be polyhedral; try overapproximating it with an HPolyhedron first"
    )]
    NotPolyhedral { argument: &'static str },
    /// An argument that must be bounded is not.
    #[error("the {argument} argument must be bounded, but it is not")]
    Unbounded { argument: &'static str },
    /// Coordinate or reset index outside `0..dim`.
    #[error("index {index} is out of range for a set of dimension {dim}")]
    IndexOutOfRange { index: usize, dim: usize },
    /// Asked whether a set is an element of another set.
    #[error(
        "a set cannot be an element of another set; use a subset check for set inclusion \
         or `contains` for point membership"
    )]
    MembershipMisuse,
    /// Support queries are undefined on the empty set.
    #[error("the empty set has no support vector")]
    EmptySet,
    /// A matrix that must be invertible is not.
    #[error("singular matrix in {context}")]
    Singular { context: &'static str },
    /// The representation cannot answer this query without an external backend.
    #[error("{operation} is not supported for this set representation")]
    Unsupported { operation: &'static str },
    /// Malformed constructor input.
    #[error("invalid set: {0}")]
    Invalid(String),
}

/// Result alias for set operations.
pub type SetResult<T> = Result<T, SetError>;

/// Fail with `DimensionMismatch` unless `left == right`.
#[inline]
pub(crate) fn ensure_dim(context: &'static str, left: usize, right: usize) -> SetResult<()> {
    if left == right {
        Ok(())
    } else {
        Err(SetError::DimensionMismatch {
            context,
            left,
            right,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimension_message_names_both_sides() {
        let err = ensure_dim("the dimensions of the zonotopes", 2, 3).unwrap_err();
        assert_eq!(
            err.to_string(),
            "the dimensions of the zonotopes must match, but they are 2 and 3"
        );
    }

    #[test]
    fn precondition_messages_name_the_argument() {
        let first = SetError::NotPolyhedral { argument: "first" }.to_string();
        assert!(first.contains("first argument must be polyhedral"));
        assert!(first.contains("overapproximating"));
        let second = SetError::Unbounded { argument: "second" }.to_string();
        assert!(second.contains("second argument must be bounded"));
    }
}
