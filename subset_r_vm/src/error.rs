//! Runtime errors raised by the vector model and the subscript engine.

use thiserror::Error;

use crate::value::ElementKind;

/// Errors that can occur while building vectors or executing a
/// subscripted assignment.
///
/// Messages match the user-facing R diagnostics where one exists.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RError {
    /// An NA index at a non-innermost dimension aborts the whole statement.
    #[error("NAs are not allowed in subscripted assignments")]
    NaSubscript,

    /// A write was requested but the replacement vector has no elements,
    /// so modulo recycling is undefined.
    #[error("replacement has length zero")]
    ZeroLengthReplacement,

    /// A position fell outside the extent of its dimension.
    #[error("subscript out of bounds: {subscript} (extent {dim_size})")]
    SubscriptOutOfBounds {
        /// Attempted 1-based position
        subscript: i64,
        /// Extent of the dimension being indexed
        dim_size: usize,
    },

    /// The number of index vectors does not match the array's dimensionality.
    #[error("incorrect number of subscripts: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    /// The replacement's element kind cannot be stored into the target.
    /// The caller is expected to coerce (see `ops::coerce`) before assigning.
    #[error("incompatible types (from {from} to {to}) in subassignment")]
    KindMismatch { from: ElementKind, to: ElementKind },

    /// A dim attribute whose product disagrees with the buffer length.
    #[error("dims [product {product}] do not match the length of object [{len}]")]
    InvalidDimensions { product: usize, len: usize },

    /// Linear element access past the end of the buffer.
    #[error("index {index} out of bounds for vector of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },
}
