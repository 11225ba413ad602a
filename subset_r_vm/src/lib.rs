//! SubsetRVM - R-semantics vector runtime.
//!
//! This crate provides the array value model and the write path of an
//! R-subset interpreter:
//!
//! - `RVector` with type-segregated storage for the seven R element kinds
//! - R-faithful NA sentinels and predicates per kind
//! - Atomic kind coercion with NA propagation
//! - The multi-dimensional subscript-assignment engine
//!   (`arr[i, j, k] <- value`) with value recycling and NA-index validation

// Prevent accidental debug output in library code.
#![deny(clippy::print_stderr)]
#![deny(clippy::print_stdout)]

pub mod error;
pub mod ops;
pub mod value;

/// Prelude module for convenient imports
///
/// # Example
/// ```
/// use subset_r_vm::prelude::*;
/// ```
pub mod prelude {
    pub use super::error::RError;
    pub use super::ops::coerce::coerce;
    pub use super::ops::na_check::NaCheck;
    pub use super::ops::subscript::{assign, set_multi_dim_data};
    pub use super::value::{ElementKind, RComplex, RValue, RVector, VectorData};
}

pub use prelude::*;
