//! RValue - boxed heterogeneous value, used for list elements and for
//! generic element access on typed vectors.

use serde::{Deserialize, Serialize};

use super::complex::RComplex;
use super::na::{is_na_int, is_na_logical, is_na_real};
use super::RVector;

/// A single boxed R value. List elements may hold any of these, including
/// nested vectors; atomic vectors box their elements into the matching
/// scalar variant on generic access.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RValue {
    /// NULL, the empty list element
    Null,
    Int(i32),
    Double(f64),
    Logical(i8),
    Character(Option<String>),
    Complex(RComplex),
    Raw(u8),
    Vector(RVector),
}

impl RValue {
    /// Whether this boxed value is a scalar NA of its kind.
    /// `Null`, `Raw` and `Vector` are never scalar NA.
    pub fn is_na(&self) -> bool {
        match self {
            RValue::Int(x) => is_na_int(*x),
            RValue::Double(x) => is_na_real(*x),
            RValue::Logical(x) => is_na_logical(*x),
            RValue::Character(s) => s.is_none(),
            RValue::Complex(c) => c.is_na(),
            RValue::Null | RValue::Raw(_) | RValue::Vector(_) => false,
        }
    }

    /// Short name of the boxed variant, for diagnostics
    pub fn type_name(&self) -> &'static str {
        match self {
            RValue::Null => "NULL",
            RValue::Int(_) => "integer",
            RValue::Double(_) => "double",
            RValue::Logical(_) => "logical",
            RValue::Character(_) => "character",
            RValue::Complex(_) => "complex",
            RValue::Raw(_) => "raw",
            RValue::Vector(_) => "vector",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::na::{na_real, NA_INTEGER, NA_LOGICAL};

    #[test]
    fn test_is_na_per_kind() {
        assert!(RValue::Int(NA_INTEGER).is_na());
        assert!(RValue::Double(na_real()).is_na());
        assert!(RValue::Logical(NA_LOGICAL).is_na());
        assert!(RValue::Character(None).is_na());
        assert!(RValue::Complex(RComplex::na()).is_na());
    }

    #[test]
    fn test_non_na_values() {
        assert!(!RValue::Null.is_na());
        assert!(!RValue::Int(0).is_na());
        assert!(!RValue::Double(f64::NAN).is_na(), "plain NaN is not NA");
        assert!(!RValue::Raw(0).is_na());
        assert!(!RValue::Character(Some("NA".to_string())).is_na());
    }
}
