//! VectorData - type-segregated storage for the seven R element kinds.
//!
//! Each variant holds a homogeneous buffer of the corresponding element
//! type. NA is represented in-band per kind (see `value::na`).

use serde::{Deserialize, Serialize};

use super::complex::RComplex;
use super::element::ElementKind;
use super::scalar::RValue;
use crate::error::RError;

/// Type-segregated storage for R vectors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum VectorData {
    Int(Vec<i32>),
    Double(Vec<f64>),
    Logical(Vec<i8>),
    Character(Vec<Option<String>>),
    Complex(Vec<RComplex>),
    Raw(Vec<u8>),
    List(Vec<RValue>),
}

impl VectorData {
    /// Get the element kind of this data
    pub fn kind(&self) -> ElementKind {
        match self {
            VectorData::Int(_) => ElementKind::Int,
            VectorData::Double(_) => ElementKind::Double,
            VectorData::Logical(_) => ElementKind::Logical,
            VectorData::Character(_) => ElementKind::Character,
            VectorData::Complex(_) => ElementKind::Complex,
            VectorData::Raw(_) => ElementKind::Raw,
            VectorData::List(_) => ElementKind::List,
        }
    }

    /// Number of stored elements
    pub fn len(&self) -> usize {
        match self {
            VectorData::Int(v) => v.len(),
            VectorData::Double(v) => v.len(),
            VectorData::Logical(v) => v.len(),
            VectorData::Character(v) => v.len(),
            VectorData::Complex(v) => v.len(),
            VectorData::Raw(v) => v.len(),
            VectorData::List(v) => v.len(),
        }
    }

    /// Check if the data is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// R type name of the storage, for error messages
    pub fn type_name(&self) -> &'static str {
        self.kind().type_name()
    }

    /// Get the element at a 0-based linear index, boxed as an `RValue`
    pub fn get_value(&self, index: usize) -> Option<RValue> {
        match self {
            VectorData::Int(v) => v.get(index).map(|&x| RValue::Int(x)),
            VectorData::Double(v) => v.get(index).map(|&x| RValue::Double(x)),
            VectorData::Logical(v) => v.get(index).map(|&x| RValue::Logical(x)),
            VectorData::Character(v) => v.get(index).map(|x| RValue::Character(x.clone())),
            VectorData::Complex(v) => v.get(index).map(|&x| RValue::Complex(x)),
            VectorData::Raw(v) => v.get(index).map(|&x| RValue::Raw(x)),
            VectorData::List(v) => v.get(index).cloned(),
        }
    }

    /// Set the element at a 0-based linear index from a boxed `RValue`.
    /// The boxed variant must match the storage kind; lists accept anything.
    pub fn set_value(&mut self, index: usize, value: RValue) -> Result<(), RError> {
        let len = self.len();
        if index >= len {
            return Err(RError::IndexOutOfBounds { index, len });
        }
        let mismatch = |from: &RValue, to: ElementKind| RError::KindMismatch {
            from: boxed_kind(from),
            to,
        };
        match self {
            VectorData::Int(v) => match value {
                RValue::Int(x) => {
                    v[index] = x;
                    Ok(())
                }
                other => Err(mismatch(&other, ElementKind::Int)),
            },
            VectorData::Double(v) => match value {
                RValue::Double(x) => {
                    v[index] = x;
                    Ok(())
                }
                other => Err(mismatch(&other, ElementKind::Double)),
            },
            VectorData::Logical(v) => match value {
                RValue::Logical(x) => {
                    v[index] = x;
                    Ok(())
                }
                other => Err(mismatch(&other, ElementKind::Logical)),
            },
            VectorData::Character(v) => match value {
                RValue::Character(s) => {
                    v[index] = s;
                    Ok(())
                }
                other => Err(mismatch(&other, ElementKind::Character)),
            },
            VectorData::Complex(v) => match value {
                RValue::Complex(c) => {
                    v[index] = c;
                    Ok(())
                }
                other => Err(mismatch(&other, ElementKind::Complex)),
            },
            VectorData::Raw(v) => match value {
                RValue::Raw(b) => {
                    v[index] = b;
                    Ok(())
                }
                other => Err(mismatch(&other, ElementKind::Raw)),
            },
            VectorData::List(v) => {
                v[index] = value;
                Ok(())
            }
        }
    }
}

/// Element kind a boxed value would naturally live in. `Null` and nested
/// vectors only fit in lists.
fn boxed_kind(value: &RValue) -> ElementKind {
    match value {
        RValue::Int(_) => ElementKind::Int,
        RValue::Double(_) => ElementKind::Double,
        RValue::Logical(_) => ElementKind::Logical,
        RValue::Character(_) => ElementKind::Character,
        RValue::Complex(_) => ElementKind::Complex,
        RValue::Raw(_) => ElementKind::Raw,
        RValue::Null | RValue::Vector(_) => ElementKind::List,
    }
}
