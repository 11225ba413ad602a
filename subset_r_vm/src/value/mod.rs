//! RVector - N-dimensional R vector with type-segregated storage.
//!
//! This module contains the `RVector` struct for representing R vectors and
//! arrays with efficient homogeneous storage using `VectorData`.
//!
//! # Sub-modules
//!
//! - `element`: the `ElementKind` enum over the seven R kinds
//! - `na`: NA sentinels and predicates per kind
//! - `complex`: the `RComplex` pair type
//! - `scalar`: `RValue`, the boxed heterogeneous value for list elements
//! - `vector_data`: the type-segregated storage enum

// SAFETY: i32→usize casts for index computation are guarded by
// `idx < 1 || idx as usize > extent` bounds checks before the cast occurs.
#![allow(clippy::cast_sign_loss)]

pub mod complex;
pub mod element;
pub mod na;
pub mod scalar;
pub mod vector_data;

use serde::{Deserialize, Serialize};

pub use complex::RComplex;
pub use element::ElementKind;
pub use scalar::RValue;
pub use vector_data::VectorData;

use crate::error::RError;

/// N-dimensional R vector with type-segregated storage (column-major order,
/// as in R). A vector without a dim attribute behaves as 1-D.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RVector {
    /// Type-segregated storage for efficient operations
    pub data: VectorData,
    /// Optional dim attribute: [dim1, dim2, ...], product equals data length
    pub dims: Option<Vec<usize>>,
}

impl RVector {
    /// Create a dimensionless vector with the given data
    pub fn new(data: VectorData) -> Self {
        Self { data, dims: None }
    }

    /// Create a 1D integer vector
    pub fn from_int(data: Vec<i32>) -> Self {
        Self::new(VectorData::Int(data))
    }

    /// Create a 1D double vector
    pub fn from_double(data: Vec<f64>) -> Self {
        Self::new(VectorData::Double(data))
    }

    /// Create a 1D logical vector (0 = FALSE, 1 = TRUE, NA_LOGICAL = NA)
    pub fn from_logical(data: Vec<i8>) -> Self {
        Self::new(VectorData::Logical(data))
    }

    /// Create a 1D character vector (None = NA_character_)
    pub fn from_character(data: Vec<Option<String>>) -> Self {
        Self::new(VectorData::Character(data))
    }

    /// Create a 1D complex vector
    pub fn from_complex(data: Vec<RComplex>) -> Self {
        Self::new(VectorData::Complex(data))
    }

    /// Create a 1D raw vector
    pub fn from_raw(data: Vec<u8>) -> Self {
        Self::new(VectorData::Raw(data))
    }

    /// Create a 1D list
    pub fn from_list(data: Vec<RValue>) -> Self {
        Self::new(VectorData::List(data))
    }

    /// Create a matrix from column-major data
    pub fn matrix(data: VectorData, nrow: usize, ncol: usize) -> Result<Self, RError> {
        let mut v = Self::new(data);
        v.set_dims(vec![nrow, ncol])?;
        Ok(v)
    }

    /// Attach a dim attribute. The product of the extents must equal the
    /// buffer length.
    pub fn set_dims(&mut self, dims: Vec<usize>) -> Result<(), RError> {
        let product: usize = dims.iter().product();
        if product != self.data.len() {
            return Err(RError::InvalidDimensions {
                product,
                len: self.data.len(),
            });
        }
        self.dims = Some(dims);
        Ok(())
    }

    /// Builder-style variant of `set_dims`
    pub fn with_dims(mut self, dims: Vec<usize>) -> Result<Self, RError> {
        self.set_dims(dims)?;
        Ok(self)
    }

    /// Dimension extents; a dimensionless vector reports `[len]`
    pub fn dims(&self) -> Vec<usize> {
        match &self.dims {
            Some(d) => d.clone(),
            None => vec![self.data.len()],
        }
    }

    /// Element kind of the storage
    pub fn kind(&self) -> ElementKind {
        self.data.kind()
    }

    /// Number of stored elements
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the vector has no elements
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Convert 1-based per-dimension indices into a 0-based linear offset
    /// (column-major). A single index addresses any vector linearly.
    pub fn linear_index(&self, indices: &[i32]) -> Result<usize, RError> {
        if indices.len() == 1 {
            let index = indices[0];
            if index < 1 || index as usize > self.len() {
                return Err(RError::SubscriptOutOfBounds {
                    subscript: index as i64,
                    dim_size: self.len(),
                });
            }
            return Ok((index - 1) as usize);
        }

        let dims = self.dims();
        if indices.len() != dims.len() {
            return Err(RError::DimensionMismatch {
                expected: dims.len(),
                got: indices.len(),
            });
        }

        let mut linear = 0;
        let mut stride = 1;
        for (&dim_idx, &extent) in indices.iter().zip(dims.iter()) {
            if dim_idx < 1 || dim_idx as usize > extent {
                return Err(RError::SubscriptOutOfBounds {
                    subscript: dim_idx as i64,
                    dim_size: extent,
                });
            }
            linear += ((dim_idx - 1) as usize) * stride;
            stride *= extent;
        }
        Ok(linear)
    }

    /// Get the element at 1-based indices as a boxed `RValue`
    pub fn get(&self, indices: &[i32]) -> Result<RValue, RError> {
        let linear = self.linear_index(indices)?;
        self.data.get_value(linear).ok_or(RError::IndexOutOfBounds {
            index: linear,
            len: self.len(),
        })
    }

    /// Set the element at 1-based indices from a boxed `RValue`
    pub fn set(&mut self, indices: &[i32], value: RValue) -> Result<(), RError> {
        let linear = self.linear_index(indices)?;
        self.data.set_value(linear, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── constructors / dims ───────────────────────────────────────────────────

    #[test]
    fn test_dimensionless_vector_reports_len_as_dims() {
        let v = RVector::from_int(vec![1, 2, 3]);
        assert_eq!(v.dims(), vec![3]);
        assert_eq!(v.kind(), ElementKind::Int);
    }

    #[test]
    fn test_set_dims_valid() {
        let mut v = RVector::from_double(vec![0.0; 6]);
        v.set_dims(vec![2, 3]).unwrap();
        assert_eq!(v.dims(), vec![2, 3]);
    }

    #[test]
    fn test_set_dims_product_mismatch() {
        let mut v = RVector::from_int(vec![1, 2, 3]);
        let err = v.set_dims(vec![2, 3]).unwrap_err();
        assert_eq!(err, RError::InvalidDimensions { product: 6, len: 3 });
    }

    #[test]
    fn test_matrix_constructor() {
        let m = RVector::matrix(VectorData::Int(vec![1, 2, 3, 4, 5, 6]), 2, 3).unwrap();
        assert_eq!(m.dims(), vec![2, 3]);
    }

    // ── linear_index ──────────────────────────────────────────────────────────

    #[test]
    fn test_linear_index_column_major() {
        let m = RVector::matrix(VectorData::Int(vec![0; 6]), 2, 3).unwrap();
        // (row, col) -> (row-1) + (col-1)*nrow
        assert_eq!(m.linear_index(&[1, 1]).unwrap(), 0);
        assert_eq!(m.linear_index(&[2, 1]).unwrap(), 1);
        assert_eq!(m.linear_index(&[1, 2]).unwrap(), 2);
        assert_eq!(m.linear_index(&[2, 3]).unwrap(), 5);
    }

    #[test]
    fn test_linear_index_single_subscript_is_linear() {
        let m = RVector::matrix(VectorData::Int(vec![0; 6]), 2, 3).unwrap();
        assert_eq!(m.linear_index(&[6]).unwrap(), 5);
    }

    #[test]
    fn test_linear_index_out_of_bounds() {
        let m = RVector::matrix(VectorData::Int(vec![0; 6]), 2, 3).unwrap();
        let err = m.linear_index(&[3, 1]).unwrap_err();
        assert_eq!(
            err,
            RError::SubscriptOutOfBounds {
                subscript: 3,
                dim_size: 2
            }
        );
    }

    #[test]
    fn test_linear_index_wrong_subscript_count() {
        let m = RVector::matrix(VectorData::Int(vec![0; 6]), 2, 3).unwrap();
        let err = m.linear_index(&[1, 1, 1]).unwrap_err();
        assert_eq!(err, RError::DimensionMismatch { expected: 2, got: 3 });
    }

    // ── get / set ─────────────────────────────────────────────────────────────

    #[test]
    fn test_get_set_roundtrip() {
        let mut m = RVector::matrix(VectorData::Double(vec![0.0; 4]), 2, 2).unwrap();
        m.set(&[2, 1], RValue::Double(2.5)).unwrap();
        assert_eq!(m.get(&[2, 1]).unwrap(), RValue::Double(2.5));
        assert_eq!(m.get(&[1, 1]).unwrap(), RValue::Double(0.0));
    }
}
