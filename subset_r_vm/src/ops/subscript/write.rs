//! Recursive level-descent engine for multi-dimensional subscript
//! assignment.
//!
//! The selection is one 1-based index vector per dimension. Dimension `L`
//! maps to `positions[L - 1]` and dimensions are consumed from
//! last-declared to first-declared as the recursion descends, which gives
//! column-major traversal order. The replacement vector is logically
//! infinite via modulo recycling.
//!
//! NA handling is asymmetric, matching R: an NA index at any non-innermost
//! dimension aborts the whole statement, while an NA index at the innermost
//! dimension silently skips that single element. Sibling branches completed
//! before an abort keep their writes; the operation is not transactional.

// SAFETY: i32→usize casts on positions are guarded by
// `pos < 1 || pos as usize > src_dim_size` checks before the cast occurs.
#![allow(clippy::cast_sign_loss)]

use super::store::StoreElement;
use crate::error::RError;
use crate::ops::na_check::NaCheck;
use crate::value::{RVector, VectorData};

/// Assign `value` into the elements of `target` selected by `positions`,
/// one index vector per dimension. Returns the mutated target for chaining.
///
/// The replacement is recycled modulo its length over the selection, in
/// column-major traversal order. An empty index vector at any dimension
/// means zero writes. Element kinds must already agree; coercion is the
/// caller's job (see `ops::coerce`).
pub fn assign<'a>(
    value: &RVector,
    target: &'a mut RVector,
    positions: &[Vec<i32>],
) -> Result<&'a mut RVector, RError> {
    let dims = target.dims();
    if positions.is_empty() || positions.len() != dims.len() {
        return Err(RError::DimensionMismatch {
            expected: dims.len(),
            got: positions.len(),
        });
    }

    let acc_src_dimensions: usize = dims.iter().product();
    let acc_dst_dimensions: usize = positions.iter().map(Vec::len).product();
    if acc_dst_dimensions == 0 {
        // Empty selection: nothing to write, the target is unchanged.
        return Ok(target);
    }
    if value.is_empty() {
        return Err(RError::ZeroLengthReplacement);
    }

    set_multi_dim_data(
        value,
        target,
        positions,
        dims.len(),
        0,
        0,
        acc_src_dimensions,
        acc_dst_dimensions,
    )?;
    Ok(target)
}

/// Evaluator-facing recursive form of the engine, with explicit descent
/// context. `assign` is the entry point that supplies the initial context:
/// `current_dim_level = N`, zero bases, and the full dimension and
/// index-length products as accumulators.
///
/// The accumulators must be products consistent with `target.dims()` and
/// the index-vector lengths so that every per-level division is exact.
pub fn set_multi_dim_data(
    value: &RVector,
    target: &mut RVector,
    positions: &[Vec<i32>],
    current_dim_level: usize,
    src_array_base: usize,
    dst_array_base: usize,
    acc_src_dimensions: usize,
    acc_dst_dimensions: usize,
) -> Result<(), RError> {
    let dims = target.dims();
    if positions.len() != dims.len() {
        return Err(RError::DimensionMismatch {
            expected: dims.len(),
            got: positions.len(),
        });
    }
    if current_dim_level < 1 || current_dim_level > dims.len() {
        return Err(RError::DimensionMismatch {
            expected: dims.len(),
            got: current_dim_level,
        });
    }
    // Writes happen only when every remaining level has at least one
    // position; reject an unrecyclable empty replacement up front.
    if value.is_empty() && positions[..current_dim_level].iter().all(|p| !p.is_empty()) {
        return Err(RError::ZeroLengthReplacement);
    }

    let checks: Vec<NaCheck> = positions
        .iter()
        .map(|p| NaCheck::for_positions(p))
        .collect();

    match (&value.data, &mut target.data) {
        (VectorData::Int(v), VectorData::Int(t)) => set_multi_dim(
            v,
            t,
            &dims,
            positions,
            &checks,
            current_dim_level,
            src_array_base,
            dst_array_base,
            acc_src_dimensions,
            acc_dst_dimensions,
        ),
        (VectorData::Double(v), VectorData::Double(t)) => set_multi_dim(
            v,
            t,
            &dims,
            positions,
            &checks,
            current_dim_level,
            src_array_base,
            dst_array_base,
            acc_src_dimensions,
            acc_dst_dimensions,
        ),
        (VectorData::Logical(v), VectorData::Logical(t)) => set_multi_dim(
            v,
            t,
            &dims,
            positions,
            &checks,
            current_dim_level,
            src_array_base,
            dst_array_base,
            acc_src_dimensions,
            acc_dst_dimensions,
        ),
        (VectorData::Character(v), VectorData::Character(t)) => set_multi_dim(
            v,
            t,
            &dims,
            positions,
            &checks,
            current_dim_level,
            src_array_base,
            dst_array_base,
            acc_src_dimensions,
            acc_dst_dimensions,
        ),
        (VectorData::Complex(v), VectorData::Complex(t)) => set_multi_dim(
            v,
            t,
            &dims,
            positions,
            &checks,
            current_dim_level,
            src_array_base,
            dst_array_base,
            acc_src_dimensions,
            acc_dst_dimensions,
        ),
        (VectorData::Raw(v), VectorData::Raw(t)) => set_multi_dim(
            v,
            t,
            &dims,
            positions,
            &checks,
            current_dim_level,
            src_array_base,
            dst_array_base,
            acc_src_dimensions,
            acc_dst_dimensions,
        ),
        (VectorData::List(v), VectorData::List(t)) => set_multi_dim(
            v,
            t,
            &dims,
            positions,
            &checks,
            current_dim_level,
            src_array_base,
            dst_array_base,
            acc_src_dimensions,
            acc_dst_dimensions,
        ),
        (v, t) => Err(RError::KindMismatch {
            from: v.kind(),
            to: t.kind(),
        }),
    }
}

/// Generic descent over one element kind. Monomorphized once per kind by
/// the dispatch above; every recursive step carries its own copy of the
/// bases and accumulators.
fn set_multi_dim<T: StoreElement>(
    value: &[T],
    data: &mut [T],
    dims: &[usize],
    positions: &[Vec<i32>],
    checks: &[NaCheck],
    current_dim_level: usize,
    src_array_base: usize,
    dst_array_base: usize,
    acc_src_dimensions: usize,
    acc_dst_dimensions: usize,
) -> Result<(), RError> {
    let p = &positions[current_dim_level - 1];
    if p.is_empty() {
        // Zero positions at this level: zero writes, and the stride
        // divisions below would be undefined.
        return Ok(());
    }
    let check = checks[current_dim_level - 1];
    let src_dim_size = dims[current_dim_level - 1];
    if src_dim_size == 0 {
        // A zero-extent dimension admits no valid position.
        return Err(RError::SubscriptOutOfBounds {
            subscript: p[0] as i64,
            dim_size: 0,
        });
    }
    let new_acc_src_dimensions = acc_src_dimensions / src_dim_size;
    let new_acc_dst_dimensions = acc_dst_dimensions / p.len();

    if current_dim_level == 1 {
        let data_len = data.len();
        for (i, &pos) in p.iter().enumerate() {
            if check.is_na(pos) {
                // Innermost-dimension NA: skip this one element.
                continue;
            }
            if pos < 1 || pos as usize > src_dim_size {
                return Err(RError::SubscriptOutOfBounds {
                    subscript: pos as i64,
                    dim_size: src_dim_size,
                });
            }
            let dst_index = dst_array_base + new_acc_dst_dimensions * i;
            let src_index = src_array_base + new_acc_src_dimensions * (pos as usize - 1);
            let slot = data
                .get_mut(src_index)
                .ok_or(RError::IndexOutOfBounds {
                    index: src_index,
                    len: data_len,
                })?;
            T::store(slot, &value[dst_index % value.len()]);
        }
    } else {
        for (i, &pos) in p.iter().enumerate() {
            if check.is_na(pos) {
                return Err(RError::NaSubscript);
            }
            if pos < 1 || pos as usize > src_dim_size {
                return Err(RError::SubscriptOutOfBounds {
                    subscript: pos as i64,
                    dim_size: src_dim_size,
                });
            }
            let new_dst_array_base = dst_array_base + new_acc_dst_dimensions * i;
            let new_src_array_base = src_array_base + new_acc_src_dimensions * (pos as usize - 1);
            set_multi_dim(
                value,
                data,
                dims,
                positions,
                checks,
                current_dim_level - 1,
                new_src_array_base,
                new_dst_array_base,
                new_acc_src_dimensions,
                new_acc_dst_dimensions,
            )?;
        }
    }
    Ok(())
}
