//! Atomic kind coercion with NA propagation.
//!
//! Subscript assignment requires the replacement and the target to share an
//! element kind; this module is the collaborator that lines them up. The
//! supported directions follow R's hierarchy, logical < integer < double <
//! complex < character, plus the downward steps subassignment uses
//! (double/integer to logical, double to integer), raw to and from the
//! numeric kinds, and boxing any atomic vector into a list. NA in the
//! source maps to the destination kind's NA wherever one exists.
//!
//! Parsing character vectors back into numbers is out of scope; those
//! directions report a kind mismatch.

// SAFETY: f64→i32/u8 and i32→u8 casts are guarded by explicit range checks
// before the cast occurs.
#![allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]

use crate::error::RError;
use crate::value::na::{
    is_na_int, is_na_logical, is_na_real, na_real, LOGICAL_FALSE, LOGICAL_TRUE, NA_INTEGER,
    NA_LOGICAL,
};
use crate::value::{ElementKind, RComplex, RVector, VectorData};

/// Coerce a vector to the given element kind, preserving the dim attribute.
/// Returns a clone when the kind already matches.
pub fn coerce(value: &RVector, to: ElementKind) -> Result<RVector, RError> {
    if value.kind() == to {
        return Ok(value.clone());
    }
    let data = coerce_data(&value.data, to)?;
    Ok(RVector {
        data,
        dims: value.dims.clone(),
    })
}

fn unsupported(from: &VectorData, to: ElementKind) -> RError {
    RError::KindMismatch {
        from: from.kind(),
        to,
    }
}

fn coerce_data(data: &VectorData, to: ElementKind) -> Result<VectorData, RError> {
    match to {
        ElementKind::Logical => to_logical(data),
        ElementKind::Int => to_int(data),
        ElementKind::Double => to_double(data),
        ElementKind::Complex => to_complex(data),
        ElementKind::Character => to_character(data),
        ElementKind::Raw => to_raw(data),
        ElementKind::List => Ok(to_list(data)),
    }
}

fn to_logical(data: &VectorData) -> Result<VectorData, RError> {
    let out = match data {
        VectorData::Int(v) => v
            .iter()
            .map(|&x| {
                if is_na_int(x) {
                    NA_LOGICAL
                } else if x == 0 {
                    LOGICAL_FALSE
                } else {
                    LOGICAL_TRUE
                }
            })
            .collect(),
        VectorData::Double(v) => v
            .iter()
            .map(|&x| {
                if is_na_real(x) || x.is_nan() {
                    NA_LOGICAL
                } else if x == 0.0 {
                    LOGICAL_FALSE
                } else {
                    LOGICAL_TRUE
                }
            })
            .collect(),
        VectorData::Raw(v) => v
            .iter()
            .map(|&b| if b == 0 { LOGICAL_FALSE } else { LOGICAL_TRUE })
            .collect(),
        other => return Err(unsupported(other, ElementKind::Logical)),
    };
    Ok(VectorData::Logical(out))
}

fn to_int(data: &VectorData) -> Result<VectorData, RError> {
    let out = match data {
        VectorData::Logical(v) => v
            .iter()
            .map(|&x| if is_na_logical(x) { NA_INTEGER } else { x as i32 })
            .collect(),
        VectorData::Double(v) => v
            .iter()
            .map(|&x| {
                // Fractional parts truncate toward zero, as in as.integer().
                if is_na_real(x) || x.is_nan() || x >= (i32::MAX as f64) + 1.0 || x <= (i32::MIN as f64)
                {
                    NA_INTEGER
                } else {
                    x.trunc() as i32
                }
            })
            .collect(),
        VectorData::Raw(v) => v.iter().map(|&b| b as i32).collect(),
        other => return Err(unsupported(other, ElementKind::Int)),
    };
    Ok(VectorData::Int(out))
}

fn to_double(data: &VectorData) -> Result<VectorData, RError> {
    let out = match data {
        VectorData::Logical(v) => v
            .iter()
            .map(|&x| if is_na_logical(x) { na_real() } else { x as f64 })
            .collect(),
        VectorData::Int(v) => v
            .iter()
            .map(|&x| if is_na_int(x) { na_real() } else { x as f64 })
            .collect(),
        VectorData::Raw(v) => v.iter().map(|&b| b as f64).collect(),
        other => return Err(unsupported(other, ElementKind::Double)),
    };
    Ok(VectorData::Double(out))
}

fn to_complex(data: &VectorData) -> Result<VectorData, RError> {
    let real = |x: f64| RComplex::new(x, 0.0);
    let out = match data {
        VectorData::Logical(v) => v
            .iter()
            .map(|&x| {
                if is_na_logical(x) {
                    RComplex::na()
                } else {
                    real(x as f64)
                }
            })
            .collect(),
        VectorData::Int(v) => v
            .iter()
            .map(|&x| if is_na_int(x) { RComplex::na() } else { real(x as f64) })
            .collect(),
        VectorData::Double(v) => v
            .iter()
            .map(|&x| if is_na_real(x) { RComplex::na() } else { real(x) })
            .collect(),
        VectorData::Raw(v) => v.iter().map(|&b| real(b as f64)).collect(),
        other => return Err(unsupported(other, ElementKind::Complex)),
    };
    Ok(VectorData::Complex(out))
}

fn to_character(data: &VectorData) -> Result<VectorData, RError> {
    let out: Vec<Option<String>> = match data {
        VectorData::Logical(v) => v
            .iter()
            .map(|&x| {
                if is_na_logical(x) {
                    None
                } else if x == LOGICAL_FALSE {
                    Some("FALSE".to_string())
                } else {
                    Some("TRUE".to_string())
                }
            })
            .collect(),
        VectorData::Int(v) => v
            .iter()
            .map(|&x| if is_na_int(x) { None } else { Some(x.to_string()) })
            .collect(),
        VectorData::Double(v) => v
            .iter()
            .map(|&x| if is_na_real(x) { None } else { Some(format_double(x)) })
            .collect(),
        VectorData::Complex(v) => v
            .iter()
            .map(|c| if c.is_na() { None } else { Some(c.to_string()) })
            .collect(),
        VectorData::Raw(v) => v.iter().map(|&b| Some(format!("{:02x}", b))).collect(),
        other => return Err(unsupported(other, ElementKind::Character)),
    };
    Ok(VectorData::Character(out))
}

fn to_raw(data: &VectorData) -> Result<VectorData, RError> {
    // Out-of-range and NA inputs become 00, as in as.raw().
    let clamp_int = |x: i32| if (0..=255).contains(&x) { x as u8 } else { 0 };
    let out = match data {
        VectorData::Int(v) => v
            .iter()
            .map(|&x| if is_na_int(x) { 0 } else { clamp_int(x) })
            .collect(),
        VectorData::Double(v) => v
            .iter()
            .map(|&x| {
                if is_na_real(x) || x.is_nan() || !(0.0..256.0).contains(&x) {
                    0
                } else {
                    x.trunc() as u8
                }
            })
            .collect(),
        VectorData::Logical(v) => v
            .iter()
            .map(|&x| if x == LOGICAL_TRUE { 1u8 } else { 0 })
            .collect(),
        other => return Err(unsupported(other, ElementKind::Raw)),
    };
    Ok(VectorData::Raw(out))
}

fn to_list(data: &VectorData) -> VectorData {
    let n = data.len();
    let mut out = Vec::with_capacity(n);
    for i in 0..n {
        // get_value is total over 0..len for every variant
        if let Some(v) = data.get_value(i) {
            out.push(v);
        }
    }
    VectorData::List(out)
}

/// Format a double the way R prints it for as.character(): integral values
/// drop the decimal point, non-finite values use R's spellings.
fn format_double(x: f64) -> String {
    if x.is_nan() {
        "NaN".to_string()
    } else if x.is_infinite() {
        if x > 0.0 { "Inf" } else { "-Inf" }.to_string()
    } else if x == x.trunc() && x.abs() < 1e15 {
        format!("{}", x as i64)
    } else {
        format!("{}", x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::RValue;

    // ── upward coercion ───────────────────────────────────────────────────────

    #[test]
    fn test_logical_to_int() {
        let v = RVector::from_logical(vec![LOGICAL_TRUE, LOGICAL_FALSE, NA_LOGICAL]);
        let out = coerce(&v, ElementKind::Int).unwrap();
        assert_eq!(out.data, VectorData::Int(vec![1, 0, NA_INTEGER]));
    }

    #[test]
    fn test_int_to_double_propagates_na() {
        let v = RVector::from_int(vec![3, NA_INTEGER]);
        let out = coerce(&v, ElementKind::Double).unwrap();
        match &out.data {
            VectorData::Double(d) => {
                assert_eq!(d[0], 3.0);
                assert!(is_na_real(d[1]));
            }
            other => panic!("expected double storage, got {}", other.type_name()),
        }
    }

    #[test]
    fn test_double_to_complex() {
        let v = RVector::from_double(vec![1.5, na_real()]);
        let out = coerce(&v, ElementKind::Complex).unwrap();
        match &out.data {
            VectorData::Complex(d) => {
                assert_eq!(d[0], RComplex::new(1.5, 0.0));
                assert!(d[1].is_na());
            }
            other => panic!("expected complex storage, got {}", other.type_name()),
        }
    }

    #[test]
    fn test_to_character_r_spellings() {
        let v = RVector::from_double(vec![2.0, 2.5, na_real()]);
        let out = coerce(&v, ElementKind::Character).unwrap();
        assert_eq!(
            out.data,
            VectorData::Character(vec![
                Some("2".to_string()),
                Some("2.5".to_string()),
                None
            ])
        );
    }

    // ── downward coercion ─────────────────────────────────────────────────────

    #[test]
    fn test_double_to_int_truncates_and_propagates_na() {
        let v = RVector::from_double(vec![2.9, -2.9, na_real(), f64::NAN]);
        let out = coerce(&v, ElementKind::Int).unwrap();
        assert_eq!(
            out.data,
            VectorData::Int(vec![2, -2, NA_INTEGER, NA_INTEGER])
        );
    }

    #[test]
    fn test_double_to_logical() {
        let v = RVector::from_double(vec![0.0, 2.5, na_real()]);
        let out = coerce(&v, ElementKind::Logical).unwrap();
        assert_eq!(
            out.data,
            VectorData::Logical(vec![LOGICAL_FALSE, LOGICAL_TRUE, NA_LOGICAL])
        );
    }

    // ── raw / list ────────────────────────────────────────────────────────────

    #[test]
    fn test_int_to_raw_clamps_out_of_range() {
        let v = RVector::from_int(vec![255, 256, -1, NA_INTEGER]);
        let out = coerce(&v, ElementKind::Raw).unwrap();
        assert_eq!(out.data, VectorData::Raw(vec![255, 0, 0, 0]));
    }

    #[test]
    fn test_raw_to_character_is_hex() {
        let v = RVector::from_raw(vec![0x0F, 0xA0]);
        let out = coerce(&v, ElementKind::Character).unwrap();
        assert_eq!(
            out.data,
            VectorData::Character(vec![Some("0f".to_string()), Some("a0".to_string())])
        );
    }

    #[test]
    fn test_atomic_to_list_boxes_elements() {
        let v = RVector::from_int(vec![1, 2]);
        let out = coerce(&v, ElementKind::List).unwrap();
        assert_eq!(
            out.data,
            VectorData::List(vec![RValue::Int(1), RValue::Int(2)])
        );
    }

    // ── unsupported directions / dims ─────────────────────────────────────────

    #[test]
    fn test_character_to_int_unsupported() {
        let v = RVector::from_character(vec![Some("5".to_string())]);
        let err = coerce(&v, ElementKind::Int).unwrap_err();
        assert_eq!(
            err,
            RError::KindMismatch {
                from: ElementKind::Character,
                to: ElementKind::Int
            }
        );
    }

    #[test]
    fn test_coerce_preserves_dims() {
        let v = RVector::from_int(vec![1, 2, 3, 4]).with_dims(vec![2, 2]).unwrap();
        let out = coerce(&v, ElementKind::Double).unwrap();
        assert_eq!(out.dims(), vec![2, 2]);
    }

    #[test]
    fn test_same_kind_is_identity() {
        let v = RVector::from_int(vec![1, 2]);
        let out = coerce(&v, ElementKind::Int).unwrap();
        assert_eq!(out, v);
    }
}
