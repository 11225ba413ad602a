//! Per-kind element stores for subscript assignment.
//!
//! All atomic NA-carrying kinds share one rule: if the source element is the
//! kind's NA, the destination receives the kind's *canonical* NA sentinel,
//! not the literal source bit pattern. Raw bytes are copied verbatim (no NA
//! concept) and list elements are cloned boxed as-is.

use crate::value::complex::RComplex;
use crate::value::na::{is_na_int, is_na_logical, is_na_real, na_real, NA_INTEGER, NA_LOGICAL};
use crate::value::scalar::RValue;

/// One element kind's store operation, used by the generic descent driver.
pub(crate) trait StoreElement: Clone {
    /// Copy `src` into `dst`, applying the kind's NA policy.
    fn store(dst: &mut Self, src: &Self);
}

impl StoreElement for i32 {
    fn store(dst: &mut Self, src: &Self) {
        *dst = if is_na_int(*src) { NA_INTEGER } else { *src };
    }
}

impl StoreElement for f64 {
    fn store(dst: &mut Self, src: &Self) {
        // Normalizes every NA payload to the canonical NA_real_ bits;
        // a plain NaN passes through unchanged.
        *dst = if is_na_real(*src) { na_real() } else { *src };
    }
}

impl StoreElement for i8 {
    fn store(dst: &mut Self, src: &Self) {
        *dst = if is_na_logical(*src) { NA_LOGICAL } else { *src };
    }
}

impl StoreElement for Option<String> {
    fn store(dst: &mut Self, src: &Self) {
        *dst = if src.is_none() { None } else { src.clone() };
    }
}

impl StoreElement for RComplex {
    fn store(dst: &mut Self, src: &Self) {
        *dst = if src.is_na() { RComplex::na() } else { *src };
    }
}

// Raw bytes: unchecked bitwise copy.
impl StoreElement for u8 {
    fn store(dst: &mut Self, src: &Self) {
        *dst = *src;
    }
}

// List elements: store the boxed value as-is, whatever it represents.
impl StoreElement for RValue {
    fn store(dst: &mut Self, src: &Self) {
        *dst = src.clone();
    }
}
