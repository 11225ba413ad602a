//! NA sentinels and predicates, bit-for-bit compatible with R.
//!
//! Each atomic kind reserves one value to mean "missing":
//!
//! - integer: `i32::MIN`
//! - double: the quiet NaN whose low word is 1954 (the year R's ancestors
//!   were born, per the R sources)
//! - logical: stored as `i8` with 0 = FALSE, 1 = TRUE, -1 = NA
//! - character: `Option::None`
//! - complex: either component is the double NA
//!
//! Raw bytes have no NA.

/// NA sentinel for integer vectors
pub const NA_INTEGER: i32 = i32::MIN;

/// NA sentinel for logical vectors (byte representation)
pub const NA_LOGICAL: i8 = -1;

/// Logical TRUE byte
pub const LOGICAL_TRUE: i8 = 1;

/// Logical FALSE byte
pub const LOGICAL_FALSE: i8 = 0;

/// Bit pattern of R's NA_real_: a quiet NaN with 1954 in the low word.
const NA_REAL_BITS: u64 = 0x7FF0_0000_0000_07A2;

/// NA sentinel for double vectors
pub fn na_real() -> f64 {
    f64::from_bits(NA_REAL_BITS)
}

/// Check whether a double is NA. A plain NaN is *not* NA: NA carries the
/// 1954 payload, and the two must remain distinguishable.
pub fn is_na_real(x: f64) -> bool {
    x.is_nan() && (x.to_bits() & 0xFFFF_FFFF) == (NA_REAL_BITS & 0xFFFF_FFFF)
}

/// Check whether an integer is NA
pub fn is_na_int(x: i32) -> bool {
    x == NA_INTEGER
}

/// Check whether a logical byte is NA
pub fn is_na_logical(x: i8) -> bool {
    x == NA_LOGICAL
}
