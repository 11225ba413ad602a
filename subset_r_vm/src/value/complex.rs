//! RComplex - complex element type stored as a (re, im) pair of doubles.

use serde::{Deserialize, Serialize};

use super::na::{is_na_real, na_real};

/// Complex element value. R stores complex vectors as pairs of doubles;
/// NA-ness is carried by either component.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RComplex {
    pub re: f64,
    pub im: f64,
}

impl RComplex {
    pub fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    /// The canonical NA_complex_: both components NA_real_
    pub fn na() -> Self {
        Self {
            re: na_real(),
            im: na_real(),
        }
    }

    /// A complex value is NA if either component is NA
    pub fn is_na(&self) -> bool {
        is_na_real(self.re) || is_na_real(self.im)
    }
}

impl std::fmt::Display for RComplex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.im < 0.0 {
            write!(f, "{}{}i", self.re, self.im)
        } else {
            write!(f, "{}+{}i", self.re, self.im)
        }
    }
}
