//! NA-index validation for subscript vectors.
//!
//! A position vector is scanned once per assignment; the resulting check is
//! a pure predicate carried by value through the recursion. When the scan
//! finds no NA, every later check short-circuits to false.

use crate::value::na::NA_INTEGER;

/// Pure NA predicate for one position vector.
#[derive(Debug, Clone, Copy)]
pub struct NaCheck {
    na_possible: bool,
}

impl NaCheck {
    /// Prime the check from a position vector. One linear scan; the
    /// per-position check afterwards is a constant-time comparison.
    pub fn for_positions(positions: &[i32]) -> Self {
        Self {
            na_possible: positions.contains(&NA_INTEGER),
        }
    }

    /// A check that can never report NA
    pub fn never() -> Self {
        Self { na_possible: false }
    }

    /// Whether this position is the NA sentinel
    pub fn is_na(&self, pos: i32) -> bool {
        self.na_possible && pos == NA_INTEGER
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_na_when_present() {
        let check = NaCheck::for_positions(&[1, NA_INTEGER, 3]);
        assert!(check.is_na(NA_INTEGER));
        assert!(!check.is_na(1));
    }

    #[test]
    fn test_short_circuits_when_vector_is_complete() {
        let check = NaCheck::for_positions(&[1, 2, 3]);
        // A complete vector never reports NA, even for the sentinel value.
        assert!(!check.is_na(NA_INTEGER));
    }

    #[test]
    fn test_never() {
        assert!(!NaCheck::never().is_na(NA_INTEGER));
    }

    #[test]
    fn test_empty_positions() {
        let check = NaCheck::for_positions(&[]);
        assert!(!check.is_na(NA_INTEGER));
    }
}
