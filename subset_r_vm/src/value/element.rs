//! Element kind definitions for homogeneous typed vectors.

use serde::{Deserialize, Serialize};

/// The seven element kinds an R vector can be declared to hold.
///
/// Ordered by R's coercion hierarchy for the atomic kinds:
/// logical < integer < double < complex < character. `Raw` sits outside the
/// hierarchy and `List` is the universal container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementKind {
    Logical,
    Int,
    Double,
    Complex,
    Character,
    Raw,
    List,
}

impl ElementKind {
    /// Whether this kind has an NA representation. Raw bytes have none;
    /// list elements carry missingness as ordinary boxed values.
    pub fn has_na(&self) -> bool {
        !matches!(self, ElementKind::Raw | ElementKind::List)
    }

    /// R type name, as reported by `typeof()`
    pub fn type_name(&self) -> &'static str {
        match self {
            ElementKind::Logical => "logical",
            ElementKind::Int => "integer",
            ElementKind::Double => "double",
            ElementKind::Complex => "complex",
            ElementKind::Character => "character",
            ElementKind::Raw => "raw",
            ElementKind::List => "list",
        }
    }
}

impl std::fmt::Display for ElementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.type_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_names_match_r() {
        assert_eq!(ElementKind::Int.to_string(), "integer");
        assert_eq!(ElementKind::Double.to_string(), "double");
        assert_eq!(ElementKind::Character.to_string(), "character");
        assert_eq!(ElementKind::List.to_string(), "list");
    }

    #[test]
    fn test_has_na() {
        assert!(ElementKind::Int.has_na());
        assert!(ElementKind::Complex.has_na());
        assert!(!ElementKind::Raw.has_na());
        assert!(!ElementKind::List.has_na());
    }
}
