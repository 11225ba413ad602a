//! Operations on R vectors: NA-index validation, kind coercion, and the
//! multi-dimensional subscript-assignment engine.

pub mod coerce;
pub mod na_check;
pub mod subscript;
