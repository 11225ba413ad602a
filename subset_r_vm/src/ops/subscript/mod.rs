//! Multi-dimensional subscript assignment (`arr[i, j, k] <- value`).
//!
//! # Sub-modules
//!
//! - `store`: per-kind element stores with NA propagation
//! - `write`: the recursive level-descent engine and its entry points

mod store;
mod write;

pub use write::{assign, set_multi_dim_data};
