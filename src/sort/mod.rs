//! Sort engine: order binder entries by one field.
//!
//! Sorting is stable and never mutates its input; `sort` returns a new
//! sequence and `sort_order` the permutation behind it.

pub mod engine;
pub mod spec;

pub use engine::{sort, sort_order};
pub use spec::{default_sort_spec, SortDirection, SortField, SortSpec};
