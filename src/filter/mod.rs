//! Filter engine: decide which binder entries to show.
//!
//! ## Key Types
//!
//! - `FilterSpec`: Immutable set of active criteria
//! - `NumericRange`: Inclusive attack/defense bounds
//! - `FilterDimension`: Dimensions with selectable dropdown values
//! - `FilterMatcher`: A spec prepared for evaluating many entries
//!
//! `matches` evaluates one entry, `filter_entries` a whole list.
//! `count_active_filters` feeds the active-filter badge.

pub mod engine;
pub mod spec;
pub mod values;

pub use engine::{filter_entries, matches, FilterMatcher};
pub use spec::{count_active_filters, default_filter_spec, FilterSpec, NumericRange};
pub use values::{unique_values, FilterDimension};
