//! Natural-order, multi-level sorting of delimited records.
//!
//! ```
//! use natsort::{SortOptions, SortSpec, sort_lines};
//!
//! let spec: SortSpec = "0".parse().unwrap();
//! let out = sort_lines(&["item2", "item10", "item1"], &spec, &SortOptions::default());
//! assert_eq!(out.into_result().unwrap(), vec!["item1", "item2", "item10"]);
//! ```

pub mod error;
pub mod group;
pub mod hierarchical;
pub mod key;
pub mod quicksort;
pub mod record;
pub mod spec;
pub mod tokenize;

#[cfg(test)]
mod testing;

pub use error::{Result, SortError};
pub use group::{Group, GroupIndex, group_by_field};
pub use hierarchical::{
    SortOptions, SortOutcome, hierarchical_sort, hierarchical_sort_with, sort_lines, sort_rows,
};
pub use key::{KeyPart, NaturalKey, natural_key, natural_sort, sort_by_natural_key};
pub use quicksort::{quicksort, quicksort_by, try_quicksort};
pub use record::{Record, RecordShape, shape_of};
pub use spec::{SortLevel, SortSpec, SpecEntry, parse_entries};
pub use tokenize::{Subtoken, SubtokenKind, split_fields, strip_non_alphanumeric, subtokens};
