#![forbid(unsafe_code)]
//! quarry: declarative query operators over in-memory sequences.
//!
//! This facade re-exports the workspace crates:
//! - `operators`: generic filter/project/sort/any/all/first/last and `Query`.
//! - `model`: product records, prices, textual predicates, configuration.
//! - `catalog`: JSON/CSV loaders, the embedded sample catalog, NDJSON writer.

pub use quarry_core as model;
pub use quarry_io as catalog;
pub use quarry_operators as operators;

pub use quarry_operators::{
    all, any, filter, first_match, last_match, project, sort_ascending, sort_ascending_by,
    sort_descending, sort_descending_by, AsQuery, Query,
};
