#![forbid(unsafe_code)]
//! quarry-operators: declarative query operators over borrowed slices
//! (filter/project/sort/any/all/first/last) plus a fluent `Query` wrapper.
//!
//! Design intent:
//! - Every operator is a pure, synchronous function of `(&[T], closure)`.
//!   The input is never mutated and never retained past the call.
//! - "Nothing found" is never an error: empty `Vec`, `bool`, or `None`.
//! - Predicates and selectors are required generic arguments, so a missing one
//!   is a compile error rather than a runtime fault.

pub mod filter;
pub mod find;
pub mod project;
pub mod quantify;
pub mod query;
pub mod sort;

pub use filter::filter;
pub use find::{first_match, last_match};
pub use project::project;
pub use quantify::{all, any};
pub use query::{AsQuery, Query};
pub use sort::{sort_ascending, sort_ascending_by, sort_descending, sort_descending_by};
