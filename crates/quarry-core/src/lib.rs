#![forbid(unsafe_code)]
//! quarry-core: record types, textual predicates, and configuration.
//!
//! The operator library in `quarry-operators` is generic and never depends on
//! anything here; this crate describes the sample product domain the CLI and
//! tests query against.

pub mod config;
pub mod error;
pub mod predicate;
pub mod prelude;
pub mod product;
