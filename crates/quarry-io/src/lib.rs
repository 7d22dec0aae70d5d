#![forbid(unsafe_code)]
//! quarry-io: where product catalogs come from and where results go.
//!
//! - `readers`: JSON array and headered CSV catalogs.
//! - `fixture`: the embedded 77-product sample catalog.
//! - `source`: pick a reader from configuration.
//! - `writers`: NDJSON output for result sets.

pub mod error;
pub mod fixture;
pub mod readers;
pub mod source;
pub mod writers;

pub use error::{Error, Result};
pub use fixture::sample_catalog;
pub use source::{load_catalog, CatalogSource};
