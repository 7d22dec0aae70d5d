//! Catalog readers. Each one parses the whole source and validates the result.

pub mod csv;
pub mod json;
