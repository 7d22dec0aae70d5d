//! Convenient re-exports for downstream crates.

pub use crate::config::{CatalogFormat, QuarryConfig};
pub use crate::error::{Error, Result};
pub use crate::predicate::{CmpOp, FieldPredicate, Literal, PredicateSet};
pub use crate::product::{Catalog, Price, Product, ProductField};
