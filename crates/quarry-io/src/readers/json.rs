//! JSON catalogs: a single array of product objects.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use quarry_core::product::{Catalog, Product};

use crate::error::Result;

pub fn read_catalog_json<R: Read>(reader: R) -> Result<Catalog> {
    let products: Vec<Product> = serde_json::from_reader(reader)?;
    let catalog = Catalog::new(products);
    catalog.validate()?;
    Ok(catalog)
}

pub fn parse_catalog_json(text: &str) -> Result<Catalog> {
    read_catalog_json(text.as_bytes())
}

pub fn load_json(path: impl AsRef<Path>) -> Result<Catalog> {
    let f = File::open(path.as_ref())?;
    let catalog = read_catalog_json(BufReader::new(f))?;

    #[cfg(feature = "tracing")]
    tracing::debug!(
        path = %path.as_ref().display(),
        products = catalog.len(),
        "loaded json catalog"
    );

    Ok(catalog)
}
