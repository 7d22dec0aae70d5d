//! CSV catalogs with a header row: `id,name,category,price,stock`.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use quarry_core::product::{Catalog, Product};

use crate::error::Result;

pub fn read_catalog_csv<R: Read>(reader: R) -> Result<Catalog> {
    let mut rdr = ::csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(::csv::Trim::All)
        .from_reader(reader);

    let mut products = Vec::new();
    for record in rdr.deserialize::<Product>() {
        products.push(record?);
    }

    let catalog = Catalog::new(products);
    catalog.validate()?;
    Ok(catalog)
}

pub fn load_csv(path: impl AsRef<Path>) -> Result<Catalog> {
    let f = File::open(path.as_ref())?;
    let catalog = read_catalog_csv(f)?;

    #[cfg(feature = "tracing")]
    tracing::debug!(
        path = %path.as_ref().display(),
        products = catalog.len(),
        "loaded csv catalog"
    );

    Ok(catalog)
}
