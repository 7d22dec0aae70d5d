//! Resolve where a catalog comes from and load it.

use std::path::{Path, PathBuf};

use quarry_core::config::{CatalogFormat, QuarryConfig};
use quarry_core::product::Catalog;

use crate::error::Result;
use crate::fixture::sample_catalog;
use crate::readers::{csv::load_csv, json::load_json};

#[derive(Debug, Clone, PartialEq)]
pub enum CatalogSource {
    /// The sample catalog compiled into the binary.
    Embedded,
    File { path: PathBuf, format: CatalogFormat },
}

impl CatalogSource {
    pub fn from_config(cfg: &QuarryConfig) -> Self {
        match &cfg.catalog_path {
            Some(path) => CatalogSource::File {
                path: path.clone(),
                format: cfg.catalog_format,
            },
            None => CatalogSource::Embedded,
        }
    }

    pub fn load(&self) -> Result<Catalog> {
        match self {
            CatalogSource::Embedded => sample_catalog(),
            CatalogSource::File { path, format } => load_catalog(path, *format),
        }
    }
}

/// Load a catalog file, resolving `CatalogFormat::Auto` from the extension.
pub fn load_catalog(path: impl AsRef<Path>, format: CatalogFormat) -> Result<Catalog> {
    let path = path.as_ref();
    match format.resolve(path) {
        CatalogFormat::Csv => load_csv(path),
        _ => load_json(path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_uses_embedded_catalog() {
        let src = CatalogSource::from_config(&QuarryConfig::default());
        assert_eq!(src, CatalogSource::Embedded);
        assert_eq!(src.load().unwrap().len(), 77);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let src = CatalogSource::File {
            path: PathBuf::from("/definitely/not/here.json"),
            format: CatalogFormat::Auto,
        };
        assert!(matches!(src.load(), Err(crate::Error::Io(_))));
    }
}
