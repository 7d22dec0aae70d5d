//! Runtime configuration that the CLI and loaders can serialize/deserialize.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// On-disk layout of a product catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogFormat {
    /// Pick from the file extension, falling back to JSON.
    #[default]
    Auto,
    Json,
    Csv,
}

impl CatalogFormat {
    /// Resolve `Auto` against a path's extension.
    pub fn resolve(self, path: &Path) -> CatalogFormat {
        match self {
            CatalogFormat::Auto => match path.extension().and_then(|e| e.to_str()) {
                Some(ext) if ext.eq_ignore_ascii_case("csv") => CatalogFormat::Csv,
                _ => CatalogFormat::Json,
            },
            other => other,
        }
    }
}

impl FromStr for CatalogFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(CatalogFormat::Auto),
            "json" => Ok(CatalogFormat::Json),
            "csv" => Ok(CatalogFormat::Csv),
            other => Err(Error::Config(format!("unknown catalog format '{}'", other))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuarryConfig {
    /// Catalog file to query. `None` selects the embedded sample catalog.
    pub catalog_path: Option<PathBuf>,

    /// Layout of `catalog_path`.
    pub catalog_format: CatalogFormat,

    /// `tracing-subscriber` filter directive, e.g. "info" or "quarry=debug".
    pub log_filter: String,
}

impl Default for QuarryConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            catalog_format: CatalogFormat::Auto,
            log_filter: "warn".to_string(),
        }
    }
}

impl QuarryConfig {
    /// Create a config from environment variables, falling back to defaults.
    ///
    /// Environment variables:
    /// - `QUARRY_CATALOG`: path to a JSON or CSV catalog
    /// - `QUARRY_CATALOG_FORMAT`: `auto`, `json`, or `csv`
    /// - `QUARRY_LOG`: log filter directive
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as `from_env`, reading variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();

        if let Some(s) = lookup("QUARRY_CATALOG") {
            if !s.trim().is_empty() {
                cfg.catalog_path = Some(PathBuf::from(s));
            }
        }

        if let Some(s) = lookup("QUARRY_CATALOG_FORMAT") {
            if let Ok(v) = s.parse::<CatalogFormat>() {
                cfg.catalog_format = v;
            }
        }

        if let Some(s) = lookup("QUARRY_LOG") {
            cfg.log_filter = s;
        }

        cfg
    }

    /// Format to use for `catalog_path`, with `Auto` resolved.
    pub fn effective_format(&self) -> Option<CatalogFormat> {
        self.catalog_path
            .as_deref()
            .map(|p| self.catalog_format.resolve(p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |k| map.get(k).cloned()
    }

    #[test]
    fn defaults_select_embedded_catalog() {
        let cfg = QuarryConfig::from_lookup(env(&[]));
        assert_eq!(cfg, QuarryConfig::default());
        assert_eq!(cfg.effective_format(), None);
    }

    #[test]
    fn env_overrides_defaults() {
        let cfg = QuarryConfig::from_lookup(env(&[
            ("QUARRY_CATALOG", "/data/products.csv"),
            ("QUARRY_LOG", "debug"),
        ]));
        assert_eq!(cfg.catalog_path, Some(PathBuf::from("/data/products.csv")));
        assert_eq!(cfg.effective_format(), Some(CatalogFormat::Csv));
        assert_eq!(cfg.log_filter, "debug");
    }

    #[test]
    fn unparseable_format_is_ignored() {
        let cfg = QuarryConfig::from_lookup(env(&[
            ("QUARRY_CATALOG", "products.data"),
            ("QUARRY_CATALOG_FORMAT", "xml"),
        ]));
        assert_eq!(cfg.catalog_format, CatalogFormat::Auto);
        assert_eq!(cfg.effective_format(), Some(CatalogFormat::Json));
    }

    #[test]
    fn explicit_format_wins_over_extension() {
        let cfg = QuarryConfig {
            catalog_path: Some(PathBuf::from("products.csv")),
            catalog_format: CatalogFormat::Json,
            ..Default::default()
        };
        assert_eq!(cfg.effective_format(), Some(CatalogFormat::Json));
    }
}
