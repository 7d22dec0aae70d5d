//! Streaming NDJSON writer for product result sets.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufWriter, Write};

use crate::error::Result;
use quarry_core::product::{Product, ProductField};

pub struct JsonlWriter<W: Write> {
    writer: BufWriter<W>,
    // empty means "whole record"
    fields: Vec<ProductField>,
}

impl JsonlWriter<File> {
    pub fn to_path(path: &str, fields: Option<Vec<ProductField>>) -> Result<Self> {
        let f = File::create(path)?;
        Ok(Self::to_writer(f, fields))
    }
}

impl<W: Write> JsonlWriter<W> {
    pub fn to_writer(writer: W, fields: Option<Vec<ProductField>>) -> Self {
        Self {
            writer: BufWriter::new(writer),
            fields: fields.unwrap_or_default(),
        }
    }

    /// Write products as one JSON object per line.
    /// With no field list, each line is the full record.
    pub fn write_products<'a, I>(&mut self, products: I) -> Result<usize>
    where
        I: IntoIterator<Item = &'a Product>,
    {
        let mut n = 0;
        for p in products {
            let line = if self.fields.is_empty() {
                serde_json::to_string(p)?
            } else {
                let obj: BTreeMap<&str, serde_json::Value> = self
                    .fields
                    .iter()
                    .map(|f| (f.as_str(), f.to_json(p)))
                    .collect();
                serde_json::to_string(&obj)?
            };
            writeln!(self.writer, "{}", line)?;
            n += 1;
        }
        self.writer.flush()?;
        Ok(n)
    }

    /// Write arbitrary serializable values (e.g. projected keys), one per line.
    pub fn write_values<'a, T, I>(&mut self, values: I) -> Result<usize>
    where
        T: serde::Serialize + 'a,
        I: IntoIterator<Item = &'a T>,
    {
        let mut n = 0;
        for v in values {
            writeln!(self.writer, "{}", serde_json::to_string(v)?)?;
            n += 1;
        }
        self.writer.flush()?;
        Ok(n)
    }

    pub fn into_inner(self) -> std::result::Result<W, std::io::Error> {
        self.writer.into_inner().map_err(|e| e.into_error())
    }
}
