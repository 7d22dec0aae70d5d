//! Product records and the catalog that holds them.
//!
//! `Price` is an exact decimal kept as integer cents so it has a total order
//! and can be used directly as a sort key.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Error, Result};

/// Fractional digits accepted on input. Digits past the second must be zero.
const MAX_FRACTION_DIGITS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Price {
    cents: u64,
}

impl Price {
    pub const fn from_cents(cents: u64) -> Self {
        Self { cents }
    }

    /// Whole units, e.g. `Price::units(18)` is 18.00.
    pub const fn units(units: u64) -> Self {
        Self { cents: units * 100 }
    }

    pub fn cents(&self) -> u64 {
        self.cents
    }

    pub fn as_f64(&self) -> f64 {
        self.cents as f64 / 100.0
    }

    pub fn from_f64(value: f64) -> Result<Self> {
        if !value.is_finite() {
            return Err(Error::Price(format!("non-finite value {value}")));
        }
        if value < 0.0 {
            return Err(Error::Price(format!("negative value {value}")));
        }
        let scaled = value * 100.0;
        let cents = scaled.round();
        if (scaled - cents).abs() > 1e-6 {
            return Err(Error::Price(format!("{value} has sub-cent precision")));
        }
        // `as` saturates; 2^64 itself is the first unrepresentable value.
        if cents >= u64::MAX as f64 {
            return Err(Error::Price(format!("{value} is out of range")));
        }
        Ok(Self {
            cents: cents as u64,
        })
    }
}

impl FromStr for Price {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let (whole, frac) = match s.split_once('.') {
            Some((w, f)) => (w, f),
            None => (s, ""),
        };
        if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::Price(format!("cannot parse '{s}'")));
        }
        if frac.len() > MAX_FRACTION_DIGITS || !frac.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::Price(format!("cannot parse '{s}'")));
        }
        if frac.len() > 2 && frac[2..].bytes().any(|b| b != b'0') {
            return Err(Error::Price(format!("'{s}' has sub-cent precision")));
        }

        let units: u64 = whole
            .parse()
            .map_err(|_| Error::Price(format!("'{s}' is out of range")))?;
        let mut frac_cents = 0u64;
        for (i, b) in frac.bytes().take(2).enumerate() {
            let digit = u64::from(b - b'0');
            frac_cents += if i == 0 { digit * 10 } else { digit };
        }
        units
            .checked_mul(100)
            .and_then(|c| c.checked_add(frac_cents))
            .map(Self::from_cents)
            .ok_or_else(|| Error::Price(format!("'{s}' is out of range")))
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.cents / 100, self.cents % 100)
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_f64())
    }
}

/// Prices arrive as JSON numbers, CSV cells, or quoted decimal strings.
#[derive(Deserialize)]
#[serde(untagged)]
enum PriceRepr {
    Num(f64),
    Text(String),
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let parsed = match PriceRepr::deserialize(deserializer)? {
            PriceRepr::Num(v) => Price::from_f64(v),
            PriceRepr::Text(s) => s.parse(),
        };
        parsed.map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub category: String,
    pub price: Price,
    pub stock: u32,
}

impl Product {
    pub fn new(
        id: u32,
        name: impl Into<String>,
        category: impl Into<String>,
        price: Price,
        stock: u32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            category: category.into(),
            price,
            stock,
        }
    }
}

/// Named product attribute, used for textual predicates, sort keys, and projections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductField {
    Id,
    Name,
    Category,
    Price,
    Stock,
}

impl ProductField {
    pub const ALL: [ProductField; 5] = [
        ProductField::Id,
        ProductField::Name,
        ProductField::Category,
        ProductField::Price,
        ProductField::Stock,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProductField::Id => "id",
            ProductField::Name => "name",
            ProductField::Category => "category",
            ProductField::Price => "price",
            ProductField::Stock => "stock",
        }
    }

    /// Render this field of `product` as text.
    pub fn render(&self, product: &Product) -> String {
        match self {
            ProductField::Id => product.id.to_string(),
            ProductField::Name => product.name.clone(),
            ProductField::Category => product.category.clone(),
            ProductField::Price => product.price.to_string(),
            ProductField::Stock => product.stock.to_string(),
        }
    }

    /// Same as `render`, but as a JSON value with numeric fields kept numeric.
    pub fn to_json(&self, product: &Product) -> serde_json::Value {
        match self {
            ProductField::Id => serde_json::Value::from(product.id),
            ProductField::Name => serde_json::Value::from(product.name.clone()),
            ProductField::Category => serde_json::Value::from(product.category.clone()),
            ProductField::Price => serde_json::Value::from(product.price.as_f64()),
            ProductField::Stock => serde_json::Value::from(product.stock),
        }
    }
}

impl FromStr for ProductField {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let needle = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|f| f.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| Error::Field(needle.to_string()))
    }
}

impl fmt::Display for ProductField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An ordered collection of products, as loaded from a data source.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Reject catalogs with duplicate product ids.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::with_capacity(self.products.len());
        for p in &self.products {
            if !seen.insert(p.id) {
                return Err(Error::Catalog(format!("duplicate product id {}", p.id)));
            }
        }
        Ok(())
    }

    pub fn as_slice(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn get(&self, id: u32) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn into_inner(self) -> Vec<Product> {
        self.products
    }
}

impl From<Vec<Product>> for Catalog {
    fn from(products: Vec<Product>) -> Self {
        Self::new(products)
    }
}
