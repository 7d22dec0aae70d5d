//! Embedded sample catalog (77 Northwind-style products).

use quarry_core::product::Catalog;

use crate::error::Result;
use crate::readers::json::parse_catalog_json;

const SAMPLE_PRODUCTS_JSON: &str = include_str!("../data/products.json");

/// Parse the embedded sample catalog.
pub fn sample_catalog() -> Result<Catalog> {
    parse_catalog_json(SAMPLE_PRODUCTS_JSON)
}

#[cfg(test)]
mod tests {
    use super::*;
    use quarry_core::product::Price;

    #[test]
    fn fixture_is_complete_and_valid() {
        let catalog = sample_catalog().unwrap();
        assert_eq!(catalog.len(), 77);
        let ids: Vec<u32> = catalog.as_slice().iter().map(|p| p.id).collect();
        assert_eq!(ids, (1..=77).collect::<Vec<_>>());
    }

    #[test]
    fn fixture_keeps_exact_prices() {
        let catalog = sample_catalog().unwrap();
        assert_eq!(catalog.get(29).unwrap().price, Price::from_cents(12379));
        assert_eq!(catalog.get(38).unwrap().price, Price::from_cents(26350));
        assert_eq!(catalog.get(77).unwrap().name, "Original Frankfurter grüne Soße");
    }
}
