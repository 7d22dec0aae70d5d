//! The sample queries run by `quarry demo`.

use std::io::{self, Write};

use quarry_core::product::{Catalog, Price, Product};
use quarry_operators::{all, any, filter, first_match, last_match, project, AsQuery};

use crate::render::{write_optional, write_table};

pub fn run_demo<W: Write>(out: &mut W, catalog: &Catalog) -> io::Result<()> {
    let products = catalog.as_slice();

    section(out, "Simple query: category == \"Beverages\"")?;
    let beverages = filter(products, |p| p.category == "Beverages");
    write_table(out, &beverages.iter().collect::<Vec<_>>())?;
    let beverage_prices = project(&beverages, |p| p.price);
    writeln!(out, "prices: {}", join_prices(&beverage_prices))?;

    section(out, "Where + select: beverage prices (chained)")?;
    let chained = products
        .query()
        .filter(|p| p.category == "Beverages")
        .project(|p| p.price);
    writeln!(out, "prices: {}", join_prices(&chained))?;

    section(out, "Order by price ascending")?;
    let sorted = products.query().sort_ascending(|p| p.price).into_refs();
    write_table(out, &sorted)?;

    section(out, "Order by price descending")?;
    let desc = products.query().sort_descending(|p| p.price).into_refs();
    write_table(out, &desc)?;

    section(out, "Any: name contains \"Alice\"")?;
    writeln!(out, "{}", any(products, |p| p.name.contains("Alice")))?;

    section(out, "All: stock > 0")?;
    writeln!(out, "{}", all(products, |p| p.stock > 0))?;

    let threshold = Price::units(30);

    section(out, "First: price >= 30")?;
    write_optional(out, first_match(products, |p: &Product| p.price >= threshold))?;

    section(out, "Last: price >= 30")?;
    write_optional(out, last_match(products, |p: &Product| p.price >= threshold))?;

    Ok(())
}

fn section<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "== {}", title)
}

fn join_prices(prices: &[Price]) -> String {
    prices
        .iter()
        .map(|p| p.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
