//! Deterministic product generators shared by the integration tests.
#![allow(dead_code)]

use quarry_core::product::{Price, Product};

const CATEGORIES: [&str; 5] = ["Beverages", "Condiments", "Produce", "Seafood", "Confections"];

/// Small linear congruential generator; good enough for reproducible fixtures.
pub struct Lcg(u64);

impl Lcg {
    pub fn new(seed: u64) -> Self {
        Self(seed.wrapping_mul(6364136223846793005).wrapping_add(1))
    }

    pub fn next_u64(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0 >> 33
    }

    pub fn below(&mut self, n: u64) -> u64 {
        self.next_u64() % n
    }
}

/// `n` products with ids `1..=n`. Prices are drawn from a narrow range so
/// sorts see plenty of ties.
pub fn generate_products(n: usize, seed: u64) -> Vec<Product> {
    let mut rng = Lcg::new(seed);
    (0..n)
        .map(|i| {
            let id = i as u32 + 1;
            let category = CATEGORIES[rng.below(CATEGORIES.len() as u64) as usize];
            let price = Price::units(5 + rng.below(10));
            let stock = rng.below(4) as u32 * 10;
            Product::new(id, format!("Product {id}"), category, price, stock)
        })
        .collect()
}

/// The three-record scenario: (18, Beverages), (10, Condiments), (30, Produce).
pub fn scenario_products() -> Vec<Product> {
    vec![
        Product::new(1, "Chai", "Beverages", Price::units(18), 39),
        Product::new(3, "Aniseed Syrup", "Condiments", Price::units(10), 13),
        Product::new(7, "Uncle Bob's Organic Dried Pears", "Produce", Price::units(30), 15),
    ]
}

pub fn create_temp_dir(label: &str) -> String {
    let dir = std::env::temp_dir().join(format!(
        "quarry-test-{}-{}-{}",
        label,
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or(0)
    ));
    std::fs::create_dir_all(&dir).expect("Failed to create temp dir");
    dir.to_string_lossy().into_owned()
}
