use criterion::{criterion_group, criterion_main, Criterion};
use quarry_core::product::{Price, Product};
use quarry_operators::{all, filter, last_match, sort_descending, AsQuery};

fn make_products(rows: usize) -> Vec<Product> {
    (0..rows)
        .map(|i| {
            Product::new(
                i as u32,
                format!("product-{}", i),
                format!("group-{}", i % 4),
                Price::from_cents(((i * 7919) % 10_000) as u64),
                (i % 50) as u32,
            )
        })
        .collect()
}

fn bench_operators(c: &mut Criterion) {
    let products = make_products(10_000);
    let threshold = Price::units(50);

    c.bench_function("filter", |b| {
        b.iter(|| filter(&products, |p| p.category == "group-1").len())
    });
    c.bench_function("sort_descending", |b| {
        b.iter(|| sort_descending(&products, |p| p.price).len())
    });
    c.bench_function("all_full_scan", |b| {
        b.iter(|| all(&products, |p| p.stock < 1_000))
    });
    c.bench_function("last_match", |b| {
        b.iter(|| last_match(&products, |p| p.price >= threshold).map(|p| p.id))
    });
    c.bench_function("query_chain", |b| {
        b.iter(|| {
            products
                .query()
                .filter(|p| p.stock > 10)
                .sort_ascending(|p| p.price)
                .project(|p| p.id)
                .len()
        })
    });
}

criterion_group!(operators, bench_operators);
criterion_main!(operators);
