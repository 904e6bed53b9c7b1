use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use chrono::{Duration, TimeZone, Utc};
use restock_core::{ProductId, ShoppingListId};
use restock_forecasting::{
    alerts, monthly_budget, shopping_list_budget, PlanningConfig, ProductSnapshot,
    ShoppingListSnapshot,
};

/// Deterministic catalog: mixed stock levels, every product with a short price history.
fn catalog(size: usize) -> Vec<ProductSnapshot> {
    let t0 = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    (0..size)
        .map(|i| {
            let mut product = ProductSnapshot::new(ProductId::new(), format!("product-{i}"))
                .with_stock((i % 17) as f64)
                .with_weekly_demand((i % 5) as f64)
                .with_monthly_demand((i % 23) as f64);
            for day in 0..12 {
                product = product.with_price(1.0 + (day % 4) as f64, t0 + Duration::days(day));
            }
            product
        })
        .collect()
}

fn bench_monthly_budget(c: &mut Criterion) {
    let mut group = c.benchmark_group("monthly_budget");
    for size in [100usize, 1_000, 10_000] {
        let products = catalog(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &products, |b, products| {
            b.iter(|| monthly_budget(black_box(products)));
        });
    }
    group.finish();
}

fn bench_alerts(c: &mut Criterion) {
    let mut group = c.benchmark_group("shortage_alerts");
    for size in [100usize, 1_000, 10_000] {
        let products = catalog(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &products, |b, products| {
            b.iter(|| alerts(black_box(products), 2.0));
        });
    }
    group.finish();
}

fn bench_auto_populated_list_budget(c: &mut Criterion) {
    let products = catalog(1_000);
    let config = PlanningConfig::default();

    c.bench_function("auto_populate_and_value_list", |b| {
        b.iter(|| {
            let list = ShoppingListSnapshot::auto_populated(
                ShoppingListId::new(),
                "bench",
                black_box(&products),
                &config,
            )
            .unwrap();
            shopping_list_budget(&list, &products)
        });
    });
}

criterion_group!(
    benches,
    bench_monthly_budget,
    bench_alerts,
    bench_auto_populated_list_budget
);
criterion_main!(benches);
