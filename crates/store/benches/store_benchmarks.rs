use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use stockroom_catalog::{NewProduct, Price};
use stockroom_core::ProductId;
use stockroom_ledger::{MovementType, NewMovement};
use stockroom_store::InventoryStore;

fn bench_product(i: usize) -> NewProduct {
    NewProduct {
        name: format!("Product {i}"),
        sku: format!("SKU-{i:05}"),
        description: None,
        quantity: (i as i64 % 80) + 1,
        min_stock_level: 10,
        category: format!("Category {}", i % 8),
        location: format!("Z-{}", i % 12),
        price: Some(Price::from_cents(((i as u64 % 400) + 1) * 25)),
    }
}

fn seeded_store(product_count: usize) -> InventoryStore {
    let store = InventoryStore::new();
    for i in 0..product_count {
        store.create_product(bench_product(i));
    }
    store
}

fn movement(product_id: ProductId, movement_type: MovementType, quantity: i64) -> NewMovement {
    NewMovement {
        product_id,
        movement_type,
        quantity,
        notes: None,
    }
}

fn bench_record_movement(c: &mut Criterion) {
    let mut group = c.benchmark_group("record_movement");
    group.sample_size(1000);
    group.throughput(Throughput::Elements(1));

    // Benchmark: incoming movements only (stock keeps growing)
    group.bench_function("stock_in", |b| {
        let store = seeded_store(1);
        let product_id = store.list_products()[0].id;

        b.iter(|| {
            store
                .record_movement(movement(product_id, MovementType::In, black_box(5)))
                .unwrap();
        });
    });

    // Benchmark: alternating in/out against one product (stock stays level)
    group.bench_function("alternating_in_out", |b| {
        let store = seeded_store(1);
        let product_id = store.list_products()[0].id;
        store
            .record_movement(movement(product_id, MovementType::In, 1_000))
            .unwrap();

        let mut outgoing = false;
        b.iter(|| {
            outgoing = !outgoing;
            let movement_type = if outgoing {
                MovementType::Out
            } else {
                MovementType::In
            };
            store
                .record_movement(movement(product_id, movement_type, black_box(5)))
                .unwrap();
        });
    });

    group.finish();
}

fn bench_reporting_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("reporting_scan");

    for product_count in [10usize, 100, 1_000, 10_000] {
        group.throughput(Throughput::Elements(product_count as u64));
        group.bench_with_input(
            BenchmarkId::new("full_scan", product_count),
            &product_count,
            |b, &count| {
                let store = seeded_store(count);
                b.iter(|| black_box(store.reporting()));
            },
        );
    }

    group.finish();
}

fn bench_low_stock_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("low_stock_scan");

    for product_count in [100usize, 10_000] {
        group.bench_with_input(
            BenchmarkId::new("alerts", product_count),
            &product_count,
            |b, &count| {
                let store = seeded_store(count);
                b.iter(|| black_box(store.low_stock_alerts()));
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_record_movement,
    bench_reporting_scan,
    bench_low_stock_scan
);
criterion_main!(benches);
