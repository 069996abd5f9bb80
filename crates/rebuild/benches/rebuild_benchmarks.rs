use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use std::sync::Arc;

use chrono::{Duration, TimeZone, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use makerstock_catalog::{ComponentSpec, Item, ItemType, PriceType};
use makerstock_core::{Entity, ItemId, PurchaseLineId, SaleLineId};
use makerstock_measure::{Measurement, MeasurementKind, UnitOfMeasure};
use makerstock_purchasing::{PurchaseLine, PurchaseStatus};
use makerstock_rebuild::RebuildService;
use makerstock_sales::{SaleLine, SaleStatus};
use makerstock_store::{InMemoryCatalogStore, InMemoryPurchaseStore, InMemorySaleStore};

type InMemoryService = RebuildService<
    Arc<InMemoryCatalogStore>,
    Arc<InMemoryPurchaseStore>,
    Arc<InMemorySaleStore>,
>;

/// Seed `item_count` items, each with `lines_per_item` purchases and as many
/// sales, spread over a synthetic year of history.
fn seed_history(item_count: usize, lines_per_item: usize) -> InMemoryService {
    let catalog = Arc::new(InMemoryCatalogStore::new());
    let purchases = Arc::new(InMemoryPurchaseStore::new());
    let sales = Arc::new(InMemorySaleStore::new());
    let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();

    for i in 0..item_count {
        let item = Item::new(
            ItemId::new(),
            format!("Item {i}"),
            ItemType::Product,
            MeasurementKind::Quantity,
            UnitOfMeasure::Each,
            PriceType::Each,
        )
        .unwrap();

        for line in 0..lines_per_item {
            let occurred_at = start + Duration::hours((i * lines_per_item + line) as i64);
            let quantity = Decimal::from((line % 7 + 1) as i64);
            let unit_cost = dec!(2.50) + Decimal::from(line as i64) / dec!(100);
            purchases
                .push_line(PurchaseLine::new(
                    PurchaseLineId::new(),
                    item.id(),
                    quantity,
                    Measurement::count(quantity),
                    unit_cost,
                    unit_cost * quantity,
                    PurchaseStatus::Received,
                    occurred_at,
                ))
                .unwrap();

            let sold = Decimal::from((line % 3 + 1) as i64);
            sales
                .push_line(SaleLine::new(
                    SaleLineId::new(),
                    item.id(),
                    sold,
                    Measurement::count(sold),
                    dec!(9.99),
                    dec!(9.99) * sold,
                    SaleStatus::Completed,
                    occurred_at + Duration::minutes(30),
                ))
                .unwrap();
        }

        catalog.insert_item(item).unwrap();
    }

    RebuildService::new(catalog, purchases, sales)
}

/// Seed `item_count` products, each declaring components on a shared pool of
/// materials.
fn seed_components(item_count: usize) -> InMemoryService {
    let catalog = Arc::new(InMemoryCatalogStore::new());

    let materials: Vec<ItemId> = (0..32)
        .map(|i| {
            let material = Item::new(
                ItemId::new(),
                format!("Material {i}"),
                ItemType::Material,
                MeasurementKind::Quantity,
                UnitOfMeasure::Each,
                PriceType::Each,
            )
            .unwrap();
            let material_id = material.id();
            catalog.insert_item(material).unwrap();
            material_id
        })
        .collect();

    for i in 0..item_count {
        let components = (0..4)
            .map(|c| ComponentSpec::new(materials[(i + c) % materials.len()], dec!(2)))
            .collect();
        let product = Item::new(
            ItemId::new(),
            format!("Product {i}"),
            ItemType::Product,
            MeasurementKind::Quantity,
            UnitOfMeasure::Each,
            PriceType::Each,
        )
        .unwrap()
        .with_components(components);
        catalog.insert_item(product).unwrap();
    }

    RebuildService::new(
        catalog,
        Arc::new(InMemoryPurchaseStore::new()),
        Arc::new(InMemorySaleStore::new()),
    )
}

fn bench_inventory_rebuild(c: &mut Criterion) {
    let mut group = c.benchmark_group("inventory_rebuild");

    for item_count in [10, 100, 1000].iter() {
        group.throughput(Throughput::Elements(*item_count as u64));
        group.bench_with_input(
            BenchmarkId::new("items_with_20_lines", item_count),
            item_count,
            |b, &count| {
                let service = seed_history(count, 10);
                b.iter(|| black_box(service.rebuild_inventory().unwrap()));
            },
        );
    }

    group.finish();
}

fn bench_line_volume(c: &mut Criterion) {
    let mut group = c.benchmark_group("inventory_rebuild_line_volume");

    for lines_per_item in [10, 100, 1000].iter() {
        group.throughput(Throughput::Elements(*lines_per_item as u64 * 2));
        group.bench_with_input(
            BenchmarkId::new("single_item_lines", lines_per_item),
            lines_per_item,
            |b, &count| {
                let service = seed_history(1, count);
                b.iter(|| black_box(service.rebuild_inventory().unwrap()));
            },
        );
    }

    group.finish();
}

fn bench_relationship_rebuild(c: &mut Criterion) {
    let mut group = c.benchmark_group("relationship_rebuild");

    for item_count in [10, 100, 1000].iter() {
        group.throughput(Throughput::Elements(*item_count as u64));
        group.bench_with_input(
            BenchmarkId::new("products_with_4_components", item_count),
            item_count,
            |b, &count| {
                let service = seed_components(count);
                b.iter(|| black_box(service.rebuild_relationships().unwrap()));
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_inventory_rebuild,
    bench_line_volume,
    bench_relationship_rebuild
);
criterion_main!(benches);
