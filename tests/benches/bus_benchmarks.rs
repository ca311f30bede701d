//! # Switchboard Bus Benchmarks
//!
//! | Scenario | What it measures |
//! |----------|------------------|
//! | fan-out | One publish delivered to N listeners |
//! | request/reply | `IS_LOGGED_IN` round trip through Auth |
//! | gated add | `ADD_PRODUCT` including the Catalog's nested query |

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use sb_01_auth::AuthModule;
use sb_02_catalog::CatalogModule;
use shared_bus::{
    bootstrap, define_message, on, Bus, EventPublisher, EventSubscriber, MessageCreator,
};
use shared_messages::{reply, Credentials, Product, ADD_PRODUCT, IS_LOGGED_IN, LOGIN};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

static TICK: MessageCreator<u64> = define_message("tick");

fn bench_fan_out(c: &mut Criterion) {
    let mut group = c.benchmark_group("bus-fan-out");

    for listeners in [1usize, 10, 100, 1000] {
        let bus = Bus::new();
        let total = Arc::new(AtomicU64::new(0));
        let handles: Vec<_> = (0..listeners)
            .map(|_| {
                let total = total.clone();
                bus.subscribe(on(TICK, move |value: &u64| {
                    total.fetch_add(*value, Ordering::Relaxed);
                    Ok(())
                }))
            })
            .collect();

        group.throughput(Throughput::Elements(listeners as u64));
        group.bench_with_input(
            BenchmarkId::new("publish", listeners),
            &listeners,
            |b, _| b.iter(|| bus.publish(black_box(&TICK.create(1))).unwrap()),
        );

        drop(handles);
    }

    group.finish();
}

fn bench_modules(c: &mut Criterion) {
    let mut group = c.benchmark_group("modules");

    let auth = AuthModule::new();
    let catalog = CatalogModule::new();
    let bus = bootstrap(&[&auth, &catalog]).unwrap();
    bus.publish(&LOGIN.create(Credentials::new("bench", "pw")))
        .unwrap();

    group.bench_function("is_logged_in_round_trip", |b| {
        let answer = Arc::new(AtomicU64::new(0));
        let sink = answer.clone();
        let query = IS_LOGGED_IN.create(reply(move |v: bool| sink.store(v as u64, Ordering::Relaxed)));
        b.iter(|| bus.publish(black_box(&query)).unwrap())
    });

    group.bench_function("add_product", |b| {
        let message = ADD_PRODUCT.create(Product::new("widget", 2.5));
        b.iter(|| bus.publish(black_box(&message)).unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_fan_out, bench_modules);
criterion_main!(benches);
