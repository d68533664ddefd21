// Copyright 2026 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::cell::Cell;
use std::rc::Rc;

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use overstory_registry::{EntryId, Registry};
use overstory_view::View;

fn filled_registry(n: usize) -> (Registry<u64>, Vec<EntryId>) {
    let overlays: Registry<u64> = Registry::new();
    let ids = (0..n)
        .map(|i| overlays.push_with(|_| i as u64))
        .collect();
    (overlays, ids)
}

fn subscribed_registry(subscribers: usize) -> (Registry<u64>, Rc<Cell<u64>>, Vec<overstory_registry::Subscription>) {
    let overlays: Registry<u64> = Registry::new();
    let fired = Rc::new(Cell::new(0u64));
    let subs = (0..subscribers)
        .map(|_| {
            let fired = Rc::clone(&fired);
            overlays.subscribe(move || fired.set(fired.get() + 1))
        })
        .collect();
    (overlays, fired, subs)
}

fn bench_push(c: &mut Criterion) {
    let mut group = c.benchmark_group("push");
    for n in [16usize, 256, 4096] {
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("anonymous_{n}"), |b| {
            b.iter_batched(
                Registry::<u64>::new,
                |overlays| {
                    for i in 0..n {
                        overlays.push(i as u64);
                    }
                    overlays
                },
                BatchSize::SmallInput,
            );
        });
        group.bench_function(format!("tagged_{n}"), |b| {
            b.iter_batched(
                Registry::<u64>::new,
                |overlays| {
                    for i in 0..n {
                        overlays.push_with(|_| i as u64);
                    }
                    overlays
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_dismiss(c: &mut Criterion) {
    let mut group = c.benchmark_group("dismiss");
    for n in [16usize, 256, 4096] {
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("by_id_front_to_back_{n}"), |b| {
            b.iter_batched(
                || filled_registry(n),
                |(overlays, ids)| {
                    for id in ids {
                        overlays.dismiss(id);
                    }
                    overlays
                },
                BatchSize::SmallInput,
            );
        });
        group.bench_function(format!("last_{n}"), |b| {
            b.iter_batched(
                || filled_registry(n).0,
                |overlays| {
                    for _ in 0..n {
                        overlays.dismiss_last();
                    }
                    overlays
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_notify_fanout(c: &mut Criterion) {
    let mut group = c.benchmark_group("notify_fanout");
    for subscribers in [1usize, 8, 64] {
        group.throughput(Throughput::Elements(subscribers as u64));
        group.bench_function(format!("subscribers_{subscribers}"), |b| {
            let (overlays, fired, _subs) = subscribed_registry(subscribers);
            b.iter(|| {
                overlays.push(1);
                overlays.dismiss_last();
                black_box(fired.get())
            });
        });
    }
    group.finish();
}

fn bench_view_mirror(c: &mut Criterion) {
    let mut group = c.benchmark_group("view_mirror");
    for n in [16usize, 256] {
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("mutate_and_render_{n}"), |b| {
            let (overlays, _ids) = filled_registry(n);
            let mut view = View::new(&overlays);
            view.mount();
            b.iter(|| {
                overlays.push(0);
                overlays.dismiss_last();
                black_box(view.render().len())
            });
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_push,
    bench_dismiss,
    bench_notify_fanout,
    bench_view_mirror
);
criterion_main!(benches);
