use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use keyed_collections::{Items, Key, OrderedCollection, Record, Value};
use std::hint::black_box;

// ─── Test Data ──────────────────────────────────────────────────────────────

const LEN: usize = 1_000;

/// Sequence of `LEN` integers in descending order.
fn make_ordered() -> OrderedCollection {
    (0..LEN as i64).rev().collect()
}

/// String-keyed mapping with the same values, for bulk loads.
fn make_keyed_items() -> Items {
    (0..LEN)
        .map(|i| (Key::from(format!("k{i}")), Value::from(i as i64)))
        .collect()
}

fn make_record() -> Record {
    let mut record = Record::new();
    record
        .set_field("id", "user:abc123")
        .set_field("name", "Alice")
        .set_field("age", 28i64)
        .set_field("creation_date", "2024-01-15T10:30:00Z");
    record
}

// ═══════════════════════════════════════════════════════════════════════════
// Group 1: Stack operations
// ═══════════════════════════════════════════════════════════════════════════

fn bench_stack_ops(c: &mut Criterion) {
    let mut group = c.benchmark_group("stack_ops");

    group.bench_function("push + pop", |b| {
        let mut ordered = make_ordered();
        b.iter(|| {
            ordered.push(black_box(1i64));
            black_box(ordered.pop())
        })
    });

    // shift and unshift re-index the whole sequence
    group.bench_function("unshift + shift", |b| {
        let mut ordered = make_ordered();
        b.iter(|| {
            ordered.unshift(black_box(1i64));
            black_box(ordered.shift())
        })
    });

    group.finish();
}

// ═══════════════════════════════════════════════════════════════════════════
// Group 2: Positional access and removal
// ═══════════════════════════════════════════════════════════════════════════

fn bench_positional(c: &mut Criterion) {
    let mut group = c.benchmark_group("positional");
    let ordered = make_ordered();

    group.bench_function("get (middle)", |b| {
        b.iter(|| black_box(ordered.get(black_box(LEN / 2)).unwrap()))
    });

    group.bench_function("unset (middle)", |b| {
        b.iter_batched(
            make_ordered,
            |mut ordered| {
                ordered.unset(LEN / 2).unwrap();
                ordered
            },
            BatchSize::SmallInput,
        )
    });

    group.bench_function("set_items (renumber)", |b| {
        b.iter_batched(
            make_keyed_items,
            |items| OrderedCollection::from_items(black_box(items)),
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

// ═══════════════════════════════════════════════════════════════════════════
// Group 3: Sort and append
// ═══════════════════════════════════════════════════════════════════════════

fn bench_sort_append(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort_append");

    group.bench_function("sort", |b| {
        b.iter_batched(
            make_ordered,
            |mut ordered| {
                ordered.sort(|a, b| a.as_i64().cmp(&b.as_i64()));
                ordered
            },
            BatchSize::SmallInput,
        )
    });

    let source = make_ordered();
    group.bench_function("append (borrowed container)", |b| {
        b.iter_batched(
            make_ordered,
            |mut ordered| {
                ordered.append(black_box(&source)).unwrap();
                ordered
            },
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

// ═══════════════════════════════════════════════════════════════════════════
// Group 4: Record dispatch
// ═══════════════════════════════════════════════════════════════════════════

fn bench_record_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("record_dispatch");
    let mut record = make_record();
    let value = [Value::from("2025-01-01T00:00:00Z")];

    group.bench_function("get_field", |b| {
        b.iter(|| black_box(record.get_field(black_box("creation_date")).cloned()))
    });

    group.bench_function("call getCreationDate", |b| {
        b.iter(|| black_box(record.call(black_box("getCreationDate"), &[]).into_value()))
    });

    group.bench_function("call setCreationDate", |b| {
        b.iter(|| {
            record.call(black_box("setCreationDate"), &value);
        })
    });

    group.finish();
}

// ─── Criterion Main ─────────────────────────────────────────────────────────

criterion_group!(
    benches,
    bench_stack_ops,
    bench_positional,
    bench_sort_append,
    bench_record_dispatch,
);
criterion_main!(benches);
