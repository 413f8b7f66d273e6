use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use recipe_tree::{Recipe, RecipeBook};

const N: usize = 10_000;

// ─── Helpers to generate name sequences ─────────────────────────────────────

fn ordered_names(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("recipe-{i:06}")).collect()
}

fn shuffled_names(n: usize) -> Vec<String> {
    // Simple LCG for a deterministic pseudo-random order.
    let mut names = Vec::with_capacity(n);
    let mut x: u64 = 12345;
    for _ in 0..n {
        x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
        names.push(format!("recipe-{:016x}", x >> 16));
    }
    names
}

fn book_from(names: &[String]) -> RecipeBook {
    let mut book = RecipeBook::new();
    for (i, name) in names.iter().enumerate() {
        book.add(Recipe::new(name.clone(), (i % 10) as i32, "", i % 4 == 0));
    }
    book
}

// ─── Benchmarks ─────────────────────────────────────────────────────────────

fn bench_add(c: &mut Criterion) {
    let mut group = c.benchmark_group("add");
    let shuffled = shuffled_names(N);
    // Sorted insertion is the degenerate right-spine case; keep it small
    // enough that O(n^2) stays tractable.
    let ordered = ordered_names(N / 10);

    group.bench_function(BenchmarkId::new("shuffled", N), |b| {
        b.iter(|| book_from(&shuffled));
    });
    group.bench_function(BenchmarkId::new("ordered", N / 10), |b| {
        b.iter(|| book_from(&ordered));
    });

    group.finish();
}

fn bench_find(c: &mut Criterion) {
    let mut group = c.benchmark_group("find");
    let names = shuffled_names(N);
    let book = book_from(&names);

    let mut balanced = book_from(&names);
    balanced.balance();

    group.bench_function(BenchmarkId::new("as_inserted", N), |b| {
        b.iter(|| {
            names.iter().filter(|n| book.find(n.as_str()).is_some()).count()
        });
    });
    group.bench_function(BenchmarkId::new("balanced", N), |b| {
        b.iter(|| {
            names.iter().filter(|n| balanced.find(n.as_str()).is_some()).count()
        });
    });

    group.finish();
}

fn bench_balance(c: &mut Criterion) {
    let mut group = c.benchmark_group("balance");
    let names = shuffled_names(N);

    group.bench_function(BenchmarkId::new("rebuild", N), |b| {
        b.iter_batched(
            || book_from(&names),
            |mut book| {
                book.balance();
                book
            },
            criterion::BatchSize::LargeInput,
        );
    });

    group.finish();
}

fn bench_mastery_points(c: &mut Criterion) {
    let mut group = c.benchmark_group("mastery_points");
    let names = shuffled_names(N);
    let book = book_from(&names);
    let probe = &names[N / 2];

    group.bench_function(BenchmarkId::new("full_scan", N), |b| {
        b.iter(|| book.mastery_points(probe));
    });

    group.finish();
}

criterion_group!(benches, bench_add, bench_find, bench_balance, bench_mastery_points);
criterion_main!(benches);
