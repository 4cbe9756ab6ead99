//! Benchmarks for recommendation queries
//!
//! Run with: cargo bench --package recommender
//!
//! Uses a synthetic dataset large enough for neighbor ranking to dominate.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use data_loader::Dataset;
use recommender::{Recommender, RecommenderConfig};
use std::sync::Arc;

const USERS: u32 = 2_000;
const ITEMS: u32 = 200;

fn load_test_data() -> Arc<Dataset> {
    let mut dataset = Dataset::new();
    for user in 0..USERS {
        for item in 0..ITEMS {
            // Deterministic sparse pattern with ratings in 1.0 - 5.0
            let hash = user.wrapping_mul(2_654_435_761).wrapping_add(item.wrapping_mul(40_503));
            if hash % 7 < 2 {
                let rating = 1.0 + (hash % 9) as f64 * 0.5;
                dataset.insert_rating(format!("user-{}", user), format!("item-{}", item), rating);
            }
        }
    }
    Arc::new(dataset)
}

fn bench_nearest_neighbor(c: &mut Criterion) {
    let recommender = Recommender::with_defaults(load_test_data());

    c.bench_function("recommend_k1", |b| {
        b.iter(|| {
            let recs = recommender.recommend(black_box("user-1")).unwrap();
            black_box(recs)
        })
    });
}

fn bench_weighted_knn(c: &mut Criterion) {
    let recommender = Recommender::new(load_test_data(), RecommenderConfig::new(25, 10));

    c.bench_function("recommend_k25", |b| {
        b.iter(|| {
            let recs = recommender.recommend(black_box("user-1")).unwrap();
            black_box(recs)
        })
    });
}

fn bench_rank_neighbors(c: &mut Criterion) {
    let recommender = Recommender::with_defaults(load_test_data());

    c.bench_function("rank_neighbors", |b| {
        b.iter(|| {
            let ranked = recommender.rank_neighbors(black_box("user-1")).unwrap();
            black_box(ranked)
        })
    });
}

criterion_group!(
    benches,
    bench_nearest_neighbor,
    bench_weighted_knn,
    bench_rank_neighbors
);
criterion_main!(benches);
