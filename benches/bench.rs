use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use std::collections::VecDeque;

use containers::{List, Tree, Vector};

/// Builds a tree holding `0..len`, inserted midpoint-first so the tree
/// comes out balanced and "levels" means what it says.
fn balanced_tree(len: usize) -> Tree<i32> {
    let mut tree = Tree::new();
    let mut ranges = VecDeque::new();
    ranges.push_back(0..len as i32);
    while let Some(range) = ranges.pop_front() {
        if range.is_empty() {
            continue;
        }
        let mid = range.start + (range.end - range.start) / 2;
        tree.insert(mid);
        ranges.push_back(range.start..mid);
        ranges.push_back(mid + 1..range.end);
    }
    tree
}

/// Helper to bench a function on a tree.
/// It creates a group for the given name and closure and runs tests for
/// various tree sizes before finishing the group.
fn bench_helper(c: &mut Criterion, name: &str, f: impl Fn(&mut Tree<i32>, i32)) {
    let mut group = c.benchmark_group(name);

    for num_levels in [3, 7, 11, 15] {
        let num_nodes = 2usize.pow(num_levels as u32) - 1;
        let largest_element_in_tree = (num_nodes - 1) as i32;

        let tree = balanced_tree(num_nodes);
        let id = BenchmarkId::new("tree", largest_element_in_tree);

        group.bench_function(id, |b| {
            b.iter_custom(|iters| {
                let mut time = std::time::Duration::ZERO;
                for _ in 0..iters {
                    let mut tree = black_box(tree.clone());
                    let instant = std::time::Instant::now();
                    f(&mut tree, black_box(largest_element_in_tree));
                    let elapsed = instant.elapsed();
                    time += elapsed;
                }
                time
            })
        });
    }

    group.finish();
}

pub fn tree_benchmark(c: &mut Criterion) {
    bench_helper(c, "find", |tree, i| {
        let _value = black_box(tree.contains(&i));
    });
    bench_helper(c, "remove", |tree, i| {
        tree.remove(&i);
    });

    bench_helper(c, "insert", |tree, i| {
        tree.insert(i + 1);
    });

    bench_helper(c, "find-miss", |tree, i| {
        let _value = black_box(tree.contains(&(i + 1)));
    });
    bench_helper(c, "remove-miss", |tree, i| {
        tree.remove(&(i + 1));
    });
}

pub fn list_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("list");

    for len in [100, 10_000] {
        group.bench_function(BenchmarkId::new("push-pop-ends", len), |b| {
            b.iter(|| {
                let mut list = List::new();
                for x in 0..len {
                    list.push_back(black_box(x));
                }
                while black_box(list.pop_front()).is_some() {}
            })
        });

        let list: List<i32> = (0..len).collect();
        group.bench_function(BenchmarkId::new("reverse", len), |b| {
            b.iter_custom(|iters| {
                let mut time = std::time::Duration::ZERO;
                for _ in 0..iters {
                    let mut list = black_box(list.clone());
                    let instant = std::time::Instant::now();
                    list.reverse();
                    time += instant.elapsed();
                }
                time
            })
        });
    }

    group.finish();
}

pub fn vector_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("vector");

    for len in [100, 10_000] {
        group.bench_function(BenchmarkId::new("push", len), |b| {
            b.iter(|| {
                let mut vector = Vector::new();
                for x in 0..len {
                    vector.push(black_box(x));
                }
                vector
            })
        });

        let vector: Vector<i32> = (0..len).collect();
        group.bench_function(BenchmarkId::new("sum", len), |b| {
            b.iter(|| black_box(&vector).iter().sum::<i32>())
        });

        // A prime stride scatters the reads instead of walking in order.
        group.bench_function(BenchmarkId::new("index", len), |b| {
            b.iter(|| {
                let len = vector.len();
                let mut total = 0;
                for i in 0..len {
                    total += vector[(i * 7919) % len];
                }
                black_box(total)
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    tree_benchmark,
    list_benchmark,
    vector_benchmark
);
criterion_main!(benches);
