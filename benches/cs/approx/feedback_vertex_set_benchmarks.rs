use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use fvs_approx::cs::approx::feedback_vertex_set::{solve, FvsConfig};
use fvs_approx::cs::graph::{find_cycle, prune, SimpleGraph};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

fn random_graph(n: usize, average_degree: f64, seed: u64) -> SimpleGraph {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let p = (average_degree / (n as f64 - 1.0)).min(1.0);
    let mut graph = SimpleGraph::new(n);
    for u in 0..n {
        for v in u + 1..n {
            if rng.gen_bool(p) {
                graph.add_edge(u, v).unwrap();
            }
        }
    }
    graph
}

fn random_weights(n: usize, seed: u64) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n).map(|_| rng.gen_range(1.0..100.0)).collect()
}

fn bench_solve(c: &mut Criterion) {
    let mut group = c.benchmark_group("feedback_vertex_set");
    for &n in &[100usize, 500, 1000, 2000] {
        let graph = random_graph(n, 4.0, 42);
        let weights = random_weights(n, 43);
        group.bench_with_input(BenchmarkId::new("solve", n), &n, |b, _| {
            b.iter(|| solve(black_box(&graph), black_box(&weights), &FvsConfig::default()))
        });
    }
    group.finish();
}

fn bench_find_cycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("short_cycle");
    for &n in &[1000usize, 10_000] {
        let mut graph = random_graph(n, 3.0, 7);
        prune(&mut graph);
        group.bench_with_input(BenchmarkId::new("find_cycle", n), &graph, |b, graph| {
            b.iter(|| find_cycle(black_box(graph)))
        });
    }

    // A single long ring exercises the degree-2 walk.
    let n = 10_000;
    let ring_edges: Vec<_> = (0..n).map(|v| (v, (v + 1) % n)).collect();
    let ring = SimpleGraph::from_edges(n, &ring_edges).unwrap();
    group.bench_function("ring_walk_10000", |b| b.iter(|| find_cycle(black_box(&ring))));

    group.bench_function("prune_tree_10000", |b| {
        let tree_edges: Vec<_> = (1..n).map(|v| (v / 2, v)).collect();
        b.iter_batched(
            || SimpleGraph::from_edges(n, &tree_edges).unwrap(),
            |mut tree| prune(&mut tree),
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

criterion_group!(benches, bench_solve, bench_find_cycle);
criterion_main!(benches);
