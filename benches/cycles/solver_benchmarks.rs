use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use graph_cycles::graph::GraphGenerator;
use graph_cycles::solver::{find_eulerian_circuit, find_hamiltonian_cycle, TspSearch};

fn bench_hamiltonian(c: &mut Criterion) {
    let mut group = c.benchmark_group("hamiltonian");
    for &n in &[6, 10, 16] {
        let graph = GraphGenerator::from_seed(17)
            .generate(n, 0.6)
            .expect("valid generation parameters");
        group.bench_with_input(BenchmarkId::from_parameter(n), &graph, |b, g| {
            b.iter(|| find_hamiltonian_cycle(black_box(g)))
        });
    }
    group.finish();
}

fn bench_hierholzer(c: &mut Criterion) {
    let mut group = c.benchmark_group("hierholzer");
    for &n in &[6, 12, 24] {
        let graph = GraphGenerator::from_seed(23)
            .generate(n, 0.7)
            .expect("valid generation parameters");
        group.bench_with_input(BenchmarkId::from_parameter(n), &graph, |b, g| {
            b.iter(|| find_eulerian_circuit(black_box(g)))
        });
    }
    group.finish();
}

fn bench_tsp(c: &mut Criterion) {
    let mut group = c.benchmark_group("tsp");
    for &n in &[5, 8, 12] {
        let graph = GraphGenerator::from_seed(31)
            .generate(n, 1.0)
            .expect("valid generation parameters");
        for &cap in &[120, 720] {
            group.bench_with_input(
                BenchmarkId::new(format!("cap_{cap}"), n),
                &graph,
                |b, g| {
                    let search = TspSearch::new(cap);
                    b.iter(|| search.solve(black_box(g)))
                },
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_hamiltonian, bench_hierholzer, bench_tsp);
criterion_main!(benches);
