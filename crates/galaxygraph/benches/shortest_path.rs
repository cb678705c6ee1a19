use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use galaxygraph::sample::sample_world;
use galaxygraph::GraphStore;

// Square grid with one galaxy per row and unit-ish weights
fn grid(size: u64) -> GraphStore {
    let mut graph = GraphStore::new();
    for row in 0..size {
        let galaxy = format!("r{row}");
        graph.add_partition(galaxy.as_str()).unwrap();
        for col in 0..size {
            graph.add_node(&galaxy, format!("c{col}")).unwrap();
        }
    }
    for row in 0..size {
        for col in 0..size {
            let id = row * size + col;
            let weight = 1.0 + ((row * 7 + col * 13) % 5) as f64 * 0.25;
            if col + 1 < size {
                graph.connect(id, id + 1, weight).unwrap();
            }
            if row + 1 < size {
                graph.connect(id, id + size, weight).unwrap();
            }
        }
    }
    graph
}

fn bench_grid_corner_to_corner(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid_shortest_path");

    for size in [10u64, 50, 100].iter() {
        let graph = grid(*size);
        let target = size * size - 1;

        group.bench_with_input(BenchmarkId::new("corner_to_corner", size * size), size, |b, _| {
            b.iter(|| {
                black_box(graph.shortest_path(black_box(0), black_box(target)).unwrap());
            });
        });
    }

    group.finish();
}

fn bench_sample_query(c: &mut Criterion) {
    let world = sample_world().unwrap();
    let graph = world.store;

    c.bench_function("sample_resolve_and_search", |b| {
        b.iter(|| {
            let from = graph.resolve(black_box("a.a")).unwrap();
            let to = graph.resolve(black_box("a.e")).unwrap();
            black_box(graph.shortest_path(from, to).unwrap());
        });
    });
}

criterion_group!(benches, bench_grid_corner_to_corner, bench_sample_query);
criterion_main!(benches);
