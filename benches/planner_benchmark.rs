use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use trip_planner::algorithms::{build_route, ItineraryOptimizer};
use trip_planner::models::{DestinationCatalog, Selection};
use trip_planner::utils::DistanceTable;
use trip_planner::TripPlanner;

fn benchmark_planner(c: &mut Criterion) {
    let catalog = DestinationCatalog::default();
    let table = DistanceTable::build(&catalog);
    let selection = create_benchmark_selection(&catalog);

    c.bench_function("distance_table_build", |b| {
        b.iter(|| DistanceTable::build(black_box(&catalog)))
    });

    c.bench_function("greedy_route", |b| {
        b.iter(|| build_route(black_box(&selection), black_box(&table)))
    });

    let optimizer = ItineraryOptimizer::default();
    c.bench_function("genetic_optimize", |b| {
        b.iter(|| {
            let mut rng = StdRng::seed_from_u64(42);
            optimizer.optimize(
                black_box(&selection),
                black_box(&table),
                black_box(&catalog),
                &mut rng,
            )
        })
    });

    let planner = TripPlanner::new(catalog.clone());
    c.bench_function("full_plan", |b| {
        b.iter(|| {
            let mut rng = StdRng::seed_from_u64(42);
            planner.plan(black_box(selection.clone()), &mut rng)
        })
    });
}

// Every catalog destination selected, worst case for the optimizer
fn create_benchmark_selection(catalog: &DestinationCatalog) -> Selection {
    let destinations: Vec<String> = catalog.names().iter().map(|s| s.to_string()).collect();
    let start = destinations[0].clone();

    Selection::new(
        destinations,
        start,
        5000.0,
        21,
        vec!["Culture".to_string(), "Beach".to_string()],
        catalog,
    )
    .unwrap()
}

criterion_group!(benches, benchmark_planner);
criterion_main!(benches);
