mod common;

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use glam::Vec3;
use museum_layout::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn make_controller(count: usize) -> SelectionController {
    let catalog = Catalog::new(
        (0..count)
            .map(|i| Exhibit::new(format!("E{i}"), format!("Exhibit {i}"), GeoPoint::default()))
            .collect(),
    )
    .expect("unique ids");
    let arrangement = arrange_spiral(&catalog, &ArrangeConfig::default()).expect("arranged");
    SelectionController::new(&arrangement)
}

fn make_session(count: usize, length: usize, seed: u64) -> Vec<SelectionInput> {
    let mut rng = StdRng::seed_from_u64(seed);
    let camera = CameraPose::new(Vec3::new(0.0, 0.0, 2.0), Vec3::ZERO);

    (0..length)
        .map(|_| {
            let id = format!("E{}", rng.next_u32() as usize % count);
            match rng.next_u32() % 6 {
                0 => SelectionInput::PointerOver(id),
                1 => SelectionInput::PointerOut(id),
                2 => SelectionInput::Pressed { id, camera },
                3 => SelectionInput::ZoomFinished(id),
                4 => SelectionInput::HighResReady(id),
                _ => SelectionInput::Dismiss,
            }
        })
        .collect()
}

fn selection_session_benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("selection/session");

    for &n in &[16usize, 256, 4_096] {
        let session = make_session(n, 1_024, 0xC0FFEE ^ n as u64);
        group.throughput(common::items_throughput(session.len()));

        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter_batched(
                || make_controller(n),
                |mut ctl| {
                    let mut sink = VecSink::new();
                    for input in session.iter().cloned() {
                        ctl.push(input).expect("known exhibit");
                    }
                    black_box(ctl.process(&mut sink));
                    black_box(sink.len());
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = common::default_criterion();
    targets = selection_session_benches
}
criterion_main!(benches);
