//! Session throughput benchmarks.
//!
//! Seeded self-play over the paddock ruleset: every move is drawn from the
//! legal actions of all alive seats, so the numbers include the full
//! validation path plus button generation.

use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tabletop_session::core::{ActionMessage, GameRng, SeatId};
use tabletop_session::games::paddock::{Paddock, PaddockBuilder};
use tabletop_session::session::GameSession;

const MOVE_CAP: usize = 2_000;

/// Play until someone wins or the move cap is hit; returns moves applied.
fn self_play(paddock: &Paddock, seed: u64) -> usize {
    let mut rng = GameRng::new(seed);
    let Ok(mut session) = GameSession::new(paddock, &mut rng) else {
        return 0;
    };
    let mut chooser = GameRng::new(seed ^ 0x5eed);
    let mut moves = 0;

    while session.winner().is_none() && moves < MOVE_CAP {
        let options: Vec<ActionMessage> = session
            .state()
            .alive_seats()
            .into_iter()
            .flat_map(|seat| {
                session
                    .legal_actions(seat)
                    .into_iter()
                    .map(move |action| ActionMessage::new(seat, action))
            })
            .collect();
        if options.is_empty() {
            break;
        }
        let msg = options[chooser.gen_range_usize(0..options.len())];
        session.submit(&msg, &mut rng);
        moves += 1;
    }
    moves
}

fn bench_self_play(c: &mut Criterion) {
    let mut group = c.benchmark_group("self_play");
    group.sample_size(20);
    group.measurement_time(Duration::from_secs(10));

    for seats in [2usize, 4, 6] {
        let Ok(paddock) = PaddockBuilder::new().seat_count(seats).build() else {
            continue;
        };
        group.bench_with_input(BenchmarkId::new("seats", seats), &paddock, |b, paddock| {
            let mut seed = 0u64;
            b.iter(|| {
                seed += 1;
                black_box(self_play(paddock, seed))
            });
        });
    }
    group.finish();
}

fn bench_snapshot(c: &mut Criterion) {
    let Ok(paddock) = PaddockBuilder::new().seat_count(4).build() else {
        return;
    };
    let mut rng = GameRng::new(42);
    let Ok(session) = GameSession::new(&paddock, &mut rng) else {
        return;
    };

    c.bench_function("snapshot_4_seats", |b| {
        b.iter(|| {
            for seat in SeatId::all(4) {
                black_box(session.snapshot(seat));
            }
        });
    });

    c.bench_function("checkpoint_roundtrip", |b| {
        b.iter(|| {
            let bytes = session.checkpoint().ok();
            black_box(bytes.and_then(|bytes| GameSession::restore(&paddock, &bytes).ok()))
        });
    });
}

criterion_group!(benches, bench_self_play, bench_snapshot);
criterion_main!(benches);
