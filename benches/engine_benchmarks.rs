//! Benchmarks for rules engine performance.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use chess_rules::board::{Color, Move, Position, Square};

const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";

fn bench_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft");

    // Starting position
    let mut position = Position::new();

    for depth in 1..=3 {
        group.bench_with_input(BenchmarkId::new("startpos", depth), &depth, |b, &depth| {
            b.iter(|| position.perft(black_box(depth)))
        });
    }

    // Complex middlegame position (Kiwipete)
    let mut kiwipete = Position::from_fen(KIWIPETE);

    for depth in 1..=2 {
        group.bench_with_input(BenchmarkId::new("kiwipete", depth), &depth, |b, &depth| {
            b.iter(|| kiwipete.perft(black_box(depth)))
        });
    }

    group.finish();
}

fn bench_movegen(c: &mut Criterion) {
    let mut group = c.benchmark_group("movegen");

    let mut startpos = Position::new();
    group.bench_function("startpos", |b| {
        b.iter(|| black_box(startpos.legal_move_list()))
    });

    let mut middlegame =
        Position::from_fen("r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 4 4");
    group.bench_function("middlegame", |b| {
        b.iter(|| black_box(middlegame.legal_move_list()))
    });

    let mut kiwipete = Position::from_fen(KIWIPETE);
    group.bench_function("kiwipete", |b| {
        b.iter(|| black_box(kiwipete.legal_move_list()))
    });

    // Pseudo-legal only, no king safety filter
    let kiwipete = Position::from_fen(KIWIPETE);
    group.bench_function("kiwipete_pseudo", |b| {
        b.iter(|| {
            Square::all()
                .map(|sq| kiwipete.pseudo_legal_moves(black_box(sq)).len())
                .sum::<usize>()
        })
    });

    group.finish();
}

fn bench_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("queries");

    let mut kiwipete = Position::from_fen(KIWIPETE);
    group.bench_function("status", |b| b.iter(|| black_box(kiwipete.status())));
    group.bench_function("in_check", |b| {
        b.iter(|| black_box(kiwipete.is_in_check(Color::White)))
    });

    let mut position = Position::new();
    let mv = Move::new(Square(6, 4), Square(4, 4));
    group.bench_function("apply_undo", |b| {
        b.iter(|| {
            position.apply(black_box(mv));
            position.undo().unwrap();
        })
    });

    group.finish();
}

criterion_group!(benches, bench_perft, bench_movegen, bench_queries);
criterion_main!(benches);
