use criterion::{black_box, criterion_group, criterion_main, Criterion};
use connect_four::core::{BoardEngine, Grid, SpeedRound};
use connect_four::term::{ClassicHud, FrameBuffer, GameView, Viewport};
use connect_four::types::{Axis, Player, TICK_MS};

fn bench_apply_move(c: &mut Criterion) {
    c.bench_function("apply_move_fill_column", |b| {
        b.iter(|| {
            let mut engine = BoardEngine::new(6, 7, Player::A).unwrap();
            for _ in 0..6 {
                let _ = engine.apply_move(black_box(3));
            }
            engine
        })
    });
}

fn bench_winning_lines(c: &mut Criterion) {
    let grid = Grid::from_rows(&[
        "...A...", //
        "..AAA..", //
        ".AAAAA.", //
        "AAAAAAA", //
        "BBBABBB", //
        "BBBABBB",
    ])
    .unwrap();

    c.bench_function("winning_lines_center", |b| {
        b.iter(|| grid.winning_lines(black_box(3), black_box(3)))
    });

    c.bench_function("run_through_horizontal", |b| {
        b.iter(|| grid.run_through(black_box(3), black_box(0), Axis::Horizontal))
    });
}

fn bench_full_game(c: &mut Criterion) {
    let moves = [
        4, 3, 6, 0, 1, 4, 5, 5, 1, 1, 5, 0, 1, 6, 0, 1, 5, 5, 1, 0, 4, 6, 3, 2, 6, 6, 0, 4, 6, 5,
        2, 0, 4, 2, 4, 2, 2, 2, 3, 3, 3, 3,
    ];
    c.bench_function("full_board_draw", |b| {
        b.iter(|| {
            let mut engine = BoardEngine::new(6, 7, Player::A).unwrap();
            for &col in &moves {
                let _ = engine.apply_move(black_box(col));
            }
            engine.status()
        })
    });
}

fn bench_speed_tick(c: &mut Criterion) {
    let mut round = SpeedRound::new(10, 7, 12345).unwrap();
    round.start();

    c.bench_function("speed_tick_50ms", |b| {
        b.iter(|| {
            if !round.tick(black_box(TICK_MS)) && round.remaining_secs() == 0 {
                round.reset();
                round.start();
            }
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let mut engine = BoardEngine::new(6, 7, Player::A).unwrap();
    for col in [3, 3, 2, 4, 1] {
        engine.apply_move(col).unwrap();
    }
    let snap = engine.snapshot();
    let view = GameView::default();
    let hud = ClassicHud::default();
    let vp = Viewport::new(80, 24);
    let mut fb = FrameBuffer::new(80, 24);

    c.bench_function("render_classic_80x24", |b| {
        b.iter(|| {
            view.render_into(black_box(&snap), &hud, vp, &mut fb);
        })
    });
}

criterion_group!(
    benches,
    bench_apply_move,
    bench_winning_lines,
    bench_full_game,
    bench_speed_tick,
    bench_render
);
criterion_main!(benches);
