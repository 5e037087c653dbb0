use criterion::{black_box, criterion_group, criterion_main, Criterion};
use plaintris::core::{Field, GameEngine, Shape};
use plaintris::types::ShapeKind;

fn bench_tick(c: &mut Criterion) {
    let mut engine = GameEngine::with_seed(12345);

    c.bench_function("engine_tick", |b| {
        b.iter(|| {
            if engine.is_game_over() {
                engine.reset();
            }
            black_box(engine.tick());
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut field = Field::new();
            // Fill bottom 4 rows
            for row in 16..20 {
                for col in 0..10 {
                    field.set(row, col, 1);
                }
            }
            black_box(field.remove_full_lines());
            field.shift_down();
        })
    });
}

fn bench_spawn(c: &mut Criterion) {
    let mut engine = GameEngine::with_seed(12345);

    c.bench_function("reset_and_spawn", |b| {
        b.iter(|| {
            black_box(engine.reset());
        })
    });
}

fn bench_move(c: &mut Criterion) {
    let mut engine = GameEngine::with_seed(12345);

    c.bench_function("move_left_right", |b| {
        b.iter(|| {
            engine.move_left();
            engine.move_right();
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let mut shape = Shape::new(ShapeKind::T);

    c.bench_function("shape_rotate_right", |b| {
        b.iter(|| {
            shape.rotate_right();
            black_box(&shape);
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_spawn,
    bench_move,
    bench_rotate
);
criterion_main!(benches);
