//! Buffer benchmark: Measure core editing and traversal costs.
//!
//! Inserts and deletes are O(1) link rewires; vertical moves and row
//! iteration are O(row length).

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use gridpad::{Command, LinkedTextBuffer};

fn filled_buffer(rows: usize, cols: usize) -> LinkedTextBuffer {
    let mut buffer = LinkedTextBuffer::new();
    for row in 0..rows {
        if row > 0 {
            buffer.insert_newline();
        }
        for _ in 0..cols {
            buffer.insert_char('x');
        }
    }
    buffer
}

fn insert_append(c: &mut Criterion) {
    c.bench_function("insert_1k_chars", |b| {
        b.iter(|| {
            let mut buffer = LinkedTextBuffer::new();
            for _ in 0..1000 {
                buffer.insert_char(black_box('x'));
            }
            buffer
        });
    });
}

fn insert_delete_churn(c: &mut Criterion) {
    c.bench_function("insert_delete_churn", |b| {
        let mut buffer = filled_buffer(1, 100);
        b.iter(|| {
            buffer.insert_char(black_box('y'));
            buffer.delete_char();
        });
    });
}

fn undo_redo_cycle(c: &mut Criterion) {
    c.bench_function("delete_undo_cycle", |b| {
        let mut buffer = filled_buffer(1, 100);
        b.iter(|| {
            buffer.delete_char();
            buffer.undo();
        });
    });
}

fn vertical_navigation(c: &mut Criterion) {
    c.bench_function("move_down_80_cols", |b| {
        let mut buffer = filled_buffer(2, 80);
        b.iter(|| {
            buffer.apply(black_box(Command::MoveUp));
            buffer.apply(black_box(Command::MoveDown));
        });
    });
}

fn row_iteration(c: &mut Criterion) {
    let buffer = filled_buffer(50, 80);
    c.bench_function("rows_collect_50x80", |b| {
        b.iter(|| {
            let rendered: Vec<String> = black_box(&buffer).rows().map(Iterator::collect).collect();
            rendered
        });
    });
}

criterion_group!(
    benches,
    insert_append,
    insert_delete_churn,
    undo_redo_cycle,
    vertical_navigation,
    row_iteration,
);
criterion_main!(benches);
