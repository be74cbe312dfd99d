use arraybuf::{CircularBuffer, GapBuffer};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn circular_churn_benchmark(c: &mut Criterion) {
    let mut buffer: CircularBuffer<u64> = CircularBuffer::new(1024);
    for i in 0..1024 {
        buffer.enqueue(i).unwrap();
    }

    c.bench_function("circular_enqueue_dequeue", |b| {
        b.iter(
            #[inline(never)]
            || {
                for i in 0..black_box(4096u64) {
                    buffer.enqueue(i).unwrap();
                    let _ = black_box(buffer.dequeue().unwrap());
                }
            },
        );
    });
}

fn gap_cursor_benchmark(c: &mut Criterion) {
    let data: Vec<u64> = (0..4096).collect();
    let mut buffer: GapBuffer<u64> = GapBuffer::new(64, 8192).unwrap();
    buffer.add_range(&data, 0, data.len()).unwrap();

    c.bench_function("gap_local_edits", |b| {
        b.iter(
            #[inline(never)]
            || {
                // clustered edits: short gap moves plus insert/remove pairs
                let cursor = black_box(2048usize);
                buffer.set_gap_start(cursor).unwrap();
                for offset in 0..64 {
                    buffer.insert_at(cursor + offset, offset as u64).unwrap();
                }
                let _ = black_box(buffer.remove_range(cursor, 64).unwrap());
            },
        );
    });

    c.bench_function("gap_far_relocation", |b| {
        b.iter(
            #[inline(never)]
            || {
                buffer.set_gap_start(black_box(1)).unwrap();
                buffer.set_gap_start(black_box(4000)).unwrap();
            },
        );
    });
}

criterion_group!(benches, circular_churn_benchmark, gap_cursor_benchmark);
criterion_main!(benches);
