use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use std::io;
use taglog::fmt::{ConsoleFormatter, Formatter, Palette, PlainFormatter};
use taglog::level::Level;
use taglog::output::{BufferedOutput, FileOutput, LogRecord, Output};
use tempfile::TempDir;

fn make_record() -> LogRecord {
    LogRecord::new(
        Level::Info,
        "src/bench/output.rs",
        42,
        "benchmark log message with g|styling| and a literal ||",
    )
}

fn bench_formatters(c: &mut Criterion) {
    let record = make_record();
    let palette = Palette::standard();
    let console = ConsoleFormatter::new();
    let plain = PlainFormatter::new();

    c.bench_function("ConsoleFormatter::format", |b| {
        b.iter(|| console.format(black_box(&record), palette));
    });

    c.bench_function("PlainFormatter::format", |b| {
        b.iter(|| plain.format(black_box(&record), palette));
    });
}

fn bench_buffered_append(c: &mut Criterion) {
    let line = PlainFormatter::new().format(&make_record(), Palette::standard());
    let mut output = BufferedOutput::new(io::sink(), taglog::BUFFER_SIZE).expect("valid capacity");

    c.bench_function("BufferedOutput::append", |b| {
        b.iter(|| output.append(black_box(&line)).expect("sink never fails"));
    });
}

fn bench_file_output_write(c: &mut Criterion) {
    let tmp = TempDir::new().expect("failed to create temp dir");
    let mut output = FileOutput::open(tmp.path().join("bench.log")).expect("open failed");
    let line = PlainFormatter::new().format(&make_record(), Palette::standard());

    c.bench_function("FileOutput::write", |b| {
        b.iter(|| {
            output
                .write(Level::Info, black_box(&line))
                .expect("write failed");
        });
    });

    output.flush().expect("flush failed");
}

criterion_group!(
    benches,
    bench_formatters,
    bench_buffered_append,
    bench_file_output_write,
);
criterion_main!(benches);
