use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use ruls::classify::MagicSniffer;
use ruls::columns::{Column, RenderRow, Row, RowContext};
use ruls::data::{EntryInfo, EntryType, StatSnapshot};
use ruls::listing::{build_rows, sort_rows};
use ruls::output::terminal::{ColumnWidths, RenderOptions, render_rows};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Rows with realistic cell text, without touching the filesystem.
fn synthetic_rows(count: usize) -> Vec<Row> {
    (0..count)
        .map(|i| {
            let entry_type = if i % 7 == 0 {
                EntryType::Dir
            } else {
                EntryType::File
            };
            let name = format!("entry_{:05}.dat", (i * 7919) % count);
            let mut cells = RenderRow::blank();
            cells.set(Column::Acls, "644 6");
            cells.set(Column::Owner, "user:staff");
            cells.set(Column::FileType, "t");
            cells.set(Column::Size, format!("{}", i * 131));
            cells.set(Column::TimeIso, "2024-01-01 12:00:00");
            cells.set(Column::SrcName, name.clone());
            cells.set(Column::Preview, "fn main() { println!(\"hello\"); }");
            Row {
                info: EntryInfo::new(
                    PathBuf::from(name),
                    entry_type,
                    StatSnapshot::default(),
                    None,
                ),
                cells,
            }
        })
        .collect()
}

fn create_listing_directory(dir: &Path, files: usize) {
    for i in 0..files {
        let content = if i % 3 == 0 {
            vec![0u8, 1, 2, b'E', b'L', b'F', 0xff]
        } else {
            format!("line one of file {}\nline two\n", i).into_bytes()
        };
        fs::write(dir.join(format!("file_{}.txt", i)), content).unwrap();
    }
    for i in 0..files / 10 {
        fs::create_dir(dir.join(format!("dir_{}", i))).unwrap();
    }
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    let opts = RenderOptions {
        full: true,
        color: true,
    };

    for size in [100, 1_000, 10_000] {
        let rows = synthetic_rows(size);
        group.bench_with_input(BenchmarkId::new("measure", size), &rows, |b, rows| {
            b.iter(|| ColumnWidths::measure(black_box(rows)))
        });
        group.bench_with_input(BenchmarkId::new("render_rows", size), &rows, |b, rows| {
            b.iter(|| render_rows(black_box(rows), &opts))
        });
        group.bench_with_input(BenchmarkId::new("sort_rows", size), &rows, |b, rows| {
            b.iter(|| {
                let mut rows = rows.clone();
                sort_rows(black_box(&mut rows));
            })
        });
    }

    group.finish();
}

fn bench_build(c: &mut Criterion) {
    let temp_dir = TempDir::new().unwrap();
    create_listing_directory(temp_dir.path(), 200);
    let paths: Vec<PathBuf> = fs::read_dir(temp_dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .collect();

    let oracle = MagicSniffer;
    let mut group = c.benchmark_group("build");
    for full in [false, true] {
        let ctx = RowContext {
            full,
            oracle: &oracle,
        };
        let label = if full { "full" } else { "compact" };
        group.bench_function(label, |b| b.iter(|| build_rows(black_box(&paths), &ctx)));
    }
    group.finish();
}

criterion_group!(benches, bench_render, bench_build);
criterion_main!(benches);
