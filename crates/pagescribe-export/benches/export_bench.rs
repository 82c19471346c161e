// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Criterion benchmarks for export rendering in the pagescribe-export crate.
// Measures clipboard assembly for a large batch and folder export into a
// directory that already holds colliding names.

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use pagescribe_core::types::{ExportFormat, ImageId, Page};
use pagescribe_export::{FolderExporter, combined_content};

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// 200 pages of ~2 KB each, as a long multi-page scan would produce.
fn sample_pages() -> Vec<Page> {
    let body = "Lorem ipsum dolor sit amet, consectetur adipiscing elit.\n".repeat(36);
    (0..200)
        .map(|i| Page::new(ImageId::new(), format!("Chapter {i}"), body.clone()))
        .collect()
}

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

fn bench_clipboard_assembly(c: &mut Criterion) {
    let pages = sample_pages();
    c.bench_function("combined_content markdown (200 pages)", |b| {
        b.iter(|| black_box(combined_content(black_box(&pages), ExportFormat::Markdown)));
    });
}

/// Every page shares one name, so each write walks the counter sequence.
fn bench_colliding_export(c: &mut Criterion) {
    let pages: Vec<Page> = (0..20)
        .map(|_| Page::new(ImageId::new(), "Scan".into(), "text".into()))
        .collect();

    c.bench_function("folder export, 20 colliding names", |b| {
        b.iter_with_setup(
            || tempfile::TempDir::new().unwrap(),
            |dir| {
                let exporter = FolderExporter::new(dir.path());
                black_box(exporter.export(&pages, ExportFormat::PlainText).unwrap());
            },
        );
    });
}

criterion_group!(benches, bench_clipboard_assembly, bench_colliding_export);
criterion_main!(benches);
