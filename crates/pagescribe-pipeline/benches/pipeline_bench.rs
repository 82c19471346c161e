// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Criterion benchmarks for the pagescribe-pipeline crate.
// Measures the filename heuristic on typical and worst-case page text, and
// page store edits on a large batch.

use chrono::NaiveDate;
use criterion::{Criterion, black_box, criterion_group, criterion_main};

use pagescribe_core::types::{ImageId, Page};
use pagescribe_pipeline::{PageStore, suggest_name_on};

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 10, 5).unwrap()
}

/// A full page of text whose first line is the title.
fn titled_page() -> String {
    let mut text = String::from("Quarterly Planning Meeting\n");
    text.push_str(&"Action items and owners for the next sprint.\n".repeat(60));
    text
}

/// Three over-long lines, so every candidate is rejected and the date wins.
fn untitled_page() -> String {
    let long = "word ".repeat(40);
    format!("{long}\n{long}\n{long}\n{}", "body\n".repeat(200))
}

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

fn bench_suggest_name(c: &mut Criterion) {
    let titled = titled_page();
    let untitled = untitled_page();

    c.bench_function("suggest_name titled page", |b| {
        b.iter(|| black_box(suggest_name_on(black_box(&titled), today())));
    });

    c.bench_function("suggest_name date fallback", |b| {
        b.iter(|| black_box(suggest_name_on(black_box(&untitled), today())));
    });
}

fn bench_store_updates(c: &mut Criterion) {
    c.bench_function("page store update last of 500", |b| {
        let mut store = PageStore::new();
        for i in 0..500 {
            let _ = store.append(Page::new(ImageId::new(), format!("Page {i}"), String::new()));
        }
        let last = store.as_slice()[499].id();
        b.iter(|| {
            let _ = store.update(black_box(last), "Renamed".into(), "Edited".into());
        });
    });
}

criterion_group!(benches, bench_suggest_name, bench_store_updates);
criterion_main!(benches);
