use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pocketbudget_core::{StateStore, SummaryService};
use pocketbudget_domain::{ExpenseRecord, Ledger, MonthKey};
use pocketbudget_storage_json::JsonStateStore;
use tempfile::tempdir;

fn build_sample_ledger(record_count: usize) -> Ledger {
    let mut ledger = Ledger::default();
    ledger.insert_category("Travel");

    for idx in 0..record_count {
        let month = MonthKey::new(2020 + (idx / 120) as i32, (idx % 12) as u32 + 1).unwrap();
        let category = ledger.categories[idx % ledger.categories.len()].clone();
        let record = ExpenseRecord::new(category, 5.0 + (idx % 200) as f64, idx % 10 == 0);
        ledger.insert_expense(record, month);
    }
    ledger
}

fn bench_snapshot_io(c: &mut Criterion) {
    let ledger = build_sample_ledger(black_box(10_000));
    let dir = tempdir().expect("tempdir");
    let store = JsonStateStore::new(dir.path().to_path_buf()).expect("create store");

    c.bench_function("snapshot_save_10k", |b| {
        b.iter(|| {
            store.save(&ledger).expect("save snapshot");
        })
    });

    store.save(&ledger).expect("seed");

    c.bench_function("snapshot_load_10k", |b| {
        b.iter(|| {
            let loaded = store.load();
            black_box(loaded);
        })
    });
}

fn bench_summary(c: &mut Criterion) {
    let ledger = build_sample_ledger(black_box(10_000));
    let month = MonthKey::new(2021, 6).unwrap();

    c.bench_function("month_summary_10k", |b| {
        b.iter(|| {
            let summary = SummaryService::summarize(&ledger, black_box(month));
            black_box(summary);
        })
    });
}

criterion_group!(benches, bench_snapshot_io, bench_summary);
criterion_main!(benches);
