use budget_ledger::{create_spend_chart, Category};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn build_categories(count: usize, entries: usize) -> Vec<Category> {
    (0..count)
        .map(|idx| {
            let mut category = Category::new(format!("Category {idx}"));
            category
                .deposit(1_000_000.0, "Initial deposit")
                .expect("valid deposit");
            for step in 0..entries {
                category
                    .withdraw(1.0 + (step % 50) as f64, "Spend")
                    .expect("valid withdrawal");
            }
            category
        })
        .collect()
}

fn bench_spend_chart(c: &mut Criterion) {
    let categories = build_categories(12, 500);
    c.bench_function("create_spend_chart_12x500", |b| {
        b.iter(|| create_spend_chart(black_box(&categories)).expect("chart renders"))
    });
}

fn bench_category_report(c: &mut Criterion) {
    let categories = build_categories(1, 1_000);
    c.bench_function("category_report_1000_entries", |b| {
        b.iter(|| black_box(&categories[0]).to_string())
    });
}

criterion_group!(benches, bench_spend_chart, bench_category_report);
criterion_main!(benches);
