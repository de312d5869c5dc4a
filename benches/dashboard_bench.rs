use chart_dash::ChartKind;
use chart_dash::core::{Endpoint, ParameterSet};
use chart_dash::data::request_path;
use criterion::{Criterion, criterion_group, criterion_main};
use serde_json::json;
use std::hint::black_box;

fn bench_request_path(c: &mut Criterion) {
    let params = ParameterSet::new()
        .with("location", "San Francisco, CA")
        .with("job", "Senior Data Engineer");

    c.bench_function("request_path_two_filters", |b| {
        b.iter(|| request_path(black_box(Endpoint::Salary), black_box(Some(&params))))
    });
}

fn bench_salary_figure_10k(c: &mut Criterion) {
    let salaries: Vec<f64> = (0..10_000).map(|i| 40_000.0 + (i % 977) as f64 * 150.0).collect();
    let body = json!({ "salary": salaries });

    c.bench_function("salary_figure_10k", |b| {
        b.iter(|| {
            ChartKind::Salary
                .build_figure(black_box(body.clone()))
                .expect("salary figure")
        })
    });
}

criterion_group!(benches, bench_request_path, bench_salary_figure_10k);
criterion_main!(benches);
