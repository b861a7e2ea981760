use std::io::Cursor;

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use vigil::analysis::{ClassificationReport, LogSummary, Table};

const ROW_COUNT: usize = 10_000;

fn predictions_csv() -> String {
    let mut csv = String::from("actual,predicted,group\n");
    for i in 0..ROW_COUNT {
        let actual = i % 2;
        let predicted = if i % 7 == 0 { 1 - actual } else { actual };
        let group = ["emea", "apac", "amer"][i % 3];
        csv.push_str(&format!("{actual},{predicted},{group}\n"));
    }
    csv
}

fn logs_csv() -> String {
    let mut csv = String::from("latency,tokens\n");
    for i in 0..ROW_COUNT {
        csv.push_str(&format!("{},{}\n", 50 + i % 400, 10 + i % 900));
    }
    csv
}

fn bench_classification(c: &mut Criterion) {
    let table = Table::from_reader(Cursor::new(predictions_csv())).expect("parse");
    c.bench_with_input(
        BenchmarkId::new("classification_report", ROW_COUNT),
        &table,
        |b, table| {
            b.iter(|| ClassificationReport::from_table(black_box(table)).expect("report"));
        },
    );
}

fn bench_log_summary(c: &mut Criterion) {
    let table = Table::from_reader(Cursor::new(logs_csv())).expect("parse");
    c.bench_with_input(
        BenchmarkId::new("log_summary", ROW_COUNT),
        &table,
        |b, table| {
            b.iter(|| LogSummary::from_table(black_box(table)).expect("summary"));
        },
    );
}

fn bench_parse(c: &mut Criterion) {
    let csv = predictions_csv();
    c.bench_with_input(BenchmarkId::new("parse_table", ROW_COUNT), &csv, |b, csv| {
        b.iter(|| Table::from_reader(Cursor::new(black_box(csv).clone())).expect("parse"));
    });
}

criterion_group!(benches, bench_classification, bench_log_summary, bench_parse);
criterion_main!(benches);
