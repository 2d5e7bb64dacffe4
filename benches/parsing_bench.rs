use criterion::{black_box, criterion_group, criterion_main, Criterion};

use dialplan::{PhoneEngine, PhoneNumberFormat};

const TEST_METADATA: &str = include_str!("../testdata/metadata_for_testing.json");

/// A mixed corpus: international form, national form with prefix, leading
/// zero plans and a transform-rule plan, so the measurement is not
/// dominated by one code path.
fn setup_parsing_data() -> Vec<(&'static str, &'static str)> {
    vec![
        ("+12125551234", "US"),
        ("(212) 555-1234", "US"),
        ("+44 20 7946 0958", "GB"),
        ("020 7946 0958", "GB"),
        ("0343 15 555 1212", "AR"),
        ("06 1234 5678", "IT"),
        ("015123456789", "DE"),
    ]
}

fn parsing_benchmark(c: &mut Criterion) {
    let engine = PhoneEngine::from_metadata_bytes(TEST_METADATA.as_bytes())
        .expect("bench metadata should decode");
    let numbers = setup_parsing_data();

    let mut group = c.benchmark_group("engine");

    group.bench_function("parse", |b| {
        b.iter(|| {
            for (number, region) in &numbers {
                let _ = engine.parse(black_box(number), black_box(region), false);
            }
        })
    });

    group.bench_function("parse ignoring type", |b| {
        b.iter(|| {
            for (number, region) in &numbers {
                let _ = engine.parse(black_box(number), black_box(region), true);
            }
        })
    });

    let records: Vec<_> = numbers
        .iter()
        .filter_map(|(number, region)| engine.parse(number, region, false).ok())
        .collect();
    group.bench_function("format national", |b| {
        b.iter(|| {
            for record in &records {
                let _ = engine.format(black_box(record), PhoneNumberFormat::National, true);
            }
        })
    });

    group.finish();
}

criterion_group!(benches, parsing_benchmark);
criterion_main!(benches);
