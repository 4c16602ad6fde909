use criterion::{black_box, criterion_group, criterion_main, Criterion};

use phonesplit::{SEGMENTER, normalize::digits_only};

/// Inputs spread over countries with different cascade shapes.
fn setup_segment_data() -> Vec<&'static str> {
    vec![
        // single fixed alternative with veto
        "12125551234",
        // trunk that gets stripped
        "410443643533",
        // regex alternative declared first
        "34612345678",
        // trunk kept inside the ndc
        "390612345678",
        // falls through to the last alternative
        "442079460958",
        // matched split fallback
        "3780549123456",
        // unknown country
        "9991234567",
    ]
}

fn segment_benchmark(c: &mut Criterion) {
    let numbers = setup_segment_data();
    // build the lazy table outside of the measurement
    let _ = SEGMENTER.segment(numbers[0]);

    let mut group = c.benchmark_group("Segmentation");

    group.bench_function("segment()", |b| {
        b.iter(|| {
            for number in &numbers {
                let _ = SEGMENTER.segment(black_box(number));
            }
        })
    });

    group.bench_function("digits_only() + normalize()", |b| {
        b.iter(|| {
            if let Ok(digits) = digits_only(black_box("+41 (0)44 364 35 33")) {
                let _ = SEGMENTER.normalize(&digits);
            }
        })
    });

    group.finish();
}

criterion_group!(benches, segment_benchmark);
criterion_main!(benches);
