use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rust_qr_encode::{ECLevel, Encoder, SymbolBuilder, Version, num_data_codewords};

fn sample_data(version: u8, level: ECLevel) -> Vec<u8> {
    let version = Version::new(version).expect("valid version");
    (0..num_data_codewords(version, level))
        .map(|i| (i * 31 + 7) as u8)
        .collect()
}

fn bench_encode_v1(c: &mut Criterion) {
    let data = sample_data(1, ECLevel::M);
    let encoder = Encoder::new().parallel(false);
    c.bench_function("encode_v1_m", |b| {
        b.iter(|| encoder.encode(black_box(1), ECLevel::M, black_box(&data)))
    });
}

fn bench_encode_v10(c: &mut Criterion) {
    let data = sample_data(10, ECLevel::Q);
    let encoder = Encoder::new().parallel(false);
    c.bench_function("encode_v10_q", |b| {
        b.iter(|| encoder.encode(black_box(10), ECLevel::Q, black_box(&data)))
    });
}

fn bench_encode_v40_sequential(c: &mut Criterion) {
    let data = sample_data(40, ECLevel::L);
    let encoder = Encoder::new().parallel(false);
    c.bench_function("encode_v40_l_sequential", |b| {
        b.iter(|| encoder.encode(black_box(40), ECLevel::L, black_box(&data)))
    });
}

fn bench_encode_v40_parallel(c: &mut Criterion) {
    let data = sample_data(40, ECLevel::L);
    let encoder = Encoder::new().parallel(true);
    c.bench_function("encode_v40_l_parallel", |b| {
        b.iter(|| encoder.encode(black_box(40), ECLevel::L, black_box(&data)))
    });
}

fn bench_evaluate_all_v25(c: &mut Criterion) {
    let level = ECLevel::H;
    let mut builder = SymbolBuilder::new(25, level).expect("valid version");
    let raw = builder.scan_order().len() / 8;
    let codewords: Vec<u8> = (0..raw).map(|i| (i * 13 + 5) as u8).collect();
    builder.place_codewords(&codewords).expect("full codeword sequence");
    c.bench_function("evaluate_all_masks_v25", |b| {
        b.iter(|| black_box(&builder).evaluate_all(false))
    });
}

criterion_group!(
    benches,
    bench_encode_v1,
    bench_encode_v10,
    bench_encode_v40_sequential,
    bench_encode_v40_parallel,
    bench_evaluate_all_v25,
);
criterion_main!(benches);
