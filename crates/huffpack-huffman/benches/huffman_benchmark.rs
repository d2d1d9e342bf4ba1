//! Benchmarks for Huffman compression.
//!
//! Run with: `cargo bench -p huffpack-huffman`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use huffpack_core::{Compressor, Decompressor};
use huffpack_huffman::{
    compress, compress_with_config, decompress, CodeTable, CodecConfig, FrequencyTable,
    HuffmanCodec,
};

/// Generate test data with varying compressibility.
fn generate_test_data(size: usize, compressibility: f64) -> Vec<u8> {
    let mut rng = StdRng::seed_from_u64(42);
    let mut data = Vec::with_capacity(size);

    if compressibility > 0.9 {
        // Few symbols, heavily skewed
        while data.len() < size {
            let byte = match rng.gen_range(0..100) {
                0..=79 => b'a',
                80..=94 => b'b',
                _ => b'c',
            };
            data.push(byte);
        }
    } else if compressibility > 0.5 {
        // English-like text
        let phrases: &[&[u8]] = &[
            b"The quick brown fox jumps over the lazy dog. ",
            b"Pack my box with five dozen liquor jugs! ",
            b"How vexingly quick daft zebras jump!! ",
        ];
        while data.len() < size {
            if rng.gen_bool(compressibility) {
                let phrase = phrases[rng.gen_range(0..phrases.len())];
                data.extend_from_slice(phrase);
            } else {
                data.push(rng.gen::<u8>());
            }
        }
        data.truncate(size);
    } else {
        // Uniform bytes, no gain expected
        data.resize(size, 0);
        rng.fill(&mut data[..]);
    }

    data
}

fn bench_compress(c: &mut Criterion) {
    let mut group = c.benchmark_group("huffman_compress");

    for size in [4 * 1024, 64 * 1024, 256 * 1024, 1024 * 1024] {
        let data = generate_test_data(size, 0.7);

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}KB", size / 1024)),
            &data,
            |b, data| b.iter(|| compress(black_box(data)).unwrap()),
        );
    }

    group.finish();
}

fn bench_decompress(c: &mut Criterion) {
    let mut group = c.benchmark_group("huffman_decompress");

    for size in [4 * 1024, 64 * 1024, 256 * 1024] {
        let data = generate_test_data(size, 0.7);
        let compressed = compress(&data).unwrap();

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}KB", size / 1024)),
            &compressed,
            |b, compressed| b.iter(|| decompress(black_box(compressed)).unwrap()),
        );
    }

    group.finish();
}

fn bench_frequency_count(c: &mut Criterion) {
    let mut group = c.benchmark_group("huffman_frequency");

    let size = 4 * 1024 * 1024;
    let data = generate_test_data(size, 0.0);
    group.throughput(Throughput::Bytes(size as u64));

    group.bench_with_input(BenchmarkId::new("sequential", "4MB"), &data, |b, data| {
        b.iter(|| FrequencyTable::from_bytes(black_box(data)))
    });

    #[cfg(feature = "parallel")]
    group.bench_with_input(BenchmarkId::new("parallel", "4MB"), &data, |b, data| {
        b.iter(|| FrequencyTable::from_bytes_parallel(black_box(data), 256 * 1024))
    });

    group.finish();
}

fn bench_code_table(c: &mut Criterion) {
    let mut group = c.benchmark_group("huffman_code_table");

    for (name, compressibility) in [("skewed", 0.95), ("text", 0.7), ("uniform", 0.0)] {
        let frequencies = FrequencyTable::from_bytes(&generate_test_data(64 * 1024, compressibility));
        group.bench_with_input(BenchmarkId::from_parameter(name), &frequencies, |b, f| {
            b.iter(|| CodeTable::from_frequencies(black_box(f)).unwrap())
        });
    }

    group.finish();
}

fn bench_parallel_threshold(c: &mut Criterion) {
    let mut group = c.benchmark_group("huffman_parallel_threshold");

    let size = 2 * 1024 * 1024;
    let data = generate_test_data(size, 0.7);
    group.throughput(Throughput::Bytes(size as u64));

    for threshold in [usize::MAX, 1024 * 1024] {
        let config = CodecConfig {
            parallel_threshold: threshold,
            ..CodecConfig::default()
        };
        let label = if threshold == usize::MAX {
            "sequential"
        } else {
            "parallel"
        };
        group.bench_with_input(BenchmarkId::from_parameter(label), &data, |b, data| {
            b.iter(|| compress_with_config(black_box(data), &config).unwrap())
        });
    }

    group.finish();
}

fn bench_codec_roundtrip(c: &mut Criterion) {
    let mut group = c.benchmark_group("huffman_codec_roundtrip");
    let codec = HuffmanCodec::new();

    for (name, compressibility) in [("skewed", 0.95), ("text", 0.7), ("uniform", 0.0)] {
        let data = generate_test_data(64 * 1024, compressibility);

        group.throughput(Throughput::Bytes(data.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), &data, |b, data| {
            b.iter(|| {
                let compressed = codec.compress(black_box(data)).unwrap();
                codec.decompress(black_box(&compressed)).unwrap()
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_compress,
    bench_decompress,
    bench_frequency_count,
    bench_code_table,
    bench_parallel_threshold,
    bench_codec_roundtrip,
);

criterion_main!(benches);
