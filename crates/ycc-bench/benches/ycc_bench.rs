//! Benchmarks for ycc-rs conversions.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use ycc_color::{frame, srgb_to_ycbcr, subsample_quad, ycbcr_to_srgb, PixelQuad};
use ycc_transfer::{rec709, srgb, TransferCurve};

/// Benchmark scalar transfer function throughput.
fn bench_transfer(c: &mut Criterion) {
    let mut group = c.benchmark_group("transfer");

    for size in [1000, 10000, 100000].iter() {
        let values: Vec<f32> = (0..*size).map(|i| i as f32 / *size as f32).collect();

        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(BenchmarkId::new("srgb_eotf", size), &values, |b, v| {
            b.iter(|| v.iter().map(|&x| srgb::eotf(black_box(x))).collect::<Vec<_>>())
        });

        group.bench_with_input(BenchmarkId::new("rec709_oetf", size), &values, |b, v| {
            b.iter(|| v.iter().map(|&x| rec709::oetf(black_box(x))).collect::<Vec<_>>())
        });

        group.bench_with_input(BenchmarkId::new("tagged_eotf", size), &values, |b, v| {
            b.iter(|| {
                v.iter()
                    .map(|&x| TransferCurve::Apple1961.eotf(black_box(x)))
                    .collect::<Vec<_>>()
            })
        });
    }

    group.finish();
}

/// Benchmark the pixel-level conversion paths.
fn bench_pixel(c: &mut Criterion) {
    let mut group = c.benchmark_group("pixel");

    let pixels: Vec<[u8; 3]> = (0..10000u32)
        .map(|i| [(i % 256) as u8, (i * 7 % 256) as u8, (i * 13 % 256) as u8])
        .collect();

    group.throughput(Throughput::Elements(pixels.len() as u64));

    group.bench_function("srgb_to_ycbcr", |b| {
        b.iter(|| {
            pixels
                .iter()
                .map(|&p| srgb_to_ycbcr(black_box(p)))
                .collect::<Vec<_>>()
        })
    });

    group.bench_function("ycbcr_to_srgb", |b| {
        let ycc: Vec<_> = pixels.iter().map(|&p| srgb_to_ycbcr(p)).collect();
        b.iter(|| {
            ycc.iter()
                .map(|&p| ycbcr_to_srgb(black_box(p)).unwrap())
                .collect::<Vec<_>>()
        })
    });

    group.bench_function("subsample_quad", |b| {
        let quads: Vec<_> = pixels
            .chunks_exact(4)
            .map(|c| PixelQuad::new(c[0], c[1], c[2], c[3]))
            .collect();
        b.iter(|| {
            quads
                .iter()
                .map(|q| subsample_quad(black_box(q)))
                .collect::<Vec<_>>()
        })
    });

    group.finish();
}

/// Benchmark row-striped frame conversion.
fn bench_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("frame");
    group.sample_size(20);

    let (width, height) = (1920, 1080);
    let src: Vec<u32> = (0..width * height)
        .map(|i| (i as u32).wrapping_mul(0x9E3779B9) & 0x00FF_FFFF)
        .collect();

    group.throughput(Throughput::Elements((width * height) as u64));

    group.bench_function("convert_1080p", |b| {
        b.iter(|| frame::convert_frame(black_box(&src), width, height).unwrap())
    });

    group.bench_function("subsample_1080p", |b| {
        b.iter(|| frame::subsample_frame(black_box(&src), width, height).unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_transfer, bench_pixel, bench_frame);
criterion_main!(benches);
