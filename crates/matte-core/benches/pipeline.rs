//! Benchmarks for the Matte normalization pipeline.
//!
//! Run with: cargo bench -p matte-core

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
use matte_core::config::{CanvasConfig, LimitsConfig};
use matte_core::pipeline::{CanvasNormalizer, ImageDecoder};
use std::io::Cursor;
use std::path::Path;

fn sample_image(width: u32, height: u32) -> DynamicImage {
    let mut img = RgbaImage::new(width, height);
    for (x, y, pixel) in img.enumerate_pixels_mut() {
        let alpha = if x < width / 2 { 0 } else { 255 };
        *pixel = Rgba([(x % 256) as u8, (y % 256) as u8, 128, alpha]);
    }
    DynamicImage::ImageRgba8(img)
}

fn benchmark_canvas_normalize(c: &mut Criterion) {
    let img = sample_image(1920, 1080);
    let normalizer = CanvasNormalizer::new(CanvasConfig::default());

    c.bench_function("canvas_normalize_768", |b| {
        b.iter(|| {
            let _ = normalizer.normalize(black_box(&img));
        })
    });
}

fn benchmark_average_gray(c: &mut Criterion) {
    let img = sample_image(768, 768);

    c.bench_function("average_gray_768", |b| {
        b.iter(|| {
            let _ = matte_core::average_gray(black_box(&img));
        })
    });
}

fn benchmark_decode(c: &mut Criterion) {
    let mut buffer = Cursor::new(Vec::new());
    sample_image(768, 768)
        .write_to(&mut buffer, ImageFormat::Png)
        .unwrap();
    let bytes = buffer.into_inner();

    let decoder = ImageDecoder::new(LimitsConfig::default());
    let rt = tokio::runtime::Runtime::new().unwrap();

    c.bench_function("decode_png_768", |b| {
        b.iter(|| {
            let _ = rt.block_on(
                decoder.decode_from_bytes(black_box(bytes.clone()), Path::new("bench.png")),
            );
        })
    });
}

criterion_group!(
    benches,
    benchmark_canvas_normalize,
    benchmark_average_gray,
    benchmark_decode,
);
criterion_main!(benches);
