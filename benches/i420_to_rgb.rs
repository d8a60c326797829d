use criterion::{Criterion, criterion_group, criterion_main};

use ezk_i420::{ColorInfo, PixelFormat, Source, convert, infer_i420};
use std::hint::black_box;

const IMAGE_WIDTH: usize = 1920;
const IMAGE_HEIGHT: usize = 1080;

fn do_convert(src: &Source<'_>, dst: &mut [u8]) {
    convert(black_box(src), black_box(dst)).unwrap();
}

#[cfg(feature = "multi-thread")]
fn do_convert_multi_thread(src: &Source<'_>, dst: &mut [u8]) {
    use ezk_i420::convert_multi_thread;

    convert_multi_thread(black_box(src), black_box(dst)).unwrap();
}

type ConvertFunction = fn(&Source<'_>, &mut [u8]);

fn run_benchmarks(c: &mut Criterion, do_convert: ConvertFunction, s: &str) {
    // Content doesn't influence the conversion speed
    let mut i420 = vec![0u8; PixelFormat::I420.buffer_size(IMAGE_WIDTH, IMAGE_HEIGHT)];
    i420.iter_mut()
        .enumerate()
        .for_each(|(i, b)| *b = (i % 251) as u8);

    let [y, u, v] = infer_i420(&i420[..], IMAGE_WIDTH, IMAGE_HEIGHT).unwrap();

    let mut rgb = vec![0u8; PixelFormat::RGB.buffer_size(IMAGE_WIDTH, IMAGE_HEIGHT)];

    for (name, color) in [
        ("BT.601", ColorInfo::BT601),
        ("BT.601 full range", ColorInfo::BT601_FULL),
        ("BT.709", ColorInfo::BT709),
    ] {
        let src = Source::new(y, u, v, IMAGE_WIDTH, IMAGE_HEIGHT).with_color(color);

        c.bench_function(&format!("I420 to RGB {name} {s}"), |b| {
            b.iter(|| {
                do_convert(&src, &mut rgb);
            })
        });
    }
}

fn single_threaded(c: &mut Criterion) {
    run_benchmarks(c, do_convert, "single threaded")
}

#[cfg(feature = "multi-thread")]
fn multi_threaded(c: &mut Criterion) {
    run_benchmarks(c, do_convert_multi_thread, "multi threaded")
}

#[cfg(feature = "multi-thread")]
criterion_group!(img, single_threaded, multi_threaded);

#[cfg(not(feature = "multi-thread"))]
criterion_group!(img, single_threaded);

criterion_main!(img);
