use crate::{ConvertError, Source, convert_impl, verify_input};
use rayon::prelude::*;

/// Multi threaded variant of [`convert`](crate::convert)
///
/// Splits the image into horizontal bands, one per CPU, and converts them in parallel on the rayon thread pool.
/// Every band writes to its own part of `dst`. The result is identical to [`convert`](crate::convert).
#[inline(never)]
pub fn convert_multi_thread(src: &Source<'_>, dst: &mut [u8]) -> Result<(), ConvertError> {
    verify_input(src, dst)?;

    let threads = num_cpus::get();

    // Bands must contain an even number of rows to keep chroma rows whole
    let row_pairs = src.height / 2;
    let bands = threads.min(row_pairs);

    if bands <= 1 {
        convert_impl(src, dst);
        return Ok(());
    }

    let pairs_per_band = row_pairs.div_ceil(bands);

    let width = src.width;
    let uv_width = width / 2;

    let y_len = width * src.height;
    let uv_len = uv_width * row_pairs;

    log::debug!(
        "converting {width}x{} I420 in {} bands of {} rows",
        src.height,
        row_pairs.div_ceil(pairs_per_band),
        pairs_per_band * 2
    );

    let y = src.y[..y_len].par_chunks(pairs_per_band * 2 * width);
    let u = src.u[..uv_len].par_chunks(pairs_per_band * uv_width);
    let v = src.v[..uv_len].par_chunks(pairs_per_band * uv_width);
    let dst = dst[..y_len * 3].par_chunks_mut(pairs_per_band * 2 * width * 3);

    y.zip(u)
        .zip(v)
        .zip(dst)
        .for_each(|(((y, u), v), dst)| {
            let band = Source {
                y,
                u,
                v,
                width,
                height: y.len() / width,
                color: src.color,
            };

            convert_impl(&band, dst);
        });

    Ok(())
}
