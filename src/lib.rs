//! Convert planar YUV 4:2:0 (I420) images to packed RGB24.
//!
//! The conversion reads three planes (Y at full resolution, U and V at half resolution in both directions)
//! and writes `width * height * 3` bytes of interleaved `R, G, B` into a caller provided buffer.
//! It never allocates and keeps no state between calls, so it can be called any number of times, from any
//! number of threads, as long as every concurrent call writes to its own destination buffer.
//!
//! Arithmetic is done in 13 bit fixed point, rounding to nearest and saturating to `0..=255`. Results are
//! bit exact and identical across runs and platforms. The color matrix and range are described by
//! [`ColorInfo`], the default being BT.601 standard range.
//!
//! ```
//! # fn main() -> Result<(), ezk_i420::ConvertError> {
//! use ezk_i420::{PixelFormat, yuv420p_to_rgb};
//!
//! let (width, height) = (4, 2);
//!
//! let y = [235u8; 8];
//! let u = [128u8; 2];
//! let v = [128u8; 2];
//!
//! let mut rgb = vec![0u8; PixelFormat::RGB.buffer_size(width, height)];
//! yuv420p_to_rgb(&y, &u, &v, &mut rgb, width, height)?;
//!
//! assert!(rgb.iter().all(|&c| c == 255));
//! # Ok(())
//! # }
//! ```

use formats::{I420Reader, I420ToRgb, RgbWriter};

pub use color::{ColorInfo, ColorSpace};
pub use frame::{I420Frame, ReadError};
#[cfg(feature = "multi-thread")]
pub use multi_thread::convert_multi_thread;
pub use pixel_format::PixelFormat;
pub use plane_decs::Plane;
pub use planes::{AnySlice, infer_i420};
pub use source::Source;

#[cfg(feature = "capi")]
pub mod capi;
mod color;
mod formats;
mod frame;
#[cfg(feature = "multi-thread")]
mod multi_thread;
mod pixel_format;
mod plane_decs;
mod planes;
mod source;

/// Everything that can go wrong when converting an image
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ConvertError {
    #[error("invalid dimensions {width}x{height}, width and height must be even and non-zero")]
    InvalidDimensions { width: usize, height: usize },

    #[error("{plane} buffer is too small, expected it to be at least {minimum} bytes, but got {got}")]
    BufferTooShort {
        plane: Plane,
        minimum: usize,
        got: usize,
    },

    #[error("{0} buffer is missing")]
    NullBuffer(Plane),
}

/// Verify that width and height describe a valid I420 image whose RGB size fits into `usize`
pub(crate) fn verify_dimensions(width: usize, height: usize) -> Result<(), ConvertError> {
    let odd_or_zero = |v: usize| v == 0 || v % 2 != 0;

    if odd_or_zero(width)
        || odd_or_zero(height)
        || PixelFormat::RGB.checked_buffer_size(width, height).is_none()
    {
        return Err(ConvertError::InvalidDimensions { width, height });
    }

    Ok(())
}

/// Verify that the input values are all valid and safe to move on to
///
/// Checks dimensions first, then the buffers in order Y, U, V, RGB
fn verify_input(src: &Source<'_>, dst: &[u8]) -> Result<(), ConvertError> {
    verify_dimensions(src.width, src.height)?;

    PixelFormat::I420.bounds_check(src.planes(), src.width, src.height)?;
    PixelFormat::RGB.bounds_check([dst], src.width, src.height)
}

/// Convert the I420 image `src` to packed RGB24, writing it into `dst`
///
/// `dst` must hold at least `width * height * 3` bytes, only that many bytes are written.
/// All inputs are validated before `dst` is touched, on error it is left unchanged.
pub fn convert(src: &Source<'_>, dst: &mut [u8]) -> Result<(), ConvertError> {
    verify_input(src, dst)?;

    convert_impl(src, dst);

    Ok(())
}

/// Convert I420 planes to packed RGB24 using the default [`ColorInfo`] (BT.601, standard range)
///
/// Shorthand for [`convert`] with a [`Source::new`].
pub fn yuv420p_to_rgb(
    y: &[u8],
    u: &[u8],
    v: &[u8],
    dst: &mut [u8],
    width: usize,
    height: usize,
) -> Result<(), ConvertError> {
    convert(&Source::new(y, u, v, width, height), dst)
}

/// Convert I420 planes to packed RGB24 without validating any of the inputs
///
/// # Safety
///
/// - `width` and `height` must be non-zero and even
/// - `y` must be valid for reads of `width * height` bytes
/// - `u` and `v` must each be valid for reads of `(width / 2) * (height / 2)` bytes
/// - `dst` must be valid for writes of `width * height * 3` bytes and must not overlap any of the planes
///
/// Violating any of these is undefined behavior. Use [`convert`] when the inputs are not known to be valid.
pub unsafe fn convert_unchecked(
    y: *const u8,
    u: *const u8,
    v: *const u8,
    dst: *mut u8,
    width: usize,
    height: usize,
    color: &ColorInfo,
) {
    let y_len = width * height;
    let uv_len = (width / 2) * (height / 2);

    // Safety: guaranteed by the caller
    let (y, u, v, dst) = unsafe {
        (
            std::slice::from_raw_parts(y, y_len),
            std::slice::from_raw_parts(u, uv_len),
            std::slice::from_raw_parts(v, uv_len),
            std::slice::from_raw_parts_mut(dst, y_len * 3),
        )
    };

    convert_impl(&Source::new(y, u, v, width, height).with_color(*color), dst);
}

/// Convert without validation, buffers must at least be the size the dimensions require
fn convert_impl(src: &Source<'_>, dst: &mut [u8]) {
    let Source {
        y,
        u,
        v,
        width,
        height,
        color,
    } = *src;

    let uv_len = (width / 2) * (height / 2);

    RgbWriter::write(
        width,
        height,
        &mut dst[..width * height * 3],
        I420ToRgb::new(
            &color,
            I420Reader::new(width, &y[..width * height], &u[..uv_len], &v[..uv_len]),
        ),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_order() {
        let y = [0u8; 16];
        let uv = [0u8; 4];
        let mut rgb = [0u8; 48];

        // Dimensions before buffers
        assert_eq!(
            yuv420p_to_rgb(&[], &[], &[], &mut [], 3, 4),
            Err(ConvertError::InvalidDimensions {
                width: 3,
                height: 4
            })
        );

        assert_eq!(
            yuv420p_to_rgb(&y, &uv, &uv, &mut [], 4, 4),
            Err(ConvertError::NullBuffer(Plane::Rgb))
        );

        assert_eq!(
            yuv420p_to_rgb(&y[..15], &uv, &[], &mut rgb, 4, 4),
            Err(ConvertError::BufferTooShort {
                plane: Plane::Y,
                minimum: 16,
                got: 15
            })
        );

        assert_eq!(
            yuv420p_to_rgb(&y, &uv, &uv, &mut rgb[..47], 4, 4),
            Err(ConvertError::BufferTooShort {
                plane: Plane::Rgb,
                minimum: 48,
                got: 47
            })
        );
    }

    #[test]
    fn overflowing_dimensions() {
        assert_eq!(
            verify_dimensions(usize::MAX - 1, 2),
            Err(ConvertError::InvalidDimensions {
                width: usize::MAX - 1,
                height: 2
            })
        );
    }
}
