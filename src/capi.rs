//! Minimal C ABI for the I420 to RGB24 conversion.
//!
//! This module is behind the `capi` feature.

use crate::{ColorInfo, ConvertError, Plane, Source, convert, verify_dimensions};

pub const EZK_I420_OK: i32 = 0;
pub const EZK_I420_INVALID_DIMENSIONS: i32 = -1;
pub const EZK_I420_BUFFER_TOO_SHORT: i32 = -2;
pub const EZK_I420_NULL_BUFFER: i32 = -3;

impl ConvertError {
    /// Status code returned by the C ABI for this error
    pub fn code(&self) -> i32 {
        match self {
            ConvertError::InvalidDimensions { .. } => EZK_I420_INVALID_DIMENSIONS,
            ConvertError::BufferTooShort { .. } => EZK_I420_BUFFER_TOO_SHORT,
            ConvertError::NullBuffer(..) => EZK_I420_NULL_BUFFER,
        }
    }
}

/// Convert an I420 image to packed RGB24 (BT.601, standard range).
///
/// Every pointer is paired with the number of bytes it is valid for, all of them are validated
/// before `dst` is written to.
///
/// Returns:
///   0  = success
///  -1  = width or height zero or odd
///  -2  = a buffer is too short for the dimensions
///  -3  = a buffer is null
///
/// # Safety
///
/// Every non-null pointer must be valid for its given length, `dst` for writes, and `dst` must not overlap
/// any of the planes.
#[unsafe(no_mangle)]
#[allow(clippy::too_many_arguments)]
pub unsafe extern "C" fn ezk_i420_to_rgb24(
    y: *const u8,
    y_len: usize,
    u: *const u8,
    u_len: usize,
    v: *const u8,
    v_len: usize,
    dst: *mut u8,
    dst_len: usize,
    width: u32,
    height: u32,
) -> i32 {
    // Safety: forwarded from the caller
    let result = unsafe {
        convert_raw(
            y,
            y_len,
            u,
            u_len,
            v,
            v_len,
            dst,
            dst_len,
            width as usize,
            height as usize,
        )
    };

    match result {
        Ok(()) => EZK_I420_OK,
        Err(e) => e.code(),
    }
}

#[allow(clippy::too_many_arguments)]
unsafe fn convert_raw(
    y: *const u8,
    y_len: usize,
    u: *const u8,
    u_len: usize,
    v: *const u8,
    v_len: usize,
    dst: *mut u8,
    dst_len: usize,
    width: usize,
    height: usize,
) -> Result<(), ConvertError> {
    verify_dimensions(width, height)?;

    // Safety: forwarded from the caller
    let (y, u, v) = unsafe {
        (
            plane(y, y_len, Plane::Y)?,
            plane(u, u_len, Plane::U)?,
            plane(v, v_len, Plane::V)?,
        )
    };

    if dst.is_null() {
        return Err(ConvertError::NullBuffer(Plane::Rgb));
    }

    // Safety: dst is not null and the caller guarantees it is valid for dst_len bytes
    let dst = unsafe { std::slice::from_raw_parts_mut(dst, dst_len) };

    convert(
        &Source::new(y, u, v, width, height).with_color(ColorInfo::BT601),
        dst,
    )
}

unsafe fn plane<'a>(ptr: *const u8, len: usize, plane: Plane) -> Result<&'a [u8], ConvertError> {
    if ptr.is_null() {
        return Err(ConvertError::NullBuffer(plane));
    }

    // Safety: ptr is not null and the caller guarantees it is valid for len bytes
    Ok(unsafe { std::slice::from_raw_parts(ptr, len) })
}
