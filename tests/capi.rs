#![cfg(feature = "capi")]

use ezk_i420::capi::{
    EZK_I420_BUFFER_TOO_SHORT, EZK_I420_INVALID_DIMENSIONS, EZK_I420_NULL_BUFFER, EZK_I420_OK,
    ezk_i420_to_rgb24,
};
use ezk_i420::yuv420p_to_rgb;
use std::ptr;

#[test]
fn converts_like_the_rust_api() {
    let (width, height) = (4usize, 2usize);
    let y: Vec<u8> = (0..8).map(|i| 16 + i * 25).collect();
    let u = [90u8, 170];
    let v = [200u8, 40];

    let mut expected = vec![0u8; width * height * 3];
    yuv420p_to_rgb(&y, &u, &v, &mut expected, width, height).unwrap();

    let mut rgb = vec![0u8; width * height * 3];
    let status = unsafe {
        ezk_i420_to_rgb24(
            y.as_ptr(),
            y.len(),
            u.as_ptr(),
            u.len(),
            v.as_ptr(),
            v.len(),
            rgb.as_mut_ptr(),
            rgb.len(),
            width as u32,
            height as u32,
        )
    };

    assert_eq!(status, EZK_I420_OK);
    assert_eq!(rgb, expected);
}

#[test]
fn reports_errors_as_status_codes() {
    let y = [0u8; 4];
    let uv = [0u8; 1];
    let mut rgb = [0xAAu8; 12];

    let call = |y: *const u8, y_len: usize, dst: *mut u8, dst_len: usize, width: u32| unsafe {
        ezk_i420_to_rgb24(
            y,
            y_len,
            uv.as_ptr(),
            uv.len(),
            uv.as_ptr(),
            uv.len(),
            dst,
            dst_len,
            width,
            2,
        )
    };

    assert_eq!(
        call(y.as_ptr(), 4, rgb.as_mut_ptr(), 12, 3),
        EZK_I420_INVALID_DIMENSIONS
    );
    assert_eq!(
        call(ptr::null(), 4, rgb.as_mut_ptr(), 12, 2),
        EZK_I420_NULL_BUFFER
    );
    assert_eq!(
        call(y.as_ptr(), 4, ptr::null_mut(), 12, 2),
        EZK_I420_NULL_BUFFER
    );
    assert_eq!(
        call(y.as_ptr(), 3, rgb.as_mut_ptr(), 12, 2),
        EZK_I420_BUFFER_TOO_SHORT
    );
    assert_eq!(
        call(y.as_ptr(), 4, rgb.as_mut_ptr(), 11, 2),
        EZK_I420_BUFFER_TOO_SHORT
    );

    assert!(rgb.iter().all(|&b| b == 0xAA));
}
