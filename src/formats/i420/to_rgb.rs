use super::{I420Rows, I420Src};
use crate::color::{ColorInfo, fixed::YuvToRgb};
use crate::formats::rgb::RgbSrc;

pub(crate) struct I420ToRgb<S> {
    i420_src: S,

    transform: YuvToRgb,
}

impl<S: I420Src> I420ToRgb<S> {
    pub(crate) fn new(color: &ColorInfo, i420_src: S) -> Self {
        Self {
            i420_src,
            transform: YuvToRgb::new(color),
        }
    }
}

impl<S: I420Src> RgbSrc for I420ToRgb<S> {
    #[inline(always)]
    fn read(&mut self, y: usize, rgb0: &mut [u8], rgb1: &mut [u8]) {
        let transform = &self.transform;

        let I420Rows { y0, y1, u, v } = self.i420_src.read(y);

        // Every 2x2 block of luma samples shares a single U and V sample
        let blocks = y0
            .chunks_exact(2)
            .zip(y1.chunks_exact(2))
            .zip(u.iter().zip(v))
            .zip(rgb0.chunks_exact_mut(6).zip(rgb1.chunks_exact_mut(6)));

        for (((y0, y1), (u, v)), (rgb0, rgb1)) in blocks {
            let chroma = transform.chroma(*u, *v);

            rgb0[..3].copy_from_slice(&transform.pixel(y0[0], chroma));
            rgb0[3..].copy_from_slice(&transform.pixel(y0[1], chroma));
            rgb1[..3].copy_from_slice(&transform.pixel(y1[0], chroma));
            rgb1[3..].copy_from_slice(&transform.pixel(y1[1], chroma));
        }
    }
}
