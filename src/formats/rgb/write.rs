use super::RgbSrc;
use crate::formats::visit_2x2::{RowPairVisitor, visit};

pub(crate) struct RgbWriter<'a, S> {
    stride: usize,
    dst: &'a mut [u8],

    rgb_src: S,
}

impl<'a, S: RgbSrc> RgbWriter<'a, S> {
    /// Write `height` rows into `dst` pulling them from `rgb_src`
    ///
    /// `dst` must already be bounds checked against the dimensions
    pub(crate) fn write(width: usize, height: usize, dst: &'a mut [u8], rgb_src: S) {
        visit(
            height,
            Self {
                stride: width * 3,
                dst,
                rgb_src,
            },
        )
    }
}

impl<S: RgbSrc> RowPairVisitor for RgbWriter<'_, S> {
    #[inline(always)]
    fn visit(&mut self, y: usize) {
        let offset = y * self.stride;

        let (rgb0, rgb1) = self.dst[offset..offset + self.stride * 2].split_at_mut(self.stride);

        self.rgb_src.read(y, rgb0, rgb1);
    }
}
