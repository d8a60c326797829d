use super::{I420Rows, I420Src};

pub(crate) struct I420Reader<'a> {
    width: usize,

    y: &'a [u8],
    u: &'a [u8],
    v: &'a [u8],
}

impl<'a> I420Reader<'a> {
    /// Planes must already be bounds checked against `width` and the height of the visited image
    pub(crate) fn new(width: usize, y: &'a [u8], u: &'a [u8], v: &'a [u8]) -> Self {
        debug_assert_eq!(width % 2, 0);

        Self { width, y, u, v }
    }
}

impl I420Src for I420Reader<'_> {
    #[inline(always)]
    fn read(&self, y: usize) -> I420Rows<'_> {
        let uv_width = self.width / 2;

        let y_offset = y * self.width;
        let uv_offset = (y / 2) * uv_width;

        let (y0, y1) = self.y[y_offset..y_offset + self.width * 2].split_at(self.width);

        I420Rows {
            y0,
            y1,
            u: &self.u[uv_offset..uv_offset + uv_width],
            v: &self.v[uv_offset..uv_offset + uv_width],
        }
    }
}
