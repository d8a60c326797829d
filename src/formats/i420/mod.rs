mod read;
mod to_rgb;

pub(crate) use read::I420Reader;
pub(crate) use to_rgb::I420ToRgb;

/// Two luma rows and the chroma row they share
pub(crate) struct I420Rows<'a> {
    pub(crate) y0: &'a [u8],
    pub(crate) y1: &'a [u8],

    pub(crate) u: &'a [u8],
    pub(crate) v: &'a [u8],
}

pub(crate) trait I420Src {
    /// Read luma rows `y`, `y + 1` and their chroma row
    fn read(&self, y: usize) -> I420Rows<'_>;
}
