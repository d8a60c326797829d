use crate::ColorInfo;

/// Describes the immutable I420 planes used as source for a conversion
///
/// Construction never fails, the planes are validated by the conversion functions before any memory is touched.
#[derive(Debug, Clone, Copy)]
pub struct Source<'a> {
    pub(crate) y: &'a [u8],
    pub(crate) u: &'a [u8],
    pub(crate) v: &'a [u8],

    pub(crate) width: usize,
    pub(crate) height: usize,

    pub(crate) color: ColorInfo,
}

impl<'a> Source<'a> {
    /// Create a source from separate Y, U and V planes
    ///
    /// Uses the default [`ColorInfo`] (BT.601, standard range)
    pub fn new(y: &'a [u8], u: &'a [u8], v: &'a [u8], width: usize, height: usize) -> Self {
        Self {
            y,
            u,
            v,
            width,
            height,
            color: ColorInfo::default(),
        }
    }

    pub fn with_color(mut self, color: ColorInfo) -> Self {
        self.set_color(color);
        self
    }

    pub fn set_color(&mut self, color: ColorInfo) {
        self.color = color;
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn color(&self) -> ColorInfo {
        self.color
    }

    /// The Y, U and V planes
    pub fn planes(&self) -> [&'a [u8]; 3] {
        [self.y, self.u, self.v]
    }
}
