/// YUV color matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum ColorSpace {
    /// YUV Rec. ITU-R BT.601-7 625
    #[default]
    BT601,

    /// YUV Rec. ITU-R BT.709-6
    BT709,

    /// YUV Rec. ITU-R BT.2020-2 (non constant luminance)
    BT2020,
}

impl ColorSpace {
    /// Luma weights of the red and blue primaries `(Kr, Kb)`
    pub fn kr_kb(self) -> (f32, f32) {
        match self {
            ColorSpace::BT601 => (0.299, 0.114),
            ColorSpace::BT709 => (0.2126, 0.0722),
            ColorSpace::BT2020 => (0.2627, 0.0593),
        }
    }

    pub fn variants() -> impl IntoIterator<Item = Self> {
        [ColorSpace::BT601, ColorSpace::BT709, ColorSpace::BT2020]
    }
}
