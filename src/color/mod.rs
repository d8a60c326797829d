pub(crate) mod fixed;
pub(crate) mod space;

pub use space::ColorSpace;

/// Color description of an I420 image
///
/// The default is BT.601 in standard (studio) range, which gives the well known
///
/// ```text
/// R = 1.164 * (Y - 16)                               + 1.596 * (V - 128)
/// G = 1.164 * (Y - 16) - 0.392 * (U - 128) - 0.813 * (V - 128)
/// B = 1.164 * (Y - 16) + 2.017 * (U - 128)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ColorInfo {
    /// Matrix used to derive RGB from the YUV components
    pub space: ColorSpace,

    /// If the image uses either full or standard range
    ///
    /// - full range (0 - 255)
    /// - standard range Y (16 - 235), U & V (16 - 240)
    pub full_range: bool,
}

impl ColorInfo {
    /// BT.601, standard range
    pub const BT601: Self = Self {
        space: ColorSpace::BT601,
        full_range: false,
    };

    /// BT.601, full range (JFIF / JPEG style YCbCr)
    pub const BT601_FULL: Self = Self {
        space: ColorSpace::BT601,
        full_range: true,
    };

    /// BT.709, standard range
    pub const BT709: Self = Self {
        space: ColorSpace::BT709,
        full_range: false,
    };
}
