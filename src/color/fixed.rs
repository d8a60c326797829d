use super::ColorInfo;

/// Number of fractional bits used by the fixed point coefficients
pub(crate) const PRECISION: u32 = 13;

/// Added before the final shift to round to nearest (ties up)
const ROUNDING: i32 = 1 << (PRECISION - 1);

/// YUV to RGB transform in Q13 fixed point
///
/// ```text
/// R = y_coef * (Y - bias_y) + cr_coef * (V - 128)
/// G = y_coef * (Y - bias_y) - g_coef_2 * (U - 128) - g_coef_1 * (V - 128)
/// B = y_coef * (Y - bias_y) + cb_coef * (U - 128)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct YuvToRgb {
    pub(crate) bias_y: i32,
    pub(crate) bias_uv: i32,

    pub(crate) y_coef: i32,
    pub(crate) cr_coef: i32,
    pub(crate) cb_coef: i32,
    /// V contribution to G
    pub(crate) g_coef_1: i32,
    /// U contribution to G
    pub(crate) g_coef_2: i32,
}

/// Chroma terms shared by the four pixels of a 2x2 block, rounding already included
#[derive(Debug, Clone, Copy)]
pub(crate) struct Chroma {
    r: i32,
    g: i32,
    b: i32,
}

impl YuvToRgb {
    pub(crate) fn new(color: &ColorInfo) -> Self {
        let (kr, kb) = color.space.kr_kb();
        let kg = 1.0 - kr - kb;

        // Standard range stretches Y 16..=235 and UV 16..=240 to 0..=255
        let (bias_y, y_scale, uv_scale) = if color.full_range {
            (0, 1.0, 1.0)
        } else {
            (16, 255.0 / 219.0, 255.0 / 224.0)
        };

        let to_fixed = |coef: f32| (coef * (1 << PRECISION) as f32).round() as i32;

        Self {
            bias_y,
            bias_uv: 128,
            y_coef: to_fixed(y_scale),
            cr_coef: to_fixed(2.0 * (1.0 - kr) * uv_scale),
            cb_coef: to_fixed(2.0 * (1.0 - kb) * uv_scale),
            g_coef_1: to_fixed(2.0 * (1.0 - kr) * kr / kg * uv_scale),
            g_coef_2: to_fixed(2.0 * (1.0 - kb) * kb / kg * uv_scale),
        }
    }

    #[inline(always)]
    pub(crate) fn chroma(&self, u: u8, v: u8) -> Chroma {
        let d = i32::from(u) - self.bias_uv;
        let e = i32::from(v) - self.bias_uv;

        Chroma {
            r: self.cr_coef * e + ROUNDING,
            g: ROUNDING - self.g_coef_2 * d - self.g_coef_1 * e,
            b: self.cb_coef * d + ROUNDING,
        }
    }

    #[inline(always)]
    pub(crate) fn pixel(&self, y: u8, chroma: Chroma) -> [u8; 3] {
        let y = (i32::from(y) - self.bias_y) * self.y_coef;

        [
            saturate(y + chroma.r),
            saturate(y + chroma.g),
            saturate(y + chroma.b),
        ]
    }
}

#[inline(always)]
fn saturate(v: i32) -> u8 {
    (v >> PRECISION).clamp(0, 255) as u8
}
