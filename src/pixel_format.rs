use crate::{ConvertError, plane_decs::*};

/// Pixel formats taking part in a conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PixelFormat {
    /// Y, U and V planes, 4:2:0 sub sampling, 8 bits per sample
    I420,

    /// Single RGB interleaved plane, 8 bits per sample
    RGB,
}

impl PixelFormat {
    /// Calculate the required buffer size given the [`PixelFormat`] self and image dimensions (in pixel width, height).
    ///
    /// For [`PixelFormat::I420`] this is the size of all three planes packed back to back.
    ///
    /// # Panics
    ///
    /// If the size overflows `usize`
    pub fn buffer_size(self, width: usize, height: usize) -> usize {
        self.checked_buffer_size(width, height)
            .unwrap_or_else(|| panic!("{self:?} buffer of {width}x{height} overflows usize"))
    }

    /// Like [`buffer_size`](Self::buffer_size) but returns `None` on overflow
    pub fn checked_buffer_size(self, width: usize, height: usize) -> Option<usize> {
        self.plane_desc()
            .iter()
            .try_fold(0usize, |size, desc| size.checked_add(desc.size(width, height)?))
    }

    /// Check if the given planes are present and large enough for the dimensions
    ///
    /// Planes are checked in order, an empty plane is reported as [`ConvertError::NullBuffer`].
    pub(crate) fn bounds_check<'a>(
        self,
        planes: impl IntoIterator<Item = &'a [u8]>,
        width: usize,
        height: usize,
    ) -> Result<(), ConvertError> {
        for (desc, slice) in self.plane_desc().iter().zip(planes) {
            if slice.is_empty() {
                return Err(ConvertError::NullBuffer(desc.plane));
            }

            let minimum = desc
                .size(width, height)
                .ok_or(ConvertError::InvalidDimensions { width, height })?;

            if minimum > slice.len() {
                return Err(ConvertError::BufferTooShort {
                    plane: desc.plane,
                    minimum,
                    got: slice.len(),
                });
            }
        }

        Ok(())
    }

    pub(crate) fn plane_desc(&self) -> &'static [PlaneDesc] {
        match self {
            PixelFormat::I420 => &I420_PLANES,
            PixelFormat::RGB => &RGB_PLANES,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_sizes() {
        assert_eq!(PixelFormat::I420.buffer_size(1920, 1080), 1920 * 1080 * 3 / 2);
        assert_eq!(PixelFormat::RGB.buffer_size(1920, 1080), 1920 * 1080 * 3);
        assert_eq!(PixelFormat::I420.buffer_size(4, 4), 16 + 4 + 4);
    }

    #[test]
    fn overflowing_buffer_size() {
        assert_eq!(PixelFormat::RGB.checked_buffer_size(usize::MAX, 2), None);
        assert_eq!(PixelFormat::I420.checked_buffer_size(usize::MAX, usize::MAX), None);
    }

    #[test]
    fn bounds_check_reports_first_bad_plane() {
        let y = [0u8; 16];
        let u = [0u8; 4];
        let v = [0u8; 3];

        assert_eq!(
            PixelFormat::I420.bounds_check([&y[..], &u[..], &v[..]], 4, 4),
            Err(ConvertError::BufferTooShort {
                plane: Plane::V,
                minimum: 4,
                got: 3
            })
        );

        assert_eq!(
            PixelFormat::I420.bounds_check([&y[..], &[][..], &v[..]], 4, 4),
            Err(ConvertError::NullBuffer(Plane::U))
        );

        assert_eq!(
            PixelFormat::I420.bounds_check([&y[..], &u[..], &u[..]], 4, 4),
            Ok(())
        );
    }
}
