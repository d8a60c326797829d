use crate::{ConvertError, PixelFormat, plane_decs::I420_PLANES, verify_dimensions};
use std::mem::MaybeUninit;

/// Infer the Y, U and V planes of an I420 image packed back to back in `buf`
///
/// `buf` may be larger than required, excess bytes stay in the V plane.
pub fn infer_i420<S: AnySlice>(
    buf: S,
    width: usize,
    height: usize,
) -> Result<[S; 3], ConvertError> {
    verify_dimensions(width, height)?;

    let required = PixelFormat::I420.buffer_size(width, height);

    if buf.slice_len() == 0 {
        return Err(ConvertError::NullBuffer(I420_PLANES[0].plane));
    }

    if buf.slice_len() < required {
        // Report the first plane which doesn't fit into the buffer
        let mut remaining = buf.slice_len();

        for desc in I420_PLANES {
            let minimum = desc.size(width, height).unwrap_or(usize::MAX);

            if minimum > remaining {
                return Err(ConvertError::BufferTooShort {
                    plane: desc.plane,
                    minimum,
                    got: remaining,
                });
            }

            remaining -= minimum;
        }
    }

    Ok(split_i420(buf, width, height))
}

/// Split `buf` into the I420 planes
///
/// # Panics
///
/// If `buf` is too small for the given dimensions
pub(crate) fn split_i420<S: AnySlice>(mut buf: S, width: usize, height: usize) -> [S; 3] {
    let mut out: [MaybeUninit<S>; 3] = [const { MaybeUninit::uninit() }; 3];

    for (i, (desc, out)) in I420_PLANES.iter().zip(out.iter_mut()).enumerate() {
        // The last plane keeps whatever is left over
        let plane = if i + 1 == I420_PLANES.len() {
            std::mem::take(&mut buf)
        } else {
            let split_at = desc.size(width, height).unwrap_or(usize::MAX);
            let (prev, rem) = buf.slice_split_at(split_at);
            buf = rem;
            prev
        };

        out.write(plane);
    }

    // Safety: every element has been written in the loop above
    out.map(|p| unsafe { p.assume_init() })
}

/// Helper trait implemented on &[T] and &mut [T]
#[diagnostic::on_unimplemented(message = "AnySlice is only implemented for &[T] and &mut [T].\n\
               When using or Vec<T> or similar try .as_slice() or .as_mut_slice()")]
pub trait AnySlice: sealed::Sealed + Default + Sized {
    fn slice_len(&self) -> usize;
    fn slice_split_at(self, at: usize) -> (Self, Self);
}

mod sealed {
    pub trait Sealed {}
    impl<T> Sealed for &[T] {}
    impl<T> Sealed for &mut [T] {}
}

impl<T> AnySlice for &[T] {
    fn slice_len(&self) -> usize {
        self.len()
    }

    fn slice_split_at(self, at: usize) -> (Self, Self) {
        self.split_at(at)
    }
}

impl<T> AnySlice for &mut [T] {
    fn slice_len(&self) -> usize {
        self.len()
    }

    fn slice_split_at(self, at: usize) -> (Self, Self) {
        self.split_at_mut(at)
    }
}
