use std::fmt;

/// Names a buffer taking part in a conversion, used to report errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Plane {
    /// Luma plane
    Y,
    /// Blue difference chroma plane
    U,
    /// Red difference chroma plane
    V,
    /// Packed RGB destination
    Rgb,
}

impl fmt::Display for Plane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Plane::Y => "Y",
            Plane::U => "U",
            Plane::V => "V",
            Plane::Rgb => "RGB",
        })
    }
}

/// Description for a Plane which can be used to implement bounds checks and buffer sizes.
///
/// Not used by the conversion itself, only utility functions.
#[derive(Clone, Copy)]
pub(crate) struct PlaneDesc {
    pub(crate) plane: Plane,
    pub(crate) width_op: Op,
    pub(crate) height_op: Op,
}

impl PlaneDesc {
    /// Number of bytes in a row of this plane
    pub(crate) fn packed_stride(&self, width: usize) -> Option<usize> {
        self.width_op.op(width)
    }

    /// Number of bytes required to hold this plane, `None` on overflow
    pub(crate) fn size(&self, width: usize, height: usize) -> Option<usize> {
        self.packed_stride(width)?
            .checked_mul(self.height_op.op(height)?)
    }
}

/// Plane's number of bytes in relation to width / height
#[derive(Clone, Copy)]
pub(crate) enum Op {
    Mul(usize),
    /// Rounds up, so odd sizes still cover every pixel
    Div(usize),
    Identity,
}

impl Op {
    pub(crate) fn op(self, lhs: usize) -> Option<usize> {
        match self {
            Op::Mul(rhs) => lhs.checked_mul(rhs),
            Op::Div(rhs) => Some(lhs.div_ceil(rhs)),
            Op::Identity => Some(lhs),
        }
    }
}

pub(crate) const I420_PLANES: [PlaneDesc; 3] = [
    PlaneDesc {
        plane: Plane::Y,
        width_op: Op::Identity,
        height_op: Op::Identity,
    },
    PlaneDesc {
        plane: Plane::U,
        width_op: Op::Div(2),
        height_op: Op::Div(2),
    },
    PlaneDesc {
        plane: Plane::V,
        width_op: Op::Div(2),
        height_op: Op::Div(2),
    },
];

pub(crate) const RGB_PLANES: [PlaneDesc; 1] = [PlaneDesc {
    plane: Plane::Rgb,
    width_op: Op::Mul(3),
    height_op: Op::Identity,
}];
