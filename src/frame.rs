use crate::{
    ColorInfo, ConvertError, PixelFormat, Plane, Source, convert, planes::split_i420,
    plane_decs::I420_PLANES, verify_dimensions,
};
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

/// Everything that can go wrong when loading an [`I420Frame`]
#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    #[error("invalid frame dimensions {width}x{height}, width and height must be even and non-zero")]
    InvalidDimensions { width: usize, height: usize },

    #[error("truncated I420 input, {plane} plane expected {expected} bytes but got only {got}")]
    Truncated {
        plane: Plane,
        expected: usize,
        got: usize,
    },

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Convert(#[from] ConvertError),
}

/// Owned raw I420 frame, the Y, U and V planes stored back to back in a single buffer
///
/// This is the layout of raw `.yuv` files as written by most tools (e.g. `ffmpeg -pix_fmt yuv420p`).
#[derive(Debug, Clone)]
pub struct I420Frame {
    buffer: Vec<u8>,
    width: usize,
    height: usize,

    color: ColorInfo,
}

impl I420Frame {
    /// Read a frame from `reader`, first the Y plane, then U, then V
    ///
    /// Every plane must be read completely, a short read returns [`ReadError::Truncated`].
    /// Bytes following the V plane are not consumed, so consecutive frames can be read from the same reader.
    pub fn read_from<R: Read>(
        mut reader: R,
        width: usize,
        height: usize,
        color: ColorInfo,
    ) -> Result<Self, ReadError> {
        verify_dimensions(width, height)
            .map_err(|_| ReadError::InvalidDimensions { width, height })?;

        let size = PixelFormat::I420.buffer_size(width, height);
        let mut buffer = vec![0u8; size];

        for (desc, plane) in I420_PLANES
            .iter()
            .zip(split_i420(&mut buffer[..], width, height))
        {
            let got = read_plane(&mut reader, plane)?;

            if got != plane.len() {
                log::warn!(
                    "truncated I420 input: {} plane of {width}x{height} frame has {got} of {} bytes",
                    desc.plane,
                    plane.len()
                );

                return Err(ReadError::Truncated {
                    plane: desc.plane,
                    expected: plane.len(),
                    got,
                });
            }
        }

        log::debug!("read {width}x{height} I420 frame ({size} bytes)");

        Ok(Self {
            buffer,
            width,
            height,
            color,
        })
    }

    /// Read a frame from the start of the file at `path`
    pub fn open(
        path: impl AsRef<Path>,
        width: usize,
        height: usize,
        color: ColorInfo,
    ) -> Result<Self, ReadError> {
        let path = path.as_ref();

        log::debug!("opening I420 file {}", path.display());

        Self::read_from(BufReader::new(File::open(path)?), width, height, color)
    }

    /// Wrap an existing buffer containing the Y, U and V planes back to back
    ///
    /// `buffer` may be larger than required.
    pub fn from_buffer(
        buffer: Vec<u8>,
        width: usize,
        height: usize,
        color: ColorInfo,
    ) -> Result<Self, ReadError> {
        verify_dimensions(width, height)
            .map_err(|_| ReadError::InvalidDimensions { width, height })?;

        crate::infer_i420(&buffer[..], width, height)?;

        Ok(Self {
            buffer,
            width,
            height,
            color,
        })
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

    pub fn set_color(&mut self, color: ColorInfo) {
        self.color = color;
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }

    pub fn into_buffer(self) -> Vec<u8> {
        self.buffer
    }

    /// Borrow the frame as conversion [`Source`]
    pub fn source(&self) -> Source<'_> {
        // Buffer has been bounds checked on construction
        let [y, u, v] = split_i420(&self.buffer[..], self.width, self.height);

        Source::new(y, u, v, self.width, self.height).with_color(self.color)
    }

    /// Convert the frame into `dst`, which can be reused across calls
    pub fn convert_into(&self, dst: &mut [u8]) -> Result<(), ConvertError> {
        convert(&self.source(), dst)
    }

    /// Convert the frame into a newly allocated packed RGB24 buffer
    pub fn to_rgb(&self) -> Result<Vec<u8>, ConvertError> {
        let mut rgb = vec![0u8; PixelFormat::RGB.buffer_size(self.width, self.height)];

        self.convert_into(&mut rgb)?;

        Ok(rgb)
    }
}

/// Fill `buf` from `reader`, returning less than `buf.len()` only when the reader is exhausted
fn read_plane(reader: &mut impl Read, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;

    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
            Err(e) => return Err(e),
        }
    }

    Ok(filled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    /// Reader returning at most one byte per call
    struct Trickle<R>(R);

    impl<R: Read> Read for Trickle<R> {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            let len = buf.len().min(1);
            self.0.read(&mut buf[..len])
        }
    }

    #[test]
    fn read_plane_handles_short_reads() {
        let mut buf = [0u8; 5];

        let got = read_plane(&mut Trickle(Cursor::new([1u8, 2, 3, 4, 5, 6])), &mut buf).unwrap();

        assert_eq!(got, 5);
        assert_eq!(buf, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn read_plane_stops_at_eof() {
        let mut buf = [0u8; 5];

        let got = read_plane(&mut Cursor::new([1u8, 2]), &mut buf).unwrap();

        assert_eq!(got, 2);
    }

    #[test]
    fn consecutive_frames_from_one_reader() {
        let data: Vec<u8> = (0..12).collect();
        let mut reader = Cursor::new(data);

        let first = I420Frame::read_from(&mut reader, 2, 2, ColorInfo::default()).unwrap();
        let second = I420Frame::read_from(&mut reader, 2, 2, ColorInfo::default()).unwrap();

        assert_eq!(first.as_bytes(), [0u8, 1, 2, 3, 4, 5]);
        assert_eq!(second.as_bytes(), [6u8, 7, 8, 9, 10, 11]);
    }
}
