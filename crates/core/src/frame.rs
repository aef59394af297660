//! RGB frame buffer produced once per animation step.
//!
//! A `Frame` stores `height * width * 3` bytes in row-major order, one
//! `[r, g, b]` triple per pixel. Unlike a scalar field, coordinates are not
//! toroidal: anything outside `[0, width) × [0, height)` simply has no pixel.

use crate::error::EngineError;

/// Number of bytes per pixel.
pub const CHANNELS: usize = 3;

/// An 8-bit sRGB color.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channels as `[r, g, b]`.
    pub fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

/// An opaque RGB image, zero-initialized (black) on creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl Frame {
    /// Creates a black frame of the given dimensions.
    ///
    /// Returns `EngineError::InvalidDimensions` if either dimension is zero
    /// or if `width * height * 3` overflows `usize`.
    pub fn new(width: usize, height: usize) -> Result<Self, EngineError> {
        let len = byte_len(width, height)?;
        Ok(Self {
            width,
            height,
            data: vec![0; len],
        })
    }

    /// Frame width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Frame height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Read-only access to the row-major RGB bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Mutable access to the row-major RGB bytes.
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Byte offset of the pixel at signed `(x, y)`, or `None` if it lies
    /// outside the frame.
    pub fn offset(&self, x: isize, y: isize) -> Option<usize> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y * self.width + x) * CHANNELS)
    }

    /// Color at `(x, y)`, or `None` out of bounds.
    pub fn pixel(&self, x: usize, y: usize) -> Option<Rgb> {
        let x = isize::try_from(x).ok()?;
        let y = isize::try_from(y).ok()?;
        let o = self.offset(x, y)?;
        Some(Rgb::new(self.data[o], self.data[o + 1], self.data[o + 2]))
    }

    /// Writes `color` at `(x, y)`. Returns `false` (and writes nothing) when
    /// the coordinate is out of bounds.
    pub fn set_pixel(&mut self, x: usize, y: usize, color: Rgb) -> bool {
        let (Ok(xi), Ok(yi)) = (isize::try_from(x), isize::try_from(y)) else {
            return false;
        };
        match self.offset(xi, yi) {
            Some(o) => {
                self.data[o..o + CHANNELS].copy_from_slice(&color.channels());
                true
            }
            None => false,
        }
    }

    /// True when every channel of every pixel is zero.
    pub fn is_black(&self) -> bool {
        self.data.iter().all(|&c| c == 0)
    }
}

fn byte_len(width: usize, height: usize) -> Result<usize, EngineError> {
    if width == 0 || height == 0 {
        return Err(EngineError::InvalidDimensions);
    }
    width
        .checked_mul(height)
        .and_then(|n| n.checked_mul(CHANNELS))
        .ok_or(EngineError::InvalidDimensions)
}
