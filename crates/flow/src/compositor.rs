//! Rasterizes trail snapshots into an RGB [`Frame`].
//!
//! Each snapshot is drawn with a fade factor `alpha = (i + 1) / L`, so the
//! newest snapshot is at full strength. A particle paints its own pixel by
//! direct assignment and adds a saturating halo to its eight neighbours.
//!
//! Iteration order is fixed (oldest snapshot first, then particle index
//! ascending) and only matters for center pixels, where the last writer
//! wins. Halo accumulation is a saturating add of non-negative terms and is
//! order-independent.

use flowart_core::error::EngineError;
use flowart_core::frame::{Frame, Rgb, CHANNELS};

use crate::trail::TrailBuffer;

/// Neighbour offsets that receive the halo; the center is drawn separately.
const HALO_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Frame rasterizer for one engine's dimensions and halo strength.
#[derive(Debug, Clone)]
pub struct Compositor {
    blank: Frame,
    halo_weight: f64,
}

impl Compositor {
    /// Returns `EngineError::InvalidDimensions` for a zero or overflowing frame size.
    pub fn new(width: usize, height: usize, halo_weight: f64) -> Result<Self, EngineError> {
        Ok(Self {
            blank: Frame::new(width, height)?,
            halo_weight,
        })
    }

    pub fn width(&self) -> usize {
        self.blank.width()
    }

    pub fn height(&self) -> usize {
        self.blank.height()
    }

    /// Draws every snapshot in `trail` using the per-particle `colors`.
    ///
    /// An empty trail yields a black frame. Neither input is modified.
    pub fn render(&self, trail: &TrailBuffer, colors: &[Rgb]) -> Frame {
        let mut frame = self.blank.clone();
        let total = trail.len() as f64;

        for (i, snapshot) in trail.snapshots().enumerate() {
            let alpha = (i + 1) as f64 / total;
            for (pos, color) in snapshot.iter().zip(colors) {
                // Positions are wrapped into the frame, so truncation is floor.
                let (xi, yi) = (pos.x as isize, pos.y as isize);
                let Some(center) = frame.offset(xi, yi) else {
                    continue;
                };
                let faded = color.channels().map(|c| f64::from(c) * alpha);
                for (dst, v) in frame.data_mut()[center..center + CHANNELS]
                    .iter_mut()
                    .zip(faded)
                {
                    *dst = v.round() as u8;
                }

                let halo = faded.map(|v| v * self.halo_weight);
                for (dx, dy) in HALO_OFFSETS {
                    let Some(o) = frame.offset(xi + dx, yi + dy) else {
                        continue;
                    };
                    for (dst, h) in frame.data_mut()[o..o + CHANNELS].iter_mut().zip(halo) {
                        *dst = (f64::from(*dst) + h).min(255.0) as u8;
                    }
                }
            }
        }

        frame
    }
}
