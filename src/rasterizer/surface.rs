//! Scoped alpha drawing surface.
//!
//! A `Surface` is acquired at a fixed size for exactly one conversion, drawn
//! into by a `FontDriver`, and consumed by `into_pixel_grid`. It is never
//! reused, so nothing drawn for one conversion can leak into the next.

use crate::grid::PixelGrid;
use log::trace;

/// Alpha-only pixel surface, row-major, initially fully transparent.
#[derive(Debug)]
pub struct Surface {
    width: usize,
    height: usize,
    alpha: Vec<u8>,
}

impl Surface {
    /// Acquire a cleared surface of the given size.
    pub fn acquire(width: usize, height: usize) -> Self {
        trace!("Surface: acquired {}x{}", width, height);
        Self {
            width,
            height,
            alpha: vec![0; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Composite `coverage` over the pixel at `(x, y)` (source-over).
    ///
    /// Coordinates outside the surface are ignored.
    pub fn composite(&mut self, x: i64, y: i64, coverage: u8) {
        if coverage == 0 || x < 0 || y < 0 {
            return;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return;
        }
        let dst = &mut self.alpha[y * self.width + x];
        let src = coverage as u32;
        let blended = (src * 255 + *dst as u32 * (255 - src) + 127) / 255;
        *dst = blended.min(255) as u8;
    }

    /// Fill an axis-aligned rectangle with full coverage, clipped.
    pub fn fill_rect(&mut self, x: i64, y: i64, width: usize, height: usize) {
        for dy in 0..height as i64 {
            for dx in 0..width as i64 {
                self.composite(x + dx, y + dy, u8::MAX);
            }
        }
    }

    /// Read back the alpha channel and release the surface.
    pub fn into_pixel_grid(mut self) -> PixelGrid {
        let alpha = std::mem::take(&mut self.alpha);
        PixelGrid::from_surface(self.width, self.height, alpha)
    }
}

impl Drop for Surface {
    fn drop(&mut self) {
        trace!("Surface: released {}x{}", self.width, self.height);
    }
}
