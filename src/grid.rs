// src/grid.rs

//! Defines `PixelGrid`, the alpha mask read back from a rasterized surface.

/// A read-only grid of alpha values in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    width: usize,
    height: usize,
    alpha: Vec<u8>,
}

impl PixelGrid {
    /// Builds a grid from row-major alpha values.
    ///
    /// Returns `None` if `alpha.len() != width * height`.
    pub fn from_alpha(width: usize, height: usize, alpha: Vec<u8>) -> Option<Self> {
        if alpha.len() != width * height {
            return None;
        }
        Some(Self {
            width,
            height,
            alpha,
        })
    }

    /// Surface buffers are sized at acquisition, so no length check.
    pub(crate) fn from_surface(width: usize, height: usize, alpha: Vec<u8>) -> Self {
        debug_assert_eq!(alpha.len(), width * height);
        Self {
            width,
            height,
            alpha,
        }
    }

    /// Builds a grid from equal-length rows. Returns `None` on ragged input.
    pub fn from_rows(rows: &[Vec<u8>]) -> Option<Self> {
        let width = rows.first().map_or(0, Vec::len);
        if rows.iter().any(|row| row.len() != width) {
            return None;
        }
        let alpha = rows.iter().flatten().copied().collect();
        Self::from_alpha(width, rows.len(), alpha)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Alpha at `(x, y)`, or `None` outside the grid.
    pub fn alpha(&self, x: usize, y: usize) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.alpha[y * self.width + x])
    }

    /// Iterates rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        // chunks_exact panics on 0; a zero-width grid has no visible rows.
        self.alpha.chunks_exact(self.width.max(1))
    }

    /// True if no pixel carries any coverage.
    pub fn is_blank(&self) -> bool {
        self.alpha.iter().all(|&a| a == 0)
    }
}
