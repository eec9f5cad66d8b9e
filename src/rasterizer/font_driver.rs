//! Font measurement and line drawing primitives.
//!
//! This module defines the `FontDriver` trait, the seam between the
//! conversion engine and whatever actually knows glyph shapes (the built-in
//! dot font, or a TrueType file loaded through `fontdue`).

use super::surface::Surface;

/// Glyph rasterizer trait.
///
/// Implementors handle:
/// - Measuring the pixel width of one line of text
/// - Drawing one line of text onto an alpha `Surface`
///
/// Lines never contain line breaks; the rasterizer splits text before
/// calling into the driver.
pub trait FontDriver {
    /// Nominal font size in pixels.
    fn pixel_size(&self) -> f32;

    /// Measure the rendered width of `line` in pixels.
    ///
    /// # Returns
    /// The advance width of the whole line. An empty line measures `0.0`.
    fn measure_line(&self, line: &str) -> f32;

    /// Smallest band height that holds one line without spilling into the
    /// next band.
    fn min_line_height(&self) -> usize {
        self.pixel_size().ceil().max(1.0) as usize
    }

    /// Draw `line` onto `surface`.
    ///
    /// # Arguments
    /// * `line` - Text to draw, without line breaks
    /// * `surface` - Alpha surface to composite coverage onto
    /// * `top` - Surface row where the line's band starts. The top of the
    ///   em box is aligned to this row and the line starts at column 0.
    ///
    /// Ink falling outside the surface is clipped.
    fn draw_line(&self, line: &str, surface: &mut Surface, top: usize);
}
