// src/rasterizer/mod.rs

//! Text rasterization: multi-line text in, alpha mask out.
//!
//! ```text
//! text ─split─▶ lines ─measure─▶ surface size ─draw─▶ Surface ─read back─▶ PixelGrid
//! ```
//!
//! Glyph shapes come from a `FontDriver`. The surface is sized so the widest
//! line fits with a fixed right margin, and each line gets a band of
//! `line_height` rows with the text's em box aligned to the band top.

pub mod bitmap_font_driver;
pub mod font_driver;
pub mod gate;
pub mod surface;
pub mod ttf_font_driver;

pub use bitmap_font_driver::BitmapFontDriver;
pub use font_driver::FontDriver;
pub use gate::FontGate;
pub use surface::Surface;
pub use ttf_font_driver::TtfFontDriver;

use crate::config::Config;
use crate::grid::PixelGrid;
use log::debug;

/// Surface geometry shared by every conversion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceLayout {
    /// Height in pixels of each line's band.
    pub line_height: usize,
    /// Surface width as a multiple of the widest line.
    pub margin_scale: f32,
}

impl SurfaceLayout {
    pub fn from_config(config: &Config) -> Self {
        Self {
            line_height: config.line_height_px(),
            margin_scale: config.layout.margin_scale,
        }
    }
}

impl Default for SurfaceLayout {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

/// Split text into lines on `\n`, dropping a `\r` before each break.
///
/// Always yields at least one line; `""` is one empty line.
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect()
}

/// Surface width in pixels for a widest line of `max_line_width` pixels.
pub fn surface_width(max_line_width: usize, margin_scale: f32) -> usize {
    ((max_line_width as f32 * margin_scale).ceil() as usize).max(1)
}

/// Band height used for `driver`: the layout's, raised to what the driver's
/// glyphs need.
pub fn band_height<D: FontDriver>(driver: &D, layout: &SurfaceLayout) -> usize {
    let needed = driver.min_line_height();
    if layout.line_height < needed {
        debug!(
            "Rasterizer: line height {} px below glyph height, using {} px",
            layout.line_height, needed
        );
        return needed;
    }
    layout.line_height
}

/// Rasterize `text` into an alpha mask.
///
/// # Returns
/// `None` if the text has no lines or the widest line measures zero pixels;
/// otherwise a grid of `surface_width(...)` x `band_height(...) * lines`
/// pixels.
pub fn rasterize<D: FontDriver>(driver: &D, text: &str, layout: &SurfaceLayout) -> Option<PixelGrid> {
    let lines = split_lines(text);
    let max_line_width = lines
        .iter()
        .map(|line| driver.measure_line(line).ceil().max(0.0) as usize)
        .max()
        .unwrap_or(0);

    if lines.is_empty() || max_line_width == 0 {
        debug!("Rasterizer: nothing to draw ({} lines)", lines.len());
        return None;
    }

    let width = surface_width(max_line_width, layout.margin_scale);
    let line_height = band_height(driver, layout);
    let height = line_height * lines.len();
    debug!(
        "Rasterizer: {} lines, widest {} px, surface {}x{}",
        lines.len(),
        max_line_width,
        width,
        height
    );

    let mut surface = Surface::acquire(width, height);
    for (index, line) in lines.iter().enumerate() {
        driver.draw_line(line, &mut surface, index * line_height);
    }
    Some(surface.into_pixel_grid())
}
