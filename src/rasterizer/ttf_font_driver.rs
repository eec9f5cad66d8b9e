//! TrueType/OpenType font driver backed by `fontdue`.

use super::font_driver::FontDriver;
use super::surface::Surface;
use anyhow::{anyhow, Context, Result};
use log::*;
use std::path::Path;

/// Font driver rasterizing glyphs from a font file.
pub struct TtfFontDriver {
    font: fontdue::Font,
    size_px: f32,
    /// Distance from the top of the em box to the baseline.
    ascent: f32,
}

impl TtfFontDriver {
    /// Load a font file from disk.
    ///
    /// # Returns
    /// The driver, or an error if the file cannot be read or parsed
    pub fn load(path: &Path, size_px: f32) -> Result<Self> {
        info!("TtfFontDriver: Loading '{}' at {} px", path.display(), size_px);
        let bytes = std::fs::read(path)
            .with_context(|| format!("Failed to read font file '{}'", path.display()))?;
        Self::from_bytes(bytes, size_px)
            .with_context(|| format!("Failed to load font '{}'", path.display()))
    }

    /// Parse font data already in memory.
    pub fn from_bytes(bytes: Vec<u8>, size_px: f32) -> Result<Self> {
        let settings = fontdue::FontSettings {
            scale: size_px,
            ..fontdue::FontSettings::default()
        };
        let font = fontdue::Font::from_bytes(bytes, settings)
            .map_err(|e| anyhow!("Failed to parse font data: {}", e))?;
        let ascent = match font.horizontal_line_metrics(size_px) {
            Some(metrics) => metrics.ascent,
            None => {
                warn!("TtfFontDriver: Font has no horizontal metrics, assuming ascent = size");
                size_px
            }
        };
        debug!("TtfFontDriver: ascent {} px", ascent);
        Ok(Self {
            font,
            size_px,
            ascent,
        })
    }
}

impl FontDriver for TtfFontDriver {
    fn pixel_size(&self) -> f32 {
        self.size_px
    }

    fn measure_line(&self, line: &str) -> f32 {
        line.chars()
            .map(|ch| self.font.metrics(ch, self.size_px).advance_width)
            .sum()
    }

    fn draw_line(&self, line: &str, surface: &mut Surface, top: usize) {
        if top >= surface.height() {
            trace!("TtfFontDriver: band at row {} is below the surface", top);
            return;
        }
        let mut pen_x = 0.0f32;
        for ch in line.chars() {
            let (metrics, bitmap) = self.font.rasterize(ch, self.size_px);
            // fontdue's ymin is the bitmap's bottom edge relative to the baseline.
            let glyph_top = self.ascent - (metrics.ymin + metrics.height as i32) as f32;
            let origin_x = (pen_x + metrics.xmin as f32).round() as i64;
            let origin_y = top as i64 + glyph_top.round() as i64;

            if metrics.width > 0 {
                for (row, coverage_row) in bitmap.chunks_exact(metrics.width).enumerate() {
                    for (col, &coverage) in coverage_row.iter().enumerate() {
                        surface.composite(origin_x + col as i64, origin_y + row as i64, coverage);
                    }
                }
            }
            pen_x += metrics.advance_width;
        }
    }
}
