//! Built-in dot-matrix font driver.
//!
//! Glyphs are 5x7 dot patterns on a 6-dot advance, scaled by an integer
//! factor derived from the font size. Lowercase letters fold to uppercase.
//! Characters without a pattern draw as a hollow box; whitespace advances
//! without ink.

use super::font_driver::FontDriver;
use super::surface::Surface;

const GLYPH_COLS: usize = 5;
const GLYPH_ROWS: usize = 7;
/// Glyph columns plus one column of spacing.
const ADVANCE_COLS: usize = GLYPH_COLS + 1;
/// Font size (in pixels) that maps to one surface pixel per dot.
const BASE_SIZE_PX: f32 = 12.0;

type Pattern = [&'static str; GLYPH_ROWS];

const MISSING: Pattern = [
    "#####", "#...#", "#...#", "#...#", "#...#", "#...#", "#####",
];

fn pattern(ch: char) -> Option<Pattern> {
    let p = match ch.to_ascii_uppercase() {
        'A' => [".###.", "#...#", "#...#", "#####", "#...#", "#...#", "#...#"],
        'B' => ["####.", "#...#", "#...#", "####.", "#...#", "#...#", "####."],
        'C' => [".###.", "#...#", "#....", "#....", "#....", "#...#", ".###."],
        'D' => ["####.", "#...#", "#...#", "#...#", "#...#", "#...#", "####."],
        'E' => ["#####", "#....", "#....", "####.", "#....", "#....", "#####"],
        'F' => ["#####", "#....", "#....", "####.", "#....", "#....", "#...."],
        'G' => [".###.", "#...#", "#....", "#.###", "#...#", "#...#", ".####"],
        'H' => ["#...#", "#...#", "#...#", "#####", "#...#", "#...#", "#...#"],
        'I' => [".###.", "..#..", "..#..", "..#..", "..#..", "..#..", ".###."],
        'J' => ["..###", "...#.", "...#.", "...#.", "...#.", "#..#.", ".##.."],
        'K' => ["#...#", "#..#.", "#.#..", "##...", "#.#..", "#..#.", "#...#"],
        'L' => ["#....", "#....", "#....", "#....", "#....", "#....", "#####"],
        'M' => ["#...#", "##.##", "#.#.#", "#.#.#", "#...#", "#...#", "#...#"],
        'N' => ["#...#", "#...#", "##..#", "#.#.#", "#..##", "#...#", "#...#"],
        'O' => [".###.", "#...#", "#...#", "#...#", "#...#", "#...#", ".###."],
        'P' => ["####.", "#...#", "#...#", "####.", "#....", "#....", "#...."],
        'Q' => [".###.", "#...#", "#...#", "#...#", "#.#.#", "#..#.", ".##.#"],
        'R' => ["####.", "#...#", "#...#", "####.", "#.#..", "#..#.", "#...#"],
        'S' => [".####", "#....", "#....", ".###.", "....#", "....#", "####."],
        'T' => ["#####", "..#..", "..#..", "..#..", "..#..", "..#..", "..#.."],
        'U' => ["#...#", "#...#", "#...#", "#...#", "#...#", "#...#", ".###."],
        'V' => ["#...#", "#...#", "#...#", "#...#", "#...#", ".#.#.", "..#.."],
        'W' => ["#...#", "#...#", "#...#", "#.#.#", "#.#.#", "#.#.#", ".#.#."],
        'X' => ["#...#", "#...#", ".#.#.", "..#..", ".#.#.", "#...#", "#...#"],
        'Y' => ["#...#", "#...#", ".#.#.", "..#..", "..#..", "..#..", "..#.."],
        'Z' => ["#####", "....#", "...#.", "..#..", ".#...", "#....", "#####"],

        '0' => [".###.", "#...#", "#..##", "#.#.#", "##..#", "#...#", ".###."],
        '1' => ["..#..", ".##..", "..#..", "..#..", "..#..", "..#..", ".###."],
        '2' => [".###.", "#...#", "....#", "...#.", "..#..", ".#...", "#####"],
        '3' => ["#####", "...#.", "..#..", "...#.", "....#", "#...#", ".###."],
        '4' => ["...#.", "..##.", ".#.#.", "#..#.", "#####", "...#.", "...#."],
        '5' => ["#####", "#....", "####.", "....#", "....#", "#...#", ".###."],
        '6' => ["..##.", ".#...", "#....", "####.", "#...#", "#...#", ".###."],
        '7' => ["#####", "....#", "...#.", "..#..", ".#...", ".#...", ".#..."],
        '8' => [".###.", "#...#", "#...#", ".###.", "#...#", "#...#", ".###."],
        '9' => [".###.", "#...#", "#...#", ".####", "....#", "...#.", ".##.."],

        '!' => ["..#..", "..#..", "..#..", "..#..", "..#..", ".....", "..#.."],
        '?' => [".###.", "#...#", "....#", "...#.", "..#..", ".....", "..#.."],
        '.' => [".....", ".....", ".....", ".....", ".....", ".##..", ".##.."],
        ',' => [".....", ".....", ".....", ".....", ".##..", "..#..", ".#..."],
        ':' => [".....", ".##..", ".##..", ".....", ".##..", ".##..", "....."],
        '-' => [".....", ".....", ".....", "#####", ".....", ".....", "....."],
        '+' => [".....", "..#..", "..#..", "#####", "..#..", "..#..", "....."],
        '=' => [".....", ".....", "#####", ".....", "#####", ".....", "....."],
        '_' => [".....", ".....", ".....", ".....", ".....", ".....", "#####"],
        '*' => [".....", "..#..", "#.#.#", ".###.", "#.#.#", "..#..", "....."],
        '/' => [".....", "....#", "...#.", "..#..", ".#...", "#....", "....."],
        '\'' => ["..#..", "..#..", ".#...", ".....", ".....", ".....", "....."],
        '(' => ["...#.", "..#..", ".#...", ".#...", ".#...", "..#..", "...#."],
        ')' => [".#...", "..#..", "...#.", "...#.", "...#.", "..#..", ".#..."],
        '♥' => [".#.#.", "#####", "#####", "#####", ".###.", "..#..", "....."],

        _ => return None,
    };
    Some(p)
}

/// Font driver drawing the built-in dot-matrix font.
#[derive(Debug, Clone)]
pub struct BitmapFontDriver {
    size_px: f32,
    scale: usize,
}

impl BitmapFontDriver {
    /// Create a driver for the given nominal font size.
    ///
    /// Each dot becomes a `scale x scale` block, where
    /// `scale = max(1, floor(size_px / 12))`.
    pub fn new(size_px: f32) -> Self {
        let scale = ((size_px / BASE_SIZE_PX).floor() as usize).max(1);
        Self { size_px, scale }
    }

    /// Pixel advance of one character.
    pub fn advance_px(&self) -> usize {
        ADVANCE_COLS * self.scale
    }

    /// Pixel height of the inked part of a glyph.
    pub fn glyph_height_px(&self) -> usize {
        GLYPH_ROWS * self.scale
    }
}

impl FontDriver for BitmapFontDriver {
    fn pixel_size(&self) -> f32 {
        self.size_px
    }

    fn measure_line(&self, line: &str) -> f32 {
        (line.chars().count() * self.advance_px()) as f32
    }

    fn min_line_height(&self) -> usize {
        self.glyph_height_px()
    }

    fn draw_line(&self, line: &str, surface: &mut Surface, top: usize) {
        let scale = self.scale;
        for (index, ch) in line.chars().enumerate() {
            let origin_x = index * self.advance_px();
            if origin_x >= surface.width() {
                break;
            }
            if ch.is_whitespace() {
                continue;
            }
            let glyph = pattern(ch).unwrap_or(MISSING);
            for (gy, row) in glyph.iter().enumerate() {
                for (gx, dot) in row.bytes().enumerate() {
                    if dot != b'#' {
                        continue;
                    }
                    surface.fill_rect(
                        (origin_x + gx * scale) as i64,
                        (top + gy * scale) as i64,
                        scale,
                        scale,
                    );
                }
            }
        }
    }
}
