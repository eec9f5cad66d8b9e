// src/tokenizer.rs

//! Thresholding an alpha mask into a grid of foreground/background tokens.
//!
//! Thresholding yields a `TokenGrid`: one row per pixel row, one cell per
//! pixel, each cell either foreground or background. Rendering a grid with a
//! `TokenPair` gives the text form, every row (including the last)
//! terminated by `\n`. Compression works on the grid, never on the rendered
//! text, so token boundaries stay known whatever the tokens contain.

use crate::grid::PixelGrid;

/// The two caller-chosen tokens of a conversion.
///
/// Tokens are arbitrary strings (`":tada:"`, `"█"`, `"xx"`), so anything
/// that counts them must count occurrences, never characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenPair {
    pub foreground: String,
    pub background: String,
}

impl TokenPair {
    pub fn new(foreground: impl Into<String>, background: impl Into<String>) -> Self {
        Self {
            foreground: foreground.into(),
            background: background.into(),
        }
    }

    /// Token for one cell.
    #[inline]
    pub fn token(&self, foreground: bool) -> &str {
        if foreground {
            &self.foreground
        } else {
            &self.background
        }
    }
}

/// Strictly greater than `threshold` is foreground; equal is background.
#[inline]
pub fn is_foreground(alpha: u8, threshold: u8) -> bool {
    alpha > threshold
}

/// Rows of cells, `true` for foreground. Rows may differ in length once
/// compressed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenGrid {
    rows: Vec<Vec<bool>>,
}

impl TokenGrid {
    pub fn from_rows(rows: Vec<Vec<bool>>) -> Self {
        Self { rows }
    }

    /// Threshold every pixel of `grid`.
    pub fn from_pixels(grid: &PixelGrid, threshold: u8) -> Self {
        let rows = grid
            .rows()
            .map(|row| row.iter().map(|&alpha| is_foreground(alpha, threshold)).collect())
            .collect();
        Self { rows }
    }

    pub fn rows(&self) -> &[Vec<bool>] {
        &self.rows
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Render as text, one `\n`-terminated line per row.
    pub fn render(&self, tokens: &TokenPair) -> String {
        let longest = tokens.foreground.len().max(tokens.background.len());
        let cells: usize = self.rows.iter().map(Vec::len).sum();
        let mut out = String::with_capacity(cells * longest + self.rows.len());
        for row in &self.rows {
            for &cell in row {
                out.push_str(tokens.token(cell));
            }
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    fn tokens() -> TokenPair {
        TokenPair::new("#", ".")
    }

    fn tokenize(grid: &PixelGrid, tokens: &TokenPair, threshold: u8) -> String {
        TokenGrid::from_pixels(grid, threshold).render(tokens)
    }

    #[test]
    fn threshold_is_strictly_greater_than() {
        for threshold in [0u8, 1, 64, 254] {
            assert!(!is_foreground(threshold, threshold));
            assert!(is_foreground(threshold + 1, threshold));
        }
        // Nothing exceeds 255.
        assert!(!is_foreground(255, 255));
        assert_eq!(tokens().token(false), ".");
    }

    #[test]
    fn rows_are_newline_terminated() {
        let grid = PixelGrid::from_rows(&[vec![0, 255, 0], vec![65, 64, 63]]).unwrap();
        assert_eq!(tokenize(&grid, &tokens(), 64), ".#.\n#..\n");
    }

    #[test]
    fn multi_char_tokens_are_emitted_whole() {
        let grid = PixelGrid::from_rows(&[vec![255, 0]]).unwrap();
        let pair = TokenPair::new(":tada:", ":ome:");
        assert_eq!(tokenize(&grid, &pair, 64), ":tada::ome:\n");
    }

    #[test]
    fn every_row_has_width_tokens() {
        let rows = vec![vec![0u8; 7]; 4];
        let grid = PixelGrid::from_rows(&rows).unwrap();
        let art = tokenize(&grid, &TokenPair::new(":a:", ":bb:"), 0);
        let lines: Vec<&str> = art.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines.iter().all(|line| line.matches(":bb:").count() == 7));
    }

    #[test]
    fn from_pixels_keeps_cells_not_text() {
        let grid = PixelGrid::from_rows(&[vec![255, 0], vec![0, 0]]).unwrap();
        let cells = TokenGrid::from_pixels(&grid, 64);
        assert_eq!(cells.rows(), &[vec![true, false], vec![false, false]]);
        // Foreground made of background text still renders cell by cell.
        assert_eq!(cells.render(&TokenPair::new("::", ":")), ":::\n::\n");
    }
}
