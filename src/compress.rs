// src/compress.rs

//! Compression of a token grid.
//!
//! Two passes, applied in order:
//!
//! 1. **Collapse blank rows**: every run of two or more consecutive rows made
//!    only of background cells becomes a single copy of the run's first row.
//! 2. **Trim shared margin**: the smallest trailing background run over all
//!    rows that have one (`min`) is the padding every such row shares. In each
//!    of those rows the last `min` background cells become one cell.
//!
//! Both passes work on `TokenGrid` cells, before any token text exists, so a
//! foreground token spelled with background text is still foreground. A
//! row's cells up to its trailing background run are never altered.

use crate::tokenizer::TokenGrid;
use log::debug;

/// Count the background cells ending `row`.
pub fn trailing_run(row: &[bool]) -> usize {
    row.iter().rev().take_while(|&&foreground| !foreground).count()
}

/// True if `row` has at least one cell and every cell is background.
pub fn is_blank_row(row: &[bool]) -> bool {
    !row.is_empty() && row.iter().all(|&foreground| !foreground)
}

/// Pass A: replace each run of 2+ consecutive blank rows by its first row.
pub fn collapse_blank_rows(grid: &TokenGrid) -> TokenGrid {
    let mut kept: Vec<Vec<bool>> = Vec::with_capacity(grid.height());
    let mut previous_blank = false;
    for row in grid.rows() {
        let blank = is_blank_row(row);
        if !(blank && previous_blank) {
            kept.push(row.clone());
        }
        previous_blank = blank;
    }
    debug!(
        "Compress: collapsed {} blank rows ({} -> {})",
        grid.height() - kept.len(),
        grid.height(),
        kept.len()
    );
    TokenGrid::from_rows(kept)
}

/// Smallest non-zero trailing background run over all rows.
///
/// `None` when no row ends in background.
pub fn shared_margin(grid: &TokenGrid) -> Option<usize> {
    grid.rows()
        .iter()
        .map(|row| trailing_run(row))
        .filter(|&run| run > 0)
        .min()
}

/// Pass B: shrink the shared trailing background margin to one cell.
///
/// Rows ending in foreground are left as they are.
pub fn trim_shared_margin(grid: &TokenGrid) -> TokenGrid {
    let Some(margin) = shared_margin(grid) else {
        debug!("Compress: no row ends in background, margin trim skipped");
        return grid.clone();
    };
    if margin == 1 {
        return grid.clone();
    }

    let rows = grid
        .rows()
        .iter()
        .map(|row| {
            let mut row = row.clone();
            if trailing_run(&row) >= margin {
                // Drop `margin - 1` background cells, leaving one in their place.
                row.truncate(row.len() - (margin - 1));
            }
            row
        })
        .collect();
    debug!("Compress: trimmed shared margin of {} cells", margin);
    TokenGrid::from_rows(rows)
}

/// Run both passes.
pub fn compress(grid: &TokenGrid) -> TokenGrid {
    trim_shared_margin(&collapse_blank_rows(grid))
}

#[cfg(test)]
mod tests;
