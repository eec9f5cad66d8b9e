// src/compress/tests.rs

use super::*;
use crate::tokenizer::TokenPair;
use test_log::test;

/// Row of `fg` foreground cells followed by `bg` background cells.
fn row(fg: usize, bg: usize) -> Vec<bool> {
    let mut cells = vec![true; fg];
    cells.extend(std::iter::repeat(false).take(bg));
    cells
}

fn grid(rows: &[Vec<bool>]) -> TokenGrid {
    TokenGrid::from_rows(rows.to_vec())
}

/// Parse `#`/`.` art into cells.
fn cells(art: &str) -> TokenGrid {
    TokenGrid::from_rows(art.lines().map(|l| l.chars().map(|c| c == '#').collect()).collect())
}

// --- trailing_run / is_blank_row ---

#[test]
fn trailing_run_counts_background_cells() {
    assert_eq!(trailing_run(&row(2, 3)), 3);
    assert_eq!(trailing_run(&row(1, 0)), 0);
    assert_eq!(trailing_run(&row(0, 0)), 0);
    assert_eq!(trailing_run(&[false, true, false, false]), 2);
}

#[test]
fn blank_row_needs_at_least_one_cell() {
    assert!(is_blank_row(&row(0, 4)));
    assert!(!is_blank_row(&row(1, 3)));
    assert!(!is_blank_row(&row(0, 0)));
}

// --- Pass A ---

#[test]
fn blank_run_collapses_to_one_row() {
    let collapsed = collapse_blank_rows(&grid(&[row(0, 4), row(0, 4), row(0, 4), row(2, 2)]));
    assert_eq!(collapsed, grid(&[row(0, 4), row(2, 2)]));
}

#[test]
fn isolated_blank_rows_are_kept() {
    let input = grid(&[row(1, 3), row(0, 4), row(1, 3), row(0, 4)]);
    assert_eq!(collapse_blank_rows(&input), input);
}

#[test]
fn each_blank_run_collapses_independently() {
    let input = grid(&[
        row(0, 4),
        row(0, 4),
        row(1, 3),
        row(0, 4),
        row(0, 4),
        row(0, 4),
        row(3, 1),
    ]);
    let expected = grid(&[row(0, 4), row(1, 3), row(0, 4), row(3, 1)]);
    assert_eq!(collapse_blank_rows(&input), expected);
}

#[test]
fn collapse_keeps_the_first_row_of_a_run() {
    let input = grid(&[row(0, 2), row(0, 5)]);
    assert_eq!(collapse_blank_rows(&input), grid(&[row(0, 2)]));
}

// --- Pass B ---

#[test]
fn shared_margin_trim_keeps_row_specific_excess() {
    let trimmed = trim_shared_margin(&grid(&[row(3, 5), row(3, 5), row(0, 8)]));
    let runs: Vec<usize> = trimmed.rows().iter().map(|r| trailing_run(r)).collect();
    assert_eq!(runs, vec![1, 1, 8 - 5 + 1]);
    assert_eq!(trimmed, grid(&[row(3, 1), row(3, 1), row(0, 4)]));
}

#[test]
fn rows_ending_in_foreground_are_untouched_and_ignored() {
    let input = grid(&[row(4, 0), row(2, 3), row(1, 6)]);
    assert_eq!(shared_margin(&input), Some(3));
    assert_eq!(
        trim_shared_margin(&input),
        grid(&[row(4, 0), row(2, 1), row(1, 4)])
    );
}

#[test]
fn no_trailing_background_skips_trim() {
    let input = grid(&[row(2, 0), row(3, 0)]);
    assert_eq!(shared_margin(&input), None);
    assert_eq!(trim_shared_margin(&input), input);
    assert_eq!(trim_shared_margin(&TokenGrid::default()), TokenGrid::default());
}

#[test]
fn foreground_prefix_is_never_altered() {
    let input = cells("#.#......\n.#.........\n");
    let out = compress(&input);
    assert!(out.rows()[0].starts_with(&[true, false, true]));
    assert!(out.rows()[1].starts_with(&[false, true]));
}

// --- compress ---

#[test]
fn compress_runs_both_passes() {
    let input = grid(&[row(0, 6), row(0, 6), row(2, 4), row(0, 6), row(1, 5)]);
    // Pass A: [0/6, 2/4, 0/6, 1/5]; margin 4.
    let expected = grid(&[row(0, 3), row(2, 1), row(0, 3), row(1, 2)]);
    assert_eq!(compress(&input), expected);
}

#[test]
fn compress_is_idempotent() {
    let samples = [
        grid(&[row(0, 6), row(0, 6), row(2, 4), row(0, 6), row(1, 5)]),
        grid(&[row(3, 5), row(3, 5), row(0, 8)]),
        grid(&[row(4, 0), row(2, 3)]),
        TokenGrid::default(),
    ];
    for input in samples {
        let once = compress(&input);
        assert_eq!(compress(&once), once, "not idempotent for {:?}", input);
    }
}

#[test]
fn foreground_spelled_with_background_text_survives() {
    // fg "::" is two background tokens as text; as cells it is foreground.
    let input = cells("#..\n...\n...\n.#.\n");
    let out = compress(&input).render(&TokenPair::new("::", ":"));
    assert_eq!(out, "::::\n:::\n::::\n");
}

#[test]
fn foreground_ending_in_background_text_is_not_trimmed() {
    // fg "ab" ends with bg "b"; the true shared margin is one cell.
    let input = grid(&[row(1, 1), row(0, 3)]);
    let out = compress(&input);
    assert_eq!(out, input);
    assert_eq!(out.render(&TokenPair::new("ab", "b")), "abb\nbbb\n");
}

#[test]
fn pattern_special_tokens_render_literally() {
    let input = cells("#...\n....\n....\n##..\n");
    for bg in [".*", "(x)", "[^a]", "\\d+", "$", "a|b", "{2}"] {
        let out = compress(&input).render(&TokenPair::new("F", bg));
        let expected = format!("F{b}{b}\n{b}{b}{b}\nFF{b}\n", b = bg);
        assert_eq!(out, expected, "token {:?}", bg);
    }
}

#[test]
fn unicode_tokens_render_whole() {
    let out = compress(&cells("#...\n....\n")).render(&TokenPair::new("█", "░"));
    assert_eq!(out, "█░\n░░\n");
}
