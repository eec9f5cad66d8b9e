//! End-to-end conversions through the public API with the built-in font.

use emoji_art::compress::{compress, trailing_run};
use emoji_art::TokenGrid;
use emoji_art::config::Config;
use emoji_art::{ArtEngine, ArtError, ArtRequest, ArtSession, BitmapFontDriver};
use test_log::test;

fn ready_engine() -> ArtEngine<BitmapFontDriver> {
    let config = Config::default();
    let mut engine = ArtEngine::from_config(&config);
    engine
        .initialize(|| Ok(BitmapFontDriver::new(config.font.size_px)))
        .expect("built-in font always loads");
    engine
}

#[test]
fn default_inputs_produce_emoji_banner() {
    let engine = ready_engine();
    let request = ArtRequest::from(&Config::default().defaults);
    let art = engine.convert(&request).unwrap();

    assert!(art.as_str().contains(":tada:"));
    assert!(art.as_str().ends_with(":ome:\n"));
    for line in art.as_str().lines() {
        assert!(line.replace(":tada:", "").replace(":ome:", "").is_empty());
    }
}

#[test]
fn empty_message_produces_empty_art() {
    let engine = ready_engine();
    let art = engine
        .convert(&ArtRequest::new("", ":tada:", ":ome:", 64))
        .unwrap();
    assert_eq!(art.as_str(), "");
}

#[test]
fn multi_line_message_keeps_one_blank_row_between_lines() {
    let engine = ready_engine();
    let art = engine
        .convert(&ArtRequest::new("HI\nBD", "#", ".", 64))
        .unwrap();
    let expected = "\
#...#..###..
#...#...#...
#...#...#...
#####...#...
#...#...#...
#...#...#...
#...#..###..
............
####..####..
#...#.#...#.
#...#.#...#.
####..#...#.
#...#.#...#.
#...#.#...#.
####..####..
............
";
    assert_eq!(art.as_str(), expected);
}

#[test]
fn every_line_ends_in_a_single_shared_margin_token_or_more() {
    let engine = ready_engine();
    let art = engine
        .convert(&ArtRequest::new("Hi!\nok", ":a:", ":b:", 64))
        .unwrap();
    let runs: Vec<usize> = art
        .as_str()
        .lines()
        .map(|line| {
            let mut rest = line;
            let mut run = 0;
            while let Some(stripped) = rest.strip_suffix(":b:") {
                rest = stripped;
                run += 1;
            }
            run
        })
        .collect();
    assert_eq!(runs.iter().copied().min(), Some(1));
}

#[test]
fn engine_output_is_already_compressed() {
    let engine = ready_engine();
    for message in ["HBD", "2024\n♥", "a.b,c"] {
        let request = ArtRequest::new(message, "X", "o", 64);
        let art = engine.convert(&request).unwrap();
        let cells = TokenGrid::from_rows(
            art.as_str()
                .lines()
                .map(|line| line.chars().map(|c| c == 'X').collect())
                .collect(),
        );
        let again = compress(&cells);
        assert_eq!(again, cells, "{:?}", message);
        assert!(again.rows().iter().any(|row| trailing_run(row) == 1));
    }
}

#[test]
fn colon_tokens_keep_every_banner_row() {
    let engine = ready_engine();
    let art = engine
        .convert(&ArtRequest::new("HBD", "::", ":", 64))
        .unwrap();
    assert_eq!(art.as_str().lines().count(), 8);
    assert!(art.as_str().starts_with("::::::"));
}

#[test]
fn session_ignores_superseded_results() {
    let engine = ready_engine();
    let mut session = ArtSession::new();

    let first = session.begin();
    let second = session.begin();
    let stale = engine.convert(&ArtRequest::new("A", "#", ".", 64)).unwrap();
    let fresh = engine.convert(&ArtRequest::new("B", "#", ".", 64)).unwrap();

    assert!(session.publish(second, fresh.clone()));
    assert!(!session.publish(first, stale));
    assert_eq!(session.latest(), &fresh);
}

#[test]
fn unready_engine_never_converts() {
    let engine: ArtEngine<BitmapFontDriver> = ArtEngine::from_config(&Config::default());
    assert_eq!(
        engine.convert(&ArtRequest::default()),
        Err(ArtError::FontNotReady)
    );
}
