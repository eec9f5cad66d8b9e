// src/main.rs

use anyhow::{Context, Result};
use clap::Parser;
use emoji_art::config::{Config, FontSource, InputDefaults, CONFIG};
use emoji_art::{ArtEngine, ArtRequest, ArtSession, BitmapFontDriver, FontDriver, TtfFontDriver};
use log::{debug, info, warn};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;

/// Draw text as a block of emoji tokens for pasting into chat.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Message to draw; a literal `\n` starts a new line
    message: Option<String>,

    /// Token for inked pixels
    #[arg(short, long)]
    foreground: Option<String>,

    /// Token for empty pixels
    #[arg(short, long)]
    background: Option<String>,

    /// Alpha (0-255) a pixel must exceed to be foreground
    #[arg(short, long)]
    threshold: Option<u8>,

    /// TrueType/OpenType font file to draw with instead of the built-in font
    #[arg(long)]
    font: Option<PathBuf>,

    /// JSON configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Read messages from stdin, one per line, and print art for each
    #[arg(long)]
    watch: bool,
}

impl Args {
    /// Build the conversion request, filling gaps from `defaults`.
    fn request(&self, defaults: &InputDefaults) -> ArtRequest {
        let message = self
            .message
            .as_deref()
            .map(expand_line_breaks)
            .unwrap_or_else(|| defaults.message.clone());
        ArtRequest::new(
            message,
            self.foreground.as_deref().unwrap_or(&defaults.foreground),
            self.background.as_deref().unwrap_or(&defaults.background),
            self.threshold.unwrap_or(defaults.threshold),
        )
    }
}

fn expand_line_breaks(message: &str) -> String {
    message.replace("\\n", "\n")
}

fn main() -> Result<()> {
    // Logs go to stderr; stdout carries only the art.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_micros()
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => Config::load(path)?,
        None => CONFIG.clone(),
    };
    if let Some(path) = &args.font {
        config.font.source = FontSource::File { path: path.clone() };
    }

    let size_px = config.font.size_px;
    match config.font.source.clone() {
        FontSource::Builtin => {
            info!("Using built-in dot font at {} px", size_px);
            run(&config, &args, move || Ok(BitmapFontDriver::new(size_px)))
        }
        FontSource::File { path } => run(&config, &args, move || TtfFontDriver::load(&path, size_px)),
    }
}

fn run<D, F>(config: &Config, args: &Args, loader: F) -> Result<()>
where
    D: FontDriver,
    F: FnOnce() -> Result<D>,
{
    let mut engine = ArtEngine::from_config(config);
    engine
        .initialize(loader)
        .context("Font failed to load; no conversion attempted")?;
    let layout = engine.layout();
    info!(
        "Font ready; {} px line bands, {}x width margin",
        layout.line_height, layout.margin_scale
    );

    let request = args.request(&config.defaults);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if !args.watch {
        let art = engine.convert(&request)?;
        if art.is_empty() {
            warn!("Message has no visible glyphs; nothing to draw");
        }
        out.write_all(art.as_str().as_bytes())
            .context("Failed to write art to stdout")?;
        return Ok(());
    }

    info!("Watching stdin for messages");
    let (tx, rx) = mpsc::channel();
    let reader = thread::spawn(move || -> Result<()> {
        for line in io::stdin().lock().lines() {
            let line = line.context("Failed to read message from stdin")?;
            let next = ArtRequest {
                message: expand_line_breaks(&line),
                ..request.clone()
            };
            if tx.send(next).is_err() {
                debug!("Converter stopped, no longer reading stdin");
                break;
            }
        }
        Ok(())
    });

    let mut session = ArtSession::new();
    let mut write_result = Ok(());
    session.drive(&engine, &rx, |art| {
        if write_result.is_ok() {
            write_result = writeln!(out, "{}", art).and_then(|_| out.flush());
        }
    })?;
    write_result.context("Failed to write art to stdout")?;

    match reader.join() {
        Ok(result) => result?,
        Err(_) => anyhow::bail!("stdin reader thread panicked"),
    }
    info!("stdin closed, exiting");
    Ok(())
}
