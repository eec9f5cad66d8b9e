// src/engine.rs

//! The text-to-token-art conversion pipeline.
//!
//! ```text
//! ArtRequest ─rasterize─▶ PixelGrid ─tokenize─▶ token grid ─compress─▶ ArtString
//! ```
//!
//! `ArtEngine` owns the font gate and the surface layout; each `convert`
//! call is a pure function of its request and shares nothing with other
//! conversions.

use crate::compress::compress;
use crate::config::{Config, InputDefaults};
use crate::error::ArtError;
use crate::rasterizer::{rasterize, FontDriver, FontGate, SurfaceLayout};
use crate::tokenizer::{TokenGrid, TokenPair};
use log::*;
use std::fmt;

/// Inputs of one conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtRequest {
    /// Multi-line message to draw.
    pub message: String,
    pub tokens: TokenPair,
    /// Alpha values strictly above this are foreground.
    pub threshold: u8,
}

impl ArtRequest {
    pub fn new(
        message: impl Into<String>,
        foreground: impl Into<String>,
        background: impl Into<String>,
        threshold: u8,
    ) -> Self {
        Self {
            message: message.into(),
            tokens: TokenPair::new(foreground, background),
            threshold,
        }
    }
}

impl Default for ArtRequest {
    fn default() -> Self {
        Self::from(&InputDefaults::default())
    }
}

impl From<&InputDefaults> for ArtRequest {
    fn from(defaults: &InputDefaults) -> Self {
        Self::new(
            defaults.message.as_str(),
            defaults.foreground.as_str(),
            defaults.background.as_str(),
            defaults.threshold,
        )
    }
}

/// The compressed art delivered to the presentation layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArtString(String);

impl ArtString {
    pub fn empty() -> Self {
        Self(String::new())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for ArtString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ArtString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Conversion engine bound to one font.
#[derive(Debug)]
pub struct ArtEngine<D> {
    gate: FontGate<D>,
    layout: SurfaceLayout,
}

impl<D: FontDriver> ArtEngine<D> {
    /// Create an engine whose font is not loaded yet.
    pub fn new(layout: SurfaceLayout) -> Self {
        Self {
            gate: FontGate::new(),
            layout,
        }
    }

    /// Create an engine around an already loaded driver.
    pub fn with_driver(driver: D, layout: SurfaceLayout) -> Self {
        Self {
            gate: FontGate::ready(driver),
            layout,
        }
    }

    /// Create a not-yet-ready engine using the layout from `config`.
    pub fn from_config(config: &Config) -> Self {
        Self::new(SurfaceLayout::from_config(config))
    }

    /// Load the font through the engine's one-shot gate.
    pub fn initialize<F>(&mut self, loader: F) -> Result<(), ArtError>
    where
        F: FnOnce() -> anyhow::Result<D>,
    {
        self.gate.initialize(loader).map(|_| ())
    }

    pub fn is_ready(&self) -> bool {
        self.gate.is_ready()
    }

    pub fn layout(&self) -> &SurfaceLayout {
        &self.layout
    }

    /// Thresholded cells for `request`, or `None` for degenerate input.
    ///
    /// # Errors
    /// `FontNotReady` / `FontUnavailable` unless the font gate is ready.
    pub fn cells(&self, request: &ArtRequest) -> Result<Option<TokenGrid>, ArtError> {
        let driver = self.gate.driver()?;

        if request.message.trim().is_empty() {
            debug!("Engine: message is empty or whitespace");
            return Ok(None);
        }
        let Some(grid) = rasterize(driver, &request.message, &self.layout) else {
            return Ok(None);
        };
        if grid.is_blank() {
            debug!("Engine: no pixel has coverage, art will be all background");
        }
        debug!(
            "Engine: thresholding {}x{} grid at {}",
            grid.width(),
            grid.height(),
            request.threshold
        );
        Ok(Some(TokenGrid::from_pixels(&grid, request.threshold)))
    }

    /// Uncompressed token grid text for `request`, or `None` for degenerate
    /// input.
    ///
    /// # Errors
    /// `FontNotReady` / `FontUnavailable` unless the font gate is ready.
    pub fn token_grid(&self, request: &ArtRequest) -> Result<Option<String>, ArtError> {
        Ok(self
            .cells(request)?
            .map(|cells| cells.render(&request.tokens)))
    }

    /// Convert `request` into compressed token art.
    ///
    /// Degenerate input (empty or whitespace-only text, zero measured
    /// width) converts to an empty `ArtString`.
    ///
    /// # Errors
    /// `FontNotReady` / `FontUnavailable` unless the font gate is ready.
    pub fn convert(&self, request: &ArtRequest) -> Result<ArtString, ArtError> {
        let Some(cells) = self.cells(request)? else {
            return Ok(ArtString::empty());
        };
        let compressed = compress(&cells);
        debug!(
            "Engine: {} rows compressed to {}",
            cells.height(),
            compressed.height()
        );
        Ok(ArtString(compressed.render(&request.tokens)))
    }
}
