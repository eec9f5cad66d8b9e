// src/config.rs

//! Defines the configuration structures for `emoji-art`.
//!
//! The structs deserialize from a JSON file; every field has a default so a
//! partial file (or no file at all) is valid. Defaults reproduce the classic
//! "HBD" banner: a 12px dot font, a 1.1 line height and a 50% right margin.

use anyhow::{Context, Result};
use log::{info, warn};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable naming an optional JSON configuration file.
pub const CONFIG_ENV_VAR: &str = "EMOJI_ART_CONFIG";

/// Process-wide configuration, loaded on first access.
pub static CONFIG: Lazy<Config> = Lazy::new(Config::load_or_default);

// --- Top-Level Configuration Structure ---

/// Represents the complete configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Font used to rasterize the message.
    pub font: FontConfig,
    /// Surface layout settings.
    pub layout: LayoutConfig,
    /// Values used when the caller leaves an input unspecified.
    pub defaults: InputDefaults,
}

impl Config {
    /// Loads a configuration from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file '{}'", path.display()))?;
        let config: Config = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse config file '{}'", path.display()))?;
        info!("Configuration loaded from '{}'", path.display());
        Ok(config)
    }

    /// Loads the file named by `EMOJI_ART_CONFIG`, falling back to defaults.
    pub fn load_or_default() -> Self {
        let Some(path) = std::env::var_os(CONFIG_ENV_VAR) else {
            return Config::default();
        };
        match Config::load(Path::new(&path)) {
            Ok(config) => config,
            Err(e) => {
                warn!("{:#}; using default configuration", e);
                Config::default()
            }
        }
    }

    /// Height in pixels of one text line's band on the surface.
    pub fn line_height_px(&self) -> usize {
        self.font.line_height_px()
    }
}

// --- Font Configuration ---

/// Where glyph shapes come from.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FontSource {
    /// The built-in 5x7 dot-matrix font.
    #[default]
    Builtin,
    /// A TrueType/OpenType font file.
    File { path: PathBuf },
}

/// Font configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FontConfig {
    pub source: FontSource,
    /// Nominal font size in pixels.
    pub size_px: f32,
    /// Line height as a multiple of `size_px`, rounded up to whole pixels.
    pub line_height_scale: f32,
}

impl FontConfig {
    pub fn line_height_px(&self) -> usize {
        (self.size_px * self.line_height_scale).ceil().max(1.0) as usize
    }
}

impl Default for FontConfig {
    fn default() -> Self {
        FontConfig {
            source: FontSource::Builtin,
            size_px: 12.0,
            line_height_scale: 1.1,
        }
    }
}

// --- Layout Configuration ---

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LayoutConfig {
    /// Surface width as a multiple of the widest line. Values above 1.0
    /// guarantee trailing background on every row.
    pub margin_scale: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        LayoutConfig { margin_scale: 1.5 }
    }
}

// --- Input Defaults ---

/// Default conversion inputs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct InputDefaults {
    pub message: String,
    pub foreground: String,
    pub background: String,
    pub threshold: u8,
}

impl Default for InputDefaults {
    fn default() -> Self {
        InputDefaults {
            message: "HBD".to_string(),
            foreground: ":tada:".to_string(),
            background: ":ome:".to_string(),
            threshold: 64,
        }
    }
}
