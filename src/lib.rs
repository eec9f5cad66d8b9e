// src/lib.rs

//! Turns short text into token art: a block of repeated foreground and
//! background tokens (typically chat emoji codes) that reproduces the text's
//! glyph shapes when shown as a grid.
//!
//! The pipeline has three stages:
//! - [`rasterizer`]: text to an alpha mask via a [`FontDriver`]
//! - [`tokenizer`]: alpha mask to a token grid by strict thresholding
//! - [`compress`]: collapse blank row runs and trim the shared right margin
//!
//! [`ArtEngine`] ties them together behind a one-shot font readiness gate.

pub mod compress;
pub mod config;
pub mod engine;
pub mod error;
pub mod grid;
pub mod rasterizer;
pub mod session;
pub mod tokenizer;

pub use engine::{ArtEngine, ArtRequest, ArtString};
pub use error::ArtError;
pub use grid::PixelGrid;
pub use rasterizer::{BitmapFontDriver, FontDriver, FontGate, SurfaceLayout, TtfFontDriver};
pub use session::{ArtSession, Ticket};
pub use tokenizer::{TokenGrid, TokenPair};
