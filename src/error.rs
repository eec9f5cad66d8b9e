// src/error.rs

//! Error types for the conversion engine.

use thiserror::Error;

/// Errors surfaced by the font gate and the conversion engine.
///
/// Degenerate input (empty or whitespace-only text) is not an error; it
/// converts to an empty art string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArtError {
    /// The font has not finished loading.
    #[error("font is not ready yet")]
    FontNotReady,

    /// The font failed to load; no conversion can run.
    #[error("font unavailable: {0}")]
    FontUnavailable(String),

    /// The font gate was already initialized.
    #[error("font gate already initialized")]
    AlreadyInitialized,
}
