//! One-shot font readiness gate.
//!
//! ```text
//! Uninitialized ──initialize(Ok)──▶ Ready(driver)
//!       │
//!       └────────initialize(Err)──▶ Failed(reason)
//! ```
//!
//! Both terminal states are final. Conversions may only borrow the driver
//! while the gate is `Ready`.

use super::font_driver::FontDriver;
use crate::error::ArtError;
use log::*;

#[derive(Debug)]
pub enum FontGate<D> {
    Uninitialized,
    Ready(D),
    Failed(String),
}

impl<D: FontDriver> FontGate<D> {
    pub fn new() -> Self {
        FontGate::Uninitialized
    }

    /// A gate that is already `Ready` with `driver`.
    pub fn ready(driver: D) -> Self {
        FontGate::Ready(driver)
    }

    /// Run `loader` once and move to `Ready` or `Failed`.
    ///
    /// # Returns
    /// The ready driver; `FontUnavailable` if the loader failed;
    /// `AlreadyInitialized` if the gate has left `Uninitialized`, in which
    /// case `loader` is not called.
    pub fn initialize<F>(&mut self, loader: F) -> Result<&D, ArtError>
    where
        F: FnOnce() -> anyhow::Result<D>,
    {
        if !matches!(self, FontGate::Uninitialized) {
            warn!("FontGate: initialize called twice");
            return Err(ArtError::AlreadyInitialized);
        }
        match loader() {
            Ok(driver) => {
                info!("FontGate: font ready ({} px)", driver.pixel_size());
                *self = FontGate::Ready(driver);
            }
            Err(e) => {
                let reason = format!("{:#}", e);
                error!("FontGate: font failed to load: {}", reason);
                *self = FontGate::Failed(reason);
            }
        }
        self.driver()
    }

    /// Borrow the driver if the gate is `Ready`.
    pub fn driver(&self) -> Result<&D, ArtError> {
        match self {
            FontGate::Ready(driver) => Ok(driver),
            FontGate::Uninitialized => Err(ArtError::FontNotReady),
            FontGate::Failed(reason) => Err(ArtError::FontUnavailable(reason.clone())),
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, FontGate::Ready(_))
    }
}
