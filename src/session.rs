// src/session.rs

//! Latest-input-wins publication of conversion results.
//!
//! Every input change takes a `Ticket` from the session before converting.
//! A result is only applied if its ticket is still the newest one handed
//! out; results computed for superseded inputs are dropped.
//!
//! `drive` runs the loop for a stream of inputs arriving on a channel: new
//! inputs that show up while a conversion is running supersede it, and only
//! the art for the newest input is shown.

use crate::engine::{ArtEngine, ArtRequest, ArtString};
use crate::error::ArtError;
use crate::rasterizer::FontDriver;
use log::*;
use std::sync::mpsc::Receiver;

/// Identifies the inputs a conversion was started for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket {
    generation: u64,
}

impl Ticket {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Holds the art currently shown to the user.
#[derive(Debug, Default)]
pub struct ArtSession {
    issued: u64,
    applied: Option<u64>,
    latest: ArtString,
}

impl ArtSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register new inputs. Any ticket issued earlier becomes stale.
    pub fn begin(&mut self) -> Ticket {
        self.issued += 1;
        Ticket {
            generation: self.issued,
        }
    }

    /// True if `ticket` belongs to the newest inputs.
    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.generation == self.issued
    }

    /// Apply `art` if `ticket` is still current.
    ///
    /// # Returns
    /// `true` if applied, `false` if the result was stale and dropped.
    pub fn publish(&mut self, ticket: Ticket, art: ArtString) -> bool {
        if !self.is_current(ticket) {
            debug!(
                "Session: dropping stale result for generation {} (latest {})",
                ticket.generation, self.issued
            );
            return false;
        }
        debug!("Session: applied generation {}", ticket.generation);
        self.applied = Some(ticket.generation);
        self.latest = art;
        true
    }

    /// Convert inputs from `inputs` until the channel closes, calling `show`
    /// with each result that is still current when it finishes.
    ///
    /// Inputs queued while a conversion runs are only ticketed; the newest
    /// of them is converted next and the others never are.
    ///
    /// # Errors
    /// Stops at the first conversion error.
    pub fn drive<D, F>(
        &mut self,
        engine: &ArtEngine<D>,
        inputs: &Receiver<ArtRequest>,
        mut show: F,
    ) -> Result<(), ArtError>
    where
        D: FontDriver,
        F: FnMut(&ArtString),
    {
        let mut pending: Option<(Ticket, ArtRequest)> = None;
        loop {
            let (ticket, request) = match pending.take() {
                Some(next) => next,
                None => match inputs.recv() {
                    Ok(request) => (self.begin(), request),
                    Err(_) => break,
                },
            };
            let art = engine.convert(&request)?;

            for newer in inputs.try_iter() {
                pending = Some((self.begin(), newer));
            }
            if self.publish(ticket, art) {
                show(&self.latest);
            }
        }
        debug!("Session: input channel closed");
        Ok(())
    }

    /// The most recently applied art; empty before the first result.
    pub fn latest(&self) -> &ArtString {
        &self.latest
    }

    /// Generation of the most recently applied art.
    pub fn applied_generation(&self) -> Option<u64> {
        self.applied
    }
}
