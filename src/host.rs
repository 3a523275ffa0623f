//! Host collaborators outside the presentation layer
//!
//! These traits define the contract with the host application without
//! specifying how sessions are reloaded or how audio is played.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Facility that restarts the whole running session
pub trait SessionReloader {
    /// Reload the current session from scratch
    fn restart_session(&mut self);
}

impl<F: FnMut()> SessionReloader for F {
    fn restart_session(&mut self) {
        self()
    }
}

/// Handle to an audio asset, resolved by the host
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AudioClip(String);

impl AudioClip {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for AudioClip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AudioClip {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// A single audio channel
pub trait AudioOutput {
    /// Stop whatever is playing
    fn stop(&mut self);

    /// Assign the clip the next `play` will start
    fn set_clip(&mut self, clip: &AudioClip);

    /// Start the assigned clip from the beginning
    fn play(&mut self);
}
