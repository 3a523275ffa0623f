//! Core types for the shirube library
//!
//! - Slides: the deck as loaded from JSON
//! - Events: snapshots handed to slide observers

pub mod event;
pub mod slide;

pub use event::SlideChangedEvent;
pub use slide::{ButtonAction, SlideButtonSpec, SlideCollection, SlideSpec};
