//! # shirube
//!
//! A Rust library that drives a linear, slide-based tutorial panel from a
//! JSON deck: one slide at a time, a per-slide continue gate, and fixed
//! Retry/Exit controls on the last slide.
//!
//! The host supplies the display through [`SlideView`] and reacts to slide
//! changes through [`SlideObserver`]s such as [`NarrationController`].
//!
//! ## Quick Start
//!
//! ```rust
//! use shirube::{AdvanceOutcome, TutorialController, ViewState};
//!
//! let deck = r#"
//! {
//!   "slides": [
//!     { "id": "grab", "header": "Grab", "body": "Pick up the cube.", "canContinue": false },
//!     { "id": "done", "header": "Done", "body": "Well done!" }
//!   ]
//! }
//! "#;
//!
//! let mut tutorial = TutorialController::from_json(deck, ViewState::new());
//! tutorial.start_tutorial();
//! assert_eq!(tutorial.view().header, "Grab");
//!
//! // Gated until game logic unlocks the slide
//! assert_eq!(tutorial.advance(), AdvanceOutcome::Gated);
//! tutorial.set_can_continue(true);
//! assert_eq!(tutorial.advance(), AdvanceOutcome::Advanced { index: 1 });
//!
//! // Last slide: Next is replaced by Retry and Exit
//! assert!(tutorial.view().retry_visible && tutorial.view().exit_visible);
//! ```
//!
//! ## Sharing the controller
//!
//! ```rust
//! use shirube::{ContinueGateSetter, TutorialController, ViewState};
//!
//! let deck = r#"{ "slides": [ { "id": "a", "canContinue": false }, { "id": "b" } ] }"#;
//! let tutorial = TutorialController::from_json(deck, ViewState::new()).into_shared();
//! tutorial.borrow_mut().start_tutorial();
//!
//! let gate = ContinueGateSetter::new(&tutorial);
//! gate.allow_continue();
//! assert!(tutorial.borrow_mut().can_continue());
//! ```

pub mod cli;
pub mod config;
pub mod controller;
pub mod gate;
pub mod host;
pub mod lint;
pub mod loader;
pub mod narration;
pub mod notify;
pub mod types;
pub mod view;

pub use config::{ConfigError, TutorialConfig};
pub use controller::{AdvanceOutcome, ExitOutcome, RetryOutcome, StartOutcome, TutorialController};
pub use gate::ContinueGateSetter;
pub use host::{AudioClip, AudioOutput, SessionReloader};
pub use loader::{load, LoadError};
pub use narration::{NarrationController, NarrationEntry};
pub use notify::{SlideObserver, SubscriptionId};
pub use types::{ButtonAction, SlideButtonSpec, SlideChangedEvent, SlideCollection, SlideSpec};
pub use view::{ButtonRole, NextControl, SlideView, TextSlot, ViewState};
