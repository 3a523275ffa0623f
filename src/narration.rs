//! Per-slide narration
//!
//! Plays an audio clip whenever a slide with a registered narration becomes
//! active. Slides without one leave the audio channel untouched.

use crate::config::NarrationConfig;
use crate::controller::TutorialController;
use crate::host::{AudioClip, AudioOutput};
use crate::notify::{SlideObserver, SubscriptionId};
use crate::types::SlideChangedEvent;
use crate::view::SlideView;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::rc::Rc;

/// Association between a slide id and the clip narrating it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NarrationEntry {
    pub slide_id: String,
    pub clip: AudioClip,
}

impl NarrationEntry {
    pub fn new(slide_id: impl Into<String>, clip: impl Into<AudioClip>) -> Self {
        Self {
            slide_id: slide_id.into(),
            clip: clip.into(),
        }
    }

    fn is_usable(&self) -> bool {
        !self.slide_id.is_empty() && !self.clip.is_empty()
    }
}

/// Slide observer that drives a single audio channel
pub struct NarrationController<A: AudioOutput> {
    entries: Vec<NarrationEntry>,
    audio: Option<A>,
    subscription: Option<SubscriptionId>,
}

impl<A: AudioOutput + 'static> NarrationController<A> {
    pub fn new(entries: Vec<NarrationEntry>, audio: Option<A>) -> Self {
        Self {
            entries,
            audio,
            subscription: None,
        }
    }

    pub fn from_config(config: &NarrationConfig, audio: Option<A>) -> Self {
        Self::new(config.entries.clone(), audio)
    }

    /// Start listening to a tutorial controller
    ///
    /// Enabling twice keeps a single subscription.
    pub fn enable<V: SlideView>(narration: &Rc<RefCell<Self>>, tutorial: &mut TutorialController<V>) {
        if narration.borrow().subscription.is_some() {
            return;
        }
        let id = tutorial.subscribe(narration);
        narration.borrow_mut().subscription = Some(id);
    }

    /// Stop listening to a tutorial controller
    pub fn disable<V: SlideView>(narration: &Rc<RefCell<Self>>, tutorial: &mut TutorialController<V>) {
        if let Some(id) = narration.borrow_mut().subscription.take() {
            tutorial.unsubscribe(id);
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.subscription.is_some()
    }

    pub fn audio(&self) -> Option<&A> {
        self.audio.as_ref()
    }

    /// Clip registered for a slide, first registration wins
    pub fn clip_for(&self, slide_id: &str) -> Option<&AudioClip> {
        self.entries
            .iter()
            .find(|entry| entry.is_usable() && entry.slide_id == slide_id)
            .map(|entry| &entry.clip)
    }
}

impl<A: AudioOutput + 'static> SlideObserver for NarrationController<A> {
    fn on_slide_changed(&mut self, event: &SlideChangedEvent) {
        let Some(clip) = self.clip_for(&event.id).cloned() else {
            return;
        };
        let Some(audio) = self.audio.as_mut() else {
            return;
        };

        log::debug!("[Narration] Playing '{}' for slide '{}'", clip, event.id);
        audio.stop();
        audio.set_clip(&clip);
        audio.play();
    }
}
