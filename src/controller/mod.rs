//! Tutorial state machine
//!
//! [`TutorialController`] owns the loaded deck and the index of the active
//! slide. Every operation degrades to a logged no-op instead of failing:
//! it drives a presentation layer and must never bring the host down.
//!
//! States:
//! - *Unloaded*: no deck, or a deck without slides
//! - *Active(i)*: slide `i` is shown
//! - *Terminal*: the last slide is shown; Next is replaced by Retry and Exit

use crate::host::SessionReloader;
use crate::loader::{self, LoadError};
use crate::notify::{SlideChangedNotifier, SlideObserver, SubscriptionId};
use crate::types::{SlideChangedEvent, SlideCollection, SlideSpec};
use crate::view::{self, ButtonRole, SlideView, TextSlot, ViewState};
use std::cell::RefCell;
use std::rc::Rc;


/// Label used for Next when the slide does not declare one
pub const DEFAULT_NEXT_LABEL: &str = "Next";

/// Result of [`TutorialController::start_tutorial`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartOutcome {
    /// The first slide is now active
    Started,
    /// Nothing to show; the controller stays unloaded
    NoSlides,
}

/// Result of [`TutorialController::advance`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvanceOutcome {
    /// Moved to the slide at `index`
    Advanced { index: usize },
    /// The active slide has not been unlocked yet
    Gated,
    /// Already on the last slide
    AtTerminal,
    /// No slides are loaded
    Unloaded,
}

/// Result of [`TutorialController::retry`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryOutcome {
    /// The host was asked to restart the session
    Requested,
    /// No reload facility is bound
    NoReloader,
}

/// Result of [`TutorialController::request_exit`]
///
/// The exit broadcast fires in both cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitOutcome {
    /// Exit was requested from the last slide
    FromTerminal,
    /// Exit was requested while a non-terminal slide was active
    OffTerminal,
}

/// Drives a [`SlideView`] through a linear slide deck
pub struct TutorialController<V: SlideView = ViewState> {
    source: Option<String>,
    collection: Option<SlideCollection>,
    current: usize,
    view: V,
    reloader: Option<Box<dyn SessionReloader>>,
    exit_listeners: Vec<Box<dyn FnMut()>>,
    notifier: SlideChangedNotifier,
    default_next_label: String,
}

impl<V: SlideView> TutorialController<V> {
    /// Create a controller with no deck bound
    pub fn new(view: V) -> Self {
        Self {
            source: None,
            collection: None,
            current: 0,
            view,
            reloader: None,
            exit_listeners: Vec::new(),
            notifier: SlideChangedNotifier::new(),
            default_next_label: DEFAULT_NEXT_LABEL.to_string(),
        }
    }

    /// Create a controller that parses `raw` the first time slides are needed
    pub fn from_json(raw: impl Into<String>, view: V) -> Self {
        Self::new(view).with_source(raw)
    }

    /// Create a controller over an already parsed deck
    pub fn with_collection(collection: SlideCollection, view: V) -> Self {
        let mut controller = Self::new(view);
        controller.collection = Some(collection);
        controller
    }

    /// Bind deck text to parse lazily
    pub fn with_source(mut self, raw: impl Into<String>) -> Self {
        self.source = Some(raw.into());
        self.collection = None;
        self
    }

    /// Bind the facility used by [`Self::retry`]
    pub fn with_reloader(mut self, reloader: impl SessionReloader + 'static) -> Self {
        self.reloader = Some(Box::new(reloader));
        self
    }

    /// Override the label shown on Next when a slide declares none
    pub fn with_default_next_label(mut self, label: impl Into<String>) -> Self {
        self.default_next_label = label.into();
        self
    }

    /// Wrap the controller for sharing with gate setters and observers
    pub fn into_shared(self) -> Rc<RefCell<Self>>
    where
        V: 'static,
    {
        Rc::new(RefCell::new(self))
    }

    /// Host start hook: load the bound deck and render whatever it yields
    ///
    /// Keeps the current index (clamped) so a host can re-activate the panel
    /// without losing progress.
    pub fn activate(&mut self) {
        if self.source.is_none() && self.collection.is_none() {
            log::warn!("[Tutorial] No slide text is bound to the controller");
        }
        self.ensure_loaded();
        self.apply_current_slide();
    }

    /// Replace the deck with freshly parsed text
    ///
    /// The index resets to the first slide and the view is redrawn: the new
    /// first slide on success, the unloaded panel otherwise.
    pub fn load_slides(&mut self, raw: impl Into<String>) -> Result<usize, LoadError> {
        self.source = Some(raw.into());
        let loaded = self.load_from_source();
        self.apply_current_slide();
        loaded
    }

    /// Start the tutorial from the first slide
    pub fn start_tutorial(&mut self) -> StartOutcome {
        self.ensure_loaded();

        if !self.has_slides() {
            log::warn!("[Tutorial] No slides available to start tutorial");
            return StartOutcome::NoSlides;
        }

        self.current = 0;
        self.apply_current_slide();
        StartOutcome::Started
    }

    /// Handler for the Next button
    pub fn advance(&mut self) -> AdvanceOutcome {
        self.ensure_loaded();

        let Some(slide) = self.current_slide() else {
            return AdvanceOutcome::Unloaded;
        };

        if !slide.can_continue() {
            log::info!(
                "[Tutorial] Next pressed but slide '{}' cannot continue yet",
                slide.id()
            );
            return AdvanceOutcome::Gated;
        }

        if self.is_on_terminal() {
            log::info!("[Tutorial] Next pressed on last slide, ignoring");
            return AdvanceOutcome::AtTerminal;
        }

        self.current += 1;
        self.apply_current_slide();
        AdvanceOutcome::Advanced {
            index: self.current,
        }
    }

    /// Handler for the Retry button: restart the whole session
    pub fn retry(&mut self) -> RetryOutcome {
        match self.reloader.as_mut() {
            Some(reloader) => {
                log::info!("[Tutorial] Retry requested, restarting session");
                reloader.restart_session();
                RetryOutcome::Requested
            }
            None => {
                log::warn!("[Tutorial] Retry pressed but no session reloader is bound");
                RetryOutcome::NoReloader
            }
        }
    }

    /// Handler for the Exit button
    ///
    /// Exit is expected only from the last slide. Off the last slide the
    /// inconsistency is reported, but the request is still broadcast.
    pub fn request_exit(&mut self) -> ExitOutcome {
        let outcome = if self.is_on_terminal() {
            ExitOutcome::FromTerminal
        } else {
            log::info!("[Tutorial] Exit pressed but current slide is not the last one");
            ExitOutcome::OffTerminal
        };

        for listener in &mut self.exit_listeners {
            listener();
        }
        outcome
    }

    /// Open or close the continue gate of the active slide
    ///
    /// Only the Next control's interactable state is refreshed; the slide is
    /// not re-rendered and no change event is emitted. Returns false when no
    /// slide is active.
    pub fn set_can_continue(&mut self, can_continue: bool) -> bool {
        let current = self.current;
        let Some(slide) = self
            .collection
            .as_mut()
            .and_then(|collection| collection.get_mut(current))
        else {
            log::debug!("[Tutorial] No active slide to set canContinue on");
            return false;
        };

        slide.set_can_continue(can_continue);
        log::debug!(
            "[Tutorial] canContinue={} for slide '{}'",
            can_continue,
            slide.id()
        );
        view::set_next_interactable(&mut self.view, can_continue);
        true
    }

    /// Subscribe a shared observer to slide changes
    pub fn subscribe<O>(&mut self, observer: &Rc<RefCell<O>>) -> SubscriptionId
    where
        O: SlideObserver + 'static,
    {
        self.notifier.subscribe(observer)
    }

    /// Subscribe a callback to slide changes
    pub fn subscribe_fn<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&SlideChangedEvent) + 'static,
    {
        self.notifier.subscribe_fn(callback)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.notifier.unsubscribe(id)
    }

    /// Number of live slide-change subscriptions
    pub fn subscriber_count(&self) -> usize {
        self.notifier.len()
    }

    /// Register a listener for exit requests
    pub fn on_exit_requested<F>(&mut self, listener: F)
    where
        F: FnMut() + 'static,
    {
        self.exit_listeners.push(Box::new(listener));
    }

    /// Whether the active slide lets the user move on
    ///
    /// Parses the bound deck first if nothing has been loaded yet. The other
    /// queries only read what is already loaded.
    pub fn can_continue(&mut self) -> bool {
        self.ensure_loaded();
        self.current_slide().is_some_and(SlideSpec::can_continue)
    }

    pub fn current_index(&self) -> Option<usize> {
        self.current_slide().map(|_| self.current)
    }

    pub fn current_slide(&self) -> Option<&SlideSpec> {
        self.collection
            .as_ref()
            .and_then(|collection| collection.get(self.current))
    }

    pub fn slide_count(&self) -> usize {
        self.collection.as_ref().map_or(0, SlideCollection::len)
    }

    /// Read-only view of the loaded deck
    pub fn slides(&self) -> Option<&SlideCollection> {
        self.collection.as_ref()
    }

    pub fn is_loaded(&self) -> bool {
        self.has_slides()
    }

    pub fn is_on_terminal(&self) -> bool {
        self.collection
            .as_ref()
            .and_then(SlideCollection::last_index)
            .is_some_and(|last| self.current >= last)
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    fn has_slides(&self) -> bool {
        self.collection
            .as_ref()
            .is_some_and(|collection| !collection.is_empty())
    }

    fn ensure_loaded(&mut self) {
        if self.collection.is_some() || self.source.is_none() {
            return;
        }
        // Failures are already reported by the loader
        let _ = self.load_from_source();
    }

    /// Parse the bound source, replacing the held deck
    ///
    /// Empty or broken text leaves no deck behind so the next call retries;
    /// a deck that parses without slides is kept as an empty collection.
    fn load_from_source(&mut self) -> Result<usize, LoadError> {
        let raw = self.source.as_deref().unwrap_or_default();
        self.current = 0;

        match loader::load(raw) {
            Ok(collection) => {
                let count = collection.len();
                self.collection = Some(collection);
                Ok(count)
            }
            Err(err) => {
                loader::report(&err);
                self.collection = match err {
                    LoadError::NoSlides => Some(SlideCollection::default()),
                    LoadError::Empty | LoadError::Malformed(_) => None,
                };
                Err(err)
            }
        }
    }

    /// Render the active slide and notify observers
    fn apply_current_slide(&mut self) {
        let Some(collection) = self.collection.as_ref().filter(|c| !c.is_empty()) else {
            render_unloaded(&mut self.view);
            return;
        };

        let last = collection.len() - 1;
        self.current = self.current.min(last);
        let Some(slide) = collection.get(self.current) else {
            return;
        };

        self.view.set_text(TextSlot::Header, slide.header());
        self.view.set_text(TextSlot::Body, slide.body());
        self.view.set_text(TextSlot::Footer, slide.footer());

        let label = slide.next_label().unwrap_or(self.default_next_label.as_str());
        self.view.set_text(TextSlot::NextLabel, label);
        view::set_next_interactable(&mut self.view, slide.can_continue());

        // Terminal chrome is fixed regardless of the declared buttons
        let terminal = self.current == last;
        set_button_visibility(&mut self.view, !terminal, terminal, terminal);

        let event = SlideChangedEvent::from(slide);
        log::debug!(
            "[Tutorial] Slide {}/{} active (id='{}')",
            self.current + 1,
            collection.len(),
            event.id
        );
        self.notifier.notify(&event);
    }
}

fn render_unloaded<V: SlideView>(view: &mut V) {
    view.set_text(TextSlot::Header, "");
    view.set_text(TextSlot::Body, "");
    view.set_text(TextSlot::Footer, "");
    set_button_visibility(view, false, false, false);
    view::set_next_interactable(view, false);
}

fn set_button_visibility<V: SlideView>(view: &mut V, next: bool, retry: bool, exit: bool) {
    view.set_button_visible(ButtonRole::Next, next);
    view.set_button_visible(ButtonRole::Retry, retry);
    view.set_button_visible(ButtonRole::Exit, exit);
}
