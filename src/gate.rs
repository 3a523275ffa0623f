//! Continue gate setter
//!
//! Game logic calls [`ContinueGateSetter::allow_continue`] once the player has
//! done what the active slide asks for.

use crate::controller::TutorialController;
use crate::view::{SlideView, ViewState};
use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// Unlocks the active slide of a bound tutorial controller
pub struct ContinueGateSetter<V: SlideView = ViewState> {
    tutorial: Option<Weak<RefCell<TutorialController<V>>>>,
}

impl<V: SlideView> ContinueGateSetter<V> {
    /// Create a setter bound to a controller
    pub fn new(tutorial: &Rc<RefCell<TutorialController<V>>>) -> Self {
        Self {
            tutorial: Some(Rc::downgrade(tutorial)),
        }
    }

    /// Create a setter with nothing bound yet
    pub fn unbound() -> Self {
        Self { tutorial: None }
    }

    pub fn bind(&mut self, tutorial: &Rc<RefCell<TutorialController<V>>>) {
        self.tutorial = Some(Rc::downgrade(tutorial));
    }

    /// Let the player continue past the active slide
    ///
    /// Returns false when no live controller is bound or it is busy.
    pub fn allow_continue(&self) -> bool {
        let Some(tutorial) = self.tutorial.as_ref().and_then(Weak::upgrade) else {
            log::warn!("[ContinueGate] Tutorial controller reference is not assigned");
            return false;
        };

        let Ok(mut tutorial) = tutorial.try_borrow_mut() else {
            log::warn!("[ContinueGate] Tutorial controller is busy, ignoring allow_continue");
            return false;
        };

        log::debug!("[ContinueGate] Enabling canContinue for current slide");
        tutorial.set_can_continue(true);
        true
    }
}

impl<V: SlideView> Default for ContinueGateSetter<V> {
    fn default() -> Self {
        Self::unbound()
    }
}
