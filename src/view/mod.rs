//! Presentation ports driven by the tutorial controller
//!
//! The controller never knows how text or buttons are drawn. It writes into a
//! [`SlideView`], which the host implements on top of its own UI toolkit.

pub mod state;

pub use state::{RenderDelta, ViewState};

/// Text slots filled from the active slide
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextSlot {
    Header,
    Body,
    Footer,
    /// Label on the Next control
    NextLabel,
}

/// Button roots whose visibility the controller toggles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonRole {
    Next,
    Retry,
    Exit,
}

/// Whatever control stands for "Next" in the host UI
pub trait NextControl {
    /// Generic enable/disable toggle every control supports
    fn set_enabled(&mut self, enabled: bool);

    /// Native interactable toggle
    ///
    /// Controls with a real interactable property override this so their
    /// disabled styling applies. The default falls back to [`Self::set_enabled`].
    fn set_interactable(&mut self, interactable: bool) {
        self.set_enabled(interactable);
    }
}

/// Display surface for one tutorial panel
pub trait SlideView {
    /// Write a string into one of the text slots
    fn set_text(&mut self, slot: TextSlot, text: &str);

    /// Show or hide a button root
    fn set_button_visible(&mut self, role: ButtonRole, visible: bool);

    /// The Next control, if the host bound one
    fn next_control(&mut self) -> Option<&mut dyn NextControl> {
        None
    }
}

/// Apply the continue gate to the Next control, if any
pub(crate) fn set_next_interactable<V: SlideView + ?Sized>(view: &mut V, interactable: bool) {
    if let Some(control) = view.next_control() {
        control.set_interactable(interactable);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct ToggleOnly {
        enabled: bool,
    }

    impl NextControl for ToggleOnly {
        fn set_enabled(&mut self, enabled: bool) {
            self.enabled = enabled;
        }
    }

    #[derive(Default)]
    struct NativeButton {
        enabled: bool,
        interactable: bool,
    }

    impl NextControl for NativeButton {
        fn set_enabled(&mut self, enabled: bool) {
            self.enabled = enabled;
        }

        fn set_interactable(&mut self, interactable: bool) {
            self.interactable = interactable;
        }
    }

    #[test]
    fn interactable_falls_back_to_enabled() {
        let mut control = ToggleOnly::default();
        control.set_interactable(true);
        assert!(control.enabled);
    }

    #[test]
    fn native_interactable_leaves_enabled_alone() {
        let mut control = NativeButton {
            enabled: true,
            interactable: true,
        };
        control.set_interactable(false);
        assert!(!control.interactable);
        assert!(control.enabled);
    }
}
