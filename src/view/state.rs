//! Retained view state
//!
//! A headless [`SlideView`] that keeps every value the controller writes and
//! records what changed since the last frame, so a renderer only shows the
//! differences.

use super::{ButtonRole, NextControl, SlideView, TextSlot};

/// Current contents of the tutorial panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub header: String,
    pub body: String,
    pub footer: String,
    pub next_label: String,
    pub next_visible: bool,
    pub retry_visible: bool,
    pub exit_visible: bool,
    /// Interactable state of the Next control
    pub next_interactable: bool,
    delta: RenderDelta,
}

impl ViewState {
    /// Create a new empty ViewState with every button hidden
    pub fn new() -> Self {
        Self {
            header: String::new(),
            body: String::new(),
            footer: String::new(),
            next_label: String::new(),
            next_visible: false,
            retry_visible: false,
            exit_visible: false,
            next_interactable: false,
            delta: RenderDelta::new(),
        }
    }

    /// Buttons currently shown, in panel order
    pub fn visible_buttons(&self) -> Vec<ButtonRole> {
        let mut buttons = Vec::new();
        if self.next_visible {
            buttons.push(ButtonRole::Next);
        }
        if self.retry_visible {
            buttons.push(ButtonRole::Retry);
        }
        if self.exit_visible {
            buttons.push(ButtonRole::Exit);
        }
        buttons
    }

    /// True when every text slot is empty and no button is shown
    pub fn is_blank(&self) -> bool {
        self.header.is_empty()
            && self.body.is_empty()
            && self.footer.is_empty()
            && self.visible_buttons().is_empty()
    }

    /// Changes accumulated since the last call
    pub fn take_delta(&mut self) -> RenderDelta {
        std::mem::take(&mut self.delta)
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl SlideView for ViewState {
    fn set_text(&mut self, slot: TextSlot, text: &str) {
        let target = match slot {
            TextSlot::Header => &mut self.header,
            TextSlot::Body => &mut self.body,
            TextSlot::Footer => &mut self.footer,
            TextSlot::NextLabel => &mut self.next_label,
        };
        if target.as_str() != text {
            *target = text.to_string();
            self.delta.text_changed.push(slot);
        }
    }

    fn set_button_visible(&mut self, role: ButtonRole, visible: bool) {
        let target = match role {
            ButtonRole::Next => &mut self.next_visible,
            ButtonRole::Retry => &mut self.retry_visible,
            ButtonRole::Exit => &mut self.exit_visible,
        };
        if *target != visible {
            *target = visible;
            self.delta.buttons_changed = true;
        }
    }

    fn next_control(&mut self) -> Option<&mut dyn NextControl> {
        Some(self)
    }
}

impl NextControl for ViewState {
    fn set_enabled(&mut self, enabled: bool) {
        self.set_interactable(enabled);
    }

    fn set_interactable(&mut self, interactable: bool) {
        if self.next_interactable != interactable {
            self.next_interactable = interactable;
            self.delta.buttons_changed = true;
        }
    }
}

/// What needs to be redrawn since the previous frame
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RenderDelta {
    /// Text slots whose content changed, in write order
    pub text_changed: Vec<TextSlot>,
    /// Whether any button visibility or interactable state changed
    pub buttons_changed: bool,
}

impl RenderDelta {
    /// Create a new empty RenderDelta
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if this delta has any changes
    pub fn is_empty(&self) -> bool {
        self.text_changed.is_empty() && !self.buttons_changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_view_state() {
        let view = ViewState::new();
        assert!(view.is_blank());
        assert!(!view.next_interactable);
        assert!(view.visible_buttons().is_empty());
    }

    #[test]
    fn test_text_change_is_recorded() {
        let mut view = ViewState::new();
        view.set_text(TextSlot::Header, "Welcome");

        let delta = view.take_delta();
        assert_eq!(delta.text_changed, vec![TextSlot::Header]);
        assert_eq!(view.header, "Welcome");
        assert!(view.take_delta().is_empty());
    }

    #[test]
    fn test_same_text_is_not_a_change() {
        let mut view = ViewState::new();
        view.set_text(TextSlot::Body, "Hello");
        view.take_delta();

        view.set_text(TextSlot::Body, "Hello");
        assert!(view.take_delta().is_empty());
    }

    #[test]
    fn test_button_visibility() {
        let mut view = ViewState::new();
        view.set_button_visible(ButtonRole::Retry, true);
        view.set_button_visible(ButtonRole::Exit, true);

        assert_eq!(view.visible_buttons(), vec![ButtonRole::Retry, ButtonRole::Exit]);
        assert!(view.take_delta().buttons_changed);
    }

    #[test]
    fn test_next_control_is_native() {
        let mut view = ViewState::new();
        if let Some(control) = view.next_control() {
            control.set_interactable(true);
        }
        assert!(view.next_interactable);
    }
}
