//! Slide definitions as loaded from the deck file

use serde::{Deserialize, Deserializer, Serialize};

/// What a declared slide button does
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(from = "String", into = "String")]
pub enum ButtonAction {
    /// Advance to the next slide
    #[default]
    Next,
    /// Restart the whole session
    Retry,
    /// Leave the tutorial
    Exit,
    /// Project-specific action the controller does not interpret
    Custom(String),
}

impl From<String> for ButtonAction {
    fn from(raw: String) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "next" => ButtonAction::Next,
            "retry" => ButtonAction::Retry,
            "exit" => ButtonAction::Exit,
            _ => ButtonAction::Custom(raw),
        }
    }
}

impl From<ButtonAction> for String {
    fn from(action: ButtonAction) -> Self {
        match action {
            ButtonAction::Next => "next".to_string(),
            ButtonAction::Retry => "retry".to_string(),
            ButtonAction::Exit => "exit".to_string(),
            ButtonAction::Custom(raw) => raw,
        }
    }
}

/// A button declared on a slide
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SlideButtonSpec {
    /// Text shown on the button
    #[serde(default, deserialize_with = "null_as_default")]
    pub label: String,
    /// Action bound to the button
    #[serde(default, deserialize_with = "null_as_default")]
    pub action: ButtonAction,
}

impl SlideButtonSpec {
    pub fn new(label: impl Into<String>, action: ButtonAction) -> Self {
        Self {
            label: label.into(),
            action,
        }
    }
}

/// One page of the tutorial
///
/// Everything except the continue gate is fixed once loaded. The gate is
/// only flipped through [`crate::TutorialController::set_can_continue`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlideSpec {
    #[serde(default, deserialize_with = "null_as_default")]
    id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    header: String,
    #[serde(default, deserialize_with = "null_as_default")]
    body: String,
    #[serde(default, deserialize_with = "null_as_default")]
    footer: String,
    #[serde(default, deserialize_with = "null_as_default")]
    buttons: Vec<SlideButtonSpec>,
    #[serde(default = "default_can_continue")]
    can_continue: bool,
}

fn default_can_continue() -> bool {
    true
}

impl SlideSpec {
    /// Create an ungated slide with empty text
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            header: String::new(),
            body: String::new(),
            footer: String::new(),
            buttons: Vec::new(),
            can_continue: true,
        }
    }

    pub fn with_text(
        mut self,
        header: impl Into<String>,
        body: impl Into<String>,
        footer: impl Into<String>,
    ) -> Self {
        self.header = header.into();
        self.body = body.into();
        self.footer = footer.into();
        self
    }

    pub fn with_button(mut self, button: SlideButtonSpec) -> Self {
        self.buttons.push(button);
        self
    }

    pub fn with_can_continue(mut self, can_continue: bool) -> Self {
        self.can_continue = can_continue;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn header(&self) -> &str {
        &self.header
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn footer(&self) -> &str {
        &self.footer
    }

    pub fn buttons(&self) -> &[SlideButtonSpec] {
        &self.buttons
    }

    pub fn can_continue(&self) -> bool {
        self.can_continue
    }

    /// Label for the Next control, taken from the first declared button
    ///
    /// Returns `None` when no button is declared or its label is blank.
    pub fn next_label(&self) -> Option<&str> {
        self.buttons
            .first()
            .map(|button| button.label.as_str())
            .filter(|label| !label.trim().is_empty())
    }

    pub(crate) fn set_can_continue(&mut self, can_continue: bool) {
        self.can_continue = can_continue;
    }
}

/// Ordered list of slides making up one tutorial
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SlideCollection {
    #[serde(default, deserialize_with = "null_as_default")]
    slides: Vec<SlideSpec>,
}

impl SlideCollection {
    pub fn new(slides: Vec<SlideSpec>) -> Self {
        Self { slides }
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&SlideSpec> {
        self.slides.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SlideSpec> {
        self.slides.iter()
    }

    /// Index of the terminal slide, `None` when empty
    pub fn last_index(&self) -> Option<usize> {
        self.slides.len().checked_sub(1)
    }

    /// Index of the first slide with the given id
    pub fn position(&self, id: &str) -> Option<usize> {
        self.slides.iter().position(|slide| slide.id == id)
    }

    pub(crate) fn get_mut(&mut self, index: usize) -> Option<&mut SlideSpec> {
        self.slides.get_mut(index)
    }
}

impl<'a> IntoIterator for &'a SlideCollection {
    type Item = &'a SlideSpec;
    type IntoIter = std::slice::Iter<'a, SlideSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.slides.iter()
    }
}

/// Treat an explicit JSON `null` like a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_parsing_is_case_insensitive() {
        assert_eq!(ButtonAction::from(" Next ".to_string()), ButtonAction::Next);
        assert_eq!(ButtonAction::from("RETRY".to_string()), ButtonAction::Retry);
        assert_eq!(ButtonAction::from("exit".to_string()), ButtonAction::Exit);
        assert_eq!(
            ButtonAction::from("openMenu".to_string()),
            ButtonAction::Custom("openMenu".to_string())
        );
    }

    #[test]
    fn next_label_skips_blank_labels() {
        let slide = SlideSpec::new("s1").with_button(SlideButtonSpec::new("   ", ButtonAction::Next));
        assert_eq!(slide.next_label(), None);

        let slide = SlideSpec::new("s1").with_button(SlideButtonSpec::new("Begin", ButtonAction::Next));
        assert_eq!(slide.next_label(), Some("Begin"));

        assert_eq!(SlideSpec::new("s1").next_label(), None);
    }

    #[test]
    fn last_index_and_position() {
        let collection = SlideCollection::new(vec![SlideSpec::new("a"), SlideSpec::new("b")]);
        assert_eq!(collection.last_index(), Some(1));
        assert_eq!(collection.position("b"), Some(1));
        assert_eq!(collection.position("missing"), None);
        assert_eq!(SlideCollection::default().last_index(), None);
    }
}
