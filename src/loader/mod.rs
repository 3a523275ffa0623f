//! JSON loader for slide decks
//!
//! This module turns raw deck text into a [`SlideCollection`]. Every failure
//! is recoverable: callers fall back to "no tutorial loaded".

use crate::types::SlideCollection;


/// Reasons a deck could not be turned into a usable collection
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// Input was empty or whitespace only
    #[error("slide text is empty")]
    Empty,
    /// Input did not match the deck schema
    #[error("failed to parse slide text: {0}")]
    Malformed(#[from] serde_json::Error),
    /// Input parsed but declared no slides
    #[error("slide collection contains no slides")]
    NoSlides,
}

impl LoadError {
    /// True for the conditions that leave nothing to show
    /// without the text being broken
    pub fn is_empty_content(&self) -> bool {
        matches!(self, LoadError::Empty | LoadError::NoSlides)
    }
}

/// Parse deck text into a slide collection
pub fn load(raw: &str) -> Result<SlideCollection, LoadError> {
    if raw.trim().is_empty() {
        return Err(LoadError::Empty);
    }

    let collection: SlideCollection = serde_json::from_str(raw)?;
    if collection.is_empty() {
        return Err(LoadError::NoSlides);
    }

    log::debug!("[Loader] Loaded {} slides", collection.len());
    Ok(collection)
}

/// Parse deck text, logging any problem and yielding an empty collection
pub fn load_or_empty(raw: &str) -> SlideCollection {
    match load(raw) {
        Ok(collection) => collection,
        Err(err) => {
            report(&err);
            SlideCollection::default()
        }
    }
}

/// Log a load failure at the level it deserves
pub(crate) fn report(err: &LoadError) {
    match err {
        LoadError::Malformed(_) => log::error!("[Loader] {err}"),
        LoadError::Empty | LoadError::NoSlides => log::warn!("[Loader] {err}"),
    }
}
