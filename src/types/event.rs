//! Notifications emitted by the tutorial controller

use crate::types::slide::SlideSpec;
use serde::{Deserialize, Serialize};

/// Snapshot of the slide that just became active
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlideChangedEvent {
    pub id: String,
    pub header: String,
    pub body: String,
    pub footer: String,
}

impl From<&SlideSpec> for SlideChangedEvent {
    fn from(slide: &SlideSpec) -> Self {
        Self {
            id: slide.id().to_string(),
            header: slide.header().to_string(),
            body: slide.body().to_string(),
            footer: slide.footer().to_string(),
        }
    }
}
