//! Individual lint checks

pub mod buttons;
pub mod content;
pub mod identity;
