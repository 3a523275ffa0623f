//! Terminal front end
//!
//! - `play`: walk through a deck interactively
//! - `check`: lint a deck file

pub mod check;
pub mod play;
pub mod render;
