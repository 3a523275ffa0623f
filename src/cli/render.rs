//! Terminal rendering for the tutorial panel
//!
//! The panel is drawn from a [`ViewState`]; its render delta decides whether
//! the whole panel or only the button row needs printing.

use crate::host::{AudioClip, AudioOutput};
use crate::view::{RenderDelta, ViewState};

const RULE: &str = "────────────────────────────────────────";

/// Clear the terminal screen
pub fn clear_screen() {
    print!("\x1b[2J\x1b[H");
    if std::io::Write::flush(&mut std::io::stdout()).is_err() {
        for _ in 0..50 {
            println!();
        }
    }
}

/// Render what changed since the previous frame
pub fn render_delta(view: &ViewState, delta: &RenderDelta) {
    if !delta.text_changed.is_empty() {
        render_panel(view);
    } else if delta.buttons_changed {
        println!("{}", button_row(view));
        println!();
    }
}

/// Render the full panel
pub fn render_panel(view: &ViewState) {
    println!("{RULE}");
    if !view.header.is_empty() {
        println!("  {}", view.header);
        println!();
    }
    for line in view.body.lines() {
        println!("  {line}");
    }
    if !view.footer.is_empty() {
        println!();
        println!("  {}", view.footer);
    }
    println!("{RULE}");
    println!("{}", button_row(view));
    println!();
}

/// One-line summary of the visible buttons
pub fn button_row(view: &ViewState) -> String {
    let mut buttons = Vec::new();
    if view.next_visible {
        if view.next_interactable {
            buttons.push(format!("[n] {}", view.next_label));
        } else {
            buttons.push(format!("[n] {} (locked, 'c' to unlock)", view.next_label));
        }
    }
    if view.retry_visible {
        buttons.push("[r] Retry".to_string());
    }
    if view.exit_visible {
        buttons.push("[x] Exit".to_string());
    }

    if buttons.is_empty() {
        "  (no controls)".to_string()
    } else {
        format!("  {}", buttons.join("   "))
    }
}

/// Audio channel that announces playback on stdout
#[derive(Debug, Default)]
pub struct TerminalAudio {
    clip: Option<AudioClip>,
    playing: bool,
}

impl AudioOutput for TerminalAudio {
    fn stop(&mut self) {
        if self.playing
            && let Some(clip) = &self.clip
        {
            println!("[audio] stop {clip}");
        }
        self.playing = false;
    }

    fn set_clip(&mut self, clip: &AudioClip) {
        self.clip = Some(clip.clone());
    }

    fn play(&mut self) {
        if let Some(clip) = &self.clip {
            println!("[audio] play {clip}");
            self.playing = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::{ButtonRole, NextControl, SlideView, TextSlot};

    #[test]
    fn button_row_marks_locked_next() {
        let mut view = ViewState::new();
        view.set_text(TextSlot::NextLabel, "Next");
        view.set_button_visible(ButtonRole::Next, true);

        assert_eq!(button_row(&view), "  [n] Next (locked, 'c' to unlock)");

        view.set_interactable(true);
        assert_eq!(button_row(&view), "  [n] Next");
    }

    #[test]
    fn button_row_on_terminal_slide() {
        let mut view = ViewState::new();
        view.set_button_visible(ButtonRole::Retry, true);
        view.set_button_visible(ButtonRole::Exit, true);

        assert_eq!(button_row(&view), "  [r] Retry   [x] Exit");
    }

    #[test]
    fn button_row_without_controls() {
        assert_eq!(button_row(&ViewState::new()), "  (no controls)");
    }
}
