//! Button declaration checking implementation
//!
//! The controller only reads the first button's label, and the last slide
//! always shows Retry and Exit. Declarations that contradict this are
//! reported so authors are not surprised at runtime.

use crate::lint::config::LintConfig;
use crate::lint::{LintIssue, LintLevel, LintResult};
use crate::types::{ButtonAction, SlideCollection};

/// Check declared buttons against the controller's fixed button policy
pub fn check(slides: &SlideCollection, result: &mut LintResult, config: &LintConfig) {
    let Some(last) = slides.last_index() else {
        return;
    };

    for (index, slide) in slides.iter().enumerate() {
        if config.buttons.report_custom_actions {
            for button in slide.buttons() {
                if let ButtonAction::Custom(action) = &button.action {
                    result.add_issue(LintIssue::new(
                        LintLevel::Info,
                        "buttons",
                        index,
                        format!("Custom action '{}' is not handled by the controller", action),
                    ));
                }
            }
        }

        if index == last {
            if !slide.buttons().is_empty() {
                result.add_issue(LintIssue::new(
                    LintLevel::Info,
                    "buttons",
                    index,
                    "Buttons on the last slide are replaced by Retry and Exit",
                ));
            }
            if !slide.can_continue() {
                result.add_issue(LintIssue::new(
                    LintLevel::Info,
                    "buttons",
                    index,
                    "canContinue has no effect on the last slide",
                ));
            }
            continue;
        }

        for button in slide.buttons() {
            if matches!(button.action, ButtonAction::Retry | ButtonAction::Exit) {
                result.add_issue(LintIssue::new(
                    LintLevel::Warning,
                    "buttons",
                    index,
                    format!(
                        "Button '{}' is never shown: Retry and Exit only appear on the last slide",
                        button.label
                    ),
                ));
            }
        }
    }
}
