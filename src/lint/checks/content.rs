//! Text content checking implementation

use crate::lint::config::LintConfig;
use crate::lint::{LintIssue, LintLevel, LintResult};
use crate::types::SlideCollection;

/// Check slide text (blank slides, overlong header or body)
pub fn check(slides: &SlideCollection, result: &mut LintResult, config: &LintConfig) {
    for (index, slide) in slides.iter().enumerate() {
        if slide.header().trim().is_empty() && slide.body().trim().is_empty() {
            result.add_issue(LintIssue::new(
                LintLevel::Warning,
                "content",
                index,
                format!("Slide '{}' has neither header nor body text", slide.id()),
            ));
        }

        let header_length = slide.header().chars().count();
        if header_length > config.content.max_header_length {
            result.add_issue(LintIssue::new(
                LintLevel::Warning,
                "content",
                index,
                format!(
                    "Header is {} characters long (limit: {})",
                    header_length, config.content.max_header_length
                ),
            ));
        }

        let body_length = slide.body().chars().count();
        if body_length > config.content.max_body_length {
            result.add_issue(LintIssue::new(
                LintLevel::Warning,
                "content",
                index,
                format!(
                    "Body is {} characters long (limit: {})",
                    body_length, config.content.max_body_length
                ),
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SlideSpec;

    #[test]
    fn content_check_blank_slide() {
        let slides = SlideCollection::new(vec![SlideSpec::new("a").with_text(" ", "", "footer only")]);
        let mut result = LintResult::new();

        check(&slides, &mut result, &LintConfig::default());

        assert_eq!(result.warning_count, 1);
        assert!(result.issues[0].message.contains("neither header nor body"));
    }

    #[test]
    fn content_check_long_body() {
        let mut config = LintConfig::default();
        config.content.max_body_length = 5;
        let slides = SlideCollection::new(vec![SlideSpec::new("a").with_text("Hi", "ありがとう!", "")]);
        let mut result = LintResult::new();

        check(&slides, &mut result, &config);

        assert_eq!(result.warning_count, 1);
        assert!(result.issues[0].message.contains("6 characters"));
    }
}
