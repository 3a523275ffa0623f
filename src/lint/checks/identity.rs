//! Slide id checking implementation

use crate::lint::config::LintConfig;
use crate::lint::{LintIssue, LintLevel, LintResult};
use crate::types::SlideCollection;
use std::collections::HashMap;

/// Check that every slide has a unique, non-empty id
pub fn check(slides: &SlideCollection, result: &mut LintResult, _config: &LintConfig) {
    let mut seen: HashMap<&str, usize> = HashMap::new();

    for (index, slide) in slides.iter().enumerate() {
        let id = slide.id().trim();
        if id.is_empty() {
            result.add_issue(LintIssue::new(
                LintLevel::Error,
                "identity",
                index,
                "Slide has no id; narration and observers cannot refer to it",
            ));
            continue;
        }

        if let Some(first) = seen.get(id) {
            result.add_issue(LintIssue::new(
                LintLevel::Error,
                "identity",
                index,
                format!("Duplicate slide id '{}' (first used by slide {})", id, first + 1),
            ));
        } else {
            seen.insert(id, index);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SlideSpec;

    #[test]
    fn identity_check_empty_id() {
        let slides = SlideCollection::new(vec![SlideSpec::new("a"), SlideSpec::new("  ")]);
        let mut result = LintResult::new();

        check(&slides, &mut result, &LintConfig::default());

        assert_eq!(result.error_count, 1);
        assert_eq!(result.issues[0].slide, 1);
    }

    #[test]
    fn identity_check_duplicate_id() {
        let slides = SlideCollection::new(vec![
            SlideSpec::new("a"),
            SlideSpec::new("b"),
            SlideSpec::new("a"),
        ]);
        let mut result = LintResult::new();

        check(&slides, &mut result, &LintConfig::default());

        assert_eq!(result.error_count, 1);
        assert_eq!(result.issues[0].slide, 2);
        assert!(result.issues[0].message.contains("first used by slide 1"));
    }
}
