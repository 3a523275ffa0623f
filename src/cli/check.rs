//! Deck checking command

use crate::lint::{config::LintConfig, lint_with_config, LintResult};
use crate::loader;
use anyhow::Context;

/// Load and lint a deck, printing every issue
///
/// Returns whether the deck is free of lint errors.
pub fn run_check(slides_json: &str, config: &LintConfig) -> anyhow::Result<bool> {
    let slides = loader::load(slides_json).context("slide file could not be loaded")?;
    let result = lint_with_config(&slides, config);

    print_result(&result);
    println!(
        "{} slides: {} error(s), {} warning(s), {} info",
        slides.len(),
        result.error_count,
        result.warning_count,
        result.info_count
    );

    Ok(!result.has_errors())
}

fn print_result(result: &LintResult) {
    for issue in &result.issues {
        println!("{issue}");
    }
    if !result.is_clean() {
        println!();
    }
}
