//! Placeholder substitution for `{name}`-style template strings.
//!
//! Two phases:
//! 1. `apply_context` replaces the first `{key}` for every context key.
//! 2. `fill_remaining` replaces every token still present with a random
//!    enrichment word, or with its inner name when there are no words.
//!
//! Context values are inserted verbatim. Values containing braces are not
//! supported input and are not special-cased.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::templates::models::TemplateContext;
use crate::templates::random::{pick, RandomSource};

/// `{`, one or more non-`}` characters, then `}`.
static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\{([^}]+)\}").unwrap());

/// True when `text` still contains at least one `{name}` token.
pub fn has_placeholders(text: &str) -> bool {
    PLACEHOLDER.is_match(text)
}

/// Replaces the first occurrence of `{key}` with its value, for every key.
pub fn apply_context(template: &str, context: &TemplateContext) -> String {
    let mut result = template.to_string();
    for (key, value) in context.iter() {
        let token = format!("{{{key}}}");
        result = result.replacen(&token, value, 1);
    }
    result
}

/// Replaces every remaining token with a uniformly chosen word from `words`.
/// With no words, the token degrades to its inner name without braces.
pub fn fill_remaining(text: &str, words: &[String], rng: &dyn RandomSource) -> String {
    PLACEHOLDER
        .replace_all(text, |caps: &Captures<'_>| match pick(rng, words) {
            Some(word) => word.clone(),
            None => caps[1].replace(['{', '}'], ""),
        })
        .into_owned()
}
