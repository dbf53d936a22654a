// Scoring engine: resume ATS scoring, interview session scoring, and the response-content
// analysis both lean on. Everything except `handlers` is pure and synchronous.

pub mod content;
pub mod feedback;
pub mod handlers;
pub mod interview;
pub mod policy;
pub mod resume;

use regex::Regex;

/// A built-in pattern. One that fails to compile is logged once and then never matches, so a bad
/// literal disables one signal instead of taking the scorer down.
pub(crate) struct Pattern(Option<Regex>);

impl Pattern {
    pub(crate) fn new(pattern: &str) -> Self {
        match Regex::new(pattern) {
            Ok(re) => Self(Some(re)),
            Err(err) => {
                tracing::error!("built-in pattern {pattern} failed to compile: {err}");
                Self(None)
            }
        }
    }

    pub(crate) fn is_compiled(&self) -> bool {
        self.0.is_some()
    }

    pub(crate) fn is_match(&self, haystack: &str) -> bool {
        self.0.as_ref().is_some_and(|re| re.is_match(haystack))
    }

    pub(crate) fn count(&self, haystack: &str) -> usize {
        self.0
            .as_ref()
            .map_or(0, |re| re.find_iter(haystack).count())
    }
}
