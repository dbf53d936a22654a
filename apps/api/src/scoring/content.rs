//! Response content analysis: turns free-text interview answers into a 0 – 10 content profile
//! and counts grammar issues.
//!
//! Every metric starts at the neutral 5.0 for each answer, is nudged by cheap lexical signals,
//! clamped, then averaged across answers. Blank answers are ignored.

use std::sync::LazyLock;


use crate::models::interview::ResponseContentProfile;
use crate::models::role::{Role, RoleProfile};
use crate::scoring::Pattern;

static QUANTIFIED_RE: LazyLock<Pattern> = LazyLock::new(|| {
    Pattern::new(r"(?i)(\d+(?:\.\d+)?\s?%|\$\s?\d|\b\d+\+?\s+years?\b|\b\d+\s?(?:x|times)\b)")
});
static ACHIEVEMENT_RE: LazyLock<Pattern> = LazyLock::new(|| {
    Pattern::new(
        r"(?i)\bi (?:achieved|led|built|delivered|managed|improved|created|developed|designed|implemented|launched|increased|reduced|drove)\b",
    )
});
static HEDGE_RE: LazyLock<Pattern> = LazyLock::new(|| {
    Pattern::new(r"(?i)\b(?:maybe|i think|i guess|not sure|kind of|sort of|probably|i hope)\b")
});
static FILLER_RE: LazyLock<Pattern> = LazyLock::new(|| {
    Pattern::new(r"(?i)\b(?:um+|uh+|erm|er|hmm+|you know|basically|literally|i mean)\b")
});
static AGREEMENT_RE: LazyLock<Pattern> = LazyLock::new(|| {
    Pattern::new(
        r"(?i)\b(?:(?:he|she|it) (?:are|don't)|(?:you|we|they) (?:is|was|doesn't)|i (?:is|are|has|doesn't))\b",
    )
});

const EXAMPLE_MARKERS: &[&str] = &[
    "for example",
    "for instance",
    "such as",
    "specifically",
    "in my previous role",
    "the situation",
    "the result",
];

/// Builds the aggregate content profile. `None` when no non-blank answers were supplied.
pub fn analyze_responses(responses: &[String], role: &Role) -> Option<ResponseContentProfile> {
    let answers: Vec<&str> = responses
        .iter()
        .map(|r| r.trim())
        .filter(|r| !r.is_empty())
        .collect();
    if answers.is_empty() {
        return None;
    }

    let profile = RoleProfile::for_role(role);
    let mut sum = ResponseContentProfile {
        quality_score: 0.0,
        communication_score: 0.0,
        skills_relevance: 0.0,
        clarity: 0.0,
        confidence: 0.0,
    };

    for answer in &answers {
        let p = score_answer(answer, profile);
        sum.quality_score += p.quality_score;
        sum.communication_score += p.communication_score;
        sum.skills_relevance += p.skills_relevance;
        sum.clarity += p.clarity;
        sum.confidence += p.confidence;
    }

    let n = answers.len() as f64;
    Some(
        ResponseContentProfile {
            quality_score: sum.quality_score / n,
            communication_score: sum.communication_score / n,
            skills_relevance: sum.skills_relevance / n,
            clarity: sum.clarity / n,
            confidence: sum.confidence / n,
        }
        .clamped(),
    )
}

fn score_answer(answer: &str, profile: Option<&RoleProfile>) -> ResponseContentProfile {
    let lower = answer.to_lowercase();
    let words = answer.split_whitespace().count();
    let sentences = sentence_segments(answer).len();
    let mut p = ResponseContentProfile::neutral();

    p.quality_score += match words {
        0..=9 => -2.0,
        10..=24 => -1.0,
        25..=49 => 0.5,
        50..=200 => 1.5,
        201..=300 => 0.5,
        _ => -1.0,
    };

    if QUANTIFIED_RE.is_match(answer) {
        p.quality_score += 1.5;
        p.skills_relevance += 1.0;
    }
    if EXAMPLE_MARKERS.iter().any(|m| lower.contains(m)) {
        p.quality_score += 1.0;
        p.skills_relevance += 0.5;
    }

    match sentences {
        0 | 1 => {
            p.communication_score -= 1.0;
            p.clarity -= 0.5;
        }
        2 => {
            p.communication_score += 0.5;
            p.clarity += 0.5;
        }
        _ => {
            p.communication_score += 1.5;
            p.clarity += 1.5;
        }
    }
    // Run-on answers read as unclear even when they are long enough.
    if sentences > 0 && words / sentences > 35 {
        p.clarity -= 1.0;
    }

    let achievements = ACHIEVEMENT_RE.count(answer).min(3);
    p.confidence += achievements as f64;
    let hedges = HEDGE_RE.count(answer);
    p.confidence -= (hedges as f64 * 0.5).min(2.0);

    if let Some(profile) = profile {
        let hits = profile.all_keywords().filter(|kw| lower.contains(kw)).count();
        p.skills_relevance += (hits as f64 * 0.75).min(3.0);
    }

    p.clamped()
}

/// Terminated or trailing sentence-like segments that contain at least one word.
fn sentence_segments(text: &str) -> Vec<&str> {
    text.split(['.', '!', '?'])
        .map(str::trim)
        .filter(|s| s.chars().any(char::is_alphanumeric))
        .collect()
}

/// Grammar problems counted across all non-blank answers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GrammarIssues {
    pub responses: usize,
    pub filler_words: usize,
    pub fragments: usize,
    pub agreement_errors: usize,
}

impl GrammarIssues {
    pub fn filler_rate(&self) -> f64 {
        per_response(self.filler_words, self.responses)
    }

    pub fn fragment_rate(&self) -> f64 {
        per_response(self.fragments, self.responses)
    }

    pub fn is_clean(&self) -> bool {
        self.filler_words == 0 && self.fragments == 0 && self.agreement_errors == 0
    }
}

fn per_response(count: usize, responses: usize) -> f64 {
    if responses == 0 {
        0.0
    } else {
        count as f64 / responses as f64
    }
}

/// A fragment is an answer that trails off without terminal punctuation, or a terminated
/// sentence of fewer than three words.
pub fn detect_grammar_issues(responses: &[String]) -> GrammarIssues {
    let mut issues = GrammarIssues::default();

    for answer in responses.iter().map(|r| r.trim()).filter(|r| !r.is_empty()) {
        issues.responses += 1;
        issues.filler_words += FILLER_RE.count(answer);
        issues.agreement_errors += AGREEMENT_RE.count(answer);

        let trails_off = !answer.ends_with(['.', '!', '?']);
        let segments = sentence_segments(answer);
        let terminated = if trails_off {
            &segments[..segments.len().saturating_sub(1)]
        } else {
            &segments[..]
        };
        issues.fragments += usize::from(trails_off);
        issues.fragments += terminated
            .iter()
            .filter(|s| s.split_whitespace().count() < 3)
            .count();
    }

    issues
}
