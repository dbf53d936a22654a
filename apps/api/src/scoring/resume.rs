//! Resume ATS scoring: a pure, deterministic scorer over file metadata and optional extracted text.
//!
//! Algorithm (points accumulate independently, total is clamped to `[0, ceiling]`):
//! 1. Format gate: pdf > doc/docx > anything else (zero points; terminal in strict mode)
//! 2. Size plausibility buckets
//! 3. File naming heuristic
//! 4. Role keyword relevance (required / preferred / exclusion)
//! 5. Section presence (text only)
//! 6. Contact details (text only)
//!
//! Missing every required keyword while text is available caps the score at
//! `REQUIRED_MISS_CEILING`. Strengths and improvements are appended in step order.

use std::sync::LazyLock;

use tracing::debug;

use crate::models::resume::{ResumeAnalysis, ResumeInput};
use crate::models::role::{Role, RoleProfile};
use crate::scoring::Pattern;
use crate::scoring::feedback::resume_feedback;
use crate::scoring::policy::*;

static EMAIL_RE: LazyLock<Pattern> =
    LazyLock::new(|| Pattern::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9-]+(?:\.[A-Za-z0-9-]+)+"));
static PHONE_RE: LazyLock<Pattern> = LazyLock::new(|| {
    Pattern::new(r"(?:\+?\d{1,3}[\s.-]?)?\(?\d{3}\)?[\s.-]?\d{3}[\s.-]?\d{4}\b|\+\d[\d\s-]{7,}\d")
});

pub const UPLOAD_PROMPT: &str = "Please upload a resume in an accepted format (PDF, DOC or DOCX).";
pub const CONTENT_NOT_ASSESSED: &str = "Resume content could not be assessed; provide the \
     resume text to enable keyword, section and contact checks.";

// ────────────────────────────────────────────────────────────────────────────
// Scorer
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default)]
pub struct ResumeScorer {
    policy: ResumePolicy,
}

/// Running total plus the messages each step attaches.
#[derive(Default)]
struct Tally {
    points: f64,
    strengths: Vec<String>,
    improvements: Vec<String>,
}

impl Tally {
    fn award(&mut self, points: impl Into<f64>, strength: String) {
        self.points += points.into();
        self.strengths.push(strength);
    }

    fn deduct(&mut self, points: impl Into<f64>, improvement: String) {
        self.points -= points.into();
        self.improvements.push(improvement);
    }

    fn advise(&mut self, improvement: impl Into<String>) {
        self.improvements.push(improvement.into());
    }
}

impl ResumeScorer {
    pub fn new(policy: ResumePolicy) -> Self {
        Self { policy }
    }

    /// Never fails. `None` (no file uploaded) yields the canonical zero-score result.
    pub fn score(&self, resume: Option<&ResumeInput>) -> ResumeAnalysis {
        match resume {
            Some(resume) => self.score_resume(resume),
            None => ResumeAnalysis {
                ats_score: 0,
                feedback: "No resume was uploaded, so ATS compatibility could not be evaluated."
                    .to_string(),
                strengths: vec![],
                improvements: vec![UPLOAD_PROMPT.to_string()],
            },
        }
    }

    fn score_resume(&self, resume: &ResumeInput) -> ResumeAnalysis {
        let role = &resume.selected_role;
        let text = resume.usable_text();
        let mut tally = Tally::default();

        let format_ok = score_format(&resume.normalized_extension(), &mut tally);
        if !format_ok && self.policy.strict_format {
            debug!(file = %resume.file_name, "strict format gate rejected resume");
            return self.finish(tally, role, None);
        }

        score_size(resume.file_size_bytes, role, &mut tally);
        score_file_name(&resume.file_name, &mut tally);
        let required_missed = score_keywords(text, &resume.file_name, role, &mut tally);

        match text {
            Some(text) => {
                let lower = text.to_lowercase();
                score_sections(&lower, &mut tally);
                score_contact(text, &mut tally);
            }
            None => tally.advise(CONTENT_NOT_ASSESSED),
        }

        let cap = required_missed.then_some(REQUIRED_MISS_CEILING);
        self.finish(tally, role, cap)
    }

    fn finish(&self, tally: Tally, role: &Role, cap: Option<u32>) -> ResumeAnalysis {
        let ceiling = self
            .policy
            .score_ceiling
            .min(cap.unwrap_or(DEFAULT_RESUME_CEILING))
            .min(100);
        let ats_score = (tally.points.round().max(0.0) as u32).min(ceiling);

        debug!(
            raw_points = tally.points,
            ceiling, ats_score, "resume scored"
        );

        ResumeAnalysis {
            ats_score,
            feedback: resume_feedback(ats_score, role),
            strengths: tally.strengths,
            improvements: tally.improvements,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Steps
// ────────────────────────────────────────────────────────────────────────────

/// Returns whether the extension is accepted.
fn score_format(ext: &str, tally: &mut Tally) -> bool {
    if !ACCEPTED_EXTENSIONS.contains(&ext) {
        let shown = if ext.is_empty() {
            "missing file extension".to_string()
        } else {
            format!("unsupported format '.{ext}'")
        };
        tally.advise(format!(
            "ATS systems cannot read this file ({shown}). {UPLOAD_PROMPT}"
        ));
        return false;
    }

    if ext == PREFERRED_EXTENSION {
        tally.award(
            PDF_FORMAT_POINTS,
            "PDF format is the most ATS-friendly choice.".to_string(),
        );
    } else {
        tally.award(
            WORD_FORMAT_POINTS,
            format!("Word format (.{ext}) is accepted by most ATS systems."),
        );
        tally.advise("Convert the resume to PDF for the most reliable ATS parsing.");
    }
    true
}

fn score_size(bytes: u64, role: &Role, tally: &mut Tally) {
    let kb = bytes as f64 / 1000.0;
    let bucket = SizeBucket::for_size(bytes);
    let points = bucket.points();

    match bucket {
        SizeBucket::TooSmall => tally.deduct(
            -points,
            format!("The file is very small ({kb:.0} KB); the resume may lack detail."),
        ),
        SizeBucket::Adequate => {
            tally.award(points, format!("File size ({kb:.0} KB) is adequate."))
        }
        SizeBucket::Ideal => tally.award(
            points,
            format!("File size ({kb:.0} KB) is in the ideal range for ATS parsing."),
        ),
        SizeBucket::Large => tally.award(
            points,
            format!("File size ({kb:.0} KB) is acceptable, though a leaner file parses faster."),
        ),
        SizeBucket::Oversized => tally.deduct(
            -points,
            format!(
                "The file is oversized ({kb:.0} KB); compress images or remove graphics to stay under {} KB.",
                SIZE_OVERSIZED_ABOVE / 1000
            ),
        ),
    }

    if bucket != SizeBucket::TooSmall {
        if let Some(profile) = RoleProfile::for_role(role) {
            if bytes < profile.min_expected_size_bytes {
                tally.advise(format!(
                    "{role} resumes are usually more detailed; consider expanding experience and projects."
                ));
            }
        }
    }
}

fn score_file_name(file_name: &str, tally: &mut Tally) {
    let lower = file_name.to_lowercase();

    if NAME_GOOD_TOKENS.iter().any(|t| lower.contains(t)) {
        tally.award(
            NAME_GOOD_POINTS,
            "The file name clearly identifies the document as a resume.".to_string(),
        );
    }

    let transient: Vec<&str> = NAME_TRANSIENT_TOKENS
        .iter()
        .copied()
        .filter(|t| lower.contains(t))
        .collect();
    if !transient.is_empty() {
        tally.deduct(
            NAME_TRANSIENT_PENALTY,
            format!(
                "Rename the file: '{}' in a file name makes the resume look unfinished.",
                transient.join("', '")
            ),
        );
    }
}

/// Returns true when text was available and none of the role's required keywords appear.
fn score_keywords(text: Option<&str>, file_name: &str, role: &Role, tally: &mut Tally) -> bool {
    let Some(profile) = RoleProfile::for_role(role) else {
        tally.advise(format!(
            "'{role}' is not a supported role; choose a supported role to get keyword feedback."
        ));
        return false;
    };

    let haystack = format!("{} {}", text.unwrap_or_default(), file_name).to_lowercase();
    let (required_hits, required_missing) = partition_hits(profile.required_keywords, &haystack);
    let (preferred_hits, preferred_missing) =
        partition_hits(profile.preferred_keywords, &haystack);
    let (excluded_hits, _) = partition_hits(profile.exclusion_keywords, &haystack);

    if !required_hits.is_empty() {
        let coverage = required_hits.len() as f64 / profile.required_keywords.len() as f64;
        tally.award(
            REQUIRED_ANY_POINTS + REQUIRED_COVERAGE_POINTS * coverage,
            format!(
                "Matched {} of {} core {role} keywords: {}.",
                required_hits.len(),
                profile.required_keywords.len(),
                required_hits.join(", ")
            ),
        );
    }
    if !required_missing.is_empty() {
        tally.advise(format!(
            "Add missing core {role} keywords: {}.",
            required_missing.join(", ")
        ));
    }

    if preferred_hits.is_empty() {
        tally.advise(format!(
            "Add preferred {role} keywords such as {}.",
            preferred_missing
                .iter()
                .take(3)
                .copied()
                .collect::<Vec<_>>()
                .join(", ")
        ));
    } else {
        let coverage = preferred_hits.len() as f64 / profile.preferred_keywords.len() as f64;
        tally.award(
            PREFERRED_COVERAGE_POINTS * coverage,
            format!(
                "Includes {} preferred keywords: {}.",
                preferred_hits.len(),
                preferred_hits.join(", ")
            ),
        );
    }

    if !excluded_hits.is_empty() {
        let penalty =
            (EXCLUSION_PENALTY_EACH * excluded_hits.len() as i32).min(EXCLUSION_PENALTY_MAX);
        tally.deduct(
            penalty,
            format!(
                "Remove generic phrases that ATS reviewers discount: {}.",
                excluded_hits.join(", ")
            ),
        );
    }

    debug!(
        role = %role,
        required = required_hits.len(),
        preferred = preferred_hits.len(),
        excluded = excluded_hits.len(),
        "resume keyword relevance"
    );

    text.is_some() && required_hits.is_empty() && !profile.required_keywords.is_empty()
}

/// Splits keywords into (present, absent) by case-insensitive substring match.
/// `haystack` must already be lowercase.
fn partition_hits<'a>(keywords: &[&'a str], haystack: &str) -> (Vec<&'a str>, Vec<&'a str>) {
    keywords.iter().partition(|kw| haystack.contains(*kw))
}

fn score_sections(lower_text: &str, tally: &mut Tally) {
    let (found, missing): (Vec<&str>, Vec<&str>) = CANONICAL_SECTIONS
        .iter()
        .partition(|s| lower_text.contains(*s));

    if found.len() >= MIN_SECTIONS_FOUND {
        tally.award(
            SECTIONS_POINTS,
            format!("Contains standard resume sections: {}.", found.join(", ")),
        );
        if !missing.is_empty() {
            tally.advise(format!("Consider adding a {} section.", missing.join(", ")));
        }
    } else {
        tally.deduct(
            SECTIONS_PENALTY,
            format!(
                "Add the missing standard sections so ATS systems can parse the resume: {}.",
                missing.join(", ")
            ),
        );
    }
}

fn score_contact(text: &str, tally: &mut Tally) {
    let has_email = text.contains('@') && EMAIL_RE.is_match(text);
    let has_phone = PHONE_RE.is_match(text);

    match (has_email, has_phone) {
        (true, true) => tally.award(
            CONTACT_COMPLETE_POINTS,
            "Contact details include both an email address and a phone number.".to_string(),
        ),
        (true, false) => tally.deduct(
            CONTACT_PARTIAL_PENALTY,
            "Add a phone number so recruiters can reach you.".to_string(),
        ),
        (false, true) => tally.deduct(
            CONTACT_PARTIAL_PENALTY,
            "Add a professional email address so recruiters can reach you.".to_string(),
        ),
        (false, false) => tally.deduct(
            CONTACT_MISSING_PENALTY,
            "No email address or phone number found; recruiters cannot contact you.".to_string(),
        ),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
