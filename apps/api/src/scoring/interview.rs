//! Interview session scoring: four independent sub-scores averaged into an overall score.
//!
//! Each sub-score runs the same pipeline:
//! 1. Zero-engagement gate (nothing answered ⇒ 0)
//! 2. Device gate (camera for body language, microphone for grammar, both for confidence)
//! 3. Completion-rate band ⇒ base score
//! 4. Average-timing modulation and rushed-answer penalty
//! 5. Content bonus from the matching `ResponseContentProfile` metric (when text was supplied;
//!    never negative, weak answers only add improvements)
//!
//! Grammar additionally pays for filler words, fragments and agreement errors; confidence gets a
//! small bonus for finishing the interview.

use tracing::debug;

use crate::models::interview::{InterviewAnalysis, InterviewSessionMetrics, ResponseContentProfile};
use crate::models::role::Role;
use crate::scoring::content::{analyze_responses, detect_grammar_issues, GrammarIssues};
use crate::scoring::feedback::interview_feedback;
use crate::scoring::policy::*;

pub const NO_ANSWERS_IMPROVEMENT: &str =
    "No questions were answered; answer at least one question to receive a score.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Dimension {
    BodyLanguage,
    Grammar,
    Skills,
    Confidence,
}

impl Dimension {
    const ALL: [Dimension; 4] = [
        Dimension::BodyLanguage,
        Dimension::Grammar,
        Dimension::Skills,
        Dimension::Confidence,
    ];

    fn content_metric(self, profile: &ResponseContentProfile) -> f64 {
        match self {
            Dimension::BodyLanguage => profile.quality_score,
            Dimension::Grammar => profile.communication_score,
            Dimension::Skills => profile.skills_relevance,
            Dimension::Confidence => profile.confidence,
        }
    }
}

/// Everything the sub-scores read, derived once from the raw metrics.
struct SessionView<'a> {
    role: &'a Role,
    answered: u32,
    completion_rate: f64,
    avg_time: f64,
    rushed: u32,
    camera: bool,
    microphone: bool,
    completed: bool,
    content: Option<ResponseContentProfile>,
    grammar: Option<GrammarIssues>,
}

impl<'a> SessionView<'a> {
    fn from_metrics(session: &'a InterviewSessionMetrics) -> Self {
        let responses = session.responses.as_deref().unwrap_or_default();
        let content = analyze_responses(responses, &session.selected_role);
        let grammar = content.map(|_| detect_grammar_issues(responses));

        Self {
            role: &session.selected_role,
            answered: session.effective_answered(),
            completion_rate: session.completion_rate(),
            avg_time: session.avg_time_per_question(),
            rushed: session.answers_below(RUSHED_ANSWER_BELOW_SECS),
            camera: session.camera_used,
            microphone: session.microphone_used,
            completed: session.interview_completed,
            content,
            grammar,
        }
    }

    fn is_rushed(&self) -> bool {
        self.answered > 0 && self.rushed as f64 > self.answered as f64 * RUSHED_FRACTION_LIMIT
    }

    fn timing_adjustment(&self) -> i32 {
        if self.avg_time < BRIEF_ANSWER_BELOW_SECS {
            -BRIEF_PENALTY
        } else if (SWEET_SPOT_FROM_SECS..=SWEET_SPOT_TO_SECS).contains(&self.avg_time) {
            SWEET_SPOT_BONUS
        } else if self.avg_time > VERBOSE_ANSWER_ABOVE_SECS {
            -VERBOSE_PENALTY
        } else {
            0
        }
    }
}

#[derive(Default)]
struct Notes {
    strengths: Vec<String>,
    improvements: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct InterviewScorer;

impl InterviewScorer {
    /// Never fails; degraded sessions (nothing offered, nothing answered, no timings) score 0
    /// on the affected dimensions and still produce feedback.
    pub fn score(&self, session: &InterviewSessionMetrics) -> InterviewAnalysis {
        let view = SessionView::from_metrics(session);
        let mut notes = Notes::default();

        let scores: Vec<u32> = if view.answered == 0 {
            notes.improvements.push(NO_ANSWERS_IMPROVEMENT.to_string());
            vec![0; Dimension::ALL.len()]
        } else {
            let scores: Vec<u32> = Dimension::ALL
                .iter()
                .map(|dim| score_dimension(*dim, &view, &mut notes))
                .collect();
            note_timing(&view, &mut notes);
            scores
        };

        let [body_language_score, grammar_score, skills_score, confidence_score] =
            [scores[0], scores[1], scores[2], scores[3]];
        let overall_score = (scores.iter().sum::<u32>() as f64 / scores.len() as f64).round() as u32;

        debug!(
            role = %view.role,
            completion_rate = view.completion_rate,
            avg_time = view.avg_time,
            body_language_score,
            grammar_score,
            skills_score,
            confidence_score,
            overall_score,
            "interview scored"
        );

        InterviewAnalysis {
            overall_score,
            body_language_score,
            grammar_score,
            skills_score,
            confidence_score,
            feedback: interview_feedback(
                overall_score,
                view.role,
                view.completion_rate,
                view.avg_time,
                view.answered,
            ),
            strengths: notes.strengths,
            improvements: notes.improvements,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Per-dimension pipeline
// ────────────────────────────────────────────────────────────────────────────

fn score_dimension(dim: Dimension, view: &SessionView<'_>, notes: &mut Notes) -> u32 {
    if let Some(gated) = device_gate(dim, view, notes) {
        return gated;
    }

    let band = CompletionBand::for_rate(view.completion_rate);
    let pct = view.completion_rate * 100.0;
    let mut score = band.base_score();
    note_completion(dim, band, pct, notes);

    score += view.timing_adjustment();
    if view.is_rushed() {
        score -= RUSHED_PENALTY;
    }

    if let Some(profile) = &view.content {
        let metric = dim.content_metric(profile);
        let bonus = (metric - ResponseContentProfile::NEUTRAL) * CONTENT_POINTS_PER_UNIT;
        score += bonus.round().max(0.0) as i32;
        note_content(dim, metric, view.role, notes);
    }

    match dim {
        Dimension::Grammar => {
            if let Some(issues) = &view.grammar {
                score -= grammar_penalty(issues, notes);
            }
        }
        Dimension::Confidence => {
            if view.completed {
                score += COMPLETED_INTERVIEW_BONUS;
            } else {
                notes.improvements.push(
                    "Finish the full interview; ending early reads as a lack of confidence."
                        .to_string(),
                );
            }
        }
        Dimension::BodyLanguage | Dimension::Skills => {}
    }

    score.clamp(0, 100) as u32
}

/// `Some(score)` when the dimension's devices were not used.
fn device_gate(dim: Dimension, view: &SessionView<'_>, notes: &mut Notes) -> Option<u32> {
    match dim {
        Dimension::BodyLanguage if !view.camera => {
            notes.improvements.push(
                "Turn on your camera so body language (eye contact, posture) can be assessed."
                    .to_string(),
            );
            Some(0)
        }
        Dimension::Grammar if !view.microphone => {
            notes.improvements.push(
                "Enable your microphone so spoken grammar and fluency can be assessed.".to_string(),
            );
            Some(0)
        }
        Dimension::Confidence if !view.camera && !view.microphone => {
            notes.improvements.push(
                "Use your camera and microphone; confidence cannot be judged without either."
                    .to_string(),
            );
            Some(0)
        }
        Dimension::Confidence if !view.camera || !view.microphone => {
            notes.improvements.push(
                "Use both camera and microphone; confidence is hard to judge from only one."
                    .to_string(),
            );
            Some(CONFIDENCE_PARTIAL_DEVICE_FLOOR)
        }
        _ => None,
    }
}

fn note_completion(dim: Dimension, band: CompletionBand, pct: f64, notes: &mut Notes) {
    let strong = band.is_strength();
    let text = match (dim, strong) {
        (Dimension::BodyLanguage, true) => {
            format!("Kept a steady on-camera presence across {pct:.0}% of the questions.")
        }
        (Dimension::BodyLanguage, false) => format!(
            "Stay engaged on camera for the whole interview; body language was only visible for {pct:.0}% of the questions."
        ),
        (Dimension::Grammar, true) => {
            format!("Spoke through {pct:.0}% of the questions, giving plenty of material for language assessment.")
        }
        (Dimension::Grammar, false) => {
            format!("Answer more questions aloud; only {pct:.0}% gave material for grammar assessment.")
        }
        (Dimension::Skills, true) => {
            format!("Covered {pct:.0}% of the role questions, showcasing a broad skill set.")
        }
        (Dimension::Skills, false) => format!(
            "Answer more of the role questions ({pct:.0}% answered) to demonstrate your skills."
        ),
        (Dimension::Confidence, true) => {
            format!("Worked through {pct:.0}% of the questions without backing off.")
        }
        (Dimension::Confidence, false) => {
            format!("Push through every question; stopping at {pct:.0}% reads as low confidence.")
        }
    };
    if strong {
        notes.strengths.push(text);
    } else {
        notes.improvements.push(text);
    }
}

const CONTENT_STRENGTH_FROM: f64 = 6.5;
const CONTENT_WEAK_BELOW: f64 = 3.5;

fn note_content(dim: Dimension, metric: f64, role: &Role, notes: &mut Notes) {
    if metric >= CONTENT_STRENGTH_FROM {
        notes.strengths.push(match dim {
            Dimension::BodyLanguage => {
                "Answers were well structured and backed by concrete examples.".to_string()
            }
            Dimension::Grammar => "Communicated in complete, well-formed sentences.".to_string(),
            Dimension::Skills => format!("Answers referenced relevant {role} skills and evidence."),
            Dimension::Confidence => {
                "Described achievements with confident first-person ownership.".to_string()
            }
        });
    } else if metric < CONTENT_WEAK_BELOW {
        notes.improvements.push(match dim {
            Dimension::BodyLanguage => {
                "Support answers with concrete examples and measurable results.".to_string()
            }
            Dimension::Grammar => {
                "Use complete sentences and structure answers into clear points.".to_string()
            }
            Dimension::Skills => {
                format!("Mention specific {role} tools, skills and measurable outcomes.")
            }
            Dimension::Confidence => {
                "Own your achievements ('I led', 'I delivered') and avoid hedging words.".to_string()
            }
        });
    }
}

/// Points to subtract from grammar for filler, fragments and agreement errors.
fn grammar_penalty(issues: &GrammarIssues, notes: &mut Notes) -> i32 {
    if issues.is_clean() {
        notes
            .strengths
            .push("Responses were free of filler words and grammatical slips.".to_string());
        return 0;
    }

    let mut penalty = 0;
    let filler_rate = issues.filler_rate();
    if filler_rate > FILLER_RATE_HIGH {
        penalty += FILLER_HIGH_PENALTY;
    } else if filler_rate > FILLER_RATE_MODERATE {
        penalty += FILLER_MODERATE_PENALTY;
    }
    if filler_rate > FILLER_RATE_MODERATE {
        notes.improvements.push(format!(
            "Cut filler words ('um', 'uh', 'you know'): {:.1} per answer on average.",
            filler_rate
        ));
    }

    if issues.fragment_rate() > FRAGMENT_RATE_LIMIT {
        penalty += FRAGMENT_PENALTY;
        notes.improvements.push(
            "Finish your sentences; several answers trailed off or were fragments.".to_string(),
        );
    }

    if issues.agreement_errors > 0 {
        penalty += (AGREEMENT_PENALTY_EACH * issues.agreement_errors as i32).min(AGREEMENT_PENALTY_MAX);
        notes.improvements.push(format!(
            "Watch subject-verb agreement ({} slip{} such as 'they was').",
            issues.agreement_errors,
            if issues.agreement_errors == 1 { "" } else { "s" }
        ));
    }

    penalty
}

/// Timing notes are session-wide, so they are recorded once rather than per dimension.
fn note_timing(view: &SessionView<'_>, notes: &mut Notes) {
    let avg = view.avg_time;
    match view.timing_adjustment() {
        adj if adj > 0 => notes.strengths.push(format!(
            "Answers averaged {avg:.1}s, right in the {SWEET_SPOT_FROM_SECS:.0}-{SWEET_SPOT_TO_SECS:.0} second sweet spot."
        )),
        adj if adj < 0 && avg < BRIEF_ANSWER_BELOW_SECS => notes.improvements.push(format!(
            "Answers averaged only {avg:.1}s; aim for {SWEET_SPOT_FROM_SECS:.0}-{SWEET_SPOT_TO_SECS:.0} seconds to fully develop each response."
        )),
        adj if adj < 0 => notes.improvements.push(format!(
            "Answers averaged {avg:.1}s; keep responses under two minutes to stay focused."
        )),
        _ => {}
    }

    if view.is_rushed() {
        notes.improvements.push(format!(
            "{} of {} answers took under {RUSHED_ANSWER_BELOW_SECS:.0} seconds; take a moment to think before responding.",
            view.rushed, view.answered
        ));
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
