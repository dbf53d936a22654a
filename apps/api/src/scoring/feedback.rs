//! Score-banded feedback sentences shared by the resume and interview scorers.

use crate::models::role::Role;
use crate::scoring::policy::{
    BAND_AVERAGE_FROM, BAND_BELOW_AVERAGE_FROM, BAND_EXCELLENT_FROM, BAND_GOOD_FROM,
    BAND_POOR_FROM,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ScoreBand {
    CriticalFailure,
    Poor,
    BelowAverage,
    Average,
    Good,
    Excellent,
}

impl ScoreBand {
    pub fn from_score(score: u32) -> Self {
        match score {
            s if s >= BAND_EXCELLENT_FROM => ScoreBand::Excellent,
            s if s >= BAND_GOOD_FROM => ScoreBand::Good,
            s if s >= BAND_AVERAGE_FROM => ScoreBand::Average,
            s if s >= BAND_BELOW_AVERAGE_FROM => ScoreBand::BelowAverage,
            s if s >= BAND_POOR_FROM => ScoreBand::Poor,
            _ => ScoreBand::CriticalFailure,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ScoreBand::CriticalFailure => "Critical failure",
            ScoreBand::Poor => "Poor",
            ScoreBand::BelowAverage => "Below average",
            ScoreBand::Average => "Average",
            ScoreBand::Good => "Good",
            ScoreBand::Excellent => "Excellent",
        }
    }
}

pub fn resume_feedback(score: u32, role: &Role) -> String {
    let band = ScoreBand::from_score(score);
    let verdict = match band {
        ScoreBand::CriticalFailure => {
            "most applicant tracking systems would reject this resume before a human sees it"
        }
        ScoreBand::Poor => "the resume is likely to be filtered out; address the improvements below first",
        ScoreBand::BelowAverage => "the resume may pass some filters but needs clear work on format and keywords",
        ScoreBand::Average => "the resume is passable; tailoring keywords would lift it further",
        ScoreBand::Good => "the resume should pass most applicant tracking systems",
        ScoreBand::Excellent => "the resume is well optimized for applicant tracking systems",
    };
    format!(
        "{} ATS compatibility ({score}/100) for a {role} role: {verdict}.",
        band.label()
    )
}

pub fn interview_feedback(
    overall: u32,
    role: &Role,
    completion_rate: f64,
    avg_time_secs: f64,
    questions_answered: u32,
) -> String {
    let completion_pct = completion_rate * 100.0;
    if questions_answered == 0 {
        return format!(
            "No questions were answered in the {role} mock interview ({completion_pct:.1}% completion, \
             {avg_time_secs:.1}s average per answer), so there was zero participation to evaluate. \
             Answer at least a few questions to receive a score."
        );
    }

    let band = ScoreBand::from_score(overall);
    let verdict = match band {
        ScoreBand::CriticalFailure => "this session needs a full retake",
        ScoreBand::Poor => "focus on answering every question with structured detail",
        ScoreBand::BelowAverage => "there is a solid base to build on with more practice",
        ScoreBand::Average => "a reasonable showing with clear room to sharpen delivery",
        ScoreBand::Good => "a strong session; polish the points below to stand out",
        ScoreBand::Excellent => "an outstanding session that would impress most interviewers",
    };
    format!(
        "{} performance in the {role} mock interview ({overall}/100): you answered \
         {completion_pct:.1}% of questions, averaging {avg_time_secs:.1}s per answer; {verdict}.",
        band.label()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_boundaries() {
        assert_eq!(ScoreBand::from_score(0), ScoreBand::CriticalFailure);
        assert_eq!(ScoreBand::from_score(19), ScoreBand::CriticalFailure);
        assert_eq!(ScoreBand::from_score(20), ScoreBand::Poor);
        assert_eq!(ScoreBand::from_score(39), ScoreBand::Poor);
        assert_eq!(ScoreBand::from_score(40), ScoreBand::BelowAverage);
        assert_eq!(ScoreBand::from_score(59), ScoreBand::BelowAverage);
        assert_eq!(ScoreBand::from_score(60), ScoreBand::Average);
        assert_eq!(ScoreBand::from_score(74), ScoreBand::Average);
        assert_eq!(ScoreBand::from_score(75), ScoreBand::Good);
        assert_eq!(ScoreBand::from_score(89), ScoreBand::Good);
        assert_eq!(ScoreBand::from_score(90), ScoreBand::Excellent);
        assert_eq!(ScoreBand::from_score(100), ScoreBand::Excellent);
    }

    #[test]
    fn test_resume_feedback_names_band_score_and_role() {
        let text = resume_feedback(82, &Role::DataScientist);
        assert!(text.starts_with("Good"));
        assert!(text.contains("82/100"));
        assert!(text.contains("Data Scientist"));
    }

    #[test]
    fn test_interview_feedback_formats_rate_and_time_to_one_decimal() {
        let text = interview_feedback(64, &Role::ProductManager, 5.0 / 7.0, 33.333, 5);
        assert!(text.starts_with("Average"));
        assert!(text.contains("71.4%"), "{text}");
        assert!(text.contains("33.3s"), "{text}");
        assert!(text.contains("Product Manager"));
    }

    #[test]
    fn test_interview_feedback_zero_participation() {
        let text = interview_feedback(0, &Role::SoftwareEngineer, 0.0, 0.0, 0);
        assert!(text.contains("zero participation"));
        assert!(text.contains("0.0%"));
    }
}
