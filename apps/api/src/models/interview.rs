use serde::{Deserialize, Serialize};

use crate::models::role::Role;

/// Telemetry of one finished (or aborted) mock interview, as recorded by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterviewSessionMetrics {
    pub questions_answered: u32,
    pub total_questions: u32,
    #[serde(default)]
    pub time_spent_per_question_seconds: Vec<f64>,
    pub camera_used: bool,
    pub microphone_used: bool,
    pub interview_completed: bool,
    pub selected_role: Role,
    #[serde(default)]
    pub responses: Option<Vec<String>>,
}

impl InterviewSessionMetrics {
    /// Answered count, never above the offered count.
    pub fn effective_answered(&self) -> u32 {
        self.questions_answered.min(self.total_questions)
    }

    /// 0.0 – 1.0. Zero when no questions were offered.
    pub fn completion_rate(&self) -> f64 {
        if self.total_questions == 0 {
            return 0.0;
        }
        self.effective_answered() as f64 / self.total_questions as f64
    }

    /// Recorded timings for answered questions only: extra entries are dropped and negative or
    /// non-finite values read as zero. May be shorter than the answered count.
    pub fn recorded_timings(&self) -> impl Iterator<Item = f64> + '_ {
        self.time_spent_per_question_seconds
            .iter()
            .take(self.effective_answered() as usize)
            .map(|t| if t.is_finite() && *t > 0.0 { *t } else { 0.0 })
    }

    /// Answered questions with no recorded timing; they count as zero seconds.
    pub fn missing_timings(&self) -> u32 {
        let recorded = self
            .time_spent_per_question_seconds
            .len()
            .min(self.effective_answered() as usize);
        self.effective_answered() - recorded as u32
    }

    /// Mean over every answered question, missing timings included as zero.
    pub fn avg_time_per_question(&self) -> f64 {
        let answered = self.effective_answered();
        if answered == 0 {
            return 0.0;
        }
        self.recorded_timings().sum::<f64>() / answered as f64
    }

    /// Answered questions that took less than `secs`, missing timings included.
    pub fn answers_below(&self, secs: f64) -> u32 {
        let recorded = self.recorded_timings().filter(|t| *t < secs).count() as u32;
        if secs > 0.0 {
            recorded + self.missing_timings()
        } else {
            recorded
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterviewAnalysis {
    pub overall_score: u32,
    pub body_language_score: u32,
    pub grammar_score: u32,
    pub skills_score: u32,
    pub confidence_score: u32,
    pub feedback: String,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
}

/// Aggregate view of free-text answers. Every field is on a 0 – 10 scale with 5.0 as neutral.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResponseContentProfile {
    pub quality_score: f64,
    pub communication_score: f64,
    pub skills_relevance: f64,
    pub clarity: f64,
    pub confidence: f64,
}

impl ResponseContentProfile {
    pub const NEUTRAL: f64 = 5.0;

    pub fn neutral() -> Self {
        Self {
            quality_score: Self::NEUTRAL,
            communication_score: Self::NEUTRAL,
            skills_relevance: Self::NEUTRAL,
            clarity: Self::NEUTRAL,
            confidence: Self::NEUTRAL,
        }
    }

    pub fn clamped(self) -> Self {
        Self {
            quality_score: self.quality_score.clamp(0.0, 10.0),
            communication_score: self.communication_score.clamp(0.0, 10.0),
            skills_relevance: self.skills_relevance.clamp(0.0, 10.0),
            clarity: self.clarity.clamp(0.0, 10.0),
            confidence: self.confidence.clamp(0.0, 10.0),
        }
    }
}
