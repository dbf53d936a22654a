//! Tunable weights and thresholds for both scorers.
//!
//! Everything the scorers compare against lives here so tests and tuning share one source.
//! Band tables are ordered by their lower bound and must stay non-decreasing in reward.

// ────────────────────────────────────────────────────────────────────────────
// Resume: runtime policy
// ────────────────────────────────────────────────────────────────────────────

pub const DEFAULT_RESUME_CEILING: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResumePolicy {
    /// Final ATS score never exceeds this (1 – 100).
    pub score_ceiling: u32,
    /// Unsupported formats return 0 immediately instead of scoring the other criteria.
    pub strict_format: bool,
}

impl Default for ResumePolicy {
    fn default() -> Self {
        Self {
            score_ceiling: DEFAULT_RESUME_CEILING,
            strict_format: false,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Resume: format, size, naming
// ────────────────────────────────────────────────────────────────────────────

pub const ACCEPTED_EXTENSIONS: &[&str] = &["pdf", "doc", "docx"];
pub const PREFERRED_EXTENSION: &str = "pdf";
pub const PDF_FORMAT_POINTS: i32 = 20;
pub const WORD_FORMAT_POINTS: i32 = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeBucket {
    TooSmall,
    Adequate,
    Ideal,
    Large,
    Oversized,
}

pub const SIZE_TOO_SMALL_BELOW: u64 = 30_000;
pub const SIZE_IDEAL_FROM: u64 = 100_000;
pub const SIZE_IDEAL_TO: u64 = 300_000;
pub const SIZE_OVERSIZED_ABOVE: u64 = 500_000;

impl SizeBucket {
    pub fn for_size(bytes: u64) -> Self {
        match bytes {
            b if b < SIZE_TOO_SMALL_BELOW => SizeBucket::TooSmall,
            b if b < SIZE_IDEAL_FROM => SizeBucket::Adequate,
            b if b <= SIZE_IDEAL_TO => SizeBucket::Ideal,
            b if b <= SIZE_OVERSIZED_ABOVE => SizeBucket::Large,
            _ => SizeBucket::Oversized,
        }
    }

    pub fn points(self) -> i32 {
        match self {
            SizeBucket::TooSmall => -10,
            SizeBucket::Adequate => 8,
            SizeBucket::Ideal => 15,
            SizeBucket::Large => 8,
            SizeBucket::Oversized => -10,
        }
    }
}

pub const NAME_GOOD_TOKENS: &[&str] = &["resume", "cv"];
pub const NAME_TRANSIENT_TOKENS: &[&str] = &["draft", "temp", "copy"];
pub const NAME_GOOD_POINTS: i32 = 5;
pub const NAME_TRANSIENT_PENALTY: i32 = 5;

// ────────────────────────────────────────────────────────────────────────────
// Resume: keywords, sections, contact
// ────────────────────────────────────────────────────────────────────────────

/// Awarded once at least one required keyword is present.
pub const REQUIRED_ANY_POINTS: f64 = 15.0;
/// Scaled by the fraction of required keywords present.
pub const REQUIRED_COVERAGE_POINTS: f64 = 15.0;
/// Scaled by the fraction of preferred keywords present.
pub const PREFERRED_COVERAGE_POINTS: f64 = 10.0;
pub const EXCLUSION_PENALTY_EACH: i32 = 5;
pub const EXCLUSION_PENALTY_MAX: i32 = 15;
/// Ceiling applied when resume text is available but contains none of the required keywords.
pub const REQUIRED_MISS_CEILING: u32 = 20;

pub const CANONICAL_SECTIONS: &[&str] = &["experience", "education", "skills", "contact"];
pub const MIN_SECTIONS_FOUND: usize = 3;
pub const SECTIONS_POINTS: i32 = 10;
pub const SECTIONS_PENALTY: i32 = 10;

pub const CONTACT_COMPLETE_POINTS: i32 = 10;
pub const CONTACT_PARTIAL_PENALTY: i32 = 5;
pub const CONTACT_MISSING_PENALTY: i32 = 15;

// ────────────────────────────────────────────────────────────────────────────
// Shared feedback bands (lower bounds, inclusive)
// ────────────────────────────────────────────────────────────────────────────

pub const BAND_POOR_FROM: u32 = 20;
pub const BAND_BELOW_AVERAGE_FROM: u32 = 40;
pub const BAND_AVERAGE_FROM: u32 = 60;
pub const BAND_GOOD_FROM: u32 = 75;
pub const BAND_EXCELLENT_FROM: u32 = 90;

// ────────────────────────────────────────────────────────────────────────────
// Interview: completion, timing, rushed answers
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionBand {
    VeryLow,
    Low,
    Moderate,
    Good,
    Excellent,
}

pub const COMPLETION_LOW_FROM: f64 = 0.30;
pub const COMPLETION_MODERATE_FROM: f64 = 0.60;
pub const COMPLETION_GOOD_FROM: f64 = 0.80;
pub const COMPLETION_EXCELLENT_FROM: f64 = 0.95;

impl CompletionBand {
    pub fn for_rate(rate: f64) -> Self {
        match rate {
            r if r >= COMPLETION_EXCELLENT_FROM => CompletionBand::Excellent,
            r if r >= COMPLETION_GOOD_FROM => CompletionBand::Good,
            r if r >= COMPLETION_MODERATE_FROM => CompletionBand::Moderate,
            r if r >= COMPLETION_LOW_FROM => CompletionBand::Low,
            _ => CompletionBand::VeryLow,
        }
    }

    pub fn base_score(self) -> i32 {
        match self {
            CompletionBand::VeryLow => 20,
            CompletionBand::Low => 40,
            CompletionBand::Moderate => 60,
            CompletionBand::Good => 75,
            CompletionBand::Excellent => 85,
        }
    }

    pub fn is_strength(self) -> bool {
        matches!(self, CompletionBand::Good | CompletionBand::Excellent)
    }
}

/// Average answer time below this is too brief.
pub const BRIEF_ANSWER_BELOW_SECS: f64 = 10.0;
pub const SWEET_SPOT_FROM_SECS: f64 = 25.0;
pub const SWEET_SPOT_TO_SECS: f64 = 60.0;
/// Average answer time above this is verbose.
pub const VERBOSE_ANSWER_ABOVE_SECS: f64 = 120.0;

pub const BRIEF_PENALTY: i32 = 15;
pub const SWEET_SPOT_BONUS: i32 = 10;
pub const VERBOSE_PENALTY: i32 = 5;

/// A single answer shorter than this counts as rushed.
pub const RUSHED_ANSWER_BELOW_SECS: f64 = 5.0;
/// Rushed penalty applies when more than this fraction of answers were rushed.
pub const RUSHED_FRACTION_LIMIT: f64 = 0.40;
pub const RUSHED_PENALTY: i32 = 10;

/// Confidence is pinned here when only one of camera and microphone was used.
pub const CONFIDENCE_PARTIAL_DEVICE_FLOOR: u32 = 5;
pub const COMPLETED_INTERVIEW_BONUS: i32 = 5;

/// Content metrics are centered on 5.0; each point away from neutral moves a sub-score this much.
pub const CONTENT_POINTS_PER_UNIT: f64 = 2.0;

// ────────────────────────────────────────────────────────────────────────────
// Interview: grammar issue penalties (rates are per response)
// ────────────────────────────────────────────────────────────────────────────

pub const FILLER_RATE_HIGH: f64 = 3.0;
pub const FILLER_RATE_MODERATE: f64 = 1.5;
pub const FILLER_HIGH_PENALTY: i32 = 15;
pub const FILLER_MODERATE_PENALTY: i32 = 8;
pub const FRAGMENT_RATE_LIMIT: f64 = 0.5;
pub const FRAGMENT_PENALTY: i32 = 8;
pub const AGREEMENT_PENALTY_EACH: i32 = 4;
pub const AGREEMENT_PENALTY_MAX: i32 = 12;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_bucket_boundaries() {
        assert_eq!(SizeBucket::for_size(0), SizeBucket::TooSmall);
        assert_eq!(SizeBucket::for_size(29_999), SizeBucket::TooSmall);
        assert_eq!(SizeBucket::for_size(30_000), SizeBucket::Adequate);
        assert_eq!(SizeBucket::for_size(99_999), SizeBucket::Adequate);
        assert_eq!(SizeBucket::for_size(100_000), SizeBucket::Ideal);
        assert_eq!(SizeBucket::for_size(300_000), SizeBucket::Ideal);
        assert_eq!(SizeBucket::for_size(300_001), SizeBucket::Large);
        assert_eq!(SizeBucket::for_size(500_000), SizeBucket::Large);
        assert_eq!(SizeBucket::for_size(500_001), SizeBucket::Oversized);
    }

    #[test]
    fn test_size_reward_rises_into_ideal_and_penalizes_extremes() {
        let small = SizeBucket::TooSmall.points();
        let adequate = SizeBucket::Adequate.points();
        let ideal = SizeBucket::Ideal.points();
        assert!(small < 0 && SizeBucket::Oversized.points() < 0);
        assert!(small < adequate && adequate <= ideal);
        assert!(SizeBucket::Large.points() <= ideal);
    }

    #[test]
    fn test_completion_band_boundaries() {
        assert_eq!(CompletionBand::for_rate(0.0), CompletionBand::VeryLow);
        assert_eq!(CompletionBand::for_rate(0.2999), CompletionBand::VeryLow);
        assert_eq!(CompletionBand::for_rate(0.30), CompletionBand::Low);
        assert_eq!(CompletionBand::for_rate(0.60), CompletionBand::Moderate);
        assert_eq!(CompletionBand::for_rate(0.80), CompletionBand::Good);
        assert_eq!(CompletionBand::for_rate(0.95), CompletionBand::Excellent);
        assert_eq!(CompletionBand::for_rate(1.0), CompletionBand::Excellent);
    }

    #[test]
    fn test_completion_base_is_monotonic() {
        let bases: Vec<i32> = [0.0, 0.3, 0.6, 0.8, 0.95]
            .iter()
            .map(|r| CompletionBand::for_rate(*r).base_score())
            .collect();
        assert!(bases.windows(2).all(|w| w[0] <= w[1]), "{bases:?}");
    }

    #[test]
    fn test_timing_zones_are_ordered() {
        assert!(RUSHED_ANSWER_BELOW_SECS < BRIEF_ANSWER_BELOW_SECS);
        assert!(BRIEF_ANSWER_BELOW_SECS < SWEET_SPOT_FROM_SECS);
        assert!(SWEET_SPOT_FROM_SECS < SWEET_SPOT_TO_SECS);
        assert!(SWEET_SPOT_TO_SECS < VERBOSE_ANSWER_ABOVE_SECS);
    }

    #[test]
    fn test_resume_max_points_reach_one_hundred() {
        let max = PDF_FORMAT_POINTS as f64
            + SizeBucket::Ideal.points() as f64
            + NAME_GOOD_POINTS as f64
            + REQUIRED_ANY_POINTS
            + REQUIRED_COVERAGE_POINTS
            + PREFERRED_COVERAGE_POINTS
            + SECTIONS_POINTS as f64
            + CONTACT_COMPLETE_POINTS as f64;
        assert_eq!(max, 100.0);
    }
}
