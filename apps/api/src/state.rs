use crate::config::Config;
use crate::scoring::interview::InterviewScorer;
use crate::scoring::resume::ResumeScorer;

/// Shared application state injected into all route handlers via Axum extractors.
/// Scorers are stateless; the resume scorer only carries its configured policy.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub resume_scorer: ResumeScorer,
    pub interview_scorer: InterviewScorer,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            resume_scorer: ResumeScorer::new(config.resume_policy()),
            interview_scorer: InterviewScorer,
            config,
        }
    }
}
