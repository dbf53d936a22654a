//! Caller-owned interview state machine.
//!
//! The wizard that runs a mock interview drives this value and hands the finished
//! `InterviewSessionMetrics` to the scorer. Time is passed in as seconds so replaying the same
//! calls always yields the same metrics.
#![allow(dead_code)] // driven by the wizard client; the server only scores finished sessions

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::interview::InterviewSessionMetrics;
use crate::models::role::Role;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "stage", rename_all = "snake_case")]
pub enum SessionStage {
    Setup,
    Ready { index: u32 },
    Asking { index: u32, started_at: f64 },
    Finished,
    Aborted,
}

impl SessionStage {
    fn name(&self) -> &'static str {
        match self {
            SessionStage::Setup => "setup",
            SessionStage::Ready { .. } => "ready",
            SessionStage::Asking { .. } => "asking",
            SessionStage::Finished => "finished",
            SessionStage::Aborted => "aborted",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, SessionStage::Finished | SessionStage::Aborted)
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum SessionError {
    #[error("cannot {action} while the session is {stage}")]
    InvalidTransition {
        action: &'static str,
        stage: &'static str,
    },

    #[error("the session has no questions to ask")]
    NoQuestions,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterviewSession {
    role: Role,
    total_questions: u32,
    stage: SessionStage,
    camera_used: bool,
    microphone_used: bool,
    timings: Vec<f64>,
    responses: Vec<String>,
}

impl InterviewSession {
    pub fn new(role: Role, total_questions: u32) -> Self {
        Self {
            role,
            total_questions,
            stage: SessionStage::Setup,
            camera_used: false,
            microphone_used: false,
            timings: Vec::new(),
            responses: Vec::new(),
        }
    }

    pub fn stage(&self) -> &SessionStage {
        &self.stage
    }

    pub fn answered(&self) -> u32 {
        self.timings.len() as u32
    }

    /// Device flags are sticky: once a device was used during the session it stays recorded.
    pub fn set_devices(&mut self, camera: bool, microphone: bool) -> Result<(), SessionError> {
        self.ensure_live("change devices")?;
        self.camera_used |= camera;
        self.microphone_used |= microphone;
        Ok(())
    }

    pub fn start_question(&mut self, at_secs: f64) -> Result<u32, SessionError> {
        let index = match self.stage {
            SessionStage::Setup if self.total_questions == 0 => return Err(SessionError::NoQuestions),
            SessionStage::Setup => 0,
            SessionStage::Ready { index } => index,
            _ => return Err(self.invalid("start a question")),
        };
        self.stage = SessionStage::Asking {
            index,
            started_at: at_secs,
        };
        Ok(index)
    }

    /// Records the elapsed time (never negative) and the optional answer text, then moves on.
    pub fn answer(&mut self, at_secs: f64, response: Option<String>) -> Result<(), SessionError> {
        let SessionStage::Asking { index, started_at } = self.stage else {
            return Err(self.invalid("answer"));
        };
        let elapsed = at_secs - started_at;
        self.timings
            .push(if elapsed.is_finite() { elapsed.max(0.0) } else { 0.0 });
        if let Some(text) = response {
            self.responses.push(text);
        }
        self.advance(index);
        Ok(())
    }

    pub fn skip(&mut self) -> Result<(), SessionError> {
        let index = match self.stage {
            SessionStage::Asking { index, .. } | SessionStage::Ready { index } => index,
            _ => return Err(self.invalid("skip")),
        };
        self.advance(index);
        Ok(())
    }

    pub fn abort(&mut self) -> Result<(), SessionError> {
        self.ensure_live("abort")?;
        self.stage = SessionStage::Aborted;
        Ok(())
    }

    /// Snapshot for the scorer. Usable at any stage; only a session that reached the last
    /// question counts as completed.
    pub fn metrics(&self) -> InterviewSessionMetrics {
        InterviewSessionMetrics {
            questions_answered: self.answered(),
            total_questions: self.total_questions,
            time_spent_per_question_seconds: self.timings.clone(),
            camera_used: self.camera_used,
            microphone_used: self.microphone_used,
            interview_completed: self.stage == SessionStage::Finished,
            selected_role: self.role.clone(),
            responses: (!self.responses.is_empty()).then(|| self.responses.clone()),
        }
    }

    fn advance(&mut self, index: u32) {
        let next = index + 1;
        self.stage = if next >= self.total_questions {
            SessionStage::Finished
        } else {
            SessionStage::Ready { index: next }
        };
    }

    fn ensure_live(&self, action: &'static str) -> Result<(), SessionError> {
        if self.stage.is_terminal() {
            Err(self.invalid(action))
        } else {
            Ok(())
        }
    }

    fn invalid(&self, action: &'static str) -> SessionError {
        SessionError::InvalidTransition {
            action,
            stage: self.stage.name(),
        }
    }
}
