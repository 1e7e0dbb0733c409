use std::fmt::Debug;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::{info, warn};
use serde::Serialize;
use thiserror::Error;

use super::contact::ContactMessage;
use super::payload::ProjectRequestPayload;
use super::validation::ValidationErrors;
use super::values::Field;
use crate::config;

/// What gets handed to the collaborator.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Submission {
    ProjectRequest(ProjectRequestPayload),
    Contact(ContactMessage),
}

impl Submission {
    pub fn kind(&self) -> &'static str {
        match self {
            Submission::ProjectRequest(_) => "project request",
            Submission::Contact(_) => "contact message",
        }
    }

    /// Where a real backend would receive this submission.
    pub fn endpoint(&self) -> &'static str {
        match self {
            Submission::ProjectRequest(_) => "/api/project-requests",
            Submission::Contact(_) => "/api/contact",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    pub submitted_at: DateTime<Utc>,
}

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("could not encode the submission: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("You appear to be offline. Check your connection and try again.")]
    Offline,
}

/// Why a submission never reached the collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitBlocked<F: Ord + Copy + Debug = Field> {
    #[error("{} field(s) need attention", .0.len())]
    Invalid(ValidationErrors<F>),
    #[error("finish the remaining steps first")]
    NotFinalStep,
    #[error("a submission is already in progress")]
    InFlight,
}

/// Receives validated submissions. The site ships with a simulated one; a
/// real deployment swaps in an HTTP implementation.
#[async_trait(?Send)]
pub trait Submitter {
    async fn submit(&self, submission: Submission) -> Result<Receipt, SubmitError>;
}

/// Logs the submission and settles after a fixed delay.
pub struct SimulatedSubmitter {
    delay_ms: u32,
}

impl Default for SimulatedSubmitter {
    fn default() -> Self {
        Self {
            delay_ms: config::SUBMIT_DELAY_MS,
        }
    }
}

fn browser_online() -> bool {
    web_sys::window()
        .map(|window| window.navigator().on_line())
        .unwrap_or(true)
}

#[async_trait(?Send)]
impl Submitter for SimulatedSubmitter {
    async fn submit(&self, submission: Submission) -> Result<Receipt, SubmitError> {
        let body = serde_json::to_string(&submission)?;
        if !browser_online() {
            warn!("Not sending {}: browser is offline", submission.kind());
            return Err(SubmitError::Offline);
        }
        info!("Submitting {} to {}: {}", submission.kind(), submission.endpoint(), body);
        gloo_timers::future::TimeoutFuture::new(self.delay_ms).await;
        Ok(Receipt {
            submitted_at: Utc::now(),
        })
    }
}

/// Lifecycle of the single in-flight submission a form may have.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Pending,
    Succeeded(Receipt),
    Failed(String),
}

impl SubmissionStatus {
    pub fn is_pending(&self) -> bool {
        matches!(self, SubmissionStatus::Pending)
    }

    pub fn failure(&self) -> Option<&str> {
        match self {
            SubmissionStatus::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Moves to `Pending`. Returns false when a submission is already pending.
    pub fn begin(&mut self) -> bool {
        if self.is_pending() {
            return false;
        }
        *self = SubmissionStatus::Pending;
        true
    }

    pub fn settle(&mut self, outcome: Result<Receipt, SubmitError>) {
        *self = match outcome {
            Ok(receipt) => SubmissionStatus::Succeeded(receipt),
            Err(err) => {
                warn!("Submission failed: {}", err);
                SubmissionStatus::Failed(err.to_string())
            }
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_refuses_while_pending() {
        let mut status = SubmissionStatus::default();
        assert!(status.begin());
        assert!(status.is_pending());
        assert!(!status.begin());
    }

    #[test]
    fn failure_is_kept_for_display() {
        let mut status = SubmissionStatus::Pending;
        status.settle(Err(SubmitError::Offline));
        assert_eq!(
            status.failure(),
            Some("You appear to be offline. Check your connection and try again.")
        );
        assert!(status.begin(), "a failed submission can be retried");
    }

    #[test]
    fn success_carries_receipt() {
        let mut status = SubmissionStatus::Pending;
        let receipt = Receipt {
            submitted_at: Utc::now(),
        };
        status.settle(Ok(receipt.clone()));
        assert_eq!(status, SubmissionStatus::Succeeded(receipt));
    }
}
