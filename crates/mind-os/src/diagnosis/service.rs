use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::IntakeConfig;

use super::domain::{AnswerSheet, QUESTION_COUNT};
use super::repository::{
    AnalyticsError, AnalyticsPublisher, DiagnosisId, DiagnosisLoggedEvent, DiagnosisRecord,
    DiagnosisRepository, RepositoryError,
};
use super::scoring::compute_diagnosis;

/// Completed questionnaire as submitted by a client, with the optional
/// client-side timestamp forwarded to analytics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosisSubmission {
    pub answers: AnswerSheet,
    #[serde(default)]
    pub client_submitted_at: Option<DateTime<Utc>>,
}

/// Service composing the scoring engine, the repository, and the analytics
/// collaborator.
pub struct DiagnosisService<R, A> {
    repository: Arc<R>,
    analytics: Arc<A>,
    intake: IntakeConfig,
}

static DIAGNOSIS_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_diagnosis_id() -> DiagnosisId {
    let id = DIAGNOSIS_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    DiagnosisId(format!("dx-{id:06}"))
}

impl<R, A> DiagnosisService<R, A>
where
    R: DiagnosisRepository + 'static,
    A: AnalyticsPublisher + 'static,
{
    pub fn new(repository: Arc<R>, analytics: Arc<A>, intake: IntakeConfig) -> Self {
        Self {
            repository,
            analytics,
            intake,
        }
    }

    /// Score a submission, persist the record, and log it to analytics.
    ///
    /// Scoring itself is total over partial sheets; completeness is only
    /// enforced here when the intake policy asks for it.
    pub fn submit(
        &self,
        submission: DiagnosisSubmission,
    ) -> Result<DiagnosisRecord, DiagnosisServiceError> {
        let answered = submission.answers.answered();
        if !submission.answers.is_complete() {
            if self.intake.require_complete_sheet {
                return Err(DiagnosisServiceError::IncompleteSheet { answered });
            }
            tracing::warn!(answered, "scoring an incomplete answer sheet");
        }

        let result = compute_diagnosis(&submission.answers);
        let record = DiagnosisRecord {
            diagnosis_id: next_diagnosis_id(),
            result,
            client_submitted_at: submission.client_submitted_at,
        };

        let stored = self.repository.insert(record)?;

        self.analytics.publish(DiagnosisLoggedEvent {
            diagnosis_id: stored.diagnosis_id.clone(),
            result: stored.result.clone(),
            client_submitted_at: stored.client_submitted_at,
            answered,
        })?;

        Ok(stored)
    }

    /// Fetch a stored diagnosis for API responses.
    pub fn get(&self, diagnosis_id: &DiagnosisId) -> Result<DiagnosisRecord, DiagnosisServiceError> {
        let record = self
            .repository
            .fetch(diagnosis_id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }

    /// Most recently stored records, newest first.
    pub fn recent(&self, limit: usize) -> Result<Vec<DiagnosisRecord>, DiagnosisServiceError> {
        Ok(self.repository.recent(limit)?)
    }
}

/// Error raised by the diagnosis service.
#[derive(Debug, thiserror::Error)]
pub enum DiagnosisServiceError {
    #[error("answer sheet incomplete: {answered} of {QUESTION_COUNT} questions answered")]
    IncompleteSheet { answered: usize },
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Analytics(#[from] AnalyticsError),
}
