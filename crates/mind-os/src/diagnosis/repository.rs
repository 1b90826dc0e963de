use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{BiasKind, DiagnosisResult, MatrixPoint, Subtype, ValidityGrade};

/// Opaque identifier assigned to a stored diagnosis.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DiagnosisId(pub String);

/// Stored record: the immutable result plus submission metadata. A repeat
/// questionnaire produces a wholly new record, never a patch of an old one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosisRecord {
    pub diagnosis_id: DiagnosisId,
    pub result: DiagnosisResult,
    pub client_submitted_at: Option<DateTime<Utc>>,
}

impl DiagnosisRecord {
    pub fn result_view(&self) -> DiagnosisView {
        DiagnosisView {
            diagnosis_id: self.diagnosis_id.clone(),
            code: self.result.os.code.to_string(),
            subtype: self.result.os.subtype,
            engine_primary: self.result.engine.primary.label(),
            engine_secondary: self.result.engine.secondary.label(),
            bias_alerts: self.result.bias.alerts.clone(),
            bias_total: self.result.bias.total_score,
            matrix: self.result.matrix,
            validity: self.result.validity,
            generated_at: self.result.generated_at,
        }
    }
}

/// Storage abstraction so the service module can be exercised in isolation.
pub trait DiagnosisRepository: Send + Sync {
    fn insert(&self, record: DiagnosisRecord) -> Result<DiagnosisRecord, RepositoryError>;
    fn fetch(&self, id: &DiagnosisId) -> Result<Option<DiagnosisRecord>, RepositoryError>;
    fn recent(&self, limit: usize) -> Result<Vec<DiagnosisRecord>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Outbound hook for the analytics-logging collaborator. Deduplication of
/// repeat submissions is the caller's concern, not the publisher's.
pub trait AnalyticsPublisher: Send + Sync {
    fn publish(&self, event: DiagnosisLoggedEvent) -> Result<(), AnalyticsError>;
}

/// Event persisted per completed diagnosis: the full result plus the client
/// timestamp, keyed by the opaque diagnosis id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosisLoggedEvent {
    pub diagnosis_id: DiagnosisId,
    pub result: DiagnosisResult,
    pub client_submitted_at: Option<DateTime<Utc>>,
    pub answered: usize,
}

/// Analytics dispatch error.
#[derive(Debug, thiserror::Error)]
pub enum AnalyticsError {
    #[error("analytics transport unavailable: {0}")]
    Transport(String),
}

/// Flattened representation of a result for API consumers. The key spaces
/// (16 codes, 9 engines, 5 biases) are the contract the presentation layer's
/// content dictionaries are keyed by.
#[derive(Debug, Clone, Serialize)]
pub struct DiagnosisView {
    pub diagnosis_id: DiagnosisId,
    pub code: String,
    pub subtype: Subtype,
    pub engine_primary: &'static str,
    pub engine_secondary: &'static str,
    pub bias_alerts: Vec<BiasKind>,
    pub bias_total: u8,
    pub matrix: MatrixPoint,
    pub validity: ValidityGrade,
    pub generated_at: DateTime<Utc>,
}
