//! Questionnaire intake, scoring, and result persistence boundaries.

pub mod domain;
pub mod intake;
pub mod repository;
pub mod router;
pub mod scoring;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    Answer, AnswerSheet, Attitude, BiasKind, BiasProfile, DecisionStyle, DiagnosisResult,
    EngineRanking, EngineType, Information, Judgment, MatrixPoint, OsProfile, Subtype,
    TypologyCode, ValidityGrade, QUESTION_COUNT,
};
pub use intake::{WizardExportImporter, WizardImportError};
pub use repository::{
    AnalyticsError, AnalyticsPublisher, DiagnosisId, DiagnosisLoggedEvent, DiagnosisRecord,
    DiagnosisRepository, DiagnosisView, RepositoryError,
};
pub use router::diagnosis_router;
pub use scoring::compute_diagnosis;
pub use service::{DiagnosisService, DiagnosisServiceError, DiagnosisSubmission};
