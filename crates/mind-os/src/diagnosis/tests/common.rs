use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::config::IntakeConfig;
use crate::diagnosis::domain::{Answer, AnswerSheet, QUESTION_COUNT};
use crate::diagnosis::repository::{
    AnalyticsError, AnalyticsPublisher, DiagnosisId, DiagnosisLoggedEvent, DiagnosisRecord,
    DiagnosisRepository, RepositoryError,
};
use crate::diagnosis::service::{DiagnosisService, DiagnosisSubmission};

/// Sheet with every question answered 'A'; tests override the ids they need.
pub(super) fn base_sheet() -> AnswerSheet {
    (1..=QUESTION_COUNT).map(|id| (id, Answer::A)).collect()
}

pub(super) fn sheet_from(pairs: &[(u8, Answer)]) -> AnswerSheet {
    pairs.iter().copied().collect()
}

pub(super) fn set(sheet: &mut AnswerSheet, pairs: &[(u8, Answer)]) {
    for (id, answer) in pairs {
        sheet.record(*id, *answer);
    }
}

/// Forces each axis high or low, mirroring how the wizard's own regression
/// fixtures pin the sixteen codes.
pub(super) fn set_axes(sheet: &mut AnswerSheet, e: bool, n: bool, t: bool, j: bool) {
    use Answer::{A, B};

    if e {
        set(sheet, &[(1, A), (8, A), (12, A)]);
    } else {
        set(sheet, &[(1, B), (8, B), (12, B), (27, A), (32, A)]);
    }

    if n {
        set(sheet, &[(4, A), (6, A), (9, A), (13, A)]);
    } else {
        set(sheet, &[(4, B), (6, B), (9, B), (13, B), (17, A), (19, B)]);
    }

    if t {
        set(sheet, &[(3, B), (7, B), (10, B), (14, B)]);
    } else {
        set(sheet, &[(3, A), (7, A), (10, A), (14, A), (18, B), (39, A)]);
    }

    if j {
        set(sheet, &[(2, B), (5, A), (11, A), (15, A)]);
    } else {
        set(sheet, &[(2, A), (5, B), (11, B), (15, B), (16, A), (20, B)]);
    }
}

pub(super) fn submission(answers: AnswerSheet) -> DiagnosisSubmission {
    DiagnosisSubmission {
        answers,
        client_submitted_at: None,
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    records: Arc<Mutex<HashMap<DiagnosisId, DiagnosisRecord>>>,
}

impl DiagnosisRepository for MemoryRepository {
    fn insert(&self, record: DiagnosisRecord) -> Result<DiagnosisRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.diagnosis_id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.diagnosis_id.clone(), record.clone());
        Ok(record)
    }

    fn fetch(&self, id: &DiagnosisId) -> Result<Option<DiagnosisRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn recent(&self, limit: usize) -> Result<Vec<DiagnosisRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        let mut records: Vec<_> = guard.values().cloned().collect();
        records.sort_by(|a, b| b.result.generated_at.cmp(&a.result.generated_at));
        records.truncate(limit);
        Ok(records)
    }
}

pub(super) struct ConflictRepository;

impl DiagnosisRepository for ConflictRepository {
    fn insert(&self, _record: DiagnosisRecord) -> Result<DiagnosisRecord, RepositoryError> {
        Err(RepositoryError::Conflict)
    }

    fn fetch(&self, _id: &DiagnosisId) -> Result<Option<DiagnosisRecord>, RepositoryError> {
        Ok(None)
    }

    fn recent(&self, _limit: usize) -> Result<Vec<DiagnosisRecord>, RepositoryError> {
        Ok(Vec::new())
    }
}

pub(super) struct UnavailableRepository;

impl DiagnosisRepository for UnavailableRepository {
    fn insert(&self, _record: DiagnosisRecord) -> Result<DiagnosisRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("maintenance window".to_string()))
    }

    fn fetch(&self, _id: &DiagnosisId) -> Result<Option<DiagnosisRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("maintenance window".to_string()))
    }

    fn recent(&self, _limit: usize) -> Result<Vec<DiagnosisRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("maintenance window".to_string()))
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryAnalytics {
    events: Arc<Mutex<Vec<DiagnosisLoggedEvent>>>,
}

impl MemoryAnalytics {
    pub(super) fn events(&self) -> Vec<DiagnosisLoggedEvent> {
        self.events.lock().expect("analytics mutex poisoned").clone()
    }
}

impl AnalyticsPublisher for MemoryAnalytics {
    fn publish(&self, event: DiagnosisLoggedEvent) -> Result<(), AnalyticsError> {
        let mut guard = self.events.lock().expect("analytics mutex poisoned");
        guard.push(event);
        Ok(())
    }
}

pub(super) struct FailingAnalytics;

impl AnalyticsPublisher for FailingAnalytics {
    fn publish(&self, _event: DiagnosisLoggedEvent) -> Result<(), AnalyticsError> {
        Err(AnalyticsError::Transport("sink offline".to_string()))
    }
}

pub(super) fn memory_service() -> (
    Arc<DiagnosisService<MemoryRepository, MemoryAnalytics>>,
    MemoryRepository,
    MemoryAnalytics,
) {
    let repository = MemoryRepository::default();
    let analytics = MemoryAnalytics::default();
    let service = Arc::new(DiagnosisService::new(
        Arc::new(repository.clone()),
        Arc::new(analytics.clone()),
        IntakeConfig::default(),
    ));
    (service, repository, analytics)
}

pub(super) fn strict_service() -> Arc<DiagnosisService<MemoryRepository, MemoryAnalytics>> {
    Arc::new(DiagnosisService::new(
        Arc::new(MemoryRepository::default()),
        Arc::new(MemoryAnalytics::default()),
        IntakeConfig {
            require_complete_sheet: true,
        },
    ))
}
