use metrics_exporter_prometheus::PrometheusHandle;
use mind_os::diagnosis::{
    AnalyticsError, AnalyticsPublisher, DiagnosisId, DiagnosisLoggedEvent, DiagnosisRecord,
    DiagnosisRepository, RepositoryError,
};
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryDiagnosisRepository {
    records: Arc<Mutex<HashMap<DiagnosisId, DiagnosisRecord>>>,
}

impl DiagnosisRepository for InMemoryDiagnosisRepository {
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

#[derive(Default, Clone)]
pub(crate) struct InMemoryAnalyticsPublisher {
    events: Arc<Mutex<Vec<DiagnosisLoggedEvent>>>,
}

impl AnalyticsPublisher for InMemoryAnalyticsPublisher {
    fn publish(&self, event: DiagnosisLoggedEvent) -> Result<(), AnalyticsError> {
        let mut guard = self.events.lock().expect("analytics mutex poisoned");
        guard.push(event);
        Ok(())
    }
}

impl InMemoryAnalyticsPublisher {
    pub(crate) fn events(&self) -> Vec<DiagnosisLoggedEvent> {
        self.events.lock().expect("analytics mutex poisoned").clone()
    }
}
