use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde_json::json;

use super::repository::{AnalyticsPublisher, DiagnosisId, DiagnosisRepository, RepositoryError};
use super::service::{DiagnosisService, DiagnosisServiceError, DiagnosisSubmission};

/// Router builder exposing HTTP endpoints for submitting a questionnaire
/// and fetching a stored result.
pub fn diagnosis_router<R, A>(service: Arc<DiagnosisService<R, A>>) -> Router
where
    R: DiagnosisRepository + 'static,
    A: AnalyticsPublisher + 'static,
{
    Router::new()
        .route("/api/v1/diagnosis", post(submit_handler::<R, A>))
        .route(
            "/api/v1/diagnosis/:diagnosis_id",
            get(result_handler::<R, A>),
        )
        .with_state(service)
}

pub(crate) async fn submit_handler<R, A>(
    State(service): State<Arc<DiagnosisService<R, A>>>,
    axum::Json(submission): axum::Json<DiagnosisSubmission>,
) -> Response
where
    R: DiagnosisRepository + 'static,
    A: AnalyticsPublisher + 'static,
{
    match service.submit(submission) {
        Ok(record) => {
            let view = record.result_view();
            (StatusCode::ACCEPTED, axum::Json(view)).into_response()
        }
        Err(error @ DiagnosisServiceError::IncompleteSheet { .. }) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(DiagnosisServiceError::Repository(RepositoryError::Conflict)) => {
            let payload = json!({
                "error": "diagnosis already exists",
            });
            (StatusCode::CONFLICT, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn result_handler<R, A>(
    State(service): State<Arc<DiagnosisService<R, A>>>,
    Path(diagnosis_id): Path<String>,
) -> Response
where
    R: DiagnosisRepository + 'static,
    A: AnalyticsPublisher + 'static,
{
    let id = DiagnosisId(diagnosis_id);
    match service.get(&id) {
        Ok(record) => {
            let view = record.result_view();
            (StatusCode::OK, axum::Json(view)).into_response()
        }
        Err(DiagnosisServiceError::Repository(RepositoryError::NotFound)) => {
            let payload = json!({
                "diagnosis_id": id.0,
                "error": "no diagnosis stored under this id",
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}
