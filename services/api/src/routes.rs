use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use mind_os::diagnosis::{
    compute_diagnosis, diagnosis_router, AnalyticsPublisher, AnswerSheet, DiagnosisRepository,
    DiagnosisResult, DiagnosisService,
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub(crate) struct PreviewRequest {
    pub(crate) answers: AnswerSheet,
}

pub(crate) fn with_diagnosis_routes<R, A>(service: Arc<DiagnosisService<R, A>>) -> axum::Router
where
    R: DiagnosisRepository + 'static,
    A: AnalyticsPublisher + 'static,
{
    diagnosis_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/diagnosis/preview",
            axum::routing::post(preview_endpoint),
        )
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

/// Pure scoring for the presentation layer: nothing is persisted and no
/// analytics event is emitted, so repeat previews stay side-effect free.
pub(crate) async fn preview_endpoint(
    Json(payload): Json<PreviewRequest>,
) -> Json<DiagnosisResult> {
    Json(compute_diagnosis(&payload.answers))
}
