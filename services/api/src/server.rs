use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryAnalyticsPublisher, InMemoryDiagnosisRepository};
use crate::routes::with_diagnosis_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use mind_os::config::AppConfig;
use mind_os::diagnosis::DiagnosisService;
use mind_os::error::AppError;
use mind_os::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(config.environment, &config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let repository = Arc::new(InMemoryDiagnosisRepository::default());
    let analytics = Arc::new(InMemoryAnalyticsPublisher::default());
    let diagnosis_service = Arc::new(DiagnosisService::new(repository, analytics, config.intake));

    let app = with_diagnosis_routes(diagnosis_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "diagnosis service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
