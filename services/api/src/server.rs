use crate::cli::ServeArgs;
use crate::infra::{open_store, AppState};
use crate::routes::with_operational_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use deadline_desk::config::AppConfig;
use deadline_desk::error::AppError;
use deadline_desk::submissions::{submission_router, InMemorySubmissionStore, SubmissionService};
use deadline_desk::telemetry;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{info, warn};

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let submissions = if args.ephemeral {
        warn!("using in-memory submission store; records are lost on shutdown");
        let store = Arc::new(InMemorySubmissionStore::default());
        submission_router(Arc::new(SubmissionService::new(store)))
    } else {
        let store = Arc::new(open_store(&config.database).await?);
        submission_router(Arc::new(SubmissionService::new(store)))
    };

    let app = with_operational_routes(submissions)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "regulatory deadline dashboard ready");

    axum::serve(listener, app).await?;
    Ok(())
}
