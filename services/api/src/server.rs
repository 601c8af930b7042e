use std::sync::atomic::Ordering;
use std::sync::Arc;

use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use tracing::info;

use castcall::config::AppConfig;
use castcall::error::AppError;
use castcall::telemetry;
use castcall::workflows::casting::CastingService;
use castcall::workflows::dashboard::DashboardService;
use castcall::workflows::jobs::{JobsService, MatchConfig};

use crate::cli::ServeArgs;
use crate::infra::{
    AppState, InMemoryCastingApplications, InMemoryCastingCalls, InMemoryJobApplications,
    InMemoryJobs, InMemoryMetricSource, InMemoryNotifications,
};
use crate::routes::api_router;

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
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let notifications = Arc::new(InMemoryNotifications::default());
    let casting_service = Arc::new(CastingService::new(
        Arc::new(InMemoryCastingCalls::default()),
        Arc::new(InMemoryCastingApplications::default()),
        notifications.clone(),
    ));
    let match_config = MatchConfig {
        opportunity_floor: config.matching.opportunity_floor,
        ..MatchConfig::default()
    };
    let jobs_service = Arc::new(JobsService::new(
        Arc::new(InMemoryJobs::default()),
        Arc::new(InMemoryJobApplications::default()),
        notifications,
        match_config,
    ));
    let dashboard_service = Arc::new(DashboardService::new(Arc::new(
        InMemoryMetricSource::default(),
    )));

    let app = api_router(casting_service, jobs_service, dashboard_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "casting marketplace service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
