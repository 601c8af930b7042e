use std::sync::Arc;

use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use serde_json::json;

use castcall::workflows::casting::{
    casting_router, CastingApplicationRepository, CastingCallRepository, CastingService,
};
use castcall::workflows::dashboard::{dashboard_router, DashboardService, MetricSource};
use castcall::workflows::jobs::{
    jobs_router, JobApplicationRepository, JobRepository, JobsService,
};
use castcall::workflows::notify::NotificationPublisher;

use crate::infra::AppState;

/// Compose the workflow routers with the operational endpoints.
pub(crate) fn api_router<C, CA, J, JA, N, M>(
    casting: Arc<CastingService<C, CA, N>>,
    jobs: Arc<JobsService<J, JA, N>>,
    dashboard: Arc<DashboardService<M>>,
) -> axum::Router
where
    C: CastingCallRepository + 'static,
    CA: CastingApplicationRepository + 'static,
    J: JobRepository + 'static,
    JA: JobApplicationRepository + 'static,
    N: NotificationPublisher + 'static,
    M: MetricSource + 'static,
{
    casting_router(casting)
        .merge(jobs_router(jobs))
        .merge(dashboard_router(dashboard))
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
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
