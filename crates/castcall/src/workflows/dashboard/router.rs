use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use chrono::{Local, NaiveDate};
use serde::Deserialize;
use serde_json::json;

use super::service::{DashboardService, DashboardServiceError, MetricSource};
use crate::workflows::access::{Actor, UserId};
use crate::workflows::storage::RepositoryError;

/// Router builder exposing the dashboard endpoint.
pub fn dashboard_router<M>(service: Arc<DashboardService<M>>) -> Router
where
    M: MetricSource + 'static,
{
    Router::new()
        .route("/api/v1/dashboard", post(summary_handler::<M>))
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub(crate) struct DashboardRequest {
    pub(crate) actor: Actor,
    pub(crate) user_id: UserId,
    /// Anchor date for the calendar-month windows; defaults to today.
    #[serde(default)]
    pub(crate) today: Option<NaiveDate>,
}

pub(crate) async fn summary_handler<M>(
    State(service): State<Arc<DashboardService<M>>>,
    axum::Json(request): axum::Json<DashboardRequest>,
) -> Response
where
    M: MetricSource + 'static,
{
    let today = request
        .today
        .unwrap_or_else(|| Local::now().date_naive());

    match service.summary(&request.actor, &request.user_id, today) {
        Ok(summary) => (StatusCode::OK, axum::Json(summary)).into_response(),
        Err(DashboardServiceError::Access(err)) => {
            let payload = json!({
                "error": err.to_string(),
            });
            (StatusCode::FORBIDDEN, axum::Json(payload)).into_response()
        }
        Err(DashboardServiceError::Repository(RepositoryError::NotFound)) => {
            let payload = json!({
                "error": "user has no recorded activity",
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
