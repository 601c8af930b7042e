use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::{
    AuditionFeedback, CastingApplicationId, CastingApplicationStatus, CastingCallDraft,
    CastingCallId,
};
use super::repository::{CastingApplicationRepository, CastingCallRepository};
use super::service::{CastingService, CastingServiceError};
use crate::workflows::access::Actor;
use crate::workflows::notify::NotificationPublisher;
use crate::workflows::storage::RepositoryError;

/// Router builder exposing HTTP endpoints for the casting pipeline.
pub fn casting_router<C, A, N>(service: Arc<CastingService<C, A, N>>) -> Router
where
    C: CastingCallRepository + 'static,
    A: CastingApplicationRepository + 'static,
    N: NotificationPublisher + 'static,
{
    Router::new()
        .route("/api/v1/casting/calls", post(open_call_handler::<C, A, N>))
        .route(
            "/api/v1/casting/calls/:call_id",
            get(call_handler::<C, A, N>),
        )
        .route(
            "/api/v1/casting/calls/:call_id/applications",
            post(apply_handler::<C, A, N>),
        )
        .route(
            "/api/v1/casting/applications/:application_id",
            get(status_handler::<C, A, N>),
        )
        .route(
            "/api/v1/casting/applications/:application_id/status",
            post(transition_handler::<C, A, N>),
        )
        .route(
            "/api/v1/casting/applications/:application_id/withdraw",
            post(withdraw_handler::<C, A, N>),
        )
        .route(
            "/api/v1/casting/applications/:application_id/feedback",
            post(feedback_handler::<C, A, N>),
        )
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub(crate) struct OpenCallRequest {
    pub(crate) actor: Actor,
    #[serde(flatten)]
    pub(crate) draft: CastingCallDraft,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApplyRequest {
    pub(crate) actor: Actor,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TransitionRequest {
    pub(crate) actor: Actor,
    pub(crate) status: CastingApplicationStatus,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WithdrawRequest {
    pub(crate) actor: Actor,
}

#[derive(Debug, Deserialize)]
pub(crate) struct FeedbackRequest {
    pub(crate) actor: Actor,
    pub(crate) rating: u8,
    #[serde(default)]
    pub(crate) notes: Option<String>,
}

pub(crate) async fn open_call_handler<C, A, N>(
    State(service): State<Arc<CastingService<C, A, N>>>,
    axum::Json(request): axum::Json<OpenCallRequest>,
) -> Response
where
    C: CastingCallRepository + 'static,
    A: CastingApplicationRepository + 'static,
    N: NotificationPublisher + 'static,
{
    match service.open_call(&request.actor, request.draft) {
        Ok(view) => (StatusCode::CREATED, axum::Json(view)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn call_handler<C, A, N>(
    State(service): State<Arc<CastingService<C, A, N>>>,
    Path(call_id): Path<String>,
) -> Response
where
    C: CastingCallRepository + 'static,
    A: CastingApplicationRepository + 'static,
    N: NotificationPublisher + 'static,
{
    match service.get_call(&CastingCallId(call_id)) {
        Ok(view) => (StatusCode::OK, axum::Json(view)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn apply_handler<C, A, N>(
    State(service): State<Arc<CastingService<C, A, N>>>,
    Path(call_id): Path<String>,
    axum::Json(request): axum::Json<ApplyRequest>,
) -> Response
where
    C: CastingCallRepository + 'static,
    A: CastingApplicationRepository + 'static,
    N: NotificationPublisher + 'static,
{
    match service.apply(&request.actor, &CastingCallId(call_id)) {
        Ok(view) => (StatusCode::ACCEPTED, axum::Json(view)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn status_handler<C, A, N>(
    State(service): State<Arc<CastingService<C, A, N>>>,
    Path(application_id): Path<String>,
) -> Response
where
    C: CastingCallRepository + 'static,
    A: CastingApplicationRepository + 'static,
    N: NotificationPublisher + 'static,
{
    match service.get(&CastingApplicationId(application_id)) {
        Ok(view) => (StatusCode::OK, axum::Json(view)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn transition_handler<C, A, N>(
    State(service): State<Arc<CastingService<C, A, N>>>,
    Path(application_id): Path<String>,
    axum::Json(request): axum::Json<TransitionRequest>,
) -> Response
where
    C: CastingCallRepository + 'static,
    A: CastingApplicationRepository + 'static,
    N: NotificationPublisher + 'static,
{
    match service.transition(
        &request.actor,
        &CastingApplicationId(application_id),
        request.status,
    ) {
        Ok(view) => (StatusCode::OK, axum::Json(view)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn withdraw_handler<C, A, N>(
    State(service): State<Arc<CastingService<C, A, N>>>,
    Path(application_id): Path<String>,
    axum::Json(request): axum::Json<WithdrawRequest>,
) -> Response
where
    C: CastingCallRepository + 'static,
    A: CastingApplicationRepository + 'static,
    N: NotificationPublisher + 'static,
{
    match service.withdraw(&request.actor, &CastingApplicationId(application_id)) {
        Ok(view) => (StatusCode::OK, axum::Json(view)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn feedback_handler<C, A, N>(
    State(service): State<Arc<CastingService<C, A, N>>>,
    Path(application_id): Path<String>,
    axum::Json(request): axum::Json<FeedbackRequest>,
) -> Response
where
    C: CastingCallRepository + 'static,
    A: CastingApplicationRepository + 'static,
    N: NotificationPublisher + 'static,
{
    let feedback = AuditionFeedback {
        rating: request.rating,
        notes: request.notes,
    };
    match service.record_feedback(&request.actor, &CastingApplicationId(application_id), feedback)
    {
        Ok(view) => (StatusCode::OK, axum::Json(view)).into_response(),
        Err(err) => error_response(err),
    }
}

fn error_response(err: CastingServiceError) -> Response {
    let status = match &err {
        CastingServiceError::Transition(_)
        | CastingServiceError::InvalidRating(_)
        | CastingServiceError::CallClosed(_) => StatusCode::UNPROCESSABLE_ENTITY,
        CastingServiceError::Access(_) => StatusCode::FORBIDDEN,
        CastingServiceError::DuplicateApplication(_) => StatusCode::CONFLICT,
        CastingServiceError::Repository(RepositoryError::NotFound) => StatusCode::NOT_FOUND,
        CastingServiceError::Repository(RepositoryError::Conflict) => StatusCode::CONFLICT,
        CastingServiceError::Repository(RepositoryError::Unavailable(_)) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    let payload = json!({
        "error": err.to_string(),
    });
    (status, axum::Json(payload)).into_response()
}
