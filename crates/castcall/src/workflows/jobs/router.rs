use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::domain::{ArtistProfile, JobApplicationId, JobApplicationStatus, JobDraft, JobId};
use super::matching::MatchScore;
use super::repository::{JobApplicationRepository, JobRepository};
use super::service::{JobsService, JobsServiceError};
use crate::workflows::access::Actor;
use crate::workflows::notify::NotificationPublisher;
use crate::workflows::storage::RepositoryError;

/// Router builder exposing HTTP endpoints for postings, applications, and
/// opportunity matching.
pub fn jobs_router<J, A, N>(service: Arc<JobsService<J, A, N>>) -> Router
where
    J: JobRepository + 'static,
    A: JobApplicationRepository + 'static,
    N: NotificationPublisher + 'static,
{
    Router::new()
        .route("/api/v1/jobs", post(post_job_handler::<J, A, N>))
        .route(
            "/api/v1/jobs/:job_id/applications",
            post(apply_handler::<J, A, N>),
        )
        .route(
            "/api/v1/jobs/applications/:application_id",
            get(status_handler::<J, A, N>),
        )
        .route(
            "/api/v1/jobs/applications/:application_id/status",
            post(transition_handler::<J, A, N>),
        )
        .route(
            "/api/v1/jobs/applications/:application_id/withdraw",
            post(withdraw_handler::<J, A, N>),
        )
        .route(
            "/api/v1/artists/opportunities",
            post(opportunities_handler::<J, A, N>),
        )
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub(crate) struct PostJobRequest {
    pub(crate) actor: Actor,
    #[serde(flatten)]
    pub(crate) draft: JobDraft,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApplyRequest {
    pub(crate) actor: Actor,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TransitionRequest {
    pub(crate) actor: Actor,
    pub(crate) status: JobApplicationStatus,
}

#[derive(Debug, Deserialize)]
pub(crate) struct OpportunitiesRequest {
    pub(crate) profile: ArtistProfile,
}

#[derive(Debug, Serialize)]
pub(crate) struct OpportunitiesResponse {
    pub(crate) matches: Vec<MatchScore>,
}

pub(crate) async fn post_job_handler<J, A, N>(
    State(service): State<Arc<JobsService<J, A, N>>>,
    axum::Json(request): axum::Json<PostJobRequest>,
) -> Response
where
    J: JobRepository + 'static,
    A: JobApplicationRepository + 'static,
    N: NotificationPublisher + 'static,
{
    match service.post_job(&request.actor, request.draft) {
        Ok(job) => (StatusCode::CREATED, axum::Json(job)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn apply_handler<J, A, N>(
    State(service): State<Arc<JobsService<J, A, N>>>,
    Path(job_id): Path<String>,
    axum::Json(request): axum::Json<ApplyRequest>,
) -> Response
where
    J: JobRepository + 'static,
    A: JobApplicationRepository + 'static,
    N: NotificationPublisher + 'static,
{
    match service.apply(&request.actor, &JobId(job_id)) {
        Ok(view) => (StatusCode::ACCEPTED, axum::Json(view)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn status_handler<J, A, N>(
    State(service): State<Arc<JobsService<J, A, N>>>,
    Path(application_id): Path<String>,
) -> Response
where
    J: JobRepository + 'static,
    A: JobApplicationRepository + 'static,
    N: NotificationPublisher + 'static,
{
    match service.get(&JobApplicationId(application_id)) {
        Ok(view) => (StatusCode::OK, axum::Json(view)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn transition_handler<J, A, N>(
    State(service): State<Arc<JobsService<J, A, N>>>,
    Path(application_id): Path<String>,
    axum::Json(request): axum::Json<TransitionRequest>,
) -> Response
where
    J: JobRepository + 'static,
    A: JobApplicationRepository + 'static,
    N: NotificationPublisher + 'static,
{
    match service.transition(
        &request.actor,
        &JobApplicationId(application_id),
        request.status,
    ) {
        Ok(view) => (StatusCode::OK, axum::Json(view)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn withdraw_handler<J, A, N>(
    State(service): State<Arc<JobsService<J, A, N>>>,
    Path(application_id): Path<String>,
    axum::Json(request): axum::Json<ApplyRequest>,
) -> Response
where
    J: JobRepository + 'static,
    A: JobApplicationRepository + 'static,
    N: NotificationPublisher + 'static,
{
    match service.withdraw(&request.actor, &JobApplicationId(application_id)) {
        Ok(view) => (StatusCode::OK, axum::Json(view)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn opportunities_handler<J, A, N>(
    State(service): State<Arc<JobsService<J, A, N>>>,
    axum::Json(request): axum::Json<OpportunitiesRequest>,
) -> Response
where
    J: JobRepository + 'static,
    A: JobApplicationRepository + 'static,
    N: NotificationPublisher + 'static,
{
    match service.opportunities(&request.profile) {
        Ok(matches) => (
            StatusCode::OK,
            axum::Json(OpportunitiesResponse { matches }),
        )
            .into_response(),
        Err(err) => error_response(err),
    }
}

fn error_response(err: JobsServiceError) -> Response {
    let status = match &err {
        JobsServiceError::Transition(_) | JobsServiceError::JobClosed(_) => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        JobsServiceError::Access(_) => StatusCode::FORBIDDEN,
        JobsServiceError::DuplicateApplication(_) => StatusCode::CONFLICT,
        JobsServiceError::Repository(RepositoryError::NotFound) => StatusCode::NOT_FOUND,
        JobsServiceError::Repository(RepositoryError::Conflict) => StatusCode::CONFLICT,
        JobsServiceError::Repository(RepositoryError::Unavailable(_)) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    let payload = json!({
        "error": err.to_string(),
    });
    (status, axum::Json(payload)).into_response()
}
