use super::common::*;
use axum::http::{Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

use crate::workflows::casting::domain::CastingApplicationStatus;

fn post_json(uri: &str, payload: Value) -> Request<axum::body::Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(axum::body::Body::from(
            serde_json::to_vec(&payload).expect("serialize payload"),
        ))
        .expect("request")
}

fn actor_json(actor: &crate::workflows::access::Actor) -> Value {
    serde_json::to_value(actor).expect("actor serializes")
}

#[tokio::test]
async fn open_call_and_apply_round_trip() {
    let (service, _, _, _) = build_service();
    let router = router_with_service(service);

    let response = router
        .clone()
        .oneshot(post_json(
            "/api/v1/casting/calls",
            json!({
                "actor": actor_json(&recruiter()),
                "title": "Lead Dancer",
                "production": "Monsoon Nights",
                "location": "Mumbai",
                "compensation": 45000.0,
            }),
        ))
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::CREATED);
    let call = read_json_body(response).await;
    let call_id = call
        .get("casting_call_id")
        .and_then(Value::as_str)
        .expect("call id serializes as a string")
        .to_string();

    let response = router
        .clone()
        .oneshot(post_json(
            &format!("/api/v1/casting/calls/{call_id}/applications"),
            json!({ "actor": actor_json(&artist()) }),
        ))
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::ACCEPTED);
    let application = read_json_body(response).await;
    assert_eq!(
        application.get("status").and_then(Value::as_str),
        Some("applied")
    );
    assert!(application.get("application_id").is_some());
}

#[tokio::test]
async fn invalid_transition_maps_to_unprocessable_entity() {
    let (service, _, _, _) = build_service();
    let call = service
        .open_call(&recruiter(), call_draft())
        .expect("call opens");
    let application = service
        .apply(&artist(), &call.casting_call_id)
        .expect("application submits");
    let router = router_with_service(service);

    let response = router
        .oneshot(post_json(
            &format!(
                "/api/v1/casting/applications/{}/status",
                application.application_id.0
            ),
            json!({
                "actor": actor_json(&recruiter()),
                "status": CastingApplicationStatus::Selected.label(),
            }),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let payload = read_json_body(response).await;
    let message = payload
        .get("error")
        .and_then(Value::as_str)
        .unwrap_or_default();
    assert!(message.contains("applied"));
    assert!(message.contains("selected"));
}

#[tokio::test]
async fn foreign_recruiter_maps_to_forbidden() {
    let (service, _, _, _) = build_service();
    let call = service
        .open_call(&recruiter(), call_draft())
        .expect("call opens");
    let application = service
        .apply(&artist(), &call.casting_call_id)
        .expect("application submits");
    let router = router_with_service(service);

    let response = router
        .oneshot(post_json(
            &format!(
                "/api/v1/casting/applications/{}/status",
                application.application_id.0
            ),
            json!({
                "actor": actor_json(&other_recruiter()),
                "status": "under_review",
            }),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn missing_application_maps_to_not_found() {
    let (service, _, _, _) = build_service();
    let router = router_with_service(service);

    let response = router
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/v1/casting/applications/cast-app-000000")
                .body(axum::body::Body::empty())
                .expect("request"),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn out_of_range_rating_maps_to_unprocessable_entity() {
    let (service, _, _, _) = build_service();
    let call = service
        .open_call(&recruiter(), call_draft())
        .expect("call opens");
    let application = service
        .apply(&artist(), &call.casting_call_id)
        .expect("application submits");
    let router = router_with_service(service);

    let response = router
        .oneshot(post_json(
            &format!(
                "/api/v1/casting/applications/{}/feedback",
                application.application_id.0
            ),
            json!({
                "actor": actor_json(&recruiter()),
                "rating": 9,
            }),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn call_view_exposes_pipeline_counters() {
    let (service, _, _, _) = build_service();
    let call = service
        .open_call(&recruiter(), call_draft())
        .expect("call opens");
    let application = service
        .apply(&artist(), &call.casting_call_id)
        .expect("application submits");
    service
        .transition(
            &recruiter(),
            &application.application_id,
            CastingApplicationStatus::UnderReview,
        )
        .expect("review accepted");
    service
        .transition(
            &recruiter(),
            &application.application_id,
            CastingApplicationStatus::Shortlisted,
        )
        .expect("shortlist accepted");
    let router = router_with_service(service);

    let response = router
        .oneshot(
            Request::builder()
                .method("GET")
                .uri(format!("/api/v1/casting/calls/{}", call.casting_call_id.0))
                .body(axum::body::Body::empty())
                .expect("request"),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(
        payload.get("shortlisted_count").and_then(Value::as_u64),
        Some(1)
    );
    assert_eq!(
        payload.get("selected_count").and_then(Value::as_u64),
        Some(0)
    );
    assert_eq!(payload.get("views_count").and_then(Value::as_u64), Some(0));
}
