//! Integration specifications for opportunity matching through the jobs
//! service and its HTTP surface.

mod common {
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    use castcall::workflows::access::{Actor, Role, UserId};
    use castcall::workflows::jobs::{
        ArtistProfile, BudgetRange, ExperienceLevel, JobApplication, JobApplicationId,
        JobApplicationRepository, JobDraft, JobId, JobPosting, JobRepository, JobsService,
        MatchConfig,
    };
    use castcall::workflows::notify::{Notification, NotificationError, NotificationPublisher};
    use castcall::workflows::storage::RepositoryError;

    pub(super) fn recruiter() -> Actor {
        Actor {
            user_id: UserId("recruiter-7".to_string()),
            role: Role::Recruiter,
        }
    }

    pub(super) fn mumbai_profile() -> ArtistProfile {
        ArtistProfile {
            artist_id: UserId("artist-7".to_string()),
            skills: vec!["Acting".to_string(), "Dancing".to_string()],
            experience_years: Some(4),
            location: Some("Mumbai".to_string()),
            hourly_rate: Some(500.0),
        }
    }

    pub(super) fn film_job() -> JobDraft {
        JobDraft {
            title: "Feature Film Supporting Role".to_string(),
            required_skills: vec!["Acting".to_string(), "Singing".to_string()],
            experience_level: Some(ExperienceLevel::MidLevel),
            location: Some("Mumbai".to_string()),
            remote: false,
            budget: Some(BudgetRange {
                min: 70_000.0,
                max: 90_000.0,
            }),
        }
    }

    pub(super) fn mismatched_job() -> JobDraft {
        JobDraft {
            title: "Stunt Coordinator".to_string(),
            required_skills: vec!["Stunt Riding".to_string()],
            experience_level: Some(ExperienceLevel::SeniorLevel),
            location: Some("Berlin".to_string()),
            remote: false,
            budget: Some(BudgetRange {
                min: 5_000.0,
                max: 10_000.0,
            }),
        }
    }

    #[derive(Default, Clone)]
    pub(super) struct MemoryJobs {
        records: Arc<Mutex<HashMap<JobId, JobPosting>>>,
    }

    impl JobRepository for MemoryJobs {
        fn insert(&self, job: JobPosting) -> Result<JobPosting, RepositoryError> {
            let mut guard = self.records.lock().expect("lock");
            if guard.contains_key(&job.id) {
                return Err(RepositoryError::Conflict);
            }
            guard.insert(job.id.clone(), job.clone());
            Ok(job)
        }

        fn update(&self, job: JobPosting) -> Result<(), RepositoryError> {
            let mut guard = self.records.lock().expect("lock");
            guard.insert(job.id.clone(), job);
            Ok(())
        }

        fn fetch(&self, id: &JobId) -> Result<Option<JobPosting>, RepositoryError> {
            let guard = self.records.lock().expect("lock");
            Ok(guard.get(id).cloned())
        }

        fn open_jobs(&self) -> Result<Vec<JobPosting>, RepositoryError> {
            let guard = self.records.lock().expect("lock");
            Ok(guard.values().filter(|job| job.open).cloned().collect())
        }
    }

    #[derive(Default, Clone)]
    pub(super) struct MemoryJobApplications {
        records: Arc<Mutex<HashMap<JobApplicationId, JobApplication>>>,
    }

    impl JobApplicationRepository for MemoryJobApplications {
        fn insert(
            &self,
            application: JobApplication,
        ) -> Result<JobApplication, RepositoryError> {
            let mut guard = self.records.lock().expect("lock");
            guard.insert(application.id.clone(), application.clone());
            Ok(application)
        }

        fn update(&self, application: JobApplication) -> Result<(), RepositoryError> {
            let mut guard = self.records.lock().expect("lock");
            guard.insert(application.id.clone(), application);
            Ok(())
        }

        fn fetch(
            &self,
            id: &JobApplicationId,
        ) -> Result<Option<JobApplication>, RepositoryError> {
            let guard = self.records.lock().expect("lock");
            Ok(guard.get(id).cloned())
        }

        fn for_job(&self, job: &JobId) -> Result<Vec<JobApplication>, RepositoryError> {
            let guard = self.records.lock().expect("lock");
            Ok(guard
                .values()
                .filter(|application| &application.job_id == job)
                .cloned()
                .collect())
        }
    }

    #[derive(Default, Clone)]
    pub(super) struct NoopNotifications;

    impl NotificationPublisher for NoopNotifications {
        fn publish(&self, _notification: Notification) -> Result<(), NotificationError> {
            Ok(())
        }
    }

    pub(super) fn build_service(
    ) -> JobsService<MemoryJobs, MemoryJobApplications, NoopNotifications> {
        JobsService::new(
            Arc::new(MemoryJobs::default()),
            Arc::new(MemoryJobApplications::default()),
            Arc::new(NoopNotifications),
            MatchConfig::default(),
        )
    }
}

mod matching {
    use super::common::*;

    #[test]
    fn ranked_opportunities_respect_the_floor() {
        let service = build_service();
        service
            .post_job(&recruiter(), film_job())
            .expect("film job posts");
        service
            .post_job(&recruiter(), mismatched_job())
            .expect("stunt job posts");

        let matches = service
            .opportunities(&mumbai_profile())
            .expect("matching succeeds");

        assert_eq!(matches.len(), 1, "mismatched job stays under the floor");
        assert_eq!(matches[0].job_title, "Feature Film Supporting Role");
        assert_eq!(matches[0].total, 80.0);
    }

    #[test]
    fn single_pair_scoring_reports_component_breakdown() {
        let service = build_service();
        let posting = service
            .post_job(&recruiter(), film_job())
            .expect("film job posts");

        let score = service
            .score(&mumbai_profile(), &posting.id)
            .expect("scoring succeeds");

        assert_eq!(score.components.len(), 4);
        let total: f64 = score
            .components
            .iter()
            .map(|component| component.points)
            .sum();
        assert_eq!(score.total, total);
    }
}

mod routing {
    use super::common::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use castcall::workflows::jobs::jobs_router;
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::ServiceExt;

    #[tokio::test]
    async fn opportunities_endpoint_returns_ranked_matches() {
        let service = build_service();
        service
            .post_job(&recruiter(), film_job())
            .expect("film job posts");
        service
            .post_job(&recruiter(), mismatched_job())
            .expect("stunt job posts");
        let router = jobs_router(Arc::new(service));

        let request = Request::builder()
            .method("POST")
            .uri("/api/v1/artists/opportunities")
            .header("content-type", "application/json")
            .body(Body::from(
                serde_json::to_vec(&json!({
                    "profile": serde_json::to_value(mumbai_profile()).expect("profile"),
                }))
                .expect("serialize"),
            ))
            .expect("request");

        let response = router.oneshot(request).await.expect("router dispatch");
        assert_eq!(response.status(), StatusCode::OK);

        let body = to_bytes(response.into_body(), 64 * 1024)
            .await
            .expect("body");
        let payload: Value = serde_json::from_slice(&body).expect("json");
        let matches = payload
            .get("matches")
            .and_then(Value::as_array)
            .expect("matches array");
        assert_eq!(matches.len(), 1);
        assert_eq!(
            matches[0].get("total").and_then(Value::as_f64),
            Some(80.0)
        );
    }
}
