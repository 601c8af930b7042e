use chrono::{DateTime, Utc};
use serde::Serialize;

use super::domain::{
    CastingApplication, CastingApplicationId, CastingCall, CastingCallId,
};
use crate::workflows::access::UserId;
use crate::workflows::storage::RepositoryError;

/// Storage abstraction for casting calls so the service can be exercised in
/// isolation.
pub trait CastingCallRepository: Send + Sync {
    fn insert(&self, call: CastingCall) -> Result<CastingCall, RepositoryError>;
    fn update(&self, call: CastingCall) -> Result<(), RepositoryError>;
    fn fetch(&self, id: &CastingCallId) -> Result<Option<CastingCall>, RepositoryError>;
}

/// Storage abstraction for casting applications.
pub trait CastingApplicationRepository: Send + Sync {
    fn insert(
        &self,
        application: CastingApplication,
    ) -> Result<CastingApplication, RepositoryError>;
    fn update(&self, application: CastingApplication) -> Result<(), RepositoryError>;
    fn fetch(
        &self,
        id: &CastingApplicationId,
    ) -> Result<Option<CastingApplication>, RepositoryError>;
    fn for_call(
        &self,
        call: &CastingCallId,
    ) -> Result<Vec<CastingApplication>, RepositoryError>;
}

/// Sanitized representation of an application's exposed status.
#[derive(Debug, Clone, Serialize)]
pub struct CastingApplicationView {
    pub application_id: CastingApplicationId,
    pub casting_call_id: CastingCallId,
    pub artist_id: UserId,
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applied_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shortlisted_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback_scheduled_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feedback_rating: Option<u8>,
}

impl CastingApplication {
    pub fn status_view(&self) -> CastingApplicationView {
        CastingApplicationView {
            application_id: self.id.clone(),
            casting_call_id: self.casting_call_id.clone(),
            artist_id: self.artist_id.clone(),
            status: self.status.label(),
            applied_at: self.applied_at,
            shortlisted_at: self.shortlisted_at,
            callback_scheduled_at: self.callback_scheduled_at,
            selected_at: self.selected_at,
            feedback_rating: self.audition_feedback.as_ref().map(|feedback| feedback.rating),
        }
    }
}

/// Public shape of a casting call, counters included.
#[derive(Debug, Clone, Serialize)]
pub struct CastingCallView {
    pub casting_call_id: CastingCallId,
    pub title: String,
    pub production: String,
    pub open: bool,
    pub shortlisted_count: u32,
    pub selected_count: u32,
    pub views_count: u32,
}

impl CastingCall {
    pub fn view(&self) -> CastingCallView {
        CastingCallView {
            casting_call_id: self.id.clone(),
            title: self.title.clone(),
            production: self.production.clone(),
            open: self.open,
            shortlisted_count: self.shortlisted_count,
            selected_count: self.selected_count,
            views_count: self.views_count,
        }
    }
}
