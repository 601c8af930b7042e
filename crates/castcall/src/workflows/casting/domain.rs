use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::workflows::access::UserId;

/// Identifier wrapper for recruiter-posted casting calls.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CastingCallId(pub String);

/// Identifier wrapper for submitted casting applications.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CastingApplicationId(pub String);

/// Fields a recruiter supplies when opening a casting call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CastingCallDraft {
    pub title: String,
    pub production: String,
    pub location: Option<String>,
    pub compensation: Option<f64>,
}

/// A recruiter-posted role opening with its own application pipeline.
///
/// The owning recruiter is stored as a back-reference id, never as a live
/// object; callers look the owner up when they need it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CastingCall {
    pub id: CastingCallId,
    pub recruiter_id: UserId,
    pub title: String,
    pub production: String,
    pub location: Option<String>,
    pub compensation: Option<f64>,
    pub open: bool,
    pub shortlisted_count: u32,
    pub selected_count: u32,
    /// View tracking never shipped upstream; stays 0 until impression events exist.
    pub views_count: u32,
}

impl CastingCall {
    pub fn new(id: CastingCallId, recruiter_id: UserId, draft: CastingCallDraft) -> Self {
        Self {
            id,
            recruiter_id,
            title: draft.title,
            production: draft.production,
            location: draft.location,
            compensation: draft.compensation,
            open: true,
            shortlisted_count: 0,
            selected_count: 0,
            views_count: 0,
        }
    }
}

/// Status tracked through the casting application pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CastingApplicationStatus {
    Applied,
    UnderReview,
    Shortlisted,
    CallbackScheduled,
    CallbackCompleted,
    Selected,
    Rejected,
    Withdrawn,
}

impl CastingApplicationStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Applied => "applied",
            Self::UnderReview => "under_review",
            Self::Shortlisted => "shortlisted",
            Self::CallbackScheduled => "callback_scheduled",
            Self::CallbackCompleted => "callback_completed",
            Self::Selected => "selected",
            Self::Rejected => "rejected",
            Self::Withdrawn => "withdrawn",
        }
    }

    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Selected | Self::Rejected | Self::Withdrawn)
    }
}

impl fmt::Display for CastingApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Recruiter notes captured after an audition or callback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditionFeedback {
    pub rating: u8,
    pub notes: Option<String>,
}

/// An artist's application to a casting call.
///
/// Every status carries a first-occurrence timestamp: once stamped it is never
/// overwritten, which is also what keeps the denormalized call counters exact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CastingApplication {
    pub id: CastingApplicationId,
    pub casting_call_id: CastingCallId,
    pub artist_id: UserId,
    pub status: CastingApplicationStatus,
    pub applied_at: Option<DateTime<Utc>>,
    pub reviewed_at: Option<DateTime<Utc>>,
    pub shortlisted_at: Option<DateTime<Utc>>,
    pub callback_scheduled_at: Option<DateTime<Utc>>,
    pub callback_completed_at: Option<DateTime<Utc>>,
    pub selected_at: Option<DateTime<Utc>>,
    pub rejected_at: Option<DateTime<Utc>>,
    pub withdrawn_at: Option<DateTime<Utc>>,
    pub audition_feedback: Option<AuditionFeedback>,
}

impl CastingApplication {
    pub fn new(
        id: CastingApplicationId,
        casting_call_id: CastingCallId,
        artist_id: UserId,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            casting_call_id,
            artist_id,
            status: CastingApplicationStatus::Applied,
            applied_at: Some(now),
            reviewed_at: None,
            shortlisted_at: None,
            callback_scheduled_at: None,
            callback_completed_at: None,
            selected_at: None,
            rejected_at: None,
            withdrawn_at: None,
            audition_feedback: None,
        }
    }

    /// Move to `to`, stamping the status timestamp only when it is still
    /// unset. Returns whether this was the first occurrence of the status,
    /// the guard callers use to bump counters exactly once.
    pub fn record_status(&mut self, to: CastingApplicationStatus, now: DateTime<Utc>) -> bool {
        self.status = to;
        let slot = match to {
            CastingApplicationStatus::Applied => &mut self.applied_at,
            CastingApplicationStatus::UnderReview => &mut self.reviewed_at,
            CastingApplicationStatus::Shortlisted => &mut self.shortlisted_at,
            CastingApplicationStatus::CallbackScheduled => &mut self.callback_scheduled_at,
            CastingApplicationStatus::CallbackCompleted => &mut self.callback_completed_at,
            CastingApplicationStatus::Selected => &mut self.selected_at,
            CastingApplicationStatus::Rejected => &mut self.rejected_at,
            CastingApplicationStatus::Withdrawn => &mut self.withdrawn_at,
        };

        if slot.is_none() {
            *slot = Some(now);
            true
        } else {
            false
        }
    }
}
