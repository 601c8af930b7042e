use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::access::UserId;

/// Delivery channel for outbound applicant/recruiter messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationChannel {
    Email,
    Sms,
}

/// Payload handed to the delivery adapter (SMTP/SMS gateways live behind it).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub channel: NotificationChannel,
    pub template: String,
    pub recipient: UserId,
    pub details: BTreeMap<String, String>,
}

/// Trait describing outbound notification hooks.
///
/// Dispatch is fire-and-forget: services log a failed publish and move on,
/// they never retry or surface it to the caller.
pub trait NotificationPublisher: Send + Sync {
    fn publish(&self, notification: Notification) -> Result<(), NotificationError>;
}

#[derive(Debug, thiserror::Error)]
pub enum NotificationError {
    #[error("notification transport unavailable: {0}")]
    Transport(String),
}
