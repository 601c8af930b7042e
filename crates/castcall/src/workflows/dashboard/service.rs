use std::sync::Arc;

use chrono::NaiveDate;

use super::aggregator::aggregate;
use super::domain::{DashboardMetric, DashboardSummary, MetricEvent, MetricReport};
use crate::workflows::access::{self, AccessDenied, Actor, UserId};
use crate::workflows::storage::RepositoryError;

/// Read seam the dashboard pulls metric events through. Backed by whatever
/// stores the application, payment, and interview rows.
pub trait MetricSource: Send + Sync {
    fn events(
        &self,
        user: &UserId,
        metric: DashboardMetric,
    ) -> Result<Vec<MetricEvent>, RepositoryError>;
}

/// Service assembling per-user dashboard summaries.
pub struct DashboardService<M> {
    source: Arc<M>,
}

impl<M> DashboardService<M>
where
    M: MetricSource + 'static,
{
    pub fn new(source: Arc<M>) -> Self {
        Self { source }
    }

    /// Build the dashboard for `user_id`. Self-service only: the actor must
    /// be the requested user. Untracked metrics short-circuit to explicit
    /// zeros without touching the source.
    pub fn summary(
        &self,
        actor: &Actor,
        user_id: &UserId,
        today: NaiveDate,
    ) -> Result<DashboardSummary, DashboardServiceError> {
        access::ensure_self(actor, user_id)?;

        let mut reports = Vec::with_capacity(DashboardMetric::ordered().len());
        for metric in DashboardMetric::ordered() {
            reports.push(self.metric_report(user_id, metric, today)?);
        }

        Ok(DashboardSummary {
            user_id: user_id.clone(),
            generated_at: today,
            reports,
        })
    }

    fn metric_report(
        &self,
        user_id: &UserId,
        metric: DashboardMetric,
        today: NaiveDate,
    ) -> Result<MetricReport, DashboardServiceError> {
        if !metric.is_tracked() {
            return Ok(MetricReport::untracked(metric));
        }

        let events = self.source.events(user_id, metric)?;
        Ok(aggregate(metric, &events, today))
    }
}

/// Error raised by the dashboard service.
#[derive(Debug, thiserror::Error)]
pub enum DashboardServiceError {
    #[error(transparent)]
    Access(#[from] AccessDenied),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
