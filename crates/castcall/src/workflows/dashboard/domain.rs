use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::workflows::access::UserId;

/// The metrics surfaced on user dashboards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DashboardMetric {
    ProfileViews,
    Applications,
    Interviews,
    Hires,
    Earnings,
}

impl DashboardMetric {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::ProfileViews,
            Self::Applications,
            Self::Interviews,
            Self::Hires,
            Self::Earnings,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::ProfileViews => "profile_views",
            Self::Applications => "applications",
            Self::Interviews => "interviews",
            Self::Hires => "hires",
            Self::Earnings => "earnings",
        }
    }

    /// Whether events for this metric are recorded at all. Profile view
    /// tracking never shipped upstream, so the dashboard reports it as an
    /// explicit zero rather than inventing numbers.
    pub const fn is_tracked(self) -> bool {
        !matches!(self, Self::ProfileViews)
    }

    /// Earnings carry currency amounts; everything else is a plain count.
    pub const fn is_currency(self) -> bool {
        matches!(self, Self::Earnings)
    }
}

/// Half-open `[start, end)` calendar-month window. A pure query parameter,
/// never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricPeriod {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl MetricPeriod {
    /// The calendar month containing `anchor`.
    pub fn calendar_month(anchor: NaiveDate) -> Self {
        let start = NaiveDate::from_ymd_opt(anchor.year(), anchor.month(), 1)
            .expect("first of month is always valid");
        let end = start + Months::new(1);
        Self { start, end }
    }

    /// The calendar month immediately before this one.
    pub fn previous(&self) -> Self {
        Self {
            start: self.start - Months::new(1),
            end: self.start,
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date < self.end
    }
}

/// A single dated contribution to a metric. Counts carry `amount = 1.0`;
/// earnings carry the payment amount.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricEvent {
    pub occurred_at: NaiveDate,
    pub amount: f64,
}

impl MetricEvent {
    pub fn count(occurred_at: NaiveDate) -> Self {
        Self {
            occurred_at,
            amount: 1.0,
        }
    }
}

/// Aggregated view of one metric for the dashboard payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricReport {
    pub metric: DashboardMetric,
    pub metric_label: &'static str,
    pub total: f64,
    pub current_month: f64,
    pub previous_month: f64,
    pub trend_pct: f64,
    pub tracked: bool,
}

impl MetricReport {
    /// Report shape for metrics with no event source wired up.
    pub fn untracked(metric: DashboardMetric) -> Self {
        Self {
            metric,
            metric_label: metric.label(),
            total: 0.0,
            current_month: 0.0,
            previous_month: 0.0,
            trend_pct: 0.0,
            tracked: false,
        }
    }
}

/// Full dashboard payload for one user.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardSummary {
    pub user_id: UserId,
    pub generated_at: NaiveDate,
    pub reports: Vec<MetricReport>,
}
