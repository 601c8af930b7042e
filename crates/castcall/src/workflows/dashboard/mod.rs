//! Per-user dashboard metrics: calendar-month aggregation and trends.

pub mod aggregator;
pub mod domain;
pub mod router;
pub mod service;

pub use aggregator::{aggregate, trend_pct};
pub use domain::{DashboardMetric, DashboardSummary, MetricEvent, MetricPeriod, MetricReport};
pub use router::dashboard_router;
pub use service::{DashboardService, DashboardServiceError, MetricSource};
