use chrono::NaiveDate;

use super::domain::{DashboardMetric, MetricEvent, MetricPeriod, MetricReport};

/// Round to one decimal place; applied to currency sums and trend values so
/// integer counts and decimal sums flow through one identical path.
pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Percentage delta between the current and prior period.
///
/// A previous total of zero yields 100% when anything happened this period
/// and 0% when nothing did, so brand-new accounts do not divide by zero.
pub fn trend_pct(current: f64, previous: f64) -> f64 {
    if previous == 0.0 {
        if current > 0.0 {
            100.0
        } else {
            0.0
        }
    } else {
        round1((current - previous) / previous * 100.0)
    }
}

/// Aggregate a metric's events into total-to-date, current calendar month,
/// prior calendar month, and the percentage trend between the two.
pub fn aggregate(metric: DashboardMetric, events: &[MetricEvent], today: NaiveDate) -> MetricReport {
    let current_period = MetricPeriod::calendar_month(today);
    let previous_period = current_period.previous();

    let mut total = 0.0;
    let mut current_month = 0.0;
    let mut previous_month = 0.0;
    for event in events {
        total += event.amount;
        if current_period.contains(event.occurred_at) {
            current_month += event.amount;
        } else if previous_period.contains(event.occurred_at) {
            previous_month += event.amount;
        }
    }

    let total = round1(total);
    let current_month = round1(current_month);
    let previous_month = round1(previous_month);

    MetricReport {
        metric,
        metric_label: metric.label(),
        total,
        current_month,
        previous_month,
        trend_pct: trend_pct(current_month, previous_month),
        tracked: metric.is_tracked(),
    }
}
