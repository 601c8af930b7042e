use std::sync::Arc;

use chrono::{Local, Months, NaiveDate};
use clap::Args;

use castcall::error::AppError;
use castcall::workflows::access::{Actor, Role, UserId};
use castcall::workflows::casting::{
    AuditionFeedback, CastingApplicationStatus, CastingCallDraft, CastingService,
};
use castcall::workflows::dashboard::{
    DashboardMetric, DashboardService, MetricEvent,
};
use castcall::workflows::jobs::{
    ArtistProfile, BudgetRange, ExperienceLevel, JobDraft, JobsService, MatchConfig,
};

use crate::infra::{
    InMemoryCastingApplications, InMemoryCastingCalls, InMemoryJobApplications, InMemoryJobs,
    InMemoryMetricSource, InMemoryNotifications,
};

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Reporting date for the dashboard portion (YYYY-MM-DD, defaults to today).
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Skip the dashboard portion of the demo.
    #[arg(long)]
    pub(crate) skip_dashboard: bool,
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        today,
        skip_dashboard,
    } = args;
    let today = today.unwrap_or_else(|| Local::now().date_naive());

    let recruiter = Actor {
        user_id: UserId("demo-recruiter".to_string()),
        role: Role::Recruiter,
    };
    let artist = Actor {
        user_id: UserId("demo-artist".to_string()),
        role: Role::Artist,
    };

    println!("Casting marketplace demo");

    let notifications = Arc::new(InMemoryNotifications::default());
    let casting = CastingService::new(
        Arc::new(InMemoryCastingCalls::default()),
        Arc::new(InMemoryCastingApplications::default()),
        notifications.clone(),
    );

    println!("\nCasting pipeline");
    let call = match casting.open_call(
        &recruiter,
        CastingCallDraft {
            title: "Lead Dancer".to_string(),
            production: "Monsoon Nights".to_string(),
            location: Some("Mumbai".to_string()),
            compensation: Some(45_000.0),
        },
    ) {
        Ok(call) => call,
        Err(err) => {
            println!("  Casting call rejected: {err}");
            return Ok(());
        }
    };
    println!(
        "- Opened casting call {} ({} / {})",
        call.casting_call_id.0, call.title, call.production
    );

    let application = match casting.apply(&artist, &call.casting_call_id) {
        Ok(view) => view,
        Err(err) => {
            println!("  Application rejected: {err}");
            return Ok(());
        }
    };
    println!(
        "- Received application {} -> status {}",
        application.application_id.0, application.status
    );

    for status in [
        CastingApplicationStatus::UnderReview,
        CastingApplicationStatus::Shortlisted,
        CastingApplicationStatus::CallbackScheduled,
        CastingApplicationStatus::CallbackCompleted,
        CastingApplicationStatus::Selected,
    ] {
        match casting.transition(&recruiter, &application.application_id, status) {
            Ok(view) => println!("- Transitioned to {}", view.status),
            Err(err) => {
                println!("  Transition halted: {err}");
                return Ok(());
            }
        }
    }

    if let Ok(view) = casting.record_feedback(
        &recruiter,
        &application.application_id,
        AuditionFeedback {
            rating: 5,
            notes: Some("Commanding stage presence".to_string()),
        },
    ) {
        println!(
            "- Audition feedback recorded (rating {})",
            view.feedback_rating.unwrap_or_default()
        );
    }

    match casting.get_call(&call.casting_call_id) {
        Ok(view) => println!(
            "- Call counters: shortlisted {}, selected {}",
            view.shortlisted_count, view.selected_count
        ),
        Err(err) => println!("  Call lookup failed: {err}"),
    }

    let events = notifications.events();
    if events.is_empty() {
        println!("- Notifications: none dispatched");
    } else {
        println!("- Notifications:");
        for event in events {
            println!("    - template={} -> {}", event.template, event.recipient.0);
        }
    }

    println!("\nOpportunity matching");
    let jobs = JobsService::new(
        Arc::new(InMemoryJobs::default()),
        Arc::new(InMemoryJobApplications::default()),
        notifications.clone(),
        MatchConfig::default(),
    );

    let drafts = vec![
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
        },
        JobDraft {
            title: "Remote Voice Workshop".to_string(),
            required_skills: vec!["Voice Acting".to_string()],
            experience_level: None,
            location: None,
            remote: true,
            budget: None,
        },
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
        },
    ];
    for draft in drafts {
        if let Err(err) = jobs.post_job(&recruiter, draft) {
            println!("  Job posting rejected: {err}");
        }
    }

    let profile = ArtistProfile {
        artist_id: artist.user_id.clone(),
        skills: vec!["Acting".to_string(), "Dancing".to_string()],
        experience_years: Some(4),
        location: Some("Mumbai".to_string()),
        hourly_rate: Some(500.0),
    };

    match jobs.opportunities(&profile) {
        Ok(matches) => {
            if matches.is_empty() {
                println!("- No opportunities above the floor");
            }
            for score in matches {
                println!("- {} -> {:.1} points", score.job_title, score.total);
                for component in &score.components {
                    println!(
                        "    - {:?}: {:.1} ({})",
                        component.factor, component.points, component.notes
                    );
                }
            }
        }
        Err(err) => println!("  Matching unavailable: {err}"),
    }

    if skip_dashboard {
        return Ok(());
    }

    println!("\nDashboard");
    let metrics = Arc::new(InMemoryMetricSource::default());
    seed_demo_metrics(&metrics, &artist.user_id, today);
    let dashboard = DashboardService::new(metrics);

    match dashboard.summary(&artist, &artist.user_id, today) {
        Ok(summary) => {
            for report in &summary.reports {
                if report.tracked {
                    println!(
                        "- {}: total {:.1} | month {:.1} | last month {:.1} | trend {:+.1}%",
                        report.metric_label,
                        report.total,
                        report.current_month,
                        report.previous_month,
                        report.trend_pct
                    );
                } else {
                    println!("- {}: not tracked yet", report.metric_label);
                }
            }
        }
        Err(err) => println!("  Dashboard unavailable: {err}"),
    }

    Ok(())
}

fn seed_demo_metrics(metrics: &InMemoryMetricSource, user: &UserId, today: NaiveDate) {
    let last_month = today - Months::new(1);

    for _ in 0..3 {
        metrics.record(user, DashboardMetric::Applications, MetricEvent::count(today));
    }
    metrics.record(
        user,
        DashboardMetric::Applications,
        MetricEvent::count(last_month),
    );
    metrics.record(user, DashboardMetric::Interviews, MetricEvent::count(today));
    metrics.record(
        user,
        DashboardMetric::Interviews,
        MetricEvent::count(last_month),
    );
    metrics.record(user, DashboardMetric::Hires, MetricEvent::count(today));
    metrics.record(
        user,
        DashboardMetric::Earnings,
        MetricEvent {
            occurred_at: today,
            amount: 45_000.0,
        },
    );
    metrics.record(
        user,
        DashboardMetric::Earnings,
        MetricEvent {
            occurred_at: last_month,
            amount: 30_000.0,
        },
    );
}
