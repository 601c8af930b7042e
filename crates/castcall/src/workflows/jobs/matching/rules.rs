use std::collections::HashSet;

use super::super::domain::{ArtistProfile, ExperienceLevel, JobPosting};
use super::config::MatchConfig;
use super::{MatchComponent, MatchFactor};

const SKILLS_MAX: f64 = 40.0;
const EXPERIENCE_MAX: f64 = 30.0;
const EXPERIENCE_NEUTRAL: f64 = 15.0;
const LOCATION_EXACT: f64 = 15.0;
const LOCATION_REMOTE: f64 = 10.0;
const LOCATION_PARTIAL: f64 = 7.5;
const BUDGET_MAX: f64 = 15.0;
const BUDGET_MARGIN: f64 = 7.5;
const BUDGET_NEUTRAL: f64 = 7.5;
const BUDGET_MARGIN_PCT: f64 = 0.2;

pub(crate) fn score_components(
    artist: &ArtistProfile,
    job: &JobPosting,
    config: &MatchConfig,
) -> Vec<MatchComponent> {
    vec![
        skills_component(artist, job),
        experience_component(artist, job),
        location_component(artist, job),
        budget_component(artist, job, config),
    ]
}

fn skills_component(artist: &ArtistProfile, job: &JobPosting) -> MatchComponent {
    let artist_skills: HashSet<String> = artist
        .skills
        .iter()
        .map(|skill| skill.trim().to_lowercase())
        .filter(|skill| !skill.is_empty())
        .collect();
    let required: HashSet<String> = job
        .required_skills
        .iter()
        .map(|skill| skill.trim().to_lowercase())
        .filter(|skill| !skill.is_empty())
        .collect();

    if required.is_empty() {
        return if artist_skills.is_empty() {
            MatchComponent {
                factor: MatchFactor::Skills,
                points: 0.0,
                notes: "no skills on either side".to_string(),
            }
        } else {
            MatchComponent {
                factor: MatchFactor::Skills,
                points: SKILLS_MAX,
                notes: "job lists no required skills".to_string(),
            }
        };
    }

    let matched = required
        .iter()
        .filter(|skill| artist_skills.contains(*skill))
        .count();
    let points = (matched as f64 / required.len() as f64) * SKILLS_MAX;

    MatchComponent {
        factor: MatchFactor::Skills,
        points,
        notes: format!("{matched} of {} required skills", required.len()),
    }
}

fn experience_component(artist: &ArtistProfile, job: &JobPosting) -> MatchComponent {
    match (artist.experience_years, job.experience_level) {
        (Some(years), Some(level)) => {
            let bucket = ExperienceLevel::bucket_for(years);
            if bucket == level {
                MatchComponent {
                    factor: MatchFactor::Experience,
                    points: EXPERIENCE_MAX,
                    notes: format!("{years} years fit the {} bucket", level.label()),
                }
            } else {
                MatchComponent {
                    factor: MatchFactor::Experience,
                    points: 0.0,
                    notes: format!(
                        "{years} years bucket as {}, job wants {}",
                        bucket.label(),
                        level.label()
                    ),
                }
            }
        }
        _ => MatchComponent {
            factor: MatchFactor::Experience,
            points: EXPERIENCE_NEUTRAL,
            notes: "experience data missing, neutral score".to_string(),
        },
    }
}

fn location_component(artist: &ArtistProfile, job: &JobPosting) -> MatchComponent {
    if let (Some(artist_location), Some(job_location)) =
        (artist.location.as_deref(), job.location.as_deref())
    {
        if artist_location.eq_ignore_ascii_case(job_location) {
            return MatchComponent {
                factor: MatchFactor::Location,
                points: LOCATION_EXACT,
                notes: format!("exact location match on {job_location}"),
            };
        }

        let artist_lower = artist_location.to_lowercase();
        let job_lower = job_location.to_lowercase();
        if artist_lower.contains(&job_lower) || job_lower.contains(&artist_lower) {
            return MatchComponent {
                factor: MatchFactor::Location,
                points: LOCATION_PARTIAL,
                notes: format!("partial location overlap ({artist_location} / {job_location})"),
            };
        }
    }

    if job.remote {
        MatchComponent {
            factor: MatchFactor::Location,
            points: LOCATION_REMOTE,
            notes: "job is remote".to_string(),
        }
    } else {
        MatchComponent {
            factor: MatchFactor::Location,
            points: 0.0,
            notes: "no location overlap".to_string(),
        }
    }
}

fn budget_component(
    artist: &ArtistProfile,
    job: &JobPosting,
    config: &MatchConfig,
) -> MatchComponent {
    let (rate, budget) = match (artist.hourly_rate, job.budget) {
        (Some(rate), Some(budget)) => (rate, budget),
        _ => {
            return MatchComponent {
                factor: MatchFactor::Budget,
                points: BUDGET_NEUTRAL,
                notes: "budget data missing, neutral score".to_string(),
            }
        }
    };

    let monthly = rate * config.monthly_hours;
    if monthly >= budget.min && monthly <= budget.max {
        MatchComponent {
            factor: MatchFactor::Budget,
            points: BUDGET_MAX,
            notes: format!(
                "expected {monthly:.0}/month inside budget {:.0}-{:.0}",
                budget.min, budget.max
            ),
        }
    } else if monthly >= budget.min * (1.0 - BUDGET_MARGIN_PCT)
        && monthly <= budget.max * (1.0 + BUDGET_MARGIN_PCT)
    {
        MatchComponent {
            factor: MatchFactor::Budget,
            points: BUDGET_MARGIN,
            notes: format!(
                "expected {monthly:.0}/month within 20% of budget {:.0}-{:.0}",
                budget.min, budget.max
            ),
        }
    } else {
        MatchComponent {
            factor: MatchFactor::Budget,
            points: 0.0,
            notes: format!(
                "expected {monthly:.0}/month outside budget {:.0}-{:.0}",
                budget.min, budget.max
            ),
        }
    }
}
