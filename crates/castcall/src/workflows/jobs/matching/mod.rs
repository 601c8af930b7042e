mod config;
mod rules;

pub use config::MatchConfig;

use serde::{Deserialize, Serialize};

use super::domain::{ArtistProfile, JobId, JobPosting};

/// Stateless scorer applying the compatibility rubric to an artist/job pair.
pub struct MatchScorer {
    config: MatchConfig,
}

impl MatchScorer {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Compute the 0-100 compatibility score. Total over any input; missing
    /// optional data degrades to neutral sub-scores instead of failing.
    pub fn score(&self, artist: &ArtistProfile, job: &JobPosting) -> MatchScore {
        let components = rules::score_components(artist, job, &self.config);
        let total = components
            .iter()
            .map(|component| component.points)
            .sum::<f64>()
            .clamp(0.0, 100.0);

        MatchScore {
            job_id: job.id.clone(),
            job_title: job.title.clone(),
            total,
            components,
        }
    }

    /// Score `artist` against every job in `jobs`, drop totals below the
    /// opportunity floor, and sort descending.
    pub fn opportunities(&self, artist: &ArtistProfile, jobs: &[JobPosting]) -> Vec<MatchScore> {
        let mut matches: Vec<MatchScore> = jobs
            .iter()
            .filter(|job| job.open)
            .map(|job| self.score(artist, job))
            .filter(|score| score.total >= self.config.opportunity_floor)
            .collect();

        matches.sort_by(|a, b| {
            b.total
                .partial_cmp(&a.total)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.job_id.0.cmp(&b.job_id.0))
        });
        matches
    }
}

impl Default for MatchScorer {
    fn default() -> Self {
        Self::new(MatchConfig::default())
    }
}

/// The rubric dimensions, kept discrete so score audits stay transparent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchFactor {
    Skills,
    Experience,
    Location,
    Budget,
}

/// Discrete contribution to a match score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchComponent {
    pub factor: MatchFactor,
    pub points: f64,
    pub notes: String,
}

/// Ranking output for one artist/job pair. Used only for ordering, never
/// persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchScore {
    pub job_id: JobId,
    pub job_title: String,
    pub total: f64,
    pub components: Vec<MatchComponent>,
}
