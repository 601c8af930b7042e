use serde::{Deserialize, Serialize};

/// Tuning knobs for the compatibility rubric.
///
/// The defaults carry the production values: a 160-hour month for converting
/// hourly rates, and a 30-point floor below which a job is not surfaced as an
/// opportunity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchConfig {
    pub monthly_hours: f64,
    pub opportunity_floor: f64,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            monthly_hours: 160.0,
            opportunity_floor: 30.0,
        }
    }
}
