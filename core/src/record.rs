//! Input records supplied by the caller.
//!
//! RULE: the engine never mutates these. Records are constructed by the
//! external data layer per request and borrowed immutably for the duration
//! of one scoring call. Field names serialize in camelCase to match the
//! upstream record shapes.
//!
//! Defaults for optional fields are resolved HERE, engine-side, never by
//! the caller. Threshold checks that deliberately read the raw field (the
//! workload checks) do not apply the default: an absent utilization never
//! trips a workload threshold.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{EntityId, Score};

// ── Defaults ─────────────────────────────────────────────────────────────────

pub const DEFAULT_UTILIZATION: Score = 75;
pub const DEFAULT_PERFORMANCE: Score = 75;
pub const DEFAULT_LEARNING_VELOCITY: Score = 70;
pub const DEFAULT_CAREER_AMBITION: Score = 80;
pub const DEFAULT_COLLABORATION: Score = 50;

// ── Records ──────────────────────────────────────────────────────────────────

/// One skill an employee holds. `name` is a case-insensitive identity;
/// `level` is proficiency 0..100.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skill {
    pub name:  String,
    pub level: Score,
}

/// One past engagement and the skills it exercised.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngagementRecord {
    pub title:  String,
    #[serde(default)]
    pub skills: Vec<String>,
}

/// The closed set of opportunity kinds. Unknown strings deserialize to
/// `Other` and fall through every rule table rather than erroring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpportunityKind {
    Project,
    Role,
    Assignment,
    Leadership,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id:         EntityId,
    pub name:       String,
    pub department: String,
    pub role:       String,

    /// Skill names are unique per employee.
    #[serde(default)]
    pub skills: Vec<Skill>,

    /// Percent of capacity consumed, 0..100.
    #[serde(default)]
    pub utilization:          Option<Score>,
    #[serde(default)]
    pub performance_rating:   Option<Score>,
    #[serde(default)]
    pub learning_velocity:    Option<Score>,
    #[serde(default)]
    pub career_ambition:      Option<Score>,
    #[serde(default)]
    pub collaboration_rating: Option<Score>,

    pub satisfaction_score: Score,
    /// Count of new skills gained recently.
    pub skills_growth:      Score,
    #[serde(default)]
    pub last_promotion:     Option<DateTime<Utc>>,

    #[serde(default)]
    pub experience:  Vec<EngagementRecord>,
    /// Opportunity kinds this employee prefers to work on.
    #[serde(default)]
    pub preferences: Vec<OpportunityKind>,
    /// Count of prior leadership engagements.
    #[serde(default)]
    pub leadership_experience: Score,
}

impl Employee {
    pub fn utilization_or_default(&self) -> Score {
        self.utilization.unwrap_or(DEFAULT_UTILIZATION)
    }

    pub fn performance_or_default(&self) -> Score {
        self.performance_rating.unwrap_or(DEFAULT_PERFORMANCE)
    }

    pub fn learning_velocity_or_default(&self) -> Score {
        self.learning_velocity.unwrap_or(DEFAULT_LEARNING_VELOCITY)
    }

    pub fn career_ambition_or_default(&self) -> Score {
        self.career_ambition.unwrap_or(DEFAULT_CAREER_AMBITION)
    }

    pub fn collaboration_or_default(&self) -> Score {
        self.collaboration_rating.unwrap_or(DEFAULT_COLLABORATION)
    }

    /// Raw-field workload check. Absent utilization never exceeds a
    /// threshold, by contract.
    pub fn utilization_exceeds(&self, threshold: Score) -> bool {
        self.utilization.is_some_and(|u| u > threshold)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Opportunity {
    pub id:         EntityId,
    pub title:      String,
    pub department: String,
    #[serde(rename = "type")]
    pub kind:       OpportunityKind,
    /// Order is meaningful; duplicates are preserved (they produce duplicate
    /// skill-match entries downstream).
    pub required_skills: Vec<String>,
}
