//! Skill-gap analysis.
//!
//! Compares an employee's skill proficiencies against a required-skill list
//! and produces one `SkillMatch` per requirement, in requirement order.
//! Total: a missing skill scores proficiency 0, it never fails.

use serde::{Deserialize, Serialize};

use crate::{record::Skill, types::Score};

/// Proficiency assumed required for every listed skill, for both
/// opportunity matching and career-path gap analysis.
pub const REQUIRED_PROFICIENCY: Score = 80;

/// Urgency of closing a skill gap, keyed off the gap size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GapPriority {
    High,
    Medium,
    Low,
}

impl GapPriority {
    /// High iff gap > 40, Medium iff gap > 20, else Low.
    pub fn from_gap(gap: Score) -> Self {
        if gap > 40 {
            GapPriority::High
        } else if gap > 20 {
            GapPriority::Medium
        } else {
            GapPriority::Low
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            GapPriority::High => "high",
            GapPriority::Medium => "medium",
            GapPriority::Low => "low",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillMatch {
    pub skill:       String,
    /// The employee's level for this skill, verbatim — it may exceed
    /// `required`, and is 0 when the skill is absent.
    pub proficiency: Score,
    pub required:    Score,
    /// `max(0, required - proficiency)`; non-negative by construction.
    pub gap:         Score,
    pub priority:    GapPriority,
}

/// One entry per required skill, preserving requirement order. Duplicate
/// requirements yield duplicate entries; deduping would change the
/// skill-score denominator downstream, so it is deliberately not done here.
pub fn match_skills(employee_skills: &[Skill], required_skills: &[String]) -> Vec<SkillMatch> {
    required_skills
        .iter()
        .map(|required| {
            let proficiency = employee_skills
                .iter()
                .find(|s| s.name.eq_ignore_ascii_case(required))
                .map(|s| s.level)
                .unwrap_or(0);

            let gap = REQUIRED_PROFICIENCY.saturating_sub(proficiency);

            SkillMatch {
                skill: required.clone(),
                proficiency,
                required: REQUIRED_PROFICIENCY,
                gap,
                priority: GapPriority::from_gap(gap),
            }
        })
        .collect()
}
