//! Weighted match scoring.
//!
//! Combines skill match, experience relevance, availability, and cultural
//! fit into a single 0..100-nominal score, plus the growth-potential
//! estimate, threshold-driven risk flags, and rule-ordered recommendations
//! that ride along on each talent match.
//!
//! Every formula constant here is load-bearing: downstream consumers compare
//! scores produced by different deployments, so weights and thresholds must
//! not drift.

use chrono::{DateTime, Duration, Utc};

use crate::{
    config::ScoringPolicy,
    record::{Employee, Opportunity, OpportunityKind},
    skill_matcher::{GapPriority, SkillMatch},
    types::Score,
};

// ── Constants ────────────────────────────────────────────────────────────────

/// Component weights of the final match score. Must sum to 1.0.
const SKILL_WEIGHT: f64 = 0.4;
const EXPERIENCE_WEIGHT: f64 = 0.3;
const AVAILABILITY_WEIGHT: f64 = 0.2;
const CULTURAL_WEIGHT: f64 = 0.1;

/// Each relevant past engagement is worth 25 points, capped at 100.
const POINTS_PER_ENGAGEMENT: Score = 25;

const DEPARTMENT_MATCH_BONUS: Score = 20;
const PREFERENCE_MATCH_BONUS: Score = 30;

/// A promotion older than this counts as stale.
const PROMOTION_STALE_DAYS: i64 = 730;

// ── Component scores ─────────────────────────────────────────────────────────

/// Mean of `(proficiency / required) × 100` over all matches. An employee
/// whose proficiency exceeds the requirement contributes more than 100 for
/// that skill. An empty requirement list contributes 0 (guarded; the naive
/// mean would divide by zero).
pub fn skill_score(skill_matches: &[SkillMatch]) -> f64 {
    if skill_matches.is_empty() {
        return 0.0;
    }
    let ratio_sum: f64 = skill_matches
        .iter()
        .map(|m| f64::from(m.proficiency) / f64::from(m.required))
        .sum();
    ratio_sum / skill_matches.len() as f64 * 100.0
}

/// 25 points per past engagement whose skill list intersects the
/// opportunity's requirements (case-sensitive containment), capped at 100.
pub fn experience_score(employee: &Employee, opportunity: &Opportunity) -> Score {
    let relevant = employee
        .experience
        .iter()
        .filter(|eng| {
            eng.skills
                .iter()
                .any(|s| opportunity.required_skills.contains(s))
        })
        .count() as Score;

    (relevant * POINTS_PER_ENGAGEMENT).min(100)
}

/// Capacity left over: `100 - utilization`, utilization defaulting to 75.
pub fn availability_score(employee: &Employee) -> Score {
    100_u32.saturating_sub(employee.utilization_or_default())
}

/// Department match (20) + opportunity-kind preference (30) + collaboration
/// rating (default 50). The catch-all `Other` kind never earns the
/// preference bonus, even if it appears among the employee's preferences.
pub fn cultural_fit(employee: &Employee, opportunity: &Opportunity) -> Score {
    let department_bonus = if employee.department == opportunity.department {
        DEPARTMENT_MATCH_BONUS
    } else {
        0
    };

    let preference_bonus = if opportunity.kind != OpportunityKind::Other
        && employee.preferences.contains(&opportunity.kind)
    {
        PREFERENCE_MATCH_BONUS
    } else {
        0
    };

    department_bonus + preference_bonus + employee.collaboration_or_default()
}

/// The weighted composite, rounded to the nearest integer. NOT clamped to
/// 100: cultural-fit inputs at their maxima push the composite slightly
/// past nominal, and callers are contracted to tolerate that.
pub fn match_score(
    employee: &Employee,
    opportunity: &Opportunity,
    skill_matches: &[SkillMatch],
) -> Score {
    let composite = skill_score(skill_matches) * SKILL_WEIGHT
        + f64::from(experience_score(employee, opportunity)) * EXPERIENCE_WEIGHT
        + f64::from(availability_score(employee)) * AVAILABILITY_WEIGHT
        + f64::from(cultural_fit(employee, opportunity)) * CULTURAL_WEIGHT;

    composite.round() as Score
}

/// Mean of performance rating, learning velocity, and career ambition
/// (defaults 75 / 70 / 80), rounded.
pub fn growth_potential(employee: &Employee) -> Score {
    let sum = f64::from(employee.performance_or_default())
        + f64::from(employee.learning_velocity_or_default())
        + f64::from(employee.career_ambition_or_default());
    (sum / 3.0).round() as Score
}

// ── Risk flags ───────────────────────────────────────────────────────────────

/// Threshold-driven risk flag strings for one employee.
///
/// The progression flag fires only when a promotion date EXISTS and is older
/// than 730 days relative to `as_of`; an employee with no promotion on
/// record is not flagged. That asymmetry is preserved for parity unless
/// `policy.flag_never_promoted` opts into the corrected behavior.
pub fn risk_factors(
    employee: &Employee,
    as_of: DateTime<Utc>,
    policy: &ScoringPolicy,
) -> Vec<String> {
    let mut risks = Vec::new();

    if employee.utilization_exceeds(90) {
        risks.push("High workload stress".to_string());
    }

    let progression_stale = match employee.last_promotion {
        Some(promoted) => {
            as_of.signed_duration_since(promoted) > Duration::days(PROMOTION_STALE_DAYS)
        }
        None => policy.flag_never_promoted,
    };
    if progression_stale {
        risks.push("No recent career progression".to_string());
    }

    if employee.skills_growth < 10 {
        risks.push("Limited skill development".to_string());
    }
    if employee.satisfaction_score < 70 {
        risks.push("Low job satisfaction".to_string());
    }

    risks
}

// ── Recommendations ──────────────────────────────────────────────────────────

/// Deterministic, rule-ordered recommendation strings.
///
/// The skill recommendation names the FIRST high-priority gap in requirement
/// order (not the numerically largest gap).
pub fn recommendations(
    employee: &Employee,
    opportunity: &Opportunity,
    skill_matches: &[SkillMatch],
) -> Vec<String> {
    let mut out = Vec::new();

    if let Some(high_gap) = skill_matches
        .iter()
        .find(|m| m.priority == GapPriority::High)
    {
        out.push(format!("Focus on developing {} skills", high_gap.skill));
    }

    if employee.utilization_exceeds(85) {
        out.push("Consider workload rebalancing before assignment".to_string());
    }

    if opportunity.kind == OpportunityKind::Leadership && employee.leadership_experience < 2 {
        out.push("Pair with senior mentor for leadership development".to_string());
    }

    out
}
