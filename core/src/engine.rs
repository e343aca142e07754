//! The matching engine facade.
//!
//! ORCHESTRATION (fixed, documented, never reordered):
//!   1. SkillMatcher per employee, against the opportunity's requirements
//!   2. ScoreCalculator, consuming the skill matches + raw record fields
//!   3. Assembly into TalentMatch, one per employee
//!   4. Stable descending sort by match score (ties keep input order)
//!
//! RiskAnalyzer and CareerPathPlanner are exposed here too but run on
//! single employees, independent of any opportunity.
//!
//! RULES:
//!   - Input records are borrowed immutably and never mutated.
//!   - Derived records are returned by value, never cached.
//!   - The reference instant `as_of` is fixed at construction, so repeated
//!     calls with identical inputs produce identical outputs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    career_path::{CareerPathPlanner, CareerPathRecommendation},
    config::ScoringPolicy,
    record::{Employee, Opportunity},
    risk_analyzer::{self, AttritionRiskPrediction},
    score_calculator,
    skill_matcher::{self, SkillMatch},
    types::Score,
};

/// One employee ranked against one opportunity. Transient: produced fresh
/// per call and owned by the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TalentMatch {
    pub employee_id:        String,
    pub employee_name:      String,
    pub department:         String,
    pub role:               String,
    pub match_score:        Score,
    pub skill_matches:      Vec<SkillMatch>,
    pub availability_score: Score,
    pub cultural_fit:       Score,
    pub growth_potential:   Score,
    pub risk_factors:       Vec<String>,
    pub recommendations:    Vec<String>,
}

pub struct MatchingEngine {
    policy: ScoringPolicy,
    /// Reference instant for promotion-staleness checks.
    as_of:  DateTime<Utc>,
    planner: CareerPathPlanner,
}

impl MatchingEngine {
    pub fn new(policy: ScoringPolicy, as_of: DateTime<Utc>) -> Self {
        Self {
            policy,
            as_of,
            planner: CareerPathPlanner::default(),
        }
    }

    /// Default policy, staleness measured from the current wall clock.
    pub fn now() -> Self {
        Self::new(ScoringPolicy::default(), Utc::now())
    }

    /// Swap in a different career-path generation strategy.
    pub fn with_planner(mut self, planner: CareerPathPlanner) -> Self {
        self.planner = planner;
        self
    }

    /// Rank every employee against one opportunity, descending by match
    /// score. The sort is stable: equal scores keep their input order.
    /// An empty employee list yields an empty result.
    pub fn match_all(&self, employees: &[Employee], opportunity: &Opportunity) -> Vec<TalentMatch> {
        let mut matches: Vec<TalentMatch> = employees
            .iter()
            .map(|employee| self.match_one(employee, opportunity))
            .collect();

        matches.sort_by(|a, b| b.match_score.cmp(&a.match_score));

        log::debug!(
            "engine: scored {} employees against opportunity {}",
            matches.len(),
            opportunity.id,
        );

        matches
    }

    fn match_one(&self, employee: &Employee, opportunity: &Opportunity) -> TalentMatch {
        let skill_matches =
            skill_matcher::match_skills(&employee.skills, &opportunity.required_skills);
        let match_score = score_calculator::match_score(employee, opportunity, &skill_matches);

        TalentMatch {
            employee_id:        employee.id.clone(),
            employee_name:      employee.name.clone(),
            department:         employee.department.clone(),
            role:               employee.role.clone(),
            match_score,
            availability_score: score_calculator::availability_score(employee),
            cultural_fit:       score_calculator::cultural_fit(employee, opportunity),
            growth_potential:   score_calculator::growth_potential(employee),
            risk_factors:       score_calculator::risk_factors(employee, self.as_of, &self.policy),
            recommendations:    score_calculator::recommendations(
                employee,
                opportunity,
                &skill_matches,
            ),
            skill_matches,
        }
    }

    /// Attrition risk for a single employee; opportunity-independent.
    pub fn predict_attrition(&self, employee: &Employee) -> AttritionRiskPrediction {
        risk_analyzer::predict(employee)
    }

    /// Staged progression plan toward `target_role`; opportunity-independent.
    pub fn career_path(&self, employee: &Employee, target_role: &str) -> CareerPathRecommendation {
        self.planner.plan(employee, target_role)
    }
}
