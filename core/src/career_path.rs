//! Staged career-path planning.
//!
//! Path generation sits behind the `PathStrategy` trait so richer planners
//! (graph search over a real role taxonomy, say) can be plugged in later.
//! The default strategy is the fixed three-stage template the upstream
//! system ships: Senior {role} → Lead {role} → target role, with hardcoded
//! per-stage skill and resource lists. That is an acknowledged
//! simplification of the domain, not a defect.

use serde::{Deserialize, Serialize};

use crate::{
    record::Employee,
    skill_matcher::{self, SkillMatch},
    types::Score,
};

/// Success probability is capped here regardless of inputs.
const MAX_SUCCESS_PROBABILITY: Score = 95;

/// Gap analysis for managerial targets ("Manager" substring rule).
const MANAGERIAL_SKILLS: [&str; 4] = [
    "Leadership",
    "Strategic Planning",
    "Team Management",
    "Budget Management",
];

/// Gap analysis for everything else.
const TECHNICAL_SKILLS: [&str; 4] = ["Advanced Technical", "Architecture", "Mentoring", "Innovation"];

// ── Output records ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathStep {
    pub step:                u32,
    pub role:                String,
    pub required_skills:     Vec<String>,
    pub estimated_timeframe: String,
    pub learning_resources:  Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerPathRecommendation {
    pub employee_id:         String,
    pub current_role:        String,
    pub target_role:         String,
    pub path_steps:          Vec<PathStep>,
    pub success_probability: Score,
    pub time_to_target:      String,
    pub skill_gaps:          Vec<SkillMatch>,
}

// ── Strategy ─────────────────────────────────────────────────────────────────

/// The path-generation algorithm, pluggable per planner instance.
pub trait PathStrategy {
    fn steps(&self, employee: &Employee, target_role: &str) -> Vec<PathStep>;

    /// Rough wall-clock estimate for the whole path.
    fn time_to_target(&self) -> String;
}

/// The stock three-stage template.
#[derive(Debug, Default)]
pub struct TemplatePathStrategy;

impl PathStrategy for TemplatePathStrategy {
    fn steps(&self, employee: &Employee, target_role: &str) -> Vec<PathStep> {
        let strs = |items: &[&str]| items.iter().map(|s| s.to_string()).collect::<Vec<_>>();

        vec![
            PathStep {
                step:                1,
                role:                format!("Senior {}", employee.role),
                required_skills:     strs(&["Advanced Technical Skills", "Mentoring"]),
                estimated_timeframe: "6-12 months".to_string(),
                learning_resources:  strs(&["Senior Developer Course", "Mentoring Workshop"]),
            },
            PathStep {
                step:                2,
                role:                format!("Lead {}", employee.role),
                required_skills:     strs(&["Team Leadership", "Project Management"]),
                estimated_timeframe: "12-18 months".to_string(),
                learning_resources:  strs(&["Leadership Training", "Agile Certification"]),
            },
            PathStep {
                step:                3,
                role:                target_role.to_string(),
                required_skills:     strs(&["Strategic Planning", "Cross-functional Leadership"]),
                estimated_timeframe: "18-24 months".to_string(),
                learning_resources:  strs(&["Executive Leadership Program", "MBA Courses"]),
            },
        ]
    }

    fn time_to_target(&self) -> String {
        "2-3 years".to_string()
    }
}

// ── Planner ──────────────────────────────────────────────────────────────────

pub struct CareerPathPlanner {
    strategy: Box<dyn PathStrategy>,
}

impl Default for CareerPathPlanner {
    fn default() -> Self {
        Self::new(Box::new(TemplatePathStrategy))
    }
}

impl CareerPathPlanner {
    pub fn new(strategy: Box<dyn PathStrategy>) -> Self {
        Self { strategy }
    }

    pub fn plan(&self, employee: &Employee, target_role: &str) -> CareerPathRecommendation {
        CareerPathRecommendation {
            employee_id:         employee.id.clone(),
            current_role:        employee.role.clone(),
            target_role:         target_role.to_string(),
            path_steps:          self.strategy.steps(employee, target_role),
            success_probability: success_probability(employee),
            time_to_target:      self.strategy.time_to_target(),
            skill_gaps:          skill_gaps(employee, target_role),
        }
    }
}

/// `min(95, round((performance + learning velocity + engagements×5) / 3))`,
/// defaults 75 / 70.
pub fn success_probability(employee: &Employee) -> Score {
    let sum = f64::from(employee.performance_or_default())
        + f64::from(employee.learning_velocity_or_default())
        + employee.experience.len() as f64 * 5.0;

    (sum / 3.0).round().min(f64::from(MAX_SUCCESS_PROBABILITY)) as Score
}

/// Gap analysis against the target-role skill set, selected by the
/// "Manager" substring rule.
pub fn skill_gaps(employee: &Employee, target_role: &str) -> Vec<SkillMatch> {
    let target: &[&str] = if target_role.contains("Manager") {
        &MANAGERIAL_SKILLS
    } else {
        &TECHNICAL_SKILLS
    };

    let names: Vec<String> = target.iter().map(|s| s.to_string()).collect();
    skill_matcher::match_skills(&employee.skills, &names)
}
