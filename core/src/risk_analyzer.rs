//! Attrition risk prediction.
//!
//! Four independent binary factors, each contributing its fixed weight when
//! triggered. The factor table is data, iterated in a fixed order; the
//! score, level, key factors, and interventions all derive from which
//! entries fired.

use serde::{Deserialize, Serialize};

use crate::{record::Employee, types::Score};

// ── Rule tables ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskFactorKind {
    JobSatisfaction,
    CareerGrowth,
    Workload,
    SkillDevelopment,
}

impl RiskFactorKind {
    /// Evaluation order is fixed; output ordering depends on it.
    pub const ALL: [RiskFactorKind; 4] = [
        RiskFactorKind::JobSatisfaction,
        RiskFactorKind::CareerGrowth,
        RiskFactorKind::Workload,
        RiskFactorKind::SkillDevelopment,
    ];

    pub fn weight(self) -> Score {
        match self {
            RiskFactorKind::JobSatisfaction => 30,
            RiskFactorKind::CareerGrowth => 25,
            RiskFactorKind::Workload => 20,
            RiskFactorKind::SkillDevelopment => 15,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RiskFactorKind::JobSatisfaction => "Job Satisfaction",
            RiskFactorKind::CareerGrowth => "Career Growth",
            RiskFactorKind::Workload => "Workload",
            RiskFactorKind::SkillDevelopment => "Skill Development",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            RiskFactorKind::JobSatisfaction => "Below average satisfaction scores",
            RiskFactorKind::CareerGrowth => "No recent promotions or career advancement",
            RiskFactorKind::Workload => "Consistently high workload and stress",
            RiskFactorKind::SkillDevelopment => "Limited opportunities for skill growth",
        }
    }

    /// Whether this factor fires for the given employee. The workload check
    /// reads the raw utilization field: absent never triggers.
    pub fn triggered(self, employee: &Employee) -> bool {
        match self {
            RiskFactorKind::JobSatisfaction => employee.satisfaction_score < 70,
            RiskFactorKind::CareerGrowth => employee.last_promotion.is_none(),
            RiskFactorKind::Workload => employee.utilization_exceeds(90),
            RiskFactorKind::SkillDevelopment => employee.skills_growth < 10,
        }
    }

    /// The candidate intervention for this factor. SkillDevelopment has no
    /// matching intervention (a known gap in the rule set, preserved rather
    /// than papered over).
    pub fn intervention(self) -> Option<Intervention> {
        let (kind, description, expected_impact) = match self {
            RiskFactorKind::JobSatisfaction => (
                "Career Discussion",
                "Schedule one-on-one career development conversation",
                15,
            ),
            RiskFactorKind::CareerGrowth => (
                "Growth Opportunity",
                "Identify stretch assignments or promotion opportunities",
                20,
            ),
            RiskFactorKind::Workload => (
                "Workload Rebalancing",
                "Review and redistribute current responsibilities",
                18,
            ),
            RiskFactorKind::SkillDevelopment => return None,
        };

        Some(Intervention {
            kind: kind.to_string(),
            description: description.to_string(),
            expected_impact,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    High,
    Medium,
    Low,
}

impl RiskLevel {
    /// High iff score > 50, Medium iff score > 25, else Low.
    pub fn from_score(score: Score) -> Self {
        if score > 50 {
            RiskLevel::High
        } else if score > 25 {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }

    pub fn timeframe(self) -> &'static str {
        match self {
            RiskLevel::High => "3-6 months",
            RiskLevel::Medium => "6-12 months",
            RiskLevel::Low => "12+ months",
        }
    }
}

// ── Output records ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskFactor {
    pub factor:      String,
    /// The factor's fixed weight; only triggered factors appear, so this is
    /// always > 0.
    pub impact:      Score,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Intervention {
    #[serde(rename = "type")]
    pub kind:            String,
    pub description:     String,
    pub expected_impact: Score,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttritionRiskPrediction {
    pub employee_id:   String,
    pub employee_name: String,
    pub department:    String,
    /// Sum of triggered factor weights; at most 90 with the current table.
    pub risk_score:    Score,
    pub risk_level:    RiskLevel,
    pub key_factors:   Vec<RiskFactor>,
    pub interventions: Vec<Intervention>,
    pub timeframe:     String,
}

// ── Prediction ───────────────────────────────────────────────────────────────

pub fn predict(employee: &Employee) -> AttritionRiskPrediction {
    let triggered: Vec<RiskFactorKind> = RiskFactorKind::ALL
        .into_iter()
        .filter(|kind| kind.triggered(employee))
        .collect();

    let risk_score: Score = triggered.iter().map(|k| k.weight()).sum();
    let risk_level = RiskLevel::from_score(risk_score);

    let key_factors = triggered
        .iter()
        .map(|kind| RiskFactor {
            factor:      kind.label().to_string(),
            impact:      kind.weight(),
            description: kind.description().to_string(),
        })
        .collect();

    let interventions = triggered
        .iter()
        .filter_map(|kind| kind.intervention())
        .collect();

    log::debug!(
        "attrition: {} score={} level={:?} factors={}",
        employee.id,
        risk_score,
        risk_level,
        triggered.len(),
    );

    AttritionRiskPrediction {
        employee_id:   employee.id.clone(),
        employee_name: employee.name.clone(),
        department:    employee.department.clone(),
        risk_score,
        risk_level,
        key_factors,
        interventions,
        timeframe:     risk_level.timeframe().to_string(),
    }
}
