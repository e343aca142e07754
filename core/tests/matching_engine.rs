//! Facade behavior: ordering, stability, empty inputs, purity.

use chrono::{TimeZone, Utc};
use talent_core::config::ScoringPolicy;
use talent_core::engine::MatchingEngine;
use talent_core::record::{Employee, Opportunity, OpportunityKind, Skill};

// ── Helpers ──────────────────────────────────────────────────────────────────

fn engine() -> MatchingEngine {
    let as_of = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
    MatchingEngine::new(ScoringPolicy::default(), as_of)
}

fn employee(id: &str, react_level: u32) -> Employee {
    Employee {
        id:                    id.to_string(),
        name:                  format!("Employee {id}"),
        department:            "Engineering".to_string(),
        role:                  "Engineer".to_string(),
        skills:                vec![Skill { name: "React".to_string(), level: react_level }],
        utilization:           Some(50),
        performance_rating:    None,
        learning_velocity:     None,
        career_ambition:       None,
        collaboration_rating:  Some(50),
        satisfaction_score:    80,
        skills_growth:         15,
        last_promotion:        None,
        experience:            vec![],
        preferences:           vec![],
        leadership_experience: 0,
    }
}

fn opportunity() -> Opportunity {
    Opportunity {
        id:              "opp-1".to_string(),
        title:           "Frontend Rebuild".to_string(),
        department:      "Engineering".to_string(),
        kind:            OpportunityKind::Project,
        required_skills: vec!["React".to_string()],
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────

/// Output is sorted descending by match score.
#[test]
fn matches_sorted_descending() {
    let employees = vec![
        employee("low", 20),
        employee("high", 95),
        employee("mid", 60),
    ];

    let matches = engine().match_all(&employees, &opportunity());

    let ids: Vec<&str> = matches.iter().map(|m| m.employee_id.as_str()).collect();
    assert_eq!(ids, vec!["high", "mid", "low"]);

    for pair in matches.windows(2) {
        assert!(
            pair[0].match_score >= pair[1].match_score,
            "descending order violated: {} < {}",
            pair[0].match_score,
            pair[1].match_score
        );
    }
}

/// Equal scores keep input order (stable sort).
#[test]
fn equal_scores_preserve_input_order() {
    let employees = vec![
        employee("first", 70),
        employee("second", 70),
        employee("third", 70),
    ];

    let matches = engine().match_all(&employees, &opportunity());

    assert_eq!(matches[0].match_score, matches[1].match_score);
    let ids: Vec<&str> = matches.iter().map(|m| m.employee_id.as_str()).collect();
    assert_eq!(ids, vec!["first", "second", "third"]);
}

/// Empty employee list yields an empty result, not an error.
#[test]
fn empty_employee_list_yields_empty_result() {
    let matches = engine().match_all(&[], &opportunity());
    assert!(matches.is_empty());
}

/// Each talent match carries the full derived field set.
#[test]
fn talent_match_assembles_all_fields() {
    let employees = vec![employee("e1", 90)];
    let matches = engine().match_all(&employees, &opportunity());

    let m = &matches[0];
    assert_eq!(m.employee_id, "e1");
    assert_eq!(m.employee_name, "Employee e1");
    assert_eq!(m.department, "Engineering");
    assert_eq!(m.role, "Engineer");
    assert_eq!(m.skill_matches.len(), 1);
    assert_eq!(m.availability_score, 50);
    assert_eq!(m.cultural_fit, 20 + 50);
    assert_eq!(m.growth_potential, 75);
}

/// Pure function: the same inputs produce byte-identical output across
/// calls, with a fixed as_of instant.
#[test]
fn repeated_calls_are_byte_identical() {
    let employees = vec![employee("e1", 90), employee("e2", 30)];
    let opp = opportunity();
    let engine = engine();

    let a = serde_json::to_string(&engine.match_all(&employees, &opp)).unwrap();
    let b = serde_json::to_string(&engine.match_all(&employees, &opp)).unwrap();
    assert_eq!(a, b);
}

/// Inputs are borrowed immutably; scoring twice against different
/// opportunities reads the same untouched records.
#[test]
fn inputs_are_not_mutated() {
    let employees = vec![employee("e1", 90)];
    let before = serde_json::to_string(&employees).unwrap();

    let opp = opportunity();
    let _ = engine().match_all(&employees, &opp);
    let _ = engine().match_all(&employees, &opp);

    let after = serde_json::to_string(&employees).unwrap();
    assert_eq!(before, after);
}

/// Facade delegation: attrition and career path run per employee,
/// independent of any opportunity.
#[test]
fn facade_exposes_risk_and_career_path() {
    let engine = engine();
    let e = employee("e1", 90);

    let risk = engine.predict_attrition(&e);
    assert_eq!(risk.employee_id, "e1");
    // last_promotion is None → Career Growth fires.
    assert_eq!(risk.risk_score, 25);

    let path = engine.career_path(&e, "Engineering Manager");
    assert_eq!(path.path_steps.len(), 3);
    assert_eq!(path.employee_id, "e1");
}
