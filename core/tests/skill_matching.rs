//! Skill-gap analysis: lookup, gap formula, priority bands, ordering.

use talent_core::record::Skill;
use talent_core::skill_matcher::{match_skills, GapPriority, REQUIRED_PROFICIENCY};

// ── Helpers ──────────────────────────────────────────────────────────────────

fn skill(name: &str, level: u32) -> Skill {
    Skill { name: name.to_string(), level }
}

fn required(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

// ── Tests ────────────────────────────────────────────────────────────────────

/// The worked example: React at level 90 against a React requirement.
#[test]
fn proficiency_above_threshold_has_zero_gap() {
    let matches = match_skills(&[skill("React", 90)], &required(&["React"]));

    assert_eq!(matches.len(), 1);
    let m = &matches[0];
    assert_eq!(m.proficiency, 90, "proficiency reported verbatim, not capped");
    assert_eq!(m.required, REQUIRED_PROFICIENCY);
    assert_eq!(m.gap, 0);
    assert_eq!(m.priority, GapPriority::Low);
}

/// gap = max(0, 80 - proficiency) for every entry.
#[test]
fn gap_formula_holds_across_levels() {
    let skills = [skill("A", 0), skill("B", 45), skill("C", 80), skill("D", 100)];
    let matches = match_skills(&skills, &required(&["A", "B", "C", "D"]));

    for m in &matches {
        let expected = REQUIRED_PROFICIENCY.saturating_sub(m.proficiency);
        assert_eq!(m.gap, expected, "gap mismatch for {}", m.skill);
    }
    assert_eq!(matches[0].gap, 80);
    assert_eq!(matches[1].gap, 35);
    assert_eq!(matches[2].gap, 0);
    assert_eq!(matches[3].gap, 0);
}

/// Priority bands: high iff gap > 40, medium iff 20 < gap <= 40, else low.
/// Boundary proficiencies 39/40/59/60 give gaps 41/40/21/20.
#[test]
fn priority_band_boundaries() {
    let cases = [
        (39, GapPriority::High),
        (40, GapPriority::Medium),
        (59, GapPriority::Medium),
        (60, GapPriority::Low),
        (0, GapPriority::High),
        (80, GapPriority::Low),
    ];

    for (level, expected) in cases {
        let matches = match_skills(&[skill("Rust", level)], &required(&["Rust"]));
        assert_eq!(
            matches[0].priority, expected,
            "level {level} (gap {}) should be {:?}",
            matches[0].gap, expected
        );
    }
}

/// Skill names are a case-insensitive identity.
#[test]
fn lookup_is_case_insensitive() {
    let matches = match_skills(&[skill("react", 70)], &required(&["React"]));
    assert_eq!(matches[0].proficiency, 70);

    let matches = match_skills(&[skill("GraphQL", 70)], &required(&["graphql"]));
    assert_eq!(matches[0].proficiency, 70);
}

/// A skill the employee does not hold scores proficiency 0, never errors.
#[test]
fn missing_skill_scores_zero() {
    let matches = match_skills(&[skill("Python", 90)], &required(&["Kubernetes"]));

    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].proficiency, 0);
    assert_eq!(matches[0].gap, 80);
    assert_eq!(matches[0].priority, GapPriority::High);
}

/// Output preserves the requirement order, one entry per requirement.
#[test]
fn output_preserves_requirement_order() {
    let matches = match_skills(
        &[skill("A", 10), skill("B", 20), skill("C", 30)],
        &required(&["C", "A", "B"]),
    );

    let names: Vec<&str> = matches.iter().map(|m| m.skill.as_str()).collect();
    assert_eq!(names, vec!["C", "A", "B"]);
}

/// Duplicate requirements produce duplicate entries. Deduping would change
/// the skill-score denominator, so duplicates pass through untouched.
#[test]
fn duplicate_requirements_produce_duplicate_entries() {
    let matches = match_skills(&[skill("React", 90)], &required(&["React", "React"]));

    assert_eq!(matches.len(), 2);
    assert_eq!(matches[0].proficiency, matches[1].proficiency);
}

/// Empty requirement list yields an empty result, not an error.
#[test]
fn empty_requirements_yield_empty_result() {
    let matches = match_skills(&[skill("React", 90)], &[]);
    assert!(matches.is_empty());
}
