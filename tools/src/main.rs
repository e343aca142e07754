//! match-runner: headless runner for the talent matching engine.
//!
//! Usage:
//!   match-runner --employees employees.json --opportunity opportunity.json
//!   match-runner --employees employees.json --opportunity opportunity.json --risk
//!   match-runner --employees employees.json --opportunity opportunity.json --target-role "Engineering Manager"

use anyhow::{Context, Result};
use talent_core::{
    config::ScoringPolicy,
    engine::MatchingEngine,
    record::{Employee, Opportunity},
};
use std::env;
use std::fs;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let employees_path = required_arg(&args, "--employees")?;
    let opportunity_path = required_arg(&args, "--opportunity")?;
    let target_role = optional_arg(&args, "--target-role");
    let show_risk = args.iter().any(|a| a == "--risk");
    let flag_never_promoted = args.iter().any(|a| a == "--flag-never-promoted");

    let employees: Vec<Employee> = load_json(&employees_path)
        .with_context(|| format!("loading employees from {employees_path}"))?;
    let opportunity: Opportunity = load_json(&opportunity_path)
        .with_context(|| format!("loading opportunity from {opportunity_path}"))?;

    log::info!(
        "loaded {} employees, opportunity {}",
        employees.len(),
        opportunity.id
    );

    let policy = ScoringPolicy { flag_never_promoted };
    let engine = MatchingEngine::new(policy, chrono::Utc::now());

    let matches = engine.match_all(&employees, &opportunity);

    println!("=== MATCH SUMMARY ===");
    println!("  opportunity: {} ({})", opportunity.title, opportunity.id);
    println!("  candidates:  {}", employees.len());
    println!();
    for (rank, m) in matches.iter().enumerate() {
        println!(
            "  #{:<3} {:<24} score={:<4} avail={:<4} fit={:<4} growth={}",
            rank + 1,
            m.employee_name,
            m.match_score,
            m.availability_score,
            m.cultural_fit,
            m.growth_potential,
        );
        for risk in &m.risk_factors {
            println!("        risk: {risk}");
        }
        for rec in &m.recommendations {
            println!("        rec:  {rec}");
        }
    }

    if show_risk {
        println!();
        println!("=== ATTRITION RISK ===");
        for employee in &employees {
            let prediction = engine.predict_attrition(employee);
            println!(
                "  {:<24} score={:<3} level={:<7} window={}",
                prediction.employee_name,
                prediction.risk_score,
                format!("{:?}", prediction.risk_level).to_lowercase(),
                prediction.timeframe,
            );
            for factor in &prediction.key_factors {
                println!("        factor: {} (+{})", factor.factor, factor.impact);
            }
            for iv in &prediction.interventions {
                println!("        plan:   {} (impact {})", iv.kind, iv.expected_impact);
            }
        }
    }

    if let Some(target) = target_role {
        let top_employee = matches
            .first()
            .and_then(|top| employees.iter().find(|e| e.id == top.employee_id));

        if let Some(employee) = top_employee {
            let path = engine.career_path(employee, &target);

            println!();
            println!("=== CAREER PATH: {} -> {} ===", path.current_role, path.target_role);
            println!("  candidate:   {}", employee.name);
            println!("  probability: {}%", path.success_probability);
            println!("  horizon:     {}", path.time_to_target);
            for step in &path.path_steps {
                println!(
                    "  {}. {:<28} {} | {}",
                    step.step,
                    step.role,
                    step.estimated_timeframe,
                    step.required_skills.join(", "),
                );
            }
            for gap in path.skill_gaps.iter().filter(|g| g.gap > 0) {
                println!(
                    "     gap: {:<24} {} -> {} ({})",
                    gap.skill,
                    gap.proficiency,
                    gap.required,
                    gap.priority.as_str(),
                );
            }
        }
    }

    Ok(())
}

fn load_json<T: serde::de::DeserializeOwned>(path: &str) -> Result<T> {
    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

fn required_arg(args: &[String], flag: &str) -> Result<String> {
    optional_arg(args, flag)
        .with_context(|| format!("missing required argument: {flag} <path>"))
}

fn optional_arg(args: &[String], flag: &str) -> Option<String> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].clone())
}
