//! talent-core — the workforce-analytics matching engine.
//!
//! Pure, deterministic scoring over in-memory records:
//!   - SkillMatcher:       per-skill gap/priority analysis
//!   - ScoreCalculator:    weighted match scoring + recommendations
//!   - RiskAnalyzer:       attrition risk prediction + interventions
//!   - CareerPathPlanner:  staged progression plans
//!   - MatchingEngine:     the facade that orchestrates the above
//!
//! RULES:
//!   - No component holds mutable shared state.
//!   - Every computation is a pure function of its inputs (time is passed
//!     in explicitly as `as_of`, never read from the wall clock mid-score).
//!   - Input records are never mutated; derived records are owned by the
//!     caller and never cached.

pub mod career_path;
pub mod config;
pub mod engine;
pub mod error;
pub mod record;
pub mod risk_analyzer;
pub mod score_calculator;
pub mod skill_matcher;
pub mod types;
