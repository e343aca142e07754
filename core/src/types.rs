//! Shared primitive types used across the entire engine.

/// A stable, caller-supplied identifier for an employee or opportunity.
pub type EntityId = String;

/// A rounded 0..100-nominal score. Composite scores are not clamped, so
/// values slightly above 100 are possible and callers must tolerate them.
pub type Score = u32;
