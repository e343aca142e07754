//! Engine configuration.
//!
//! The scoring constants (required-proficiency threshold, factor weights,
//! score weights) are engine constants, not configuration — they live next
//! to the code that applies them and must be reproduced exactly for
//! behavioral parity with upstream consumers. The only configurable switch
//! is the career-progression flag below.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ScoringPolicy {
    /// The stock "No recent career progression" risk flag fires only when a
    /// promotion date exists AND is stale; employees who were never promoted
    /// are not flagged. That asymmetry is preserved as-is for parity. Set
    /// this to also flag employees with no promotion date on record.
    #[serde(default)]
    pub flag_never_promoted: bool,
}
